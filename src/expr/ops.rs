use std::ops::{Add, Mul, Neg, Sub};

use crate::expr::Expr;
use crate::types::{Category, Character, Integer, Numeric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Max,
    Min,
    Concat,
}

impl BinaryOperator {
    /// The infix symbol, `None` for the operators printed as intrinsic calls.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            BinaryOperator::Add => Some("+"),
            BinaryOperator::Subtract => Some("-"),
            BinaryOperator::Multiply => Some("*"),
            BinaryOperator::Divide => Some("/"),
            BinaryOperator::Concat => Some("//"),
            BinaryOperator::Max | BinaryOperator::Min => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOperator::Add => "add",
            BinaryOperator::Subtract => "subtract",
            BinaryOperator::Multiply => "multiply",
            BinaryOperator::Divide => "divide",
            BinaryOperator::Max => "max",
            BinaryOperator::Min => "min",
            BinaryOperator::Concat => "concat",
        }
    }
}

fn binary<T: Category>(op: BinaryOperator, left: Expr<T>, right: Expr<T>) -> Expr<T> {
    Expr::Binary(op, Box::new(left), Box::new(right))
}

impl<T: Numeric> Add for Expr<T> {
    type Output = Expr<T>;

    fn add(self, rhs: Expr<T>) -> Expr<T> {
        binary(BinaryOperator::Add, self, rhs)
    }
}

impl<T: Numeric> Sub for Expr<T> {
    type Output = Expr<T>;

    fn sub(self, rhs: Expr<T>) -> Expr<T> {
        binary(BinaryOperator::Subtract, self, rhs)
    }
}

impl<T: Numeric> Mul for Expr<T> {
    type Output = Expr<T>;

    fn mul(self, rhs: Expr<T>) -> Expr<T> {
        binary(BinaryOperator::Multiply, self, rhs)
    }
}

impl<T: Numeric> Neg for Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        Expr::Negate(Box::new(self))
    }
}

impl<T: Numeric> Expr<T> {
    pub fn divide(self, rhs: Expr<T>) -> Expr<T> {
        binary(BinaryOperator::Divide, self, rhs)
    }
}

impl Expr<Integer> {
    pub fn max(self, rhs: Expr<Integer>) -> Expr<Integer> {
        binary(BinaryOperator::Max, self, rhs)
    }

    pub fn min(self, rhs: Expr<Integer>) -> Expr<Integer> {
        binary(BinaryOperator::Min, self, rhs)
    }
}

impl Expr<Character> {
    pub fn concat(self, rhs: Expr<Character>) -> Expr<Character> {
        binary(BinaryOperator::Concat, self, rhs)
    }
}
