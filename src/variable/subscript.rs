use crate::expr::Expr;
use crate::symbol::SymbolTable;
use crate::types::SubscriptInteger;
use crate::variable::{Equivalent, Triplet};

/// One position of a subscript list.
#[derive(Debug, Clone, PartialEq)]
pub enum Subscript {
    /// A scalar index, or a vector subscript when the expression is an array.
    Scalar(Expr<SubscriptInteger>),
    Triplet(Triplet),
}

impl Subscript {
    /// How many dimensions this subscript leaves in the result.
    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            Subscript::Scalar(expr) => expr.rank(symbols),
            Subscript::Triplet(_) => 1,
        }
    }

    pub fn is_vector(&self, symbols: &SymbolTable) -> bool {
        match self {
            Subscript::Scalar(expr) => expr.rank(symbols) > 0,
            Subscript::Triplet(_) => false,
        }
    }
}

impl From<Expr<SubscriptInteger>> for Subscript {
    fn from(expr: Expr<SubscriptInteger>) -> Self {
        Subscript::Scalar(expr)
    }
}

impl From<i64> for Subscript {
    fn from(value: i64) -> Self {
        Subscript::Scalar(Expr::from(value))
    }
}

impl From<Triplet> for Subscript {
    fn from(triplet: Triplet) -> Self {
        Subscript::Triplet(triplet)
    }
}

impl Equivalent for Subscript {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (Subscript::Scalar(x), Subscript::Scalar(y)) => x.equivalent(y, symbols),
            (Subscript::Triplet(x), Subscript::Triplet(y)) => x.equivalent(y, symbols),
            _ => false,
        }
    }
}
