//! The generic expression tree that carries variable references as leaves.
//!
//! Only what the references need is modelled: constants, designators, function references and
//! a handful of operations. Type checking happens elsewhere; the operators available on an
//! `Expr<T>` depend on `T` (see `ops`).

mod constant;
mod ops;

use std::marker::PhantomData;

pub use constant::Constant;
pub use ops::BinaryOperator;

use crate::symbol::SymbolTable;
use crate::types::*;
use crate::variable::{BaseObject, Designator, DesignatorKind, Equivalent, ProcedureRef};

/// An expression of static category `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T: Category> {
    Constant(Constant<T>),
    Designator(Designator<T>),
    FunctionRef(FunctionRef<T>),
    Parentheses(Box<Expr<T>>),
    Negate(Box<Expr<T>>),
    Binary(BinaryOperator, Box<Expr<T>>, Box<Expr<T>>),
}

/// A function call whose result has category `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionRef<T: Category> {
    pub call: Box<ProcedureRef>,
    category: PhantomData<T>,
}

impl<T: Category> FunctionRef<T> {
    pub fn new(call: ProcedureRef) -> FunctionRef<T> {
        FunctionRef {
            call: Box::new(call),
            category: PhantomData,
        }
    }
}

impl<T: Category> Expr<T> {
    pub fn constant(value: T::Scalar) -> Expr<T> {
        Expr::Constant(Constant::new(value))
    }

    pub fn parentheses(inner: Expr<T>) -> Expr<T> {
        Expr::Parentheses(Box::new(inner))
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            Expr::Constant(_) => 0,
            Expr::Designator(designator) => designator.rank(symbols),
            Expr::FunctionRef(function) => function.call.rank(symbols),
            Expr::Parentheses(inner) | Expr::Negate(inner) => inner.rank(symbols),
            Expr::Binary(_, left, right) => left.rank(symbols).max(right.rank(symbols)),
        }
    }

    /// Only a designator can be a coarray.
    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match self {
            Expr::Designator(designator) => designator.corank(symbols),
            _ => 0,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant<T>> {
        match self {
            Expr::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    pub fn as_designator(&self) -> Option<&Designator<T>> {
        match self {
            Expr::Designator(designator) => Some(designator),
            _ => None,
        }
    }

    /// Whether the expression designates a (definable) variable.
    ///
    /// Named constants and their parts, literals and inquiries are not variables.
    pub fn is_variable(&self, symbols: &SymbolTable) -> bool {
        let designator = match self {
            Expr::Designator(designator) => designator,
            _ => return false,
        };
        match designator.kind() {
            DesignatorKind::DescriptorInquiry(_) | DesignatorKind::TypeParamInquiry(_) => false,
            _ => match designator.base_object() {
                BaseObject::Symbol(symbol) => !symbols.is_named_constant(symbol),
                BaseObject::StaticData(_) => false,
            },
        }
    }
}

impl Expr<Character> {
    /// The length of a character expression, when it can be expressed statically.
    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match self {
            Expr::Constant(constant) => Some(Expr::from(constant.len())),
            Expr::Designator(designator) => designator.len(symbols),
            Expr::FunctionRef(function) => function.call.len(symbols),
            Expr::Parentheses(inner) => inner.len(symbols),
            Expr::Binary(BinaryOperator::Concat, left, right) => {
                Some(left.len(symbols)? + right.len(symbols)?)
            }
            Expr::Negate(_) | Expr::Binary(..) => None,
        }
    }
}

impl<T: Category> From<Constant<T>> for Expr<T> {
    fn from(constant: Constant<T>) -> Self {
        Expr::Constant(constant)
    }
}

impl<T: Category> From<Designator<T>> for Expr<T> {
    fn from(designator: Designator<T>) -> Self {
        Expr::Designator(designator)
    }
}

impl<T: Category> From<FunctionRef<T>> for Expr<T> {
    fn from(function: FunctionRef<T>) -> Self {
        Expr::FunctionRef(function)
    }
}

impl From<i64> for Expr<Integer> {
    fn from(value: i64) -> Self {
        Expr::Constant(Constant::new(value))
    }
}

impl From<&str> for Expr<Character> {
    fn from(value: &str) -> Self {
        Expr::Constant(Constant::from(value))
    }
}

impl<T: Category> Equivalent for Expr<T> {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (Expr::Constant(x), Expr::Constant(y)) => x == y,
            (Expr::Designator(x), Expr::Designator(y)) => x.equivalent(y, symbols),
            (Expr::FunctionRef(x), Expr::FunctionRef(y)) => x.call.equivalent(&y.call, symbols),
            (Expr::Parentheses(x), Expr::Parentheses(y)) | (Expr::Negate(x), Expr::Negate(y)) => {
                x.equivalent(y, symbols)
            }
            (Expr::Binary(op, x1, x2), Expr::Binary(other_op, y1, y2)) => {
                op == other_op && x1.equivalent(y1, symbols) && x2.equivalent(y2, symbols)
            }
            _ => false,
        }
    }
}

/// An expression of any category.
#[derive(Debug, Clone, PartialEq)]
pub enum SomeExpr {
    Integer(Expr<Integer>),
    Real(Expr<Real>),
    Complex(Expr<Complex>),
    Character(Expr<Character>),
    Logical(Expr<Logical>),
    Derived(Expr<Derived>),
}

macro_rules! some_expr_dispatch {
    ($self:expr, $expr:ident => $body:expr) => {
        match $self {
            SomeExpr::Integer($expr) => $body,
            SomeExpr::Real($expr) => $body,
            SomeExpr::Complex($expr) => $body,
            SomeExpr::Character($expr) => $body,
            SomeExpr::Logical($expr) => $body,
            SomeExpr::Derived($expr) => $body,
        }
    };
}
pub(crate) use some_expr_dispatch;

impl SomeExpr {
    pub fn category(&self) -> TypeCategory {
        match self {
            SomeExpr::Integer(_) => TypeCategory::Integer,
            SomeExpr::Real(_) => TypeCategory::Real,
            SomeExpr::Complex(_) => TypeCategory::Complex,
            SomeExpr::Character(_) => TypeCategory::Character,
            SomeExpr::Logical(_) => TypeCategory::Logical,
            SomeExpr::Derived(_) => TypeCategory::Derived,
        }
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        some_expr_dispatch!(self, expr => expr.rank(symbols))
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        some_expr_dispatch!(self, expr => expr.corank(symbols))
    }

    pub fn is_variable(&self, symbols: &SymbolTable) -> bool {
        some_expr_dispatch!(self, expr => expr.is_variable(symbols))
    }

    pub fn as_integer(&self) -> Option<&Expr<Integer>> {
        Integer::from_some(self)
    }

    pub fn as_character(&self) -> Option<&Expr<Character>> {
        Character::from_some(self)
    }
}

impl Equivalent for SomeExpr {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (SomeExpr::Integer(x), SomeExpr::Integer(y)) => x.equivalent(y, symbols),
            (SomeExpr::Real(x), SomeExpr::Real(y)) => x.equivalent(y, symbols),
            (SomeExpr::Complex(x), SomeExpr::Complex(y)) => x.equivalent(y, symbols),
            (SomeExpr::Character(x), SomeExpr::Character(y)) => x.equivalent(y, symbols),
            (SomeExpr::Logical(x), SomeExpr::Logical(y)) => x.equivalent(y, symbols),
            (SomeExpr::Derived(x), SomeExpr::Derived(y)) => x.equivalent(y, symbols),
            _ => false,
        }
    }
}

impl<T: Category> From<Expr<T>> for SomeExpr {
    fn from(expr: Expr<T>) -> Self {
        T::into_some(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_len() {
        let symbols = SymbolTable::new();
        let hello = Expr::<Character>::from("HELLO");
        assert_eq!(hello.len(&symbols), Some(Expr::from(5)));
        assert_eq!(hello.rank(&symbols), 0);
    }

    #[test]
    fn test_concat_len() {
        let symbols = SymbolTable::new();
        let both = Expr::<Character>::from("ab").concat(Expr::from("cde"));
        assert_eq!(both.len(&symbols), Some(Expr::<Integer>::from(2) + Expr::from(3)));
    }

    #[test]
    fn test_some_expr() {
        let symbols = SymbolTable::new();
        let some = SomeExpr::from(Expr::<Character>::from("x"));
        assert_eq!(some.category(), TypeCategory::Character);
        assert_eq!(some.rank(&symbols), 0);
        assert!(some.as_integer().is_none());
        assert!(!some.is_variable(&symbols));
    }

    #[test]
    fn test_is_variable() {
        use crate::symbol::{Attr, ObjectEntity, SymbolRef};
        use crate::variable::{StaticDataObject, Substring, TypeParamInquiry};

        let mut symbols = SymbolTable::new();
        let global = symbols.global();
        let n = symbols
            .add_symbol(global, "n", &[], ObjectEntity::new(DynamicType::integer(8)))
            .unwrap();
        let k = symbols
            .add_symbol(
                global,
                "k",
                &[Attr::Parameter],
                ObjectEntity::new(DynamicType::integer(8)).with_init(Expr::<Integer>::from(3)),
            )
            .unwrap();

        let whole = |symbol: SymbolRef| Expr::from(Designator::<Integer>::from(symbol));
        assert!(whole(n).is_variable(&symbols));
        assert!(!whole(k).is_variable(&symbols));
        assert!(!Expr::<Integer>::from(3).is_variable(&symbols));
        assert!(!(whole(n) + Expr::from(1)).is_variable(&symbols));

        let inquiry = TypeParamInquiry::new(None, n);
        assert!(!Expr::from(Designator::<Integer>::from(inquiry)).is_variable(&symbols));

        let literal = Substring::new(StaticDataObject::from("HELLO"), None, None);
        assert!(!Expr::from(Designator::<Character>::from(literal)).is_variable(&symbols));
    }
}
