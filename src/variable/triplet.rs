use crate::expr::Expr;
use crate::fold::to_int64;
use crate::symbol::SymbolTable;
use crate::types::SubscriptInteger;
use crate::variable::Equivalent;

/// The `lower:upper:stride` subscript of an array section.
///
/// The stride is always present and defaults to the literal 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Triplet {
    lower: Option<Expr<SubscriptInteger>>,
    upper: Option<Expr<SubscriptInteger>>,
    stride: Expr<SubscriptInteger>,
}

impl Default for Triplet {
    fn default() -> Self {
        Triplet {
            lower: None,
            upper: None,
            stride: Expr::from(1),
        }
    }
}

impl Triplet {
    pub fn new(
        lower: Option<Expr<SubscriptInteger>>,
        upper: Option<Expr<SubscriptInteger>>,
        stride: Option<Expr<SubscriptInteger>>,
    ) -> Triplet {
        Triplet {
            lower,
            upper,
            stride: stride.unwrap_or_else(|| Expr::from(1)),
        }
    }

    pub fn lower(&self) -> Option<&Expr<SubscriptInteger>> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&Expr<SubscriptInteger>> {
        self.upper.as_ref()
    }

    pub fn stride(&self) -> &Expr<SubscriptInteger> {
        &self.stride
    }

    pub fn set_lower(&mut self, expr: Expr<SubscriptInteger>) -> &mut Self {
        self.lower = Some(expr);
        self
    }

    pub fn set_upper(&mut self, expr: Expr<SubscriptInteger>) -> &mut Self {
        self.upper = Some(expr);
        self
    }

    pub fn set_stride(&mut self, expr: Expr<SubscriptInteger>) -> &mut Self {
        self.stride = expr;
        self
    }

    /// Whether the stride is the constant 1.
    pub fn is_strideless(&self) -> bool {
        to_int64(&self.stride) == Some(1)
    }

    pub(crate) fn map_exprs(
        self,
        mut f: impl FnMut(Expr<SubscriptInteger>) -> Expr<SubscriptInteger>,
    ) -> Triplet {
        Triplet {
            lower: self.lower.map(&mut f),
            upper: self.upper.map(&mut f),
            stride: f(self.stride),
        }
    }
}

impl Equivalent for Triplet {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.lower.equivalent(&other.lower, symbols)
            && self.upper.equivalent(&other.upper, symbols)
            && self.stride.equivalent(&other.stride, symbols)
    }
}
