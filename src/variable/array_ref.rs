use crate::expr::Expr;
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{Equivalent, NamedEntity, Subscript};

/// An array element or section, `base(s1, s2, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayRef {
    pub(crate) base: NamedEntity,
    pub(crate) subscripts: Vec<Subscript>,
}

impl ArrayRef {
    pub fn new(base: impl Into<NamedEntity>, subscripts: Vec<Subscript>) -> ArrayRef {
        ArrayRef {
            base: base.into(),
            subscripts,
        }
    }

    pub fn base(&self) -> &NamedEntity {
        &self.base
    }

    pub fn subscripts(&self) -> &[Subscript] {
        &self.subscripts
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.base.first_symbol()
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.base.last_symbol()
    }

    /// The sum of the ranks of the subscripts.
    ///
    /// When all the subscripts are scalar the reference can still be an array: in `a(:)%b(1)`
    /// the rank comes from the base of the component.
    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        let rank: usize = self.subscripts.iter().map(|s| s.rank(symbols)).sum();
        if rank > 0 {
            rank
        } else if let Some(component) = self.base.unwrap_component() {
            component.base().rank(symbols)
        } else {
            0
        }
    }

    /// A vector subscript makes a copy of the elements, which is not a coarray anymore.
    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        if self.subscripts.iter().any(|s| s.is_vector(symbols)) {
            return 0;
        }
        self.base.corank(symbols)
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        self.base.len(symbols)
    }
}

impl Equivalent for ArrayRef {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.base.equivalent(&other.base, symbols)
            && self.subscripts.equivalent(&other.subscripts, symbols)
    }
}
