use crate::expr::Expr;
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{symbol_len, DataRef, Equivalent};

/// One structure-field hop, `base%symbol`.
///
/// The base is boxed: a component can be the base of another component, directly or through an
/// array or coarray reference, and cloning a component clones the whole chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub(crate) base: Box<DataRef>,
    pub(crate) symbol: SymbolRef,
}

impl Component {
    pub fn new(base: impl Into<DataRef>, symbol: SymbolRef) -> Component {
        Component {
            base: Box::new(base.into()),
            symbol,
        }
    }

    pub fn base(&self) -> &DataRef {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut DataRef {
        &mut self.base
    }

    /// The field.
    pub fn symbol(&self) -> SymbolRef {
        self.symbol
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.base.first_symbol()
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.symbol
    }

    /// The rank of an array field, otherwise the rank of the base (`a(:)%x` is an array).
    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match symbols.rank(self.symbol) {
            0 => self.base.rank(symbols),
            rank => rank,
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        let corank = symbols.corank(self.symbol);
        if corank > 0 {
            corank
        } else if symbols.is_allocatable_or_pointer(self.symbol) {
            // `ca%p` and `ca%a` are not coarrays themselves
            0
        } else {
            self.base.corank(symbols)
        }
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        symbol_len(symbols, self.last_symbol())
    }
}

impl Equivalent for Component {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.symbol == other.symbol && self.base.equivalent(&other.base, symbols)
    }
}
