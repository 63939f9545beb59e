use crate::expr::Expr;
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{
    same_symbol, symbol_len, ArrayRef, CoarrayRef, Component, Equivalent, NamedEntity,
};

/// A reference to an addressable object.
#[derive(Debug, Clone, PartialEq)]
pub enum DataRef {
    Symbol(SymbolRef),
    Component(Component),
    ArrayRef(ArrayRef),
    CoarrayRef(CoarrayRef),
}

impl DataRef {
    pub fn first_symbol(&self) -> SymbolRef {
        match self {
            DataRef::Symbol(symbol) => *symbol,
            DataRef::Component(component) => component.first_symbol(),
            DataRef::ArrayRef(array) => array.first_symbol(),
            DataRef::CoarrayRef(coarray) => coarray.first_symbol(),
        }
    }

    pub fn last_symbol(&self) -> SymbolRef {
        match self {
            DataRef::Symbol(symbol) => *symbol,
            DataRef::Component(component) => component.last_symbol(),
            DataRef::ArrayRef(array) => array.last_symbol(),
            DataRef::CoarrayRef(coarray) => coarray.last_symbol(),
        }
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            DataRef::Symbol(symbol) => symbols.rank(*symbol),
            DataRef::Component(component) => component.rank(symbols),
            DataRef::ArrayRef(array) => array.rank(symbols),
            DataRef::CoarrayRef(coarray) => coarray.rank(symbols),
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match self {
            DataRef::Symbol(symbol) => symbols.corank(*symbol),
            DataRef::Component(component) => component.corank(symbols),
            DataRef::ArrayRef(array) => array.corank(symbols),
            DataRef::CoarrayRef(coarray) => coarray.corank(symbols),
        }
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match self {
            DataRef::Symbol(symbol) => symbol_len(symbols, *symbol),
            DataRef::Component(component) => component.len(symbols),
            DataRef::ArrayRef(array) => array.len(symbols),
            DataRef::CoarrayRef(coarray) => coarray.len(symbols),
        }
    }
}

impl From<SymbolRef> for DataRef {
    fn from(symbol: SymbolRef) -> Self {
        DataRef::Symbol(symbol)
    }
}

impl From<Component> for DataRef {
    fn from(component: Component) -> Self {
        DataRef::Component(component)
    }
}

impl From<ArrayRef> for DataRef {
    fn from(array: ArrayRef) -> Self {
        DataRef::ArrayRef(array)
    }
}

impl From<CoarrayRef> for DataRef {
    fn from(coarray: CoarrayRef) -> Self {
        DataRef::CoarrayRef(coarray)
    }
}

impl From<NamedEntity> for DataRef {
    fn from(entity: NamedEntity) -> Self {
        match entity {
            NamedEntity::Symbol(symbol) => DataRef::Symbol(symbol),
            NamedEntity::Component(component) => DataRef::Component(component),
        }
    }
}

impl Equivalent for DataRef {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (DataRef::Symbol(x), DataRef::Symbol(y)) => same_symbol(symbols, *x, *y),
            (DataRef::Component(x), DataRef::Component(y)) => x.equivalent(y, symbols),
            (DataRef::ArrayRef(x), DataRef::ArrayRef(y)) => x.equivalent(y, symbols),
            (DataRef::CoarrayRef(x), DataRef::CoarrayRef(y)) => x.equivalent(y, symbols),
            _ => false,
        }
    }
}
