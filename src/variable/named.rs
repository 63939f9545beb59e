use crate::expr::Expr;
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{same_symbol, symbol_len, Component, Equivalent};

/// A reference that has a name: a whole symbol or a chain of components ending in a field.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedEntity {
    Symbol(SymbolRef),
    Component(Component),
}

impl NamedEntity {
    pub fn is_symbol(&self) -> bool {
        matches!(self, NamedEntity::Symbol(_))
    }

    pub fn unwrap_symbol_ref(&self) -> Option<SymbolRef> {
        match self {
            NamedEntity::Symbol(symbol) => Some(*symbol),
            NamedEntity::Component(_) => None,
        }
    }

    pub fn unwrap_component(&self) -> Option<&Component> {
        match self {
            NamedEntity::Symbol(_) => None,
            NamedEntity::Component(component) => Some(component),
        }
    }

    pub fn unwrap_component_mut(&mut self) -> Option<&mut Component> {
        match self {
            NamedEntity::Symbol(_) => None,
            NamedEntity::Component(component) => Some(component),
        }
    }

    /// The leftmost symbol, `a` in `a%b%c`.
    pub fn first_symbol(&self) -> SymbolRef {
        match self {
            NamedEntity::Symbol(symbol) => *symbol,
            NamedEntity::Component(component) => component.first_symbol(),
        }
    }

    /// The rightmost symbol, `c` in `a%b%c`.
    pub fn last_symbol(&self) -> SymbolRef {
        match self {
            NamedEntity::Symbol(symbol) => *symbol,
            NamedEntity::Component(component) => component.last_symbol(),
        }
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            NamedEntity::Symbol(symbol) => symbols.rank(*symbol),
            NamedEntity::Component(component) => component.rank(symbols),
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match self {
            NamedEntity::Symbol(symbol) => symbols.corank(*symbol),
            NamedEntity::Component(component) => component.corank(symbols),
        }
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        symbol_len(symbols, self.last_symbol())
    }
}

impl From<SymbolRef> for NamedEntity {
    fn from(symbol: SymbolRef) -> Self {
        NamedEntity::Symbol(symbol)
    }
}

impl From<Component> for NamedEntity {
    fn from(component: Component) -> Self {
        NamedEntity::Component(component)
    }
}

impl Equivalent for NamedEntity {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (NamedEntity::Symbol(x), NamedEntity::Symbol(y)) => same_symbol(symbols, *x, *y),
            (NamedEntity::Component(x), NamedEntity::Component(y)) => x.equivalent(y, symbols),
            _ => false,
        }
    }
}
