use crate::expr::Expr;
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{same_symbol, symbol_len, Equivalent};

/// Raw bytes of a literal that is referenced like a variable, e.g. the parent of `'HELLO'(2:4)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticDataObject {
    data: Vec<u8>,
}

impl StaticDataObject {
    pub fn new(data: Vec<u8>) -> StaticDataObject {
        StaticDataObject { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size in bytes.
    pub fn len(&self) -> i64 {
        self.data.len() as i64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The content as a string, only when it is plain ASCII.
    pub fn as_string(&self) -> Option<String> {
        if self.data.is_ascii() {
            String::from_utf8(self.data.clone()).ok()
        } else {
            None
        }
    }
}

impl From<&str> for StaticDataObject {
    fn from(value: &str) -> Self {
        StaticDataObject::new(value.as_bytes().to_vec())
    }
}

/// The root of a data reference.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseObject {
    Symbol(SymbolRef),
    StaticData(StaticDataObject),
}

impl BaseObject {
    pub fn symbol(&self) -> Option<SymbolRef> {
        match self {
            BaseObject::Symbol(symbol) => Some(*symbol),
            BaseObject::StaticData(_) => None,
        }
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            BaseObject::Symbol(symbol) => symbols.rank(*symbol),
            BaseObject::StaticData(_) => 0,
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match self {
            BaseObject::Symbol(symbol) => symbols.corank(*symbol),
            BaseObject::StaticData(_) => 0,
        }
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match self {
            BaseObject::Symbol(symbol) => symbol_len(symbols, *symbol),
            BaseObject::StaticData(object) => Some(Expr::from(object.len())),
        }
    }
}

impl From<SymbolRef> for BaseObject {
    fn from(symbol: SymbolRef) -> Self {
        BaseObject::Symbol(symbol)
    }
}

impl From<StaticDataObject> for BaseObject {
    fn from(object: StaticDataObject) -> Self {
        BaseObject::StaticData(object)
    }
}

impl Equivalent for BaseObject {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (BaseObject::Symbol(x), BaseObject::Symbol(y)) => same_symbol(symbols, *x, *y),
            (BaseObject::StaticData(x), BaseObject::StaticData(y)) => x == y,
            _ => false,
        }
    }
}
