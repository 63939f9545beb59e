use crate::symbol::{SymbolRef, SymbolTable};
use crate::variable::{DataRef, Equivalent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Re,
    Im,
}

impl Part {
    pub fn as_str(self) -> &'static str {
        match self {
            Part::Re => "re",
            Part::Im => "im",
        }
    }
}

/// The real or the imaginary part of a complex reference, `z%re` or `z%im`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPart {
    pub(crate) complex: DataRef,
    pub(crate) part: Part,
}

impl ComplexPart {
    pub fn new(complex: impl Into<DataRef>, part: Part) -> ComplexPart {
        ComplexPart {
            complex: complex.into(),
            part,
        }
    }

    pub fn complex(&self) -> &DataRef {
        &self.complex
    }

    pub fn part(&self) -> Part {
        self.part
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.complex.first_symbol()
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.complex.last_symbol()
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        self.complex.rank(symbols)
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        self.complex.corank(symbols)
    }
}

impl Equivalent for ComplexPart {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.part == other.part && self.complex.equivalent(&other.complex, symbols)
    }
}
