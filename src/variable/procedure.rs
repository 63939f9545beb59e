use crate::expr::{Expr, SomeExpr};
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::{DynamicType, SubscriptInteger};
use crate::variable::{symbol_len, Component, Equivalent};

/// An intrinsic procedure resolved to its specific characteristics.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificIntrinsic {
    pub name: String,
    /// Type of the result, `None` for a subroutine.
    pub result: Option<DynamicType>,
    pub result_rank: usize,
    /// An elemental intrinsic has the rank of its arguments.
    pub elemental: bool,
}

impl SpecificIntrinsic {
    pub fn function(name: impl Into<String>, result: DynamicType) -> SpecificIntrinsic {
        SpecificIntrinsic {
            name: name.into(),
            result: Some(result),
            result_rank: 0,
            elemental: false,
        }
    }

    pub fn elemental(mut self) -> SpecificIntrinsic {
        self.elemental = true;
        self
    }
}

/// What is called by a procedure reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcedureDesignator {
    Symbol(SymbolRef),
    /// A procedure pointer component, `obj%proc`.
    Component(Box<Component>),
    Intrinsic(SpecificIntrinsic),
}

impl ProcedureDesignator {
    pub fn symbol(&self) -> Option<SymbolRef> {
        match self {
            ProcedureDesignator::Symbol(symbol) => Some(*symbol),
            ProcedureDesignator::Component(component) => Some(component.last_symbol()),
            ProcedureDesignator::Intrinsic(_) => None,
        }
    }

    pub fn name<'a>(&'a self, symbols: &'a SymbolTable) -> &'a str {
        match self {
            ProcedureDesignator::Symbol(symbol) => symbols.name(*symbol),
            ProcedureDesignator::Component(component) => symbols.name(component.last_symbol()),
            ProcedureDesignator::Intrinsic(intrinsic) => &intrinsic.name,
        }
    }

    /// The rank of the result.
    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match self {
            ProcedureDesignator::Symbol(symbol) => symbols.rank(*symbol),
            ProcedureDesignator::Component(component) => symbols.rank(component.last_symbol()),
            ProcedureDesignator::Intrinsic(intrinsic) => intrinsic.result_rank,
        }
    }

    /// The length of a character result.
    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match self {
            ProcedureDesignator::Symbol(symbol) => symbol_len(symbols, *symbol),
            ProcedureDesignator::Component(component) => component.len(symbols),
            ProcedureDesignator::Intrinsic(intrinsic) => intrinsic
                .result
                .as_ref()
                .and_then(|ty| ty.char_length())
                .cloned(),
        }
    }
}

impl From<SymbolRef> for ProcedureDesignator {
    fn from(symbol: SymbolRef) -> Self {
        ProcedureDesignator::Symbol(symbol)
    }
}

impl From<Component> for ProcedureDesignator {
    fn from(component: Component) -> Self {
        ProcedureDesignator::Component(Box::new(component))
    }
}

impl From<SpecificIntrinsic> for ProcedureDesignator {
    fn from(intrinsic: SpecificIntrinsic) -> Self {
        ProcedureDesignator::Intrinsic(intrinsic)
    }
}

impl Equivalent for ProcedureDesignator {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (ProcedureDesignator::Component(x), ProcedureDesignator::Component(y)) => {
                x.equivalent(y, symbols)
            }
            _ => self == other,
        }
    }
}

/// A call, `proc(args...)`. Omitted optional arguments are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureRef {
    pub(crate) proc: ProcedureDesignator,
    pub(crate) arguments: Vec<Option<SomeExpr>>,
}

impl ProcedureRef {
    pub fn new(proc: impl Into<ProcedureDesignator>, arguments: Vec<Option<SomeExpr>>) -> Self {
        ProcedureRef {
            proc: proc.into(),
            arguments,
        }
    }

    pub fn proc(&self) -> &ProcedureDesignator {
        &self.proc
    }

    pub fn arguments(&self) -> &[Option<SomeExpr>] {
        &self.arguments
    }

    fn argument(&self, index: usize) -> Option<&SomeExpr> {
        self.arguments.get(index).and_then(Option::as_ref)
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match &self.proc {
            ProcedureDesignator::Intrinsic(intrinsic) if intrinsic.elemental => self
                .arguments
                .iter()
                .flatten()
                .map(|arg| arg.rank(symbols))
                .max()
                .unwrap_or(0),
            proc => proc.rank(symbols),
        }
    }

    /// The length of a character result.
    ///
    /// The intrinsics whose result length depends on the arguments are resolved here, the others
    /// have the length of their declared result.
    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        if let ProcedureDesignator::Intrinsic(intrinsic) = &self.proc {
            match intrinsic.name.as_str() {
                "adjustl" | "adjustr" => {
                    return self.argument(0)?.as_character()?.len(symbols);
                }
                "repeat" => {
                    let len = self.argument(0)?.as_character()?.len(symbols)?;
                    let copies = self.argument(1)?.as_integer()?.clone();
                    return Some(len * copies);
                }
                _ => {}
            }
        }
        self.proc.len(symbols)
    }
}

impl Equivalent for ProcedureRef {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.proc.equivalent(&other.proc, symbols)
            && self.arguments.equivalent(&other.arguments, symbols)
    }
}
