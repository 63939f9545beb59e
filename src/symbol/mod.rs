//! Append-only arena of scopes and symbols.
//!
//! References never own symbols: a [`SymbolRef`] is a plain index into the [`SymbolTable`] that
//! created it, and every query that needs to know something about a symbol goes through the
//! table. The table outlives all the expression trees built on top of it.

mod details;

use std::collections::BTreeSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use details::*;

use crate::types::{DynamicType, TypeCategory};

/// Handle to a symbol of a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolRef(u32);

/// Handle to a scope of a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeRef(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    Global,
    Module,
    Subprogram,
    DerivedType,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeRef>,
    /// The symbol that defines this scope, e.g. the subprogram or the derived type.
    pub symbol: Option<SymbolRef>,
}

impl Scope {
    pub fn is_derived_type(&self) -> bool {
        self.kind == ScopeKind::DerivedType
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attr {
    Allocatable,
    Pointer,
    Parameter,
    Optional,
    IntentIn,
    IntentOut,
    IntentInOut,
    Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    owner: ScopeRef,
    attrs: BTreeSet<Attr>,
    details: Details,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> ScopeRef {
        self.owner
    }

    pub fn attrs(&self) -> &BTreeSet<Attr> {
        &self.attrs
    }

    pub fn has_attr(&self, attr: Attr) -> bool {
        self.attrs.contains(&attr)
    }

    pub fn details(&self) -> &Details {
        &self.details
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Symbol `{0}` is already declared in this scope")]
    Duplicate(String),
    #[error("Symbol `{0}` is not a subprogram")]
    NotASubprogram(String),
    #[error("Symbol `{0}` is not a dummy argument")]
    NotADummy(String),
    #[error("Dummy argument `{dummy}` is not declared in the scope of `{procedure}`")]
    WrongScope { dummy: String, procedure: String },
}

/// Owner of all the scopes and symbols of a compilation unit.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Make a new table with only the global scope.
    pub fn new() -> SymbolTable {
        SymbolTable {
            scopes: vec![Scope {
                kind: ScopeKind::Global,
                parent: None,
                symbol: None,
            }],
            symbols: Vec::new(),
        }
    }

    pub fn global(&self) -> ScopeRef {
        ScopeRef(0)
    }

    /// Add a new scope nested in `parent`, optionally defined by `symbol`.
    pub fn add_scope(
        &mut self,
        kind: ScopeKind,
        parent: ScopeRef,
        symbol: Option<SymbolRef>,
    ) -> ScopeRef {
        let scope = ScopeRef(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            parent: Some(parent),
            symbol,
        });
        trace!("New {:?} scope {:?} inside {:?}", kind, scope, parent);
        scope
    }

    /// Declare a new symbol in the `owner` scope.
    pub fn add_symbol(
        &mut self,
        owner: ScopeRef,
        name: impl Into<String>,
        attrs: &[Attr],
        details: impl Into<Details>,
    ) -> Result<SymbolRef, SymbolError> {
        let name = name.into();
        if self.find(owner, &name).is_some() {
            return Err(SymbolError::Duplicate(name));
        }
        let symbol = SymbolRef(self.symbols.len() as u32);
        trace!("Declared `{}` as {:?} in {:?}", name, symbol, owner);
        self.symbols.push(Symbol {
            name,
            owner,
            attrs: attrs.iter().copied().collect(),
            details: details.into(),
        });
        Ok(symbol)
    }

    /// Append `dummy` to the dummy argument list of `procedure`.
    pub fn add_dummy(&mut self, procedure: SymbolRef, dummy: SymbolRef) -> Result<(), SymbolError> {
        if !self.is_dummy(dummy) {
            return Err(SymbolError::NotADummy(self[dummy].name.clone()));
        }
        if self[self[dummy].owner].symbol != Some(procedure) {
            return Err(SymbolError::WrongScope {
                dummy: self[dummy].name.clone(),
                procedure: self[procedure].name.clone(),
            });
        }
        if let Details::Subprogram(subprogram) = &mut self.symbols[procedure.0 as usize].details {
            subprogram.dummy_args.push(dummy);
            return Ok(());
        }
        Err(SymbolError::NotASubprogram(self[procedure].name.clone()))
    }

    /// Set the function result of `procedure`.
    pub fn set_result(
        &mut self,
        procedure: SymbolRef,
        result: SymbolRef,
    ) -> Result<(), SymbolError> {
        if let Details::Subprogram(subprogram) = &mut self.symbols[procedure.0 as usize].details {
            subprogram.result = Some(result);
            return Ok(());
        }
        Err(SymbolError::NotASubprogram(self[procedure].name.clone()))
    }

    /// Look up a name declared directly in `scope`, ignoring the case.
    pub fn find(&self, scope: ScopeRef, name: &str) -> Option<SymbolRef> {
        self.symbols
            .iter()
            .position(|s| s.owner == scope && s.name.eq_ignore_ascii_case(name))
            .map(|index| SymbolRef(index as u32))
    }

    pub fn name(&self, symbol: SymbolRef) -> &str {
        &self[symbol].name
    }

    pub fn owner(&self, symbol: SymbolRef) -> &Scope {
        &self[self[symbol].owner]
    }

    /// Follow host and use association to the symbol that is actually declared.
    pub fn ultimate(&self, symbol: SymbolRef) -> SymbolRef {
        let mut current = symbol;
        loop {
            match self[current].details {
                Details::HostAssoc(target) | Details::UseAssoc(target) => current = target,
                _ => return current,
            }
        }
    }

    pub fn has_attr(&self, symbol: SymbolRef, attr: Attr) -> bool {
        self[self.ultimate(symbol)].has_attr(attr)
    }

    fn object(&self, symbol: SymbolRef) -> Option<&ObjectEntity> {
        match &self[self.ultimate(symbol)].details {
            Details::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The declared rank, 0 for scalars and assumed-rank entities.
    pub fn rank(&self, symbol: SymbolRef) -> usize {
        match &self[self.ultimate(symbol)].details {
            Details::Object(object) => object.shape.rank(),
            Details::Assoc(assoc) => assoc.expr.rank(self),
            Details::Subprogram(Subprogram {
                result: Some(result),
                ..
            }) => self.rank(*result),
            _ => 0,
        }
    }

    pub fn corank(&self, symbol: SymbolRef) -> usize {
        match &self[self.ultimate(symbol)].details {
            Details::Object(object) => object.corank,
            Details::Assoc(assoc) => assoc.expr.corank(self),
            _ => 0,
        }
    }

    /// The declared type; the result type for a function.
    pub fn dynamic_type(&self, symbol: SymbolRef) -> Option<&DynamicType> {
        match &self[self.ultimate(symbol)].details {
            Details::Object(object) => object.ty.as_ref(),
            Details::Assoc(assoc) => assoc.ty.as_ref(),
            Details::Subprogram(subprogram) => subprogram
                .result
                .and_then(|result| self.dynamic_type(result)),
            Details::TypeParam(param) => Some(&param.ty),
            Details::ProcEntity(proc) => proc
                .ty
                .as_ref()
                .or_else(|| proc.interface.and_then(|i| self.dynamic_type(i))),
            Details::DerivedType | Details::HostAssoc(_) | Details::UseAssoc(_) => None,
        }
    }

    pub fn is_character(&self, symbol: SymbolRef) -> bool {
        self.dynamic_type(symbol)
            .map_or(false, |ty| ty.category == TypeCategory::Character)
    }

    /// A PARAMETER.
    pub fn is_named_constant(&self, symbol: SymbolRef) -> bool {
        self.object(symbol).is_some() && self.has_attr(symbol, Attr::Parameter)
    }

    /// The initializer of a named constant.
    pub fn init(&self, symbol: SymbolRef) -> Option<&crate::expr::SomeExpr> {
        self.object(symbol).and_then(|object| object.init.as_ref())
    }

    pub fn is_allocatable_or_pointer(&self, symbol: SymbolRef) -> bool {
        self.object(symbol).is_some()
            && (self.has_attr(symbol, Attr::Allocatable) || self.has_attr(symbol, Attr::Pointer))
    }

    pub fn is_assumed_rank(&self, symbol: SymbolRef) -> bool {
        self.object(symbol)
            .map_or(false, |object| object.shape.is_assumed_rank())
    }

    pub fn is_dummy(&self, symbol: SymbolRef) -> bool {
        match &self[self.ultimate(symbol)].details {
            Details::Object(object) => object.dummy,
            Details::ProcEntity(proc) => proc.dummy,
            _ => false,
        }
    }

    /// Whether the bounds, length or type of the entity are only known at runtime.
    pub fn requires_descriptor(&self, symbol: SymbolRef) -> bool {
        let ultimate = self.ultimate(symbol);
        match &self[ultimate].details {
            Details::Object(object) => {
                self.is_allocatable_or_pointer(ultimate)
                    || object.shape.requires_descriptor()
                    || object.ty.as_ref().map_or(false, DynamicType::requires_descriptor)
            }
            Details::ProcEntity(_) => self.has_attr(ultimate, Attr::Pointer),
            _ => false,
        }
    }

    /// Position of a dummy argument in the argument list of its procedure.
    pub fn dummy_position(&self, symbol: SymbolRef) -> Option<usize> {
        let ultimate = self.ultimate(symbol);
        if !self.is_dummy(ultimate) {
            return None;
        }
        let procedure = self.owner(ultimate).symbol?;
        match &self[procedure].details {
            Details::Subprogram(subprogram) => {
                subprogram.dummy_args.iter().position(|&arg| arg == ultimate)
            }
            _ => None,
        }
    }
}

impl Index<SymbolRef> for SymbolTable {
    type Output = Symbol;

    fn index(&self, symbol: SymbolRef) -> &Symbol {
        &self.symbols[symbol.0 as usize]
    }
}

impl Index<ScopeRef> for SymbolTable {
    type Output = Scope;

    fn index(&self, scope: ScopeRef) -> &Scope {
        &self.scopes[scope.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharLength;

    fn subroutine(table: &mut SymbolTable, name: &str) -> (SymbolRef, ScopeRef) {
        let global = table.global();
        let proc = table
            .add_symbol(global, name, &[], Subprogram::default())
            .unwrap();
        let scope = table.add_scope(ScopeKind::Subprogram, global, Some(proc));
        (proc, scope)
    }

    #[test]
    fn test_duplicate() {
        let mut table = SymbolTable::new();
        let global = table.global();
        let ty = DynamicType::integer(4);
        table
            .add_symbol(global, "n", &[], ObjectEntity::new(ty.clone()))
            .unwrap();
        assert_eq!(
            table.add_symbol(global, "N", &[], ObjectEntity::new(ty)),
            Err(SymbolError::Duplicate("N".into()))
        );
    }

    #[test]
    fn test_ultimate() {
        let mut table = SymbolTable::new();
        let global = table.global();
        let module = table.add_scope(ScopeKind::Module, global, None);
        let x = table
            .add_symbol(
                module,
                "x",
                &[Attr::Allocatable],
                ObjectEntity::new(DynamicType::real(8)).with_shape(ArraySpec::Deferred(2)),
            )
            .unwrap();
        let used = table
            .add_symbol(global, "x", &[], Details::UseAssoc(x))
            .unwrap();
        assert_eq!(table.ultimate(used), x);
        assert_eq!(table.rank(used), 2);
        assert!(table.is_allocatable_or_pointer(used));
        assert!(table.requires_descriptor(used));
    }

    #[test]
    fn test_dummy_position() {
        let mut table = SymbolTable::new();
        let (proc, scope) = subroutine(&mut table, "f");
        let ty = DynamicType::character(1, CharLength::Assumed);
        let a = table
            .add_symbol(scope, "a", &[], ObjectEntity::new(ty.clone()).dummy())
            .unwrap();
        let b = table
            .add_symbol(scope, "b", &[], ObjectEntity::new(ty).dummy())
            .unwrap();
        table.add_dummy(proc, a).unwrap();
        table.add_dummy(proc, b).unwrap();
        assert_eq!(table.dummy_position(a), Some(0));
        assert_eq!(table.dummy_position(b), Some(1));
        assert!(table.requires_descriptor(b));
    }

    #[test]
    fn test_add_dummy_errors() {
        let mut table = SymbolTable::new();
        let (proc, scope) = subroutine(&mut table, "f");
        let (_, other_scope) = subroutine(&mut table, "g");
        let local = table
            .add_symbol(scope, "local", &[], ObjectEntity::new(DynamicType::integer(4)))
            .unwrap();
        let foreign = table
            .add_symbol(
                other_scope,
                "x",
                &[],
                ObjectEntity::new(DynamicType::integer(4)).dummy(),
            )
            .unwrap();
        assert_eq!(
            table.add_dummy(proc, local),
            Err(SymbolError::NotADummy("local".into()))
        );
        assert_eq!(
            table.add_dummy(proc, foreign),
            Err(SymbolError::WrongScope {
                dummy: "x".into(),
                procedure: "f".into()
            })
        );
        assert_eq!(table.dummy_position(foreign), None);
    }
}
