#![allow(dead_code)]

use varref::expr::Expr;
use varref::symbol::{
    Attr, Details, ObjectEntity, ScopeKind, ScopeRef, Subprogram, SymbolRef, SymbolTable,
};
use varref::types::{Category, DynamicType, Integer};
use varref::variable::Designator;

pub fn setup() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .is_test(true)
        .try_init();
}

/// A symbol table under construction.
pub struct Fixture {
    pub symbols: SymbolTable,
}

impl Fixture {
    pub fn new() -> Fixture {
        setup();
        Fixture {
            symbols: SymbolTable::new(),
        }
    }

    pub fn global(&self) -> ScopeRef {
        self.symbols.global()
    }

    pub fn declare(
        &mut self,
        scope: ScopeRef,
        name: &str,
        attrs: &[Attr],
        details: impl Into<Details>,
    ) -> SymbolRef {
        self.symbols
            .add_symbol(scope, name, attrs, details)
            .expect("Cannot declare the symbol")
    }

    /// Declare a variable in the global scope.
    pub fn object(&mut self, name: &str, object: ObjectEntity) -> SymbolRef {
        let global = self.global();
        self.declare(global, name, &[], object)
    }

    pub fn derived_type(&mut self, name: &str) -> (SymbolRef, ScopeRef) {
        let global = self.global();
        let symbol = self.declare(global, name, &[], Details::DerivedType);
        let scope = self
            .symbols
            .add_scope(ScopeKind::DerivedType, global, Some(symbol));
        (symbol, scope)
    }

    pub fn subprogram(&mut self, name: &str) -> (SymbolRef, ScopeRef) {
        let global = self.global();
        let symbol = self.declare(global, name, &[], Subprogram::default());
        let scope = self
            .symbols
            .add_scope(ScopeKind::Subprogram, global, Some(symbol));
        (symbol, scope)
    }

    /// Declare the next dummy argument of `procedure`.
    pub fn dummy(
        &mut self,
        procedure: (SymbolRef, ScopeRef),
        name: &str,
        attrs: &[Attr],
        ty: DynamicType,
    ) -> SymbolRef {
        self.dummy_object(procedure, name, attrs, ObjectEntity::new(ty))
    }

    pub fn dummy_object(
        &mut self,
        (procedure, scope): (SymbolRef, ScopeRef),
        name: &str,
        attrs: &[Attr],
        object: ObjectEntity,
    ) -> SymbolRef {
        let dummy = self.declare(scope, name, attrs, object.dummy());
        self.symbols
            .add_dummy(procedure, dummy)
            .expect("Cannot add the dummy argument");
        dummy
    }
}

pub fn int(value: i64) -> Expr<Integer> {
    Expr::from(value)
}

/// A whole-symbol designator expression.
pub fn var<T: Category>(symbol: SymbolRef) -> Expr<T> {
    Expr::from(Designator::<T>::from(symbol))
}
