use crate::expr::Expr;
use crate::symbol::{Attr, SymbolRef, SymbolTable};
use crate::types::{Category, Integer};
use crate::variable::{ArrayRef, DataRef, DesignatorKind, NamedEntity, Parent, Subscript};

/// The value of a constant integer expression.
pub fn to_int64(expr: &Expr<Integer>) -> Option<i64> {
    match expr {
        Expr::Constant(constant) => Some(constant.to_i64()),
        Expr::Parentheses(inner) => to_int64(inner),
        _ => None,
    }
}

/// Whether the expression is a constant value, not just something that folds to one.
pub fn is_actually_constant<T: Category>(expr: &Expr<T>) -> bool {
    match expr {
        Expr::Constant(_) => true,
        Expr::Parentheses(inner) => is_actually_constant(inner),
        _ => false,
    }
}

/// Whether the value of the expression cannot change while the enclosing scope executes.
///
/// Constants, named constants, inquiries and non-optional `INTENT(IN)` dummy arguments are
/// invariant, as is any operation on invariant operands. Function results and coindexed
/// references are never invariant.
pub fn is_scope_invariant<T: Category>(symbols: &SymbolTable, expr: &Expr<T>) -> bool {
    match expr {
        Expr::Constant(_) => true,
        Expr::Designator(designator) => is_invariant_designator(symbols, designator.kind()),
        Expr::FunctionRef(_) => false,
        Expr::Parentheses(inner) | Expr::Negate(inner) => is_scope_invariant(symbols, inner),
        Expr::Binary(_, left, right) => {
            is_scope_invariant(symbols, left) && is_scope_invariant(symbols, right)
        }
    }
}

fn is_invariant_symbol(symbols: &SymbolTable, symbol: SymbolRef) -> bool {
    symbols.is_named_constant(symbol)
        || (symbols.is_dummy(symbol)
            && symbols.has_attr(symbol, Attr::IntentIn)
            && !symbols.has_attr(symbol, Attr::Optional))
}

fn is_invariant_bound(symbols: &SymbolTable, bound: Option<&Expr<Integer>>) -> bool {
    bound.map_or(true, |bound| is_scope_invariant(symbols, bound))
}

fn is_invariant_named(symbols: &SymbolTable, entity: &NamedEntity) -> bool {
    match entity {
        NamedEntity::Symbol(symbol) => is_invariant_symbol(symbols, *symbol),
        NamedEntity::Component(component) => is_invariant_data_ref(symbols, component.base()),
    }
}

fn is_invariant_subscript(symbols: &SymbolTable, subscript: &Subscript) -> bool {
    match subscript {
        Subscript::Scalar(expr) => is_scope_invariant(symbols, expr),
        Subscript::Triplet(triplet) => {
            is_invariant_bound(symbols, triplet.lower())
                && is_invariant_bound(symbols, triplet.upper())
                && is_scope_invariant(symbols, triplet.stride())
        }
    }
}

fn is_invariant_array(symbols: &SymbolTable, array: &ArrayRef) -> bool {
    is_invariant_named(symbols, array.base())
        && array
            .subscripts()
            .iter()
            .all(|subscript| is_invariant_subscript(symbols, subscript))
}

fn is_invariant_data_ref(symbols: &SymbolTable, data_ref: &DataRef) -> bool {
    match data_ref {
        DataRef::Symbol(symbol) => is_invariant_symbol(symbols, *symbol),
        DataRef::Component(component) => is_invariant_data_ref(symbols, component.base()),
        DataRef::ArrayRef(array) => is_invariant_array(symbols, array),
        DataRef::CoarrayRef(_) => false,
    }
}

fn is_invariant_designator(symbols: &SymbolTable, kind: &DesignatorKind) -> bool {
    match kind {
        DesignatorKind::Symbol(symbol) => is_invariant_symbol(symbols, *symbol),
        DesignatorKind::Component(component) => is_invariant_data_ref(symbols, component.base()),
        DesignatorKind::ArrayRef(array) => is_invariant_array(symbols, array),
        DesignatorKind::CoarrayRef(_) => false,
        DesignatorKind::Substring(substring) => {
            let parent = match substring.parent() {
                Parent::DataRef(data_ref) => is_invariant_data_ref(symbols, data_ref),
                Parent::StaticData(_) => true,
            };
            parent
                && is_invariant_bound(symbols, substring.lower.as_ref())
                && is_invariant_bound(symbols, substring.upper.as_ref())
        }
        DesignatorKind::ComplexPart(part) => is_invariant_data_ref(symbols, part.complex()),
        DesignatorKind::DescriptorInquiry(_) | DesignatorKind::TypeParamInquiry(_) => true,
    }
}
