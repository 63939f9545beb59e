use crate::expr::Expr;
use crate::fold::{is_scope_invariant, to_int64};
use crate::symbol::{Attr, Details, SymbolRef, SymbolTable};
use crate::types::SubscriptInteger;
use crate::variable::{DescriptorInquiry, Designator, Field, NamedEntity};

/// The length of a character entity, if it can be expressed here.
///
/// An absent result does not mean that the length is unknown at runtime, only that there is no
/// expression for it in this scope.
pub(crate) fn symbol_len(
    symbols: &SymbolTable,
    symbol: SymbolRef,
) -> Option<Expr<SubscriptInteger>> {
    let ultimate = symbols.ultimate(symbol);
    if let Details::Assoc(assoc) = symbols[ultimate].details() {
        if let Some(expr) = assoc.expr.as_character() {
            return expr.len(symbols);
        }
    }
    let in_derived_type = symbols.owner(ultimate).is_derived_type();
    if let Some(ty) = symbols.dynamic_type(ultimate) {
        let mut len = ty.char_length().cloned();
        if len.is_none() && symbols.has_attr(ultimate, Attr::Parameter) {
            // the initializer of an implied-length named constant has the length
            len = symbols
                .init(ultimate)
                .and_then(|init| init.as_character())
                .and_then(|init| init.len(symbols));
        }
        if let Some(len) = len {
            if let Some(value) = to_int64(&len) {
                return Some(Expr::from(value.max(0)));
            }
            if in_derived_type || is_scope_invariant(symbols, &len) {
                return Some(Expr::<SubscriptInteger>::from(0).max(len));
            }
        }
    }
    if symbols.requires_descriptor(ultimate) && !in_derived_type {
        let inquiry = DescriptorInquiry::new(symbols, NamedEntity::Symbol(symbol), Field::Len, 0);
        return Some(Expr::from(Designator::<SubscriptInteger>::from(inquiry)));
    }
    None
}
