//! Variable references: every way of naming (part of) a data object.
//!
//! The kinds are layered, leaves first: [`Triplet`] and [`Subscript`] describe indices,
//! [`BaseObject`], [`NamedEntity`] and [`Component`] name the object, [`ArrayRef`] and
//! [`CoarrayRef`] subscript it, [`DataRef`], [`Substring`], [`ComplexPart`] and the two inquiries
//! compose the others, and [`Designator`] tags any of them with its static category.
//!
//! Every kind answers `rank()`, `corank()` and (when it makes sense) `len()`, always by asking
//! the [`SymbolTable`] the facts about the symbols it references.

mod array_ref;
mod base;
mod coarray_ref;
mod complex_part;
mod component;
mod data_ref;
mod designator;
mod inquiry;
mod len;
mod named;
mod procedure;
mod subscript;
mod substring;
mod triplet;

pub use array_ref::ArrayRef;
pub use base::{BaseObject, StaticDataObject};
pub use coarray_ref::CoarrayRef;
pub use complex_part::{ComplexPart, Part};
pub use component::Component;
pub use data_ref::DataRef;
pub use designator::{Designator, DesignatorKind};
pub use inquiry::{DescriptorInquiry, Field, TypeParamInquiry};
pub use named::NamedEntity;
pub use procedure::{ProcedureDesignator, ProcedureRef, SpecificIntrinsic};
pub use subscript::Subscript;
pub use substring::{Parent, Substring};
pub use triplet::Triplet;

pub(crate) use len::symbol_len;

use itertools::{EitherOrBoth, Itertools};

use crate::symbol::{SymbolRef, SymbolTable};

/// Structural equality of two references.
///
/// This is the comparison used when checking procedure characteristics: two values are
/// equivalent when all their parts are, where the symbols in "variable position" are compared
/// with [`same_symbol`]. The derived `PartialEq` is the strict identity comparison instead.
pub trait Equivalent {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool;
}

/// Whether two symbols denote the same entity.
///
/// Distinct dummy arguments occupying the same position of their procedures are the same
/// entity, so that two copies of the same interface declared with different dummy names
/// compare equal.
pub fn same_symbol(symbols: &SymbolTable, x: SymbolRef, y: SymbolRef) -> bool {
    if x == y {
        return true;
    }
    match (symbols.dummy_position(x), symbols.dummy_position(y)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl<T: Equivalent> Equivalent for Option<T> {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.equivalent(y, symbols),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Equivalent> Equivalent for Box<T> {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.as_ref().equivalent(other.as_ref(), symbols)
    }
}

impl<T: Equivalent> Equivalent for Vec<T> {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.iter().zip_longest(other).all(|pair| match pair {
            EitherOrBoth::Both(x, y) => x.equivalent(y, symbols),
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => false,
        })
    }
}
