//! # varref
//!
//! Variable references of a Fortran front end: symbols, components, array and coarray
//! references, substrings, complex parts and descriptor inquiries, tagged with their static type
//! category. Every reference knows its rank, corank and (for characters) its length, can be
//! folded against a [`symbol::SymbolTable`] and printed back in Fortran form.
//!
//! ```
//! use varref::expr::Expr;
//! use varref::fold::FoldingContext;
//! use varref::symbol::SymbolTable;
//! use varref::variable::{StaticDataObject, Substring};
//!
//! let symbols = SymbolTable::new();
//! let mut ctx = FoldingContext::new(&symbols);
//! let mut substring = Substring::new(
//!     StaticDataObject::from("HELLO"),
//!     Some(Expr::from(2)),
//!     Some(Expr::from(4)),
//! );
//! let folded = substring.fold(&mut ctx).unwrap();
//! assert_eq!(folded.value(), "ELL");
//! ```

#[macro_use]
extern crate log;

pub mod expr;
pub mod fold;
pub mod fortran;
pub mod symbol;
pub mod types;
pub mod variable;

pub use varref_diagnostics as diagnostics;
