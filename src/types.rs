//! Type categories and the dynamic (declared) type of an entity.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, SomeExpr};
use crate::symbol::SymbolRef;

/// The intrinsic type categories plus derived types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    Integer,
    Real,
    Complex,
    Character,
    Logical,
    Derived,
}

impl TypeCategory {
    pub fn name(self) -> &'static str {
        match self {
            TypeCategory::Integer => "INTEGER",
            TypeCategory::Real => "REAL",
            TypeCategory::Complex => "COMPLEX",
            TypeCategory::Character => "CHARACTER",
            TypeCategory::Logical => "LOGICAL",
            TypeCategory::Derived => "TYPE",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static tag of an expression or designator type.
///
/// Every category is a zero-sized marker type, so that `Expr<Character>` and `Expr<Integer>` are
/// different Rust types and a non-character `LEN` cannot even be written.
pub trait Category: fmt::Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static {
    const CATEGORY: TypeCategory;

    /// Value of a scalar constant of this category.
    type Scalar: fmt::Debug + Clone + PartialEq + Send + Sync;

    fn into_some(expr: Expr<Self>) -> SomeExpr;

    fn from_some(expr: &SomeExpr) -> Option<&Expr<Self>>;
}

macro_rules! category {
    ($name:ident, $scalar:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Category for $name {
            const CATEGORY: TypeCategory = TypeCategory::$name;

            type Scalar = $scalar;

            fn into_some(expr: Expr<Self>) -> SomeExpr {
                SomeExpr::$name(expr)
            }

            fn from_some(expr: &SomeExpr) -> Option<&Expr<Self>> {
                match expr {
                    SomeExpr::$name(expr) => Some(expr),
                    _ => None,
                }
            }
        }
    };
}

category!(Integer, i64);
category!(Real, f64);
category!(Complex, (f64, f64));
category!(Character, String);
category!(Logical, bool);
// Derived-type values are never folded to constants here.
category!(Derived, Infallible);

/// The integer type used for subscripts, bounds and lengths.
pub type SubscriptInteger = Integer;

/// Categories with the arithmetic operators.
pub trait Numeric: Category {}

impl Numeric for Integer {}
impl Numeric for Real {}
impl Numeric for Complex {}

/// The declared length of a character entity.
#[derive(Debug, Clone, PartialEq)]
pub enum CharLength {
    /// `LEN=expr`, possibly not constant.
    Explicit(Expr<SubscriptInteger>),
    /// `LEN=*`
    Assumed,
    /// `LEN=:`
    Deferred,
}

/// Type of an entity as declared, or as derived from an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicType {
    pub category: TypeCategory,
    pub kind: u8,
    pub char_length: Option<CharLength>,
    pub derived: Option<SymbolRef>,
    pub polymorphic: bool,
}

impl DynamicType {
    pub fn intrinsic(category: TypeCategory, kind: u8) -> DynamicType {
        DynamicType {
            category,
            kind,
            char_length: None,
            derived: None,
            polymorphic: false,
        }
    }

    pub fn integer(kind: u8) -> DynamicType {
        Self::intrinsic(TypeCategory::Integer, kind)
    }

    pub fn real(kind: u8) -> DynamicType {
        Self::intrinsic(TypeCategory::Real, kind)
    }

    pub fn complex(kind: u8) -> DynamicType {
        Self::intrinsic(TypeCategory::Complex, kind)
    }

    pub fn logical(kind: u8) -> DynamicType {
        Self::intrinsic(TypeCategory::Logical, kind)
    }

    pub fn character(kind: u8, length: CharLength) -> DynamicType {
        DynamicType {
            char_length: Some(length),
            ..Self::intrinsic(TypeCategory::Character, kind)
        }
    }

    /// A character type with a constant length.
    pub fn character_of_len(kind: u8, length: i64) -> DynamicType {
        Self::character(kind, CharLength::Explicit(Expr::from(length)))
    }

    pub fn derived(type_symbol: SymbolRef, polymorphic: bool) -> DynamicType {
        DynamicType {
            derived: Some(type_symbol),
            polymorphic,
            ..Self::intrinsic(TypeCategory::Derived, 0)
        }
    }

    /// The explicit length of a character type, if any.
    pub fn char_length(&self) -> Option<&Expr<SubscriptInteger>> {
        match &self.char_length {
            Some(CharLength::Explicit(length)) => Some(length),
            _ => None,
        }
    }

    pub fn has_assumed_or_deferred_length(&self) -> bool {
        matches!(
            self.char_length,
            Some(CharLength::Assumed) | Some(CharLength::Deferred)
        )
    }

    /// Whether an entity of this type needs a runtime descriptor regardless of its shape.
    pub fn requires_descriptor(&self) -> bool {
        self.polymorphic || self.has_assumed_or_deferred_length()
    }
}
