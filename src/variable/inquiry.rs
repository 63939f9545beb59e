use crate::symbol::{SymbolRef, SymbolTable};
use crate::variable::{Equivalent, NamedEntity};

/// The descriptor field read by a [`DescriptorInquiry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LowerBound,
    Extent,
    Stride,
    Rank,
    Len,
}

impl Field {
    /// Whether the field is per dimension.
    pub fn has_dimension(self) -> bool {
        !matches!(self, Field::Rank | Field::Len)
    }
}

/// A query of the runtime descriptor of an entity whose bounds or length are not known at
/// compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorInquiry {
    pub(crate) base: NamedEntity,
    field: Field,
    dimension: usize,
}

impl DescriptorInquiry {
    /// Make a new inquiry, `dimension` counts from 0 and must be 0 for `Rank` and `Len`.
    ///
    /// Panics if the entity has no descriptor, or if the dimension is out of the rank of the
    /// entity (any dimension is accepted for an assumed-rank entity).
    pub fn new(
        symbols: &SymbolTable,
        base: impl Into<NamedEntity>,
        field: Field,
        dimension: usize,
    ) -> DescriptorInquiry {
        let base = base.into();
        let last = base.last_symbol();
        assert!(
            symbols.requires_descriptor(last),
            "`{}` has no runtime descriptor",
            symbols.name(last)
        );
        if field.has_dimension() {
            assert!(
                dimension < symbols.rank(last) || symbols.is_assumed_rank(last),
                "dimension {} out of the rank of `{}`",
                dimension,
                symbols.name(last)
            );
        } else {
            assert_eq!(dimension, 0, "{:?} inquiry with a dimension", field);
        }
        DescriptorInquiry {
            base,
            field,
            dimension,
        }
    }

    pub fn base(&self) -> &NamedEntity {
        &self.base
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.base.first_symbol()
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.base.last_symbol()
    }
}

impl Equivalent for DescriptorInquiry {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.field == other.field
            && self.dimension == other.dimension
            && self.base.equivalent(&other.base, symbols)
    }
}

/// The value of a type parameter, `x%k` or, inside the type definition, just `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamInquiry {
    pub(crate) base: Option<NamedEntity>,
    parameter: SymbolRef,
}

impl TypeParamInquiry {
    pub fn new(base: Option<NamedEntity>, parameter: SymbolRef) -> TypeParamInquiry {
        TypeParamInquiry { base, parameter }
    }

    pub fn base(&self) -> Option<&NamedEntity> {
        self.base.as_ref()
    }

    pub fn parameter(&self) -> SymbolRef {
        self.parameter
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.base
            .as_ref()
            .map_or(self.parameter, NamedEntity::first_symbol)
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.parameter
    }
}

impl Equivalent for TypeParamInquiry {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.parameter == other.parameter && self.base.equivalent(&other.base, symbols)
    }
}
