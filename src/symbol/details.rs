use crate::expr::SomeExpr;
use crate::symbol::SymbolRef;
use crate::types::DynamicType;

/// Declared shape of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySpec {
    /// Explicit shape with constant bounds; rank 0 is a scalar.
    Explicit(usize),
    /// Explicit shape with bounds that are not constant.
    Automatic(usize),
    /// `(:, :)` on a dummy argument.
    AssumedShape(usize),
    /// `(:, :)` on an allocatable or a pointer.
    Deferred(usize),
    /// `(n, *)`
    AssumedSize(usize),
    /// `(..)`
    AssumedRank,
}

impl Default for ArraySpec {
    fn default() -> Self {
        ArraySpec::Explicit(0)
    }
}

impl ArraySpec {
    /// The static rank, 0 for an assumed-rank entity.
    pub fn rank(&self) -> usize {
        match *self {
            ArraySpec::Explicit(rank)
            | ArraySpec::Automatic(rank)
            | ArraySpec::AssumedShape(rank)
            | ArraySpec::Deferred(rank)
            | ArraySpec::AssumedSize(rank) => rank,
            ArraySpec::AssumedRank => 0,
        }
    }

    pub fn is_assumed_rank(&self) -> bool {
        matches!(self, ArraySpec::AssumedRank)
    }

    /// Whether the bounds are only known at runtime.
    pub fn requires_descriptor(&self) -> bool {
        match self {
            ArraySpec::Explicit(_) | ArraySpec::AssumedSize(_) => false,
            ArraySpec::Automatic(_)
            | ArraySpec::AssumedShape(_)
            | ArraySpec::Deferred(_)
            | ArraySpec::AssumedRank => true,
        }
    }
}

/// A data object: variable, named constant or dummy argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectEntity {
    pub ty: Option<DynamicType>,
    pub shape: ArraySpec,
    pub corank: usize,
    pub init: Option<SomeExpr>,
    pub dummy: bool,
}

impl ObjectEntity {
    pub fn new(ty: DynamicType) -> ObjectEntity {
        ObjectEntity {
            ty: Some(ty),
            ..Default::default()
        }
    }

    pub fn with_shape(mut self, shape: ArraySpec) -> ObjectEntity {
        self.shape = shape;
        self
    }

    pub fn with_corank(mut self, corank: usize) -> ObjectEntity {
        self.corank = corank;
        self
    }

    pub fn with_init(mut self, init: impl Into<SomeExpr>) -> ObjectEntity {
        self.init = Some(init.into());
        self
    }

    pub fn dummy(mut self) -> ObjectEntity {
        self.dummy = true;
        self
    }
}

/// A construct entity of an ASSOCIATE or SELECT TYPE construct.
#[derive(Debug, Clone, PartialEq)]
pub struct AssocEntity {
    pub expr: SomeExpr,
    pub ty: Option<DynamicType>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subprogram {
    pub dummy_args: Vec<SymbolRef>,
    pub result: Option<SymbolRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeParamAttr {
    Kind,
    Len,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub attr: TypeParamAttr,
    pub ty: DynamicType,
}

/// A procedure pointer or a dummy procedure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcEntity {
    pub interface: Option<SymbolRef>,
    pub ty: Option<DynamicType>,
    pub dummy: bool,
}

/// What a symbol is.
#[derive(Debug, Clone, PartialEq)]
pub enum Details {
    Object(ObjectEntity),
    Assoc(AssocEntity),
    Subprogram(Subprogram),
    /// Host association of the symbol in an enclosing scope.
    HostAssoc(SymbolRef),
    /// Use association of a module symbol.
    UseAssoc(SymbolRef),
    TypeParam(TypeParam),
    DerivedType,
    ProcEntity(ProcEntity),
}

impl From<ObjectEntity> for Details {
    fn from(object: ObjectEntity) -> Self {
        Details::Object(object)
    }
}

impl From<AssocEntity> for Details {
    fn from(assoc: AssocEntity) -> Self {
        Details::Assoc(assoc)
    }
}

impl From<Subprogram> for Details {
    fn from(subprogram: Subprogram) -> Self {
        Details::Subprogram(subprogram)
    }
}

impl From<TypeParam> for Details {
    fn from(param: TypeParam) -> Self {
        Details::TypeParam(param)
    }
}

impl From<ProcEntity> for Details {
    fn from(proc: ProcEntity) -> Self {
        Details::ProcEntity(proc)
    }
}
