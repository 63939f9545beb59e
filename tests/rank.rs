use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use varref::symbol::{ArraySpec, Attr, ObjectEntity, ScopeRef, SymbolRef};
use varref::types::{DynamicType, Integer, Real};
use varref::variable::*;

use common::{int, var, Fixture};

mod common;

/// `type t; real :: c; real :: b(10); real, allocatable :: p(:); end type`
struct Model {
    fixture: Fixture,
    t: SymbolRef,
    c: SymbolRef,
    b: SymbolRef,
    p: SymbolRef,
}

impl Model {
    fn new() -> Model {
        let mut fixture = Fixture::new();
        let (t, scope) = fixture.derived_type("t");
        let c = component(&mut fixture, scope, "c", &[], ArraySpec::Explicit(0));
        let b = component(&mut fixture, scope, "b", &[], ArraySpec::Explicit(1));
        let p = component(
            &mut fixture,
            scope,
            "p",
            &[Attr::Allocatable],
            ArraySpec::Deferred(1),
        );
        Model {
            fixture,
            t,
            c,
            b,
            p,
        }
    }

    fn object(&mut self, name: &str, shape: ArraySpec, corank: usize) -> SymbolRef {
        let ty = DynamicType::derived(self.t, false);
        self.fixture.object(
            name,
            ObjectEntity::new(ty).with_shape(shape).with_corank(corank),
        )
    }
}

fn component(
    fixture: &mut Fixture,
    scope: ScopeRef,
    name: &str,
    attrs: &[Attr],
    shape: ArraySpec,
) -> SymbolRef {
    let object = ObjectEntity::new(DynamicType::real(4)).with_shape(shape);
    fixture.declare(scope, name, attrs, object)
}

fn section() -> Subscript {
    Subscript::from(Triplet::default())
}

#[test]
fn test_array_ref_rank_is_sum_of_subscripts() {
    let mut fixture = Fixture::new();
    let x = fixture.object(
        "x",
        ObjectEntity::new(DynamicType::real(4)).with_shape(ArraySpec::Explicit(3)),
    );
    let v = fixture.object(
        "v",
        ObjectEntity::new(DynamicType::integer(8)).with_shape(ArraySpec::Explicit(1)),
    );
    let symbols = &fixture.symbols;

    let indices = vec![Subscript::from(1), Subscript::from(2), Subscript::from(3)];
    let element = ArrayRef::new(x, indices);
    assert_that(&element.rank(symbols)).is_equal_to(0);

    let slice = ArrayRef::new(x, vec![Subscript::from(1), section(), section()]);
    assert_that(&slice.rank(symbols)).is_equal_to(2);

    let indices = vec![Subscript::from(var::<Integer>(v)), section(), Subscript::from(1)];
    let vector = ArrayRef::new(x, indices);
    assert_that(&vector.rank(symbols)).is_equal_to(2);
    assert_eq!(DataRef::from(vector).rank(symbols), 2);

    assert_eq!(symbols.rank(x), 3);
    assert_eq!(Designator::<Real>::from(x).rank(symbols), 3);
}

#[test]
fn test_array_ref_rank_falls_back_to_component_base() {
    let mut model = Model::new();
    let arr = model.object("arr", ArraySpec::Explicit(1), 0);
    let symbols = &model.fixture.symbols;

    // arr(:)%b(1)
    let base = Component::new(ArrayRef::new(arr, vec![section()]), model.b);
    let element = ArrayRef::new(base, vec![Subscript::from(1)]);
    assert_eq!(element.rank(symbols), 1);

    // arr(2)%b(1)
    let base = Component::new(ArrayRef::new(arr, vec![Subscript::from(2)]), model.b);
    let element = ArrayRef::new(base, vec![Subscript::from(1)]);
    assert_eq!(element.rank(symbols), 0);
}

#[test]
fn test_component_rank() {
    let mut model = Model::new();
    let arr = model.object("arr", ArraySpec::Explicit(1), 0);
    let symbols = &model.fixture.symbols;

    assert_eq!(Component::new(arr, model.c).rank(symbols), 1);
    assert_eq!(Component::new(arr, model.b).rank(symbols), 1);
    let scalar_base = Component::new(ArrayRef::new(arr, vec![Subscript::from(int(1))]), model.c);
    assert_eq!(scalar_base.rank(symbols), 0);
    assert_eq!(NamedEntity::from(scalar_base).rank(symbols), 0);
}

#[test]
fn test_coarray_corank() {
    let mut fixture = Fixture::new();
    let co = fixture.object(
        "co",
        ObjectEntity::new(DynamicType::real(4))
            .with_shape(ArraySpec::Explicit(1))
            .with_corank(2),
    );
    let v = fixture.object(
        "v",
        ObjectEntity::new(DynamicType::integer(8)).with_shape(ArraySpec::Explicit(1)),
    );
    let symbols = &fixture.symbols;

    let slice = ArrayRef::new(co, vec![section()]);
    assert_eq!(slice.corank(symbols), 2);
    let coindexed = CoarrayRef::new(slice, vec![int(1), int(2)]);
    assert_eq!(coindexed.corank(symbols), 2);
    assert_eq!(coindexed.rank(symbols), 1);

    let vector = ArrayRef::new(co, vec![Subscript::from(var::<Integer>(v))]);
    assert_eq!(vector.corank(symbols), 0);
    let coindexed = CoarrayRef::new(vector, vec![int(1), int(2)]);
    assert_eq!(coindexed.corank(symbols), 0);
    assert_eq!(DataRef::from(coindexed).corank(symbols), 0);
}

#[test]
fn test_component_corank() {
    let mut model = Model::new();
    let ca = model.object("ca", ArraySpec::Explicit(0), 2);
    let symbols = &model.fixture.symbols;

    assert_eq!(Component::new(ca, model.c).corank(symbols), 2);
    assert_eq!(Component::new(ca, model.b).corank(symbols), 2);
    // an allocatable component of a coarray is not a coarray
    assert_eq!(Component::new(ca, model.p).corank(symbols), 0);
}

#[test]
fn test_designator_kinds() {
    let mut fixture = Fixture::new();
    let z = fixture.object(
        "z",
        ObjectEntity::new(DynamicType::complex(8)).with_shape(ArraySpec::Explicit(2)),
    );
    let symbols = &fixture.symbols;

    let part = ComplexPart::new(ArrayRef::new(z, vec![section(), Subscript::from(1)]), Part::Im);
    assert_eq!(part.rank(symbols), 1);
    assert_eq!(part.first_symbol(), z);
    let designator = Designator::<Real>::from(part);
    assert_eq!(designator.rank(symbols), 1);
    assert_eq!(designator.corank(symbols), 0);
    assert_eq!(designator.base_object(), BaseObject::Symbol(z));
    assert_eq!(designator.last_symbol(), Some(z));
    assert_eq!(designator.dynamic_type(symbols), Some(DynamicType::real(8)));

    let literal = Substring::new(StaticDataObject::from("HELLO"), None, None);
    assert_eq!(literal.rank(symbols), 0);
    assert_eq!(literal.corank(symbols), 0);
    assert_eq!(literal.last_symbol(), None);
    assert_eq!(
        literal.base_object(),
        BaseObject::StaticData(StaticDataObject::from("HELLO"))
    );
}
