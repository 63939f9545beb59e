use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use varref::diagnostics::UsageWarning;
use varref::expr::{Expr, FunctionRef, SomeExpr};
use varref::fold::{fold, FoldingContext};
use varref::symbol::{AssocEntity, Attr, ObjectEntity};
use varref::types::{CharLength, Character, DynamicType, Integer, TypeCategory};
use varref::variable::*;

use common::{int, var, Fixture};

mod common;

fn folded_len(fixture: &Fixture, designator: Designator<Character>) -> Option<Expr<Integer>> {
    let mut ctx = FoldingContext::new(&fixture.symbols);
    designator
        .len(&fixture.symbols)
        .map(|len| fold(&mut ctx, len))
}

#[test]
fn test_declared_len() {
    let mut fixture = Fixture::new();
    let c8 = fixture.object("c8", ObjectEntity::new(DynamicType::character_of_len(1, 8)));
    let negative = fixture.object(
        "negative",
        ObjectEntity::new(DynamicType::character_of_len(1, -2)),
    );
    let symbols = &fixture.symbols;

    assert_eq!(Designator::<Character>::from(c8).len(symbols), Some(int(8)));
    assert_eq!(DataRef::from(c8).len(symbols), Some(int(8)));
    assert_eq!(BaseObject::from(c8).len(symbols), Some(int(8)));
    assert_eq!(
        Designator::<Character>::from(negative).len(symbols),
        Some(int(0))
    );
}

#[test]
fn test_descriptor_len() {
    let mut fixture = Fixture::new();
    let procedure = fixture.subprogram("f");
    let s = fixture.dummy(
        procedure,
        "s",
        &[],
        DynamicType::character(1, CharLength::Assumed),
    );
    let symbols = &fixture.symbols;

    let len = Designator::<Character>::from(s).len(symbols);
    let inquiry = DescriptorInquiry::new(symbols, s, Field::Len, 0);
    assert_eq!(inquiry.field(), Field::Len);
    assert_eq!(inquiry.base(), &NamedEntity::Symbol(s));
    assert_eq!(len, Some(Expr::from(Designator::<Integer>::from(inquiry))));
}

#[test]
fn test_associate_name_len() {
    let mut fixture = Fixture::new();
    let global = fixture.global();
    let name = fixture.declare(
        global,
        "name",
        &[],
        AssocEntity {
            expr: SomeExpr::from(Expr::<Character>::from("abc")),
            ty: None,
        },
    );
    assert_eq!(
        Designator::<Character>::from(name).len(&fixture.symbols),
        Some(int(3))
    );
}

#[test]
fn test_implied_length_named_constant() {
    let mut fixture = Fixture::new();
    let global = fixture.global();
    let greeting = fixture.declare(
        global,
        "greeting",
        &[Attr::Parameter],
        ObjectEntity::new(DynamicType::character(1, CharLength::Assumed))
            .with_init(Expr::<Character>::from("HELLO")),
    );
    assert_eq!(
        Designator::<Character>::from(greeting).len(&fixture.symbols),
        Some(int(5))
    );
}

#[test]
fn test_scope_invariant_len() {
    let mut fixture = Fixture::new();
    let procedure = fixture.subprogram("f");
    let n = fixture.dummy(procedure, "n", &[Attr::IntentIn], DynamicType::integer(8));
    let m = fixture.dummy(procedure, "m", &[], DynamicType::integer(8));
    let buf = fixture.declare(
        procedure.1,
        "buf",
        &[],
        ObjectEntity::new(DynamicType::character(
            1,
            CharLength::Explicit(var::<Integer>(n)),
        )),
    );
    let other = fixture.declare(
        procedure.1,
        "other",
        &[],
        ObjectEntity::new(DynamicType::character(
            1,
            CharLength::Explicit(var::<Integer>(m)),
        )),
    );
    let symbols = &fixture.symbols;

    assert_eq!(
        Designator::<Character>::from(buf).len(symbols),
        Some(int(0).max(var(n)))
    );
    // `m` can be redefined, and `other` has no descriptor
    assert_that(&Designator::<Character>::from(other).len(symbols)).is_none();
}

#[test]
fn test_substring_len() {
    let mut fixture = Fixture::new();
    let c8 = fixture.object("c8", ObjectEntity::new(DynamicType::character_of_len(1, 8)));

    let tail = Substring::new(DataRef::from(c8), Some(int(3)), None);
    assert_eq!(
        folded_len(&fixture, Designator::from(tail.clone())),
        Some(int(6))
    );
    assert_eq!(tail.upper(&fixture.symbols), Some(int(8)));

    let empty = Substring::new(DataRef::from(c8), Some(int(6)), Some(int(2)));
    assert_eq!(folded_len(&fixture, Designator::from(empty)), Some(int(0)));

    let substring = Substring::new(DataRef::from(c8), None, Some(int(4)));
    let designator = Designator::<Character>::from(substring);
    assert_eq!(
        designator.dynamic_type(&fixture.symbols),
        Some(DynamicType::character_of_len(1, 4))
    );
}

#[test]
fn test_substring_type_reports_overflow() {
    let mut fixture = Fixture::new();
    let c8 = fixture.object("c8", ObjectEntity::new(DynamicType::character_of_len(1, 8)));
    let substring = Substring::new(DataRef::from(c8), None, Some(int(i64::MAX) + int(1)));
    let designator = Designator::<Character>::from(substring);

    let character = DynamicType::intrinsic(TypeCategory::Character, 1);
    assert_eq!(designator.dynamic_type(&fixture.symbols), Some(character.clone()));

    let mut ctx = FoldingContext::new(&fixture.symbols);
    assert_eq!(designator.dynamic_type_in(&mut ctx), Some(character));
    assert_eq!(
        ctx.messages()
            .warnings(UsageWarning::FoldingException)
            .count(),
        1
    );
}

#[test]
fn test_component_len() {
    let mut fixture = Fixture::new();
    let (t, scope) = fixture.derived_type("t");
    let name = fixture.declare(
        scope,
        "name",
        &[],
        ObjectEntity::new(DynamicType::character_of_len(1, 16)),
    );
    let x = fixture.object("x", ObjectEntity::new(DynamicType::derived(t, false)));
    let symbols = &fixture.symbols;

    let component = Component::new(x, name);
    assert_eq!(component.len(symbols), Some(int(16)));
    assert_eq!(NamedEntity::from(component.clone()).len(symbols), Some(int(16)));
    let coindexed = CoarrayRef::new(component, vec![int(1)]);
    assert_eq!(coindexed.len(symbols), Some(int(16)));
}

#[test]
fn test_intrinsic_result_len() {
    let fixture = Fixture::new();
    let symbols = &fixture.symbols;
    let character = DynamicType::character(1, CharLength::Deferred);

    let repeat = ProcedureRef::new(
        SpecificIntrinsic::function("repeat", character.clone()),
        vec![
            Some(SomeExpr::from(Expr::<Character>::from("ab"))),
            Some(SomeExpr::from(int(3))),
        ],
    );
    let mut ctx = FoldingContext::new(symbols);
    let len = repeat.len(symbols).map(|len| fold(&mut ctx, len));
    assert_eq!(len, Some(int(6)));

    let adjustl = ProcedureRef::new(
        SpecificIntrinsic::function("adjustl", character.clone()).elemental(),
        vec![Some(SomeExpr::from(Expr::<Character>::from("  x")))],
    );
    assert_eq!(adjustl.len(symbols), Some(int(3)));
    assert_eq!(adjustl.rank(symbols), 0);

    let call = Expr::<Character>::from(FunctionRef::new(adjustl));
    assert_eq!(call.len(symbols), Some(int(3)));

    let trim = ProcedureRef::new(
        SpecificIntrinsic::function("trim", character),
        vec![Some(SomeExpr::from(Expr::<Character>::from("x ")))],
    );
    assert_that(&trim.len(symbols)).is_none();
}
