use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use varref::diagnostics::{LanguageFeatures, UsageWarning};
use varref::expr::{Constant, Expr};
use varref::fold::{fold, FoldingContext};
use varref::symbol::{ArraySpec, Attr, ObjectEntity};
use varref::types::{Character, DynamicType};
use varref::variable::*;

use common::{int, Fixture};

mod common;

fn hello(lower: Option<i64>, upper: Option<i64>) -> Substring {
    Substring::new(
        StaticDataObject::from("HELLO"),
        lower.map(int),
        upper.map(int),
    )
}

#[test]
fn test_fold_hello() {
    let fixture = Fixture::new();
    let mut ctx = FoldingContext::new(&fixture.symbols);
    let mut substring = hello(Some(2), Some(4));
    assert_eq!(substring.fold(&mut ctx), Some(Constant::from("ELL")));
    assert_that(&ctx.messages().is_empty()).is_true();
}

#[test]
fn test_fold_empty_range() {
    let fixture = Fixture::new();
    let mut ctx = FoldingContext::new(&fixture.symbols);
    let mut substring = hello(Some(5), Some(2));
    let folded = substring.fold(&mut ctx).expect("An empty substring is constant");
    assert_eq!(folded.len(), 0);
    assert_eq!(substring.lower(), int(1));
    assert_eq!(substring.upper(&fixture.symbols), Some(int(0)));
    let len = substring.len(&fixture.symbols).map(|len| fold(&mut ctx, len));
    assert_eq!(len, Some(int(0)));
}

#[test]
fn test_fold_out_of_range() {
    let fixture = Fixture::new();
    let mut ctx = FoldingContext::new(&fixture.symbols);
    let mut substring = hello(Some(-3), Some(10));
    assert_eq!(substring.fold(&mut ctx), None);
    assert_eq!(substring.lower(), int(1));
    assert_eq!(substring.upper(&fixture.symbols), Some(int(5)));

    let messages = ctx.into_messages();
    let warnings: Vec<_> = messages
        .warnings(UsageWarning::Bounds)
        .map(|warning| warning.message())
        .collect();
    assert_eq!(
        warnings,
        vec![
            "Lower bound (-3) on substring is less than one",
            "Upper bound (10) on substring is greater than character length (5)",
        ]
    );
}

#[test]
fn test_fold_only_lower_out_of_range() {
    let fixture = Fixture::new();
    let mut ctx = FoldingContext::new(&fixture.symbols);
    let mut substring = hello(Some(-3), None);
    assert_eq!(substring.fold(&mut ctx), None);
    assert_eq!(ctx.messages().warnings(UsageWarning::Bounds).count(), 1);
    assert_eq!(substring.lower(), int(1));
    assert_eq!(substring.upper(&fixture.symbols), Some(int(5)));

    // the corrected bounds fold on the next pass
    assert_eq!(substring.fold(&mut ctx), Some(Constant::from("HELLO")));
    assert_eq!(ctx.messages().warnings(UsageWarning::Bounds).count(), 1);
}

#[test]
fn test_fold_warnings_disabled() {
    let fixture = Fixture::new();
    let features: LanguageFeatures =
        serde_json::from_str(r#"{"disabled_warnings": ["bounds"]}"#).unwrap();
    let mut ctx = FoldingContext::with_features(&fixture.symbols, features);
    let mut substring = hello(Some(-3), Some(10));
    assert_eq!(substring.fold(&mut ctx), None);
    assert_that(&ctx.messages().is_empty()).is_true();
    // the bounds are clamped anyway
    assert_eq!(substring.lower(), int(1));
    assert_eq!(substring.upper(&fixture.symbols), Some(int(5)));
}

#[test]
fn test_fold_is_idempotent() {
    let fixture = Fixture::new();
    let mut ctx = FoldingContext::new(&fixture.symbols);
    let mut substring = hello(Some(2), None);
    let first = substring.fold(&mut ctx);
    let after_first = substring.clone();
    let second = substring.fold(&mut ctx);
    assert_eq!(first, Some(Constant::from("ELLO")));
    assert_eq!(first, second);
    assert_eq!(substring, after_first);
}

#[test]
fn test_fold_named_constant_parent() {
    let mut fixture = Fixture::new();
    let global = fixture.global();
    let greeting = fixture.declare(
        global,
        "greeting",
        &[Attr::Parameter],
        ObjectEntity::new(DynamicType::character_of_len(1, 5))
            .with_init(Expr::<Character>::from("HELLO")),
    );
    let mut ctx = FoldingContext::new(&fixture.symbols);

    let substring = Substring::new(DataRef::from(greeting), Some(int(2)), Some(int(4)));
    let expr = Expr::from(Designator::<Character>::from(substring));
    assert_eq!(fold(&mut ctx, expr), Expr::from("ELL"));

    let substring = Substring::new(DataRef::from(greeting), Some(int(4)), None);
    let expr = Expr::from(Designator::<Character>::from(substring)).concat(Expr::from("!"));
    assert_eq!(fold(&mut ctx, expr), Expr::from("LO!"));
    assert_that(&ctx.messages().is_empty()).is_true();
}

#[test]
fn test_fold_variable_parent() {
    let mut fixture = Fixture::new();
    let name = fixture.object("name", ObjectEntity::new(DynamicType::character_of_len(1, 5)));
    let mut ctx = FoldingContext::new(&fixture.symbols);

    let substring = Substring::new(DataRef::from(name), Some(int(1) + int(1)), Some(int(9)));
    let expr = Expr::from(Designator::<Character>::from(substring));
    let folded = fold(&mut ctx, expr);

    // only the bounds are folded, the length of a variable is not checked
    let expected = Substring::new(DataRef::from(name), Some(int(2)), Some(int(9)));
    assert_eq!(folded, Expr::from(Designator::<Character>::from(expected)));
    assert_eq!(ctx.messages().warnings(UsageWarning::Bounds).count(), 0);
}

#[test]
fn test_fold_parent_subscripts_once() {
    let mut fixture = Fixture::new();
    let a = fixture.object(
        "a",
        ObjectEntity::new(DynamicType::character_of_len(1, 4)).with_shape(ArraySpec::Explicit(1)),
    );
    let mut ctx = FoldingContext::new(&fixture.symbols);

    // a(huge+1)(1:2)
    let element = ArrayRef::new(a, vec![Subscript::from(int(i64::MAX) + int(1))]);
    let substring = Substring::new(DataRef::from(element), Some(int(1)), Some(int(2)));
    let expr = Expr::from(Designator::<Character>::from(substring.clone()));
    assert_eq!(fold(&mut ctx, expr), Expr::from(Designator::<Character>::from(substring)));

    let messages = ctx.messages();
    assert_eq!(messages.warnings(UsageWarning::FoldingException).count(), 1);
    assert_eq!(messages.warnings(UsageWarning::Bounds).count(), 0);
}
