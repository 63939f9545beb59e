use crate::diagnostics::UsageWarning;
use crate::expr::{BinaryOperator, Constant, Expr};
use crate::fold::{fold, Fold, FoldingContext};
use crate::symbol::SymbolRef;
use crate::types::*;
use crate::variable::{Designator, DesignatorKind};

/// The folding rules of the scalar values of a category.
///
/// Only the operations with a constant result are listed here; the structure of the expression
/// is handled by [`fold`].
pub trait FoldScalar: Category {
    /// Compute `x op y`, `None` when the operation cannot be folded.
    fn apply(
        _ctx: &mut FoldingContext<'_>,
        _op: BinaryOperator,
        _x: &Self::Scalar,
        _y: &Self::Scalar,
    ) -> Option<Self::Scalar> {
        None
    }

    fn negate(_ctx: &mut FoldingContext<'_>, _x: &Self::Scalar) -> Option<Self::Scalar> {
        None
    }

    /// Fold the subscripts of a designator and replace a named constant with its value.
    fn fold_designator(
        ctx: &mut FoldingContext<'_>,
        mut designator: Designator<Self>,
    ) -> Expr<Self> {
        designator.fold_in_place(ctx);
        replace_named_constant(ctx, designator)
    }
}

fn replace_named_constant<T: FoldScalar>(
    ctx: &mut FoldingContext<'_>,
    designator: Designator<T>,
) -> Expr<T> {
    match designator.unwrap_symbol().and_then(|s| named_constant(ctx, s)) {
        Some(constant) => Expr::Constant(constant),
        None => Expr::Designator(designator),
    }
}

/// The folded value of a scalar named constant of category `T`.
pub(crate) fn named_constant<T: FoldScalar>(
    ctx: &mut FoldingContext<'_>,
    symbol: SymbolRef,
) -> Option<Constant<T>> {
    let symbols = ctx.symbols();
    if !symbols.is_named_constant(symbol) {
        return None;
    }
    let init = T::from_some(symbols.init(symbol)?)?.clone();
    match fold(ctx, init) {
        Expr::Constant(constant) => {
            trace!("Replaced `{}` with its value", symbols.name(symbol));
            Some(constant)
        }
        _ => None,
    }
}

impl FoldScalar for Integer {
    fn apply(ctx: &mut FoldingContext<'_>, op: BinaryOperator, x: &i64, y: &i64) -> Option<i64> {
        let (x, y) = (*x, *y);
        let result = match op {
            BinaryOperator::Add => x.checked_add(y),
            BinaryOperator::Subtract => x.checked_sub(y),
            BinaryOperator::Multiply => x.checked_mul(y),
            BinaryOperator::Divide if y == 0 => {
                ctx.warn(UsageWarning::FoldingException, "INTEGER(8) division by zero");
                return None;
            }
            BinaryOperator::Divide => x.checked_div(y),
            BinaryOperator::Max => Some(x.max(y)),
            BinaryOperator::Min => Some(x.min(y)),
            BinaryOperator::Concat => return None,
        };
        if result.is_none() {
            ctx.warn(
                UsageWarning::FoldingException,
                format!("INTEGER(8) {} overflowed", op.name()),
            );
        }
        result
    }

    fn negate(ctx: &mut FoldingContext<'_>, x: &i64) -> Option<i64> {
        let result = x.checked_neg();
        if result.is_none() {
            ctx.warn(UsageWarning::FoldingException, "INTEGER(8) negation overflowed");
        }
        result
    }
}

impl FoldScalar for Real {
    fn apply(_ctx: &mut FoldingContext<'_>, op: BinaryOperator, x: &f64, y: &f64) -> Option<f64> {
        match op {
            BinaryOperator::Add => Some(x + y),
            BinaryOperator::Subtract => Some(x - y),
            BinaryOperator::Multiply => Some(x * y),
            BinaryOperator::Divide if *y != 0.0 => Some(x / y),
            _ => None,
        }
    }

    fn negate(_ctx: &mut FoldingContext<'_>, x: &f64) -> Option<f64> {
        Some(-x)
    }
}

impl FoldScalar for Complex {
    fn apply(
        _ctx: &mut FoldingContext<'_>,
        op: BinaryOperator,
        x: &(f64, f64),
        y: &(f64, f64),
    ) -> Option<(f64, f64)> {
        match op {
            BinaryOperator::Add => Some((x.0 + y.0, x.1 + y.1)),
            BinaryOperator::Subtract => Some((x.0 - y.0, x.1 - y.1)),
            BinaryOperator::Multiply => Some((x.0 * y.0 - x.1 * y.1, x.0 * y.1 + x.1 * y.0)),
            _ => None,
        }
    }

    fn negate(_ctx: &mut FoldingContext<'_>, x: &(f64, f64)) -> Option<(f64, f64)> {
        Some((-x.0, -x.1))
    }
}

impl FoldScalar for Character {
    fn apply(
        _ctx: &mut FoldingContext<'_>,
        op: BinaryOperator,
        x: &String,
        y: &String,
    ) -> Option<String> {
        match op {
            BinaryOperator::Concat => Some(format!("{}{}", x, y)),
            _ => None,
        }
    }

    /// A substring is folded to a constant when its parent is constant.
    fn fold_designator(
        ctx: &mut FoldingContext<'_>,
        mut designator: Designator<Character>,
    ) -> Expr<Character> {
        designator.fold_in_place(ctx);
        let folded = match designator.kind_mut() {
            DesignatorKind::Substring(substring) => Some(substring.fold(ctx)),
            _ => None,
        };
        match folded {
            Some(Some(constant)) => Expr::Constant(constant),
            Some(None) => Expr::Designator(designator),
            None => replace_named_constant(ctx, designator),
        }
    }
}

impl FoldScalar for Logical {}

impl FoldScalar for Derived {}
