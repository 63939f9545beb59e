//! Constant folding of expressions and of the sub-expressions of variable references.
//!
//! Expressions are folded by value with [`fold`]; references are folded in place through the
//! [`Fold`] trait, which rewrites their bounds, subscripts and clauses. Anomalies found while
//! folding are never fatal, they are reported as warnings in the [`FoldingContext`].

mod check;
mod scalar;
mod variable;

pub use check::{is_actually_constant, is_scope_invariant, to_int64};
pub use scalar::FoldScalar;
pub(crate) use scalar::named_constant;

use crate::diagnostics::{Diagnostic, DiagnosticContext, LanguageFeatures, UsageWarning};
use crate::expr::{some_expr_dispatch, Expr, SomeExpr};
use crate::symbol::SymbolTable;

/// State of a folding pass: the symbols, the enabled warnings and the emitted messages.
///
/// A context is used by one pass at a time; independent trees can be folded in parallel, each
/// with its own context.
#[derive(Debug)]
pub struct FoldingContext<'a> {
    symbols: &'a SymbolTable,
    features: LanguageFeatures,
    messages: DiagnosticContext,
}

impl<'a> FoldingContext<'a> {
    /// Make a context with all the warnings enabled.
    pub fn new(symbols: &'a SymbolTable) -> FoldingContext<'a> {
        Self::with_features(symbols, LanguageFeatures::default())
    }

    pub fn with_features(
        symbols: &'a SymbolTable,
        features: LanguageFeatures,
    ) -> FoldingContext<'a> {
        FoldingContext {
            symbols,
            features,
            messages: DiagnosticContext::new(),
        }
    }

    pub fn symbols(&self) -> &'a SymbolTable {
        self.symbols
    }

    pub fn features(&self) -> &LanguageFeatures {
        &self.features
    }

    pub fn messages(&self) -> &DiagnosticContext {
        &self.messages
    }

    pub fn into_messages(self) -> DiagnosticContext {
        self.messages
    }

    /// Emit a warning of the given category, unless the category is disabled.
    pub fn warn(&mut self, category: UsageWarning, message: impl Into<String>) {
        if !self.features.should_warn(category) {
            return;
        }
        let message = message.into();
        debug!("Folding warning [{}]: {}", category, message);
        self.messages.add_diagnostic(Diagnostic::usage_warning(category, message));
    }
}

/// In-place folding of the sub-expressions of a node.
pub trait Fold {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>);
}

/// Fold an expression as much as possible.
pub fn fold<T: FoldScalar>(ctx: &mut FoldingContext<'_>, expr: Expr<T>) -> Expr<T> {
    match expr {
        Expr::Constant(_) => expr,
        Expr::Designator(designator) => T::fold_designator(ctx, designator),
        Expr::FunctionRef(mut function) => {
            function.call.fold_in_place(ctx);
            Expr::FunctionRef(function)
        }
        Expr::Parentheses(inner) => match fold(ctx, *inner) {
            Expr::Constant(constant) => Expr::Constant(constant),
            inner => Expr::parentheses(inner),
        },
        Expr::Negate(inner) => {
            let inner = fold(ctx, *inner);
            if let Expr::Constant(constant) = &inner {
                if let Some(value) = T::negate(ctx, constant.value()) {
                    return Expr::constant(value);
                }
            }
            Expr::Negate(Box::new(inner))
        }
        Expr::Binary(op, left, right) => {
            let left = fold(ctx, *left);
            let right = fold(ctx, *right);
            if let (Expr::Constant(x), Expr::Constant(y)) = (&left, &right) {
                if let Some(value) = T::apply(ctx, op, x.value(), y.value()) {
                    return Expr::constant(value);
                }
            }
            Expr::Binary(op, Box::new(left), Box::new(right))
        }
    }
}

/// Fold an expression of any category.
pub fn fold_some(ctx: &mut FoldingContext<'_>, expr: SomeExpr) -> SomeExpr {
    some_expr_dispatch!(expr, expr => SomeExpr::from(fold(ctx, expr)))
}
