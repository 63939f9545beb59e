use std::mem;

use crate::expr::{Expr, SomeExpr};
use crate::fold::{fold, fold_some, Fold, FoldingContext};
use crate::types::{Category, Integer};
use crate::variable::*;

impl Fold for Expr<Integer> {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        let expr = mem::replace(self, Expr::from(0));
        *self = fold(ctx, expr);
    }
}

impl Fold for SomeExpr {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        let expr = mem::replace(self, SomeExpr::Integer(Expr::from(0)));
        *self = fold_some(ctx, expr);
    }
}

impl<T: Fold> Fold for Option<T> {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        if let Some(inner) = self {
            inner.fold_in_place(ctx);
        }
    }
}

impl<T: Fold> Fold for Vec<T> {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        for item in self.iter_mut() {
            item.fold_in_place(ctx);
        }
    }
}

impl Fold for Triplet {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        *self = mem::take(self).map_exprs(|expr| fold(ctx, expr));
    }
}

impl Fold for Subscript {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        match self {
            Subscript::Scalar(expr) => expr.fold_in_place(ctx),
            Subscript::Triplet(triplet) => triplet.fold_in_place(ctx),
        }
    }
}

impl Fold for Component {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.base.fold_in_place(ctx);
    }
}

impl Fold for NamedEntity {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        if let NamedEntity::Component(component) = self {
            component.fold_in_place(ctx);
        }
    }
}

impl Fold for ArrayRef {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.base.fold_in_place(ctx);
        self.subscripts.fold_in_place(ctx);
    }
}

impl Fold for CoarrayRef {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.base.fold_in_place(ctx);
        self.cosubscripts.fold_in_place(ctx);
        self.stat.fold_in_place(ctx);
        self.team.fold_in_place(ctx);
    }
}

impl Fold for DataRef {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        match self {
            DataRef::Symbol(_) => {}
            DataRef::Component(component) => component.fold_in_place(ctx),
            DataRef::ArrayRef(array) => array.fold_in_place(ctx),
            DataRef::CoarrayRef(coarray) => coarray.fold_in_place(ctx),
        }
    }
}

impl<T: Fold> Fold for Box<T> {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.as_mut().fold_in_place(ctx);
    }
}

/// Only the parent: the bounds are folded by [`Substring::fold`].
impl Fold for Substring {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        if let Parent::DataRef(data_ref) = &mut self.parent {
            data_ref.fold_in_place(ctx);
        }
    }
}

impl Fold for ComplexPart {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.complex.fold_in_place(ctx);
    }
}

impl Fold for DescriptorInquiry {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.base.fold_in_place(ctx);
    }
}

impl Fold for TypeParamInquiry {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.base.fold_in_place(ctx);
    }
}

impl Fold for DesignatorKind {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        match self {
            DesignatorKind::Symbol(_) => {}
            DesignatorKind::Component(component) => component.fold_in_place(ctx),
            DesignatorKind::ArrayRef(array) => array.fold_in_place(ctx),
            DesignatorKind::CoarrayRef(coarray) => coarray.fold_in_place(ctx),
            DesignatorKind::Substring(substring) => substring.fold_in_place(ctx),
            DesignatorKind::ComplexPart(part) => part.fold_in_place(ctx),
            DesignatorKind::DescriptorInquiry(inquiry) => inquiry.fold_in_place(ctx),
            DesignatorKind::TypeParamInquiry(inquiry) => inquiry.fold_in_place(ctx),
        }
    }
}

impl<T: Category> Fold for Designator<T> {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.kind_mut().fold_in_place(ctx);
    }
}

impl Fold for ProcedureDesignator {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        if let ProcedureDesignator::Component(component) = self {
            component.fold_in_place(ctx);
        }
    }
}

impl Fold for ProcedureRef {
    fn fold_in_place(&mut self, ctx: &mut FoldingContext<'_>) {
        self.proc.fold_in_place(ctx);
        self.arguments.fold_in_place(ctx);
    }
}
