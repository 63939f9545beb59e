//! Fortran source form of references and expressions, used in messages and logs.
//!
//! Printing needs the names of the symbols, so nothing here implements `Display` directly: an
//! [`AsFortran`] value is paired with its [`SymbolTable`] by [`AsFortran::fortran`], which gives
//! something that can be formatted.

use std::fmt::{self, Display, Formatter, Write};

use crate::expr::{some_expr_dispatch, Constant, Expr, FunctionRef, SomeExpr};
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::*;
use crate::variable::*;

/// Destination of the printed tokens.
pub struct FortranBuffer<'a> {
    pub symbols: &'a SymbolTable,
    pub fmt: &'a mut dyn Write,
}

impl FortranBuffer<'_> {
    pub fn append<T: Display>(&mut self, token: T) -> fmt::Result {
        write!(self.fmt, "{}", token)
    }

    pub fn name(&mut self, symbol: SymbolRef) -> fmt::Result {
        let symbols = self.symbols;
        self.append(symbols.name(symbol))
    }

    /// Print the items separated by `separator`.
    pub fn punctuated<'i, T, I>(&mut self, items: I, separator: &str) -> fmt::Result
    where
        T: AsFortran + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.append(separator)?;
            }
            item.as_fortran(self)?;
        }
        Ok(())
    }
}

pub trait AsFortran {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result;

    /// Pair the value with the symbols it references, for formatting.
    fn fortran<'a>(&'a self, symbols: &'a SymbolTable) -> Fortran<'a, Self> {
        Fortran {
            symbols,
            inner: self,
        }
    }

    fn to_fortran(&self, symbols: &SymbolTable) -> String {
        self.fortran(symbols).to_string()
    }
}

/// A value that can be printed, see [`AsFortran::fortran`].
pub struct Fortran<'a, T: ?Sized> {
    symbols: &'a SymbolTable,
    inner: &'a T,
}

impl<T: AsFortran + ?Sized> Display for Fortran<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.as_fortran(&mut FortranBuffer {
            symbols: self.symbols,
            fmt: f,
        })
    }
}

fn quoted(ctx: &mut FortranBuffer<'_>, value: &str) -> fmt::Result {
    ctx.append(format_args!("'{}'", value.replace('\'', "''")))
}

impl AsFortran for Constant<Integer> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        ctx.append(self.value())
    }
}

impl AsFortran for Constant<Real> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        ctx.append(format_args!("{:?}", self.value()))
    }
}

impl AsFortran for Constant<Complex> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        let (re, im) = self.value();
        ctx.append(format_args!("({:?},{:?})", re, im))
    }
}

impl AsFortran for Constant<Character> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        quoted(ctx, self.value())
    }
}

impl AsFortran for Constant<Logical> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        ctx.append(if *self.value() { ".true." } else { ".false." })
    }
}

impl AsFortran for Constant<Derived> {
    fn as_fortran(&self, _ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match *self.value() {}
    }
}

/// An operand of an infix operator, parenthesized unless it is a primary.
fn operand<T: Category>(ctx: &mut FortranBuffer<'_>, expr: &Expr<T>) -> fmt::Result
where
    Constant<T>: AsFortran,
{
    let needs_parentheses = match expr {
        Expr::Negate(_) => true,
        Expr::Constant(constant) => constant.to_fortran(ctx.symbols).starts_with('-'),
        Expr::Binary(op, _, _) => op.symbol().is_some(),
        _ => false,
    };
    if needs_parentheses {
        ctx.append('(')?;
        expr.as_fortran(ctx)?;
        ctx.append(')')
    } else {
        expr.as_fortran(ctx)
    }
}

impl<T: Category> AsFortran for Expr<T>
where
    Constant<T>: AsFortran,
{
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            Expr::Constant(constant) => constant.as_fortran(ctx),
            Expr::Designator(designator) => designator.as_fortran(ctx),
            Expr::FunctionRef(function) => function.as_fortran(ctx),
            Expr::Parentheses(inner) => {
                ctx.append('(')?;
                inner.as_fortran(ctx)?;
                ctx.append(')')
            }
            Expr::Negate(inner) => {
                ctx.append('-')?;
                operand(ctx, inner)
            }
            Expr::Binary(op, left, right) => match op.symbol() {
                Some(symbol) => {
                    operand(ctx, left)?;
                    ctx.append(symbol)?;
                    operand(ctx, right)
                }
                None => {
                    ctx.append(op.name())?;
                    ctx.append('(')?;
                    left.as_fortran(ctx)?;
                    ctx.append(',')?;
                    right.as_fortran(ctx)?;
                    ctx.append(')')
                }
            },
        }
    }
}

impl AsFortran for SomeExpr {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        some_expr_dispatch!(self, expr => expr.as_fortran(ctx))
    }
}

impl<T: Category> AsFortran for FunctionRef<T> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.call.as_fortran(ctx)
    }
}

impl AsFortran for SymbolRef {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        ctx.name(*self)
    }
}

impl AsFortran for Triplet {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        if let Some(lower) = self.lower() {
            lower.as_fortran(ctx)?;
        }
        ctx.append(':')?;
        if let Some(upper) = self.upper() {
            upper.as_fortran(ctx)?;
        }
        if !self.is_strideless() {
            ctx.append(':')?;
            self.stride().as_fortran(ctx)?;
        }
        Ok(())
    }
}

impl AsFortran for Subscript {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            Subscript::Scalar(expr) => expr.as_fortran(ctx),
            Subscript::Triplet(triplet) => triplet.as_fortran(ctx),
        }
    }
}

impl AsFortran for StaticDataObject {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        quoted(ctx, &String::from_utf8_lossy(self.data()))
    }
}

impl AsFortran for BaseObject {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            BaseObject::Symbol(symbol) => ctx.name(*symbol),
            BaseObject::StaticData(object) => object.as_fortran(ctx),
        }
    }
}

impl AsFortran for Component {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.base().as_fortran(ctx)?;
        ctx.append('%')?;
        ctx.name(self.symbol())
    }
}

impl AsFortran for NamedEntity {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            NamedEntity::Symbol(symbol) => ctx.name(*symbol),
            NamedEntity::Component(component) => component.as_fortran(ctx),
        }
    }
}

impl AsFortran for ArrayRef {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.base().as_fortran(ctx)?;
        ctx.append('(')?;
        ctx.punctuated(self.subscripts(), ",")?;
        ctx.append(')')
    }
}

impl AsFortran for CoarrayRef {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.base().as_fortran(ctx)?;
        ctx.append('[')?;
        ctx.punctuated(self.cosubscripts(), ",")?;
        if let Some(stat) = self.stat() {
            ctx.append(",stat=")?;
            stat.as_fortran(ctx)?;
        }
        if let Some(team) = self.team() {
            ctx.append(",team=")?;
            team.as_fortran(ctx)?;
        }
        ctx.append(']')
    }
}

impl AsFortran for DataRef {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            DataRef::Symbol(symbol) => ctx.name(*symbol),
            DataRef::Component(component) => component.as_fortran(ctx),
            DataRef::ArrayRef(array) => array.as_fortran(ctx),
            DataRef::CoarrayRef(coarray) => coarray.as_fortran(ctx),
        }
    }
}

impl AsFortran for Substring {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self.parent() {
            Parent::DataRef(data_ref) => data_ref.as_fortran(ctx)?,
            Parent::StaticData(object) => object.as_fortran(ctx)?,
        }
        ctx.append('(')?;
        if let Some(lower) = &self.lower {
            lower.as_fortran(ctx)?;
        }
        ctx.append(':')?;
        if let Some(upper) = &self.upper {
            upper.as_fortran(ctx)?;
        }
        ctx.append(')')
    }
}

impl AsFortran for ComplexPart {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.complex().as_fortran(ctx)?;
        ctx.append('%')?;
        ctx.append(self.part().as_str())
    }
}

impl AsFortran for DescriptorInquiry {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        let function = match self.field() {
            Field::LowerBound => "lbound",
            Field::Extent => "size",
            Field::Stride => "%stride",
            Field::Rank => "rank",
            Field::Len => "len",
        };
        ctx.append(function)?;
        ctx.append('(')?;
        self.base().as_fortran(ctx)?;
        if self.field().has_dimension() {
            ctx.append(format_args!(",dim={}", self.dimension() + 1))?;
        }
        ctx.append(')')
    }
}

impl AsFortran for TypeParamInquiry {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        if let Some(base) = self.base() {
            base.as_fortran(ctx)?;
            ctx.append('%')?;
        }
        ctx.name(self.parameter())
    }
}

impl AsFortran for DesignatorKind {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            DesignatorKind::Symbol(symbol) => ctx.name(*symbol),
            DesignatorKind::Component(component) => component.as_fortran(ctx),
            DesignatorKind::ArrayRef(array) => array.as_fortran(ctx),
            DesignatorKind::CoarrayRef(coarray) => coarray.as_fortran(ctx),
            DesignatorKind::Substring(substring) => substring.as_fortran(ctx),
            DesignatorKind::ComplexPart(part) => part.as_fortran(ctx),
            DesignatorKind::DescriptorInquiry(inquiry) => inquiry.as_fortran(ctx),
            DesignatorKind::TypeParamInquiry(inquiry) => inquiry.as_fortran(ctx),
        }
    }
}

impl<T: Category> AsFortran for Designator<T> {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.kind().as_fortran(ctx)
    }
}

impl AsFortran for ProcedureDesignator {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        match self {
            ProcedureDesignator::Symbol(symbol) => ctx.name(*symbol),
            ProcedureDesignator::Component(component) => component.as_fortran(ctx),
            ProcedureDesignator::Intrinsic(intrinsic) => ctx.append(&intrinsic.name),
        }
    }
}

/// Omitted optional arguments are not printed.
impl AsFortran for ProcedureRef {
    fn as_fortran(&self, ctx: &mut FortranBuffer<'_>) -> fmt::Result {
        self.proc().as_fortran(ctx)?;
        ctx.append('(')?;
        ctx.punctuated(self.arguments().iter().flatten(), ",")?;
        ctx.append(')')
    }
}
