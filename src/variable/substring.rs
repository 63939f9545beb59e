use crate::diagnostics::UsageWarning;
use crate::expr::{Constant, Expr};
use crate::fold::{fold, named_constant, to_int64, FoldingContext};
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::{Character, SubscriptInteger};
use crate::variable::{BaseObject, DataRef, Equivalent, StaticDataObject};

/// What a substring is taken from.
#[derive(Debug, Clone, PartialEq)]
pub enum Parent {
    DataRef(DataRef),
    StaticData(StaticDataObject),
}

impl From<DataRef> for Parent {
    fn from(data_ref: DataRef) -> Self {
        Parent::DataRef(data_ref)
    }
}

impl From<StaticDataObject> for Parent {
    fn from(object: StaticDataObject) -> Self {
        Parent::StaticData(object)
    }
}

impl Equivalent for Parent {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (Parent::DataRef(x), Parent::DataRef(y)) => x.equivalent(y, symbols),
            (Parent::StaticData(x), Parent::StaticData(y)) => x == y,
            _ => false,
        }
    }
}

/// A character substring, `parent(lower:upper)`.
///
/// Both bounds are optional: the lower one defaults to 1 and the upper one to the length of the
/// parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Substring {
    pub(crate) parent: Parent,
    pub(crate) lower: Option<Expr<SubscriptInteger>>,
    pub(crate) upper: Option<Expr<SubscriptInteger>>,
}

impl Substring {
    pub fn new(
        parent: impl Into<Parent>,
        lower: Option<Expr<SubscriptInteger>>,
        upper: Option<Expr<SubscriptInteger>>,
    ) -> Substring {
        Substring {
            parent: parent.into(),
            lower,
            upper,
        }
    }

    pub fn parent(&self) -> &Parent {
        &self.parent
    }

    pub fn lower(&self) -> Expr<SubscriptInteger> {
        self.lower.clone().unwrap_or_else(|| Expr::from(1))
    }

    /// The upper bound, or the length of the parent when it is not explicit.
    pub fn upper(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match &self.upper {
            Some(upper) => Some(upper.clone()),
            None => match &self.parent {
                Parent::DataRef(data_ref) => data_ref.len(symbols),
                Parent::StaticData(object) => Some(Expr::from(object.len())),
            },
        }
    }

    pub fn set_lower(&mut self, lower: Expr<SubscriptInteger>) -> &mut Self {
        self.lower = Some(lower);
        self
    }

    pub fn set_upper(&mut self, upper: Expr<SubscriptInteger>) -> &mut Self {
        self.upper = Some(upper);
        self
    }

    /// Set the bounds that are present, keeping the others.
    pub fn set_bounds(
        &mut self,
        lower: Option<Expr<SubscriptInteger>>,
        upper: Option<Expr<SubscriptInteger>>,
    ) -> &mut Self {
        if let Some(lower) = lower {
            self.lower = Some(lower);
        }
        if let Some(upper) = upper {
            self.upper = Some(upper);
        }
        self
    }

    /// `max(0, upper - lower + 1)`, not folded.
    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        let upper = self.upper(symbols)?;
        Some(Expr::<SubscriptInteger>::from(0).max(upper - self.lower() + Expr::from(1)))
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match &self.parent {
            Parent::DataRef(data_ref) => data_ref.rank(symbols),
            Parent::StaticData(_) => 0,
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match &self.parent {
            Parent::DataRef(data_ref) => data_ref.corank(symbols),
            Parent::StaticData(_) => 0,
        }
    }

    pub fn base_object(&self) -> BaseObject {
        match &self.parent {
            Parent::DataRef(data_ref) => BaseObject::Symbol(data_ref.first_symbol()),
            Parent::StaticData(object) => BaseObject::StaticData(object.clone()),
        }
    }

    /// `None` for a substring of a literal.
    pub fn last_symbol(&self) -> Option<SymbolRef> {
        match &self.parent {
            Parent::DataRef(data_ref) => Some(data_ref.last_symbol()),
            Parent::StaticData(_) => None,
        }
    }

    /// Fold the bounds and, when the parent is constant, the substring itself.
    ///
    /// The folded bounds are stored back, an empty range becomes `1:0`. When no constant can be
    /// extracted, a lower bound less than one and an upper bound past the known length of the
    /// parent are reported and clamped, but no constant is produced from the clamped bounds.
    pub fn fold(&mut self, ctx: &mut FoldingContext<'_>) -> Option<Constant<Character>> {
        let symbols = ctx.symbols();
        let upper = match self.upper.take() {
            Some(upper) => upper,
            None => self.upper(symbols)?,
        };
        let upper = fold(ctx, upper);
        let upper_value = to_int64(&upper);
        self.upper = Some(upper);
        let upper_value = upper_value?;

        let lower = fold(ctx, self.lower.take().unwrap_or_else(|| Expr::from(1)));
        let lower_value = to_int64(&lower);
        self.lower = Some(lower);
        let lower_value = lower_value?;

        let (lower_value, upper_value) = if lower_value > upper_value {
            self.lower = Some(Expr::from(1));
            self.upper = Some(Expr::from(0));
            (1, 0)
        } else {
            (lower_value, upper_value)
        };

        let (length, payload) = match &self.parent {
            Parent::StaticData(object) => (
                Some(object.len()),
                object.as_string().map(Constant::<Character>::new),
            ),
            // the subscripts of the parent are folded by the caller, only a named constant
            // has a value here
            Parent::DataRef(DataRef::Symbol(symbol)) => {
                let payload = named_constant::<Character>(ctx, *symbol);
                (payload.as_ref().map(Constant::<Character>::len), payload)
            }
            Parent::DataRef(_) => (None, None),
        };

        let result = payload.and_then(|payload| payload.substring(lower_value, upper_value));
        if result.is_none() {
            if lower_value < 1 {
                ctx.warn(
                    UsageWarning::Bounds,
                    format!("Lower bound ({}) on substring is less than one", lower_value),
                );
                self.lower = Some(Expr::from(1));
            }
            if let Some(length) = length.filter(|&length| upper_value > length) {
                ctx.warn(
                    UsageWarning::Bounds,
                    format!(
                        "Upper bound ({}) on substring is greater than character length ({})",
                        upper_value, length
                    ),
                );
                self.upper = Some(Expr::from(length));
            }
        }
        result
    }
}

impl Equivalent for Substring {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.parent.equivalent(&other.parent, symbols)
            && self.lower.equivalent(&other.lower, symbols)
            && self.upper.equivalent(&other.upper, symbols)
    }
}
