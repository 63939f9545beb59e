use crate::expr::{Expr, SomeExpr};
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::{Integer, SubscriptInteger};
use crate::variable::{symbol_len, DataRef, Equivalent};

/// A coindexed reference, `base[c1, c2, ...]` with its optional `STAT=` and `TEAM=` clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct CoarrayRef {
    pub(crate) base: Box<DataRef>,
    pub(crate) cosubscripts: Vec<Expr<SubscriptInteger>>,
    pub(crate) stat: Option<Expr<Integer>>,
    pub(crate) team: Option<SomeExpr>,
}

impl CoarrayRef {
    pub fn new(base: impl Into<DataRef>, cosubscripts: Vec<Expr<SubscriptInteger>>) -> CoarrayRef {
        CoarrayRef {
            base: Box::new(base.into()),
            cosubscripts,
            stat: None,
            team: None,
        }
    }

    pub fn base(&self) -> &DataRef {
        &self.base
    }

    pub fn cosubscripts(&self) -> &[Expr<SubscriptInteger>] {
        &self.cosubscripts
    }

    pub fn stat(&self) -> Option<&Expr<Integer>> {
        self.stat.as_ref()
    }

    pub fn team(&self) -> Option<&SomeExpr> {
        self.team.as_ref()
    }

    /// Set the `STAT=` variable.
    ///
    /// Panics if the expression is not a variable.
    pub fn set_stat(&mut self, symbols: &SymbolTable, stat: Expr<Integer>) -> &mut Self {
        assert!(
            stat.is_variable(symbols),
            "STAT= of a coindexed reference must be a variable"
        );
        self.stat = Some(stat);
        self
    }

    pub fn set_team(&mut self, team: impl Into<SomeExpr>) -> &mut Self {
        self.team = Some(team.into());
        self
    }

    pub fn first_symbol(&self) -> SymbolRef {
        self.base.first_symbol()
    }

    pub fn last_symbol(&self) -> SymbolRef {
        self.base.last_symbol()
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        self.base.rank(symbols)
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        self.base.corank(symbols)
    }

    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        symbol_len(symbols, self.last_symbol())
    }
}

impl Equivalent for CoarrayRef {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.base.equivalent(&other.base, symbols)
            && self.cosubscripts.equivalent(&other.cosubscripts, symbols)
            && self.stat.equivalent(&other.stat, symbols)
            && self.team.equivalent(&other.team, symbols)
    }
}
