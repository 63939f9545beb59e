use std::marker::PhantomData;

use crate::expr::Expr;
use crate::fold::{fold, to_int64, FoldingContext};
use crate::symbol::{SymbolRef, SymbolTable};
use crate::types::*;
use crate::variable::*;

/// Any of the reference kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignatorKind {
    Symbol(SymbolRef),
    Component(Component),
    ArrayRef(ArrayRef),
    CoarrayRef(CoarrayRef),
    Substring(Substring),
    ComplexPart(ComplexPart),
    DescriptorInquiry(DescriptorInquiry),
    TypeParamInquiry(TypeParamInquiry),
}

/// A reference to a variable of static category `T`.
///
/// Which kinds a designator can hold depends on `T`: only a `Designator<Character>` can be a
/// [`Substring`], only a `Designator<Real>` can be a [`ComplexPart`], and the inquiries are
/// `Designator<Integer>`. The `From` conversions are the only way to build a designator, so a
/// misplaced kind does not compile.
#[derive(Debug, Clone, PartialEq)]
pub struct Designator<T: Category> {
    kind: Box<DesignatorKind>,
    category: PhantomData<T>,
}

impl<T: Category> Designator<T> {
    fn new(kind: DesignatorKind) -> Designator<T> {
        Designator {
            kind: Box::new(kind),
            category: PhantomData,
        }
    }

    pub fn kind(&self) -> &DesignatorKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut DesignatorKind {
        &mut self.kind
    }

    pub fn into_kind(self) -> DesignatorKind {
        *self.kind
    }

    /// The symbol, when the designator is a whole symbol.
    pub fn unwrap_symbol(&self) -> Option<SymbolRef> {
        match *self.kind {
            DesignatorKind::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn rank(&self, symbols: &SymbolTable) -> usize {
        match &*self.kind {
            DesignatorKind::Symbol(symbol) => symbols.rank(*symbol),
            DesignatorKind::Component(component) => component.rank(symbols),
            DesignatorKind::ArrayRef(array) => array.rank(symbols),
            DesignatorKind::CoarrayRef(coarray) => coarray.rank(symbols),
            DesignatorKind::Substring(substring) => substring.rank(symbols),
            DesignatorKind::ComplexPart(part) => part.rank(symbols),
            DesignatorKind::DescriptorInquiry(_) | DesignatorKind::TypeParamInquiry(_) => 0,
        }
    }

    pub fn corank(&self, symbols: &SymbolTable) -> usize {
        match &*self.kind {
            DesignatorKind::Symbol(symbol) => symbols.corank(*symbol),
            DesignatorKind::Component(component) => component.corank(symbols),
            DesignatorKind::ArrayRef(array) => array.corank(symbols),
            DesignatorKind::CoarrayRef(coarray) => coarray.corank(symbols),
            DesignatorKind::Substring(substring) => substring.corank(symbols),
            DesignatorKind::ComplexPart(part) => part.corank(symbols),
            DesignatorKind::DescriptorInquiry(_) | DesignatorKind::TypeParamInquiry(_) => 0,
        }
    }

    pub fn base_object(&self) -> BaseObject {
        match &*self.kind {
            DesignatorKind::Symbol(symbol) => BaseObject::Symbol(*symbol),
            DesignatorKind::Substring(substring) => substring.base_object(),
            DesignatorKind::Component(component) => BaseObject::Symbol(component.first_symbol()),
            DesignatorKind::ArrayRef(array) => BaseObject::Symbol(array.first_symbol()),
            DesignatorKind::CoarrayRef(coarray) => BaseObject::Symbol(coarray.first_symbol()),
            DesignatorKind::ComplexPart(part) => BaseObject::Symbol(part.first_symbol()),
            DesignatorKind::DescriptorInquiry(inquiry) => {
                BaseObject::Symbol(inquiry.first_symbol())
            }
            DesignatorKind::TypeParamInquiry(inquiry) => {
                BaseObject::Symbol(inquiry.first_symbol())
            }
        }
    }

    /// The rightmost symbol, absent only for a substring of a literal.
    pub fn last_symbol(&self) -> Option<SymbolRef> {
        match &*self.kind {
            DesignatorKind::Symbol(symbol) => Some(*symbol),
            DesignatorKind::Substring(substring) => substring.last_symbol(),
            DesignatorKind::Component(component) => Some(component.last_symbol()),
            DesignatorKind::ArrayRef(array) => Some(array.last_symbol()),
            DesignatorKind::CoarrayRef(coarray) => Some(coarray.last_symbol()),
            DesignatorKind::ComplexPart(part) => Some(part.last_symbol()),
            DesignatorKind::DescriptorInquiry(inquiry) => Some(inquiry.last_symbol()),
            DesignatorKind::TypeParamInquiry(inquiry) => Some(inquiry.last_symbol()),
        }
    }

    /// The type of the designated value.
    ///
    /// A substring with a constant length has that length, otherwise the type is the declared
    /// type of the last symbol, adjusted for the parts of complex numbers and the inquiries.
    ///
    /// The length of a substring is folded only for its value, the warnings of that fold are
    /// discarded. Use [`Designator::dynamic_type_in`] to keep them.
    pub fn dynamic_type(&self, symbols: &SymbolTable) -> Option<DynamicType> {
        self.dynamic_type_in(&mut FoldingContext::new(symbols))
    }

    /// Like [`Designator::dynamic_type`], reporting the warnings of folding the length in `ctx`.
    pub fn dynamic_type_in(&self, ctx: &mut FoldingContext<'_>) -> Option<DynamicType> {
        let symbols = ctx.symbols();
        match &*self.kind {
            DesignatorKind::Substring(substring) => {
                let kind = substring
                    .last_symbol()
                    .and_then(|symbol| symbols.dynamic_type(symbol))
                    .map_or(1, |ty| ty.kind);
                let len = substring.len(symbols).map(|len| fold(ctx, len));
                Some(match len.as_ref().and_then(to_int64) {
                    Some(len) => DynamicType::character_of_len(kind, len),
                    None => DynamicType::intrinsic(TypeCategory::Character, kind),
                })
            }
            DesignatorKind::ComplexPart(part) => symbols
                .dynamic_type(part.last_symbol())
                .map(|ty| DynamicType::real(ty.kind)),
            DesignatorKind::DescriptorInquiry(_) => Some(DynamicType::integer(8)),
            _ => self
                .last_symbol()
                .and_then(|symbol| symbols.dynamic_type(symbol))
                .cloned(),
        }
    }
}

impl Designator<Character> {
    pub fn len(&self, symbols: &SymbolTable) -> Option<Expr<SubscriptInteger>> {
        match &*self.kind {
            DesignatorKind::Symbol(symbol) => symbol_len(symbols, *symbol),
            DesignatorKind::Component(component) => component.len(symbols),
            DesignatorKind::ArrayRef(array) => array.len(symbols),
            DesignatorKind::CoarrayRef(coarray) => coarray.len(symbols),
            DesignatorKind::Substring(substring) => substring.len(symbols),
            // not constructible for characters
            DesignatorKind::ComplexPart(_)
            | DesignatorKind::DescriptorInquiry(_)
            | DesignatorKind::TypeParamInquiry(_) => None,
        }
    }
}

impl<T: Category> From<SymbolRef> for Designator<T> {
    fn from(symbol: SymbolRef) -> Self {
        Designator::new(DesignatorKind::Symbol(symbol))
    }
}

impl<T: Category> From<Component> for Designator<T> {
    fn from(component: Component) -> Self {
        Designator::new(DesignatorKind::Component(component))
    }
}

impl<T: Category> From<ArrayRef> for Designator<T> {
    fn from(array: ArrayRef) -> Self {
        Designator::new(DesignatorKind::ArrayRef(array))
    }
}

impl<T: Category> From<CoarrayRef> for Designator<T> {
    fn from(coarray: CoarrayRef) -> Self {
        Designator::new(DesignatorKind::CoarrayRef(coarray))
    }
}

impl<T: Category> From<NamedEntity> for Designator<T> {
    fn from(entity: NamedEntity) -> Self {
        Designator::from(DataRef::from(entity))
    }
}

impl<T: Category> From<DataRef> for Designator<T> {
    fn from(data_ref: DataRef) -> Self {
        Designator::new(match data_ref {
            DataRef::Symbol(symbol) => DesignatorKind::Symbol(symbol),
            DataRef::Component(component) => DesignatorKind::Component(component),
            DataRef::ArrayRef(array) => DesignatorKind::ArrayRef(array),
            DataRef::CoarrayRef(coarray) => DesignatorKind::CoarrayRef(coarray),
        })
    }
}

impl From<Substring> for Designator<Character> {
    fn from(substring: Substring) -> Self {
        Designator::new(DesignatorKind::Substring(substring))
    }
}

impl From<ComplexPart> for Designator<Real> {
    fn from(part: ComplexPart) -> Self {
        Designator::new(DesignatorKind::ComplexPart(part))
    }
}

impl From<DescriptorInquiry> for Designator<Integer> {
    fn from(inquiry: DescriptorInquiry) -> Self {
        Designator::new(DesignatorKind::DescriptorInquiry(inquiry))
    }
}

impl From<TypeParamInquiry> for Designator<Integer> {
    fn from(inquiry: TypeParamInquiry) -> Self {
        Designator::new(DesignatorKind::TypeParamInquiry(inquiry))
    }
}

impl Equivalent for DesignatorKind {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        match (self, other) {
            (DesignatorKind::Symbol(x), DesignatorKind::Symbol(y)) => same_symbol(symbols, *x, *y),
            (DesignatorKind::Component(x), DesignatorKind::Component(y)) => {
                x.equivalent(y, symbols)
            }
            (DesignatorKind::ArrayRef(x), DesignatorKind::ArrayRef(y)) => x.equivalent(y, symbols),
            (DesignatorKind::CoarrayRef(x), DesignatorKind::CoarrayRef(y)) => {
                x.equivalent(y, symbols)
            }
            (DesignatorKind::Substring(x), DesignatorKind::Substring(y)) => {
                x.equivalent(y, symbols)
            }
            (DesignatorKind::ComplexPart(x), DesignatorKind::ComplexPart(y)) => {
                x.equivalent(y, symbols)
            }
            (DesignatorKind::DescriptorInquiry(x), DesignatorKind::DescriptorInquiry(y)) => {
                x.equivalent(y, symbols)
            }
            (DesignatorKind::TypeParamInquiry(x), DesignatorKind::TypeParamInquiry(y)) => {
                x.equivalent(y, symbols)
            }
            _ => false,
        }
    }
}

impl<T: Category> Equivalent for Designator<T> {
    fn equivalent(&self, other: &Self, symbols: &SymbolTable) -> bool {
        self.kind.equivalent(&other.kind, symbols)
    }
}
