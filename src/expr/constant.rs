use crate::types::{Category, Character, Integer};

/// A scalar constant value of a given category.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T: Category> {
    value: T::Scalar,
}

impl<T: Category> Constant<T> {
    pub fn new(value: T::Scalar) -> Constant<T> {
        Constant { value }
    }

    pub fn value(&self) -> &T::Scalar {
        &self.value
    }

    pub fn into_value(self) -> T::Scalar {
        self.value
    }
}

impl Constant<Integer> {
    pub fn to_i64(&self) -> i64 {
        self.value
    }
}

impl Constant<Character> {
    /// The number of characters.
    pub fn len(&self) -> i64 {
        self.value.chars().count() as i64
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Extract the characters `lower..=upper`, counting from 1.
    ///
    /// An empty range always succeeds with an empty string, any other range must lie inside the
    /// value.
    pub fn substring(&self, lower: i64, upper: i64) -> Option<Constant<Character>> {
        if lower > upper {
            return Some(Constant::new(String::new()));
        }
        if lower < 1 || upper > self.len() {
            return None;
        }
        let value = self
            .value
            .chars()
            .skip((lower - 1) as usize)
            .take((upper - lower + 1) as usize)
            .collect();
        Some(Constant::new(value))
    }
}

impl From<i64> for Constant<Integer> {
    fn from(value: i64) -> Self {
        Constant::new(value)
    }
}

impl From<&str> for Constant<Character> {
    fn from(value: &str) -> Self {
        Constant::new(value.to_string())
    }
}
