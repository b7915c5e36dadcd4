//! Options and their identity keys.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identity of an option value, as produced by a [`KeyFn`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Number(n) => write!(f, "{}", n),
            OptionKey::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        OptionKey::Text(s.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(s: String) -> Self {
        OptionKey::Text(s)
    }
}

impl From<&String> for OptionKey {
    fn from(s: &String) -> Self {
        OptionKey::Text(s.clone())
    }
}

macro_rules! number_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionKey {
                fn from(n: $ty) -> Self {
                    OptionKey::Number(i64::from(n))
                }
            }
        )*
    };
}

number_key!(i8, i16, i32, i64, u8, u16, u32);

/// Maps an option value to its identity.
///
/// Must be deterministic and must not give two options in the same list the
/// same key. When it does, matching picks the first option in list order.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> OptionKey + Send + Sync>;

/// One selectable row: display text plus an opaque value.
///
/// Options are immutable once built; a host that wants different rows
/// passes a new list.
///
/// # Example
///
/// ```
/// use seekbox::SelectOption;
///
/// let option = SelectOption::new("Alice", 1);
/// assert_eq!(option.label(), "Alice");
/// assert_eq!(*option.value(), 1);
///
/// let from_pair: SelectOption<u32> = ("Bob", 2).into();
/// assert_eq!(from_pair.label(), "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<T> {
    label: String,
    value: T,
}

impl<T> SelectOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T, S: Into<String>> From<(S, T)> for SelectOption<T> {
    fn from((label, value): (S, T)) -> Self {
        Self::new(label, value)
    }
}
