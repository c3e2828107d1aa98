use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use derive_more::{From, IsVariant};
use indexmap::IndexMap;

/// The mapping type held by [`Value::Object`]. Properties keep their insertion order, so iterating
/// an object is consistent between runs.
pub type Object = IndexMap<String, Value>;

/// A dynamically typed value, modelled after the values of a JSON-like language.
///
/// There is no variant for a missing value. Where a value may be absent (zipping sequences of
/// different lengths, plucking a property that doesn't exist) the helpers return an [`Option`].
///
/// # Equality
/// Equality is strict: there is no coercion between kinds, so `Value::from(1) != Value::from("1")`.
/// Numbers compare as [`f64`]s, meaning `NaN` isn't equal to itself. Arrays and objects compare
/// structurally, objects ignoring the order of their properties.
///
/// # Ordering
/// Values of the same kind are ordered naturally (arrays lexicographically). Values of different
/// kinds, and objects which aren't equal, are unordered.
#[derive(Debug, Default, Clone, PartialEq, From, IsVariant)]
pub enum Value {
    /// The absence of a meaningful value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision float, which also represents integers.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// Properties keyed by name, in insertion order.
    Object(Object),
}

impl Value {
    /// Creates a new, empty [`Value::Object`].
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    /// Returns a short, human readable name for the kind of this value, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns the contained bool, or None if this isn't a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained number, or None if this isn't a [`Value::Number`].
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained string, or None if this isn't a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a [`Value::Array`], or None for any other kind.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the properties of a [`Value::Object`], or None for any other kind.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the properties of a [`Value::Object`] for modification, or None for any other
    /// kind.
    pub const fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Renders the value the way it would appear when concatenated into a string. Strings have no
    /// quotes and null is empty. Arrays are the plain strings of their elements joined by `,`.
    /// Everything else uses its [`Display`] form.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(Value::to_plain_string)
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            // Objects have no natural order, but PartialOrd has to agree with PartialEq.
            (Value::Object(a), Value::Object(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Value::Object(object) => {
                write!(f, "{{")?;
                for (i, (key, value)) in object.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

/// Builds a [`Value::Array`] from a list of expressions that convert [`Into<Value>`].
#[macro_export]
macro_rules! array {
    ($($item:expr),* $(,)?) => {
        $crate::value::Value::Array(vec![$($crate::value::Value::from($item)),*])
    };
}

/// Builds a [`Value::Object`] from `key => value` pairs, keeping the order they are written in.
#[macro_export]
macro_rules! object {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut object = $crate::value::Object::new();
        $(object.insert(::std::string::String::from($key), $crate::value::Value::from($value));)*
        $crate::value::Value::Object(object)
    }};
}
