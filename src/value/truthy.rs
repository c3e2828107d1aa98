use super::Value;

/// A type which can be tested for truthiness, the way a dynamic language tests a value in a
/// conditional.
///
/// Predicates passed to helpers like [`filter`](crate::collections::filter) can return anything
/// that implements this trait, so a closure returning an [`Option`] or a count works as well as
/// one returning a [`bool`].
///
/// | Type | Falsy when |
/// |-|-|
/// | [`bool`] | `false` |
/// | integers | `0` |
/// | floats | `0.0`, `-0.0` or `NaN` |
/// | [`str`], [`String`] | empty |
/// | [`Option<T>`] | `None`, or the contained value is falsy |
/// | slices, [`Vec`] | never |
/// | [`Value`] | `Null`, or the contained bool, number or string is falsy |
pub trait Truthy {
    /// Returns true if the value is considered true in a conditional.
    fn is_truthy(&self) -> bool;

    /// Returns true if the value is considered false in a conditional.
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => b.is_truthy(),
            Value::Number(n) => n.is_truthy(),
            Value::String(s) => s.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
