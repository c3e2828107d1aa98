use super::{BadArgumentError, MethodError, ReceiverMismatchError, UnknownMethodError, Value};
use crate::util::sort::sorted_by_keys;

impl Value {
    /// Invokes the method called `name` with `self` as the receiver and returns its result.
    ///
    /// The supported methods are a small subset of what a dynamic language would provide for its
    /// built-in types:
    ///
    /// | Method | Receiver | Arguments | Result |
    /// |-|-|-|-|
    /// | `sort` | array | | A stably sorted copy, with elements that can't be ordered moved to the end. |
    /// | `reverse` | array | | A reversed copy. |
    /// | `toUpperCase`, `toLowerCase`, `trim` | string | | The converted string. |
    /// | `keys` | object, array | | Property names, or indices. |
    /// | `values` | object, array | | Property values, or elements. |
    /// | `toString` | any | | The plain string form, with arrays joined by `,`. |
    /// | `join` | array | separator (optional) | Elements joined with `,` or the separator. |
    /// | `includes` | array, string | needle | Whether the needle occurs. |
    /// | `indexOf` | array, string | needle | The first position of the needle, or `-1`. |
    ///
    /// Methods never mutate the receiver.
    pub fn call_method(&self, name: &str, args: &[Value]) -> Result<Value, MethodError> {
        let mismatch = || ReceiverMismatchError {
            method: name.to_owned(),
            receiver: self.kind(),
        };
        let bad_arg = |index| BadArgumentError {
            method: name.to_owned(),
            index,
        };

        match (name, self) {
            ("sort", Value::Array(items)) => Ok(Value::Array(sorted_by_keys(items, items))),
            ("reverse", Value::Array(items)) => Ok(items.iter().rev().cloned().collect()),
            ("toUpperCase", Value::String(s)) => Ok(Value::String(s.to_uppercase())),
            ("toLowerCase", Value::String(s)) => Ok(Value::String(s.to_lowercase())),
            ("trim", Value::String(s)) => Ok(Value::String(s.trim().to_owned())),
            ("keys", Value::Object(object)) => {
                Ok(object.keys().map(|key| Value::from(key.as_str())).collect())
            },
            ("keys", Value::Array(items)) => Ok((0..items.len()).map(Value::from).collect()),
            ("values", Value::Object(object)) => Ok(object.values().cloned().collect()),
            ("values", Value::Array(items)) => Ok(Value::Array(items.clone())),
            ("toString", value) => Ok(Value::String(value.to_plain_string())),
            ("join", Value::Array(items)) => {
                let separator: &str = match args.first() {
                    None | Some(Value::Null) => ",",
                    Some(Value::String(separator)) => separator,
                    Some(_) => Err(bad_arg(0))?,
                };
                Ok(Value::String(
                    items
                        .iter()
                        .map(Value::to_plain_string)
                        .collect::<Vec<_>>()
                        .join(separator),
                ))
            },
            ("includes", Value::Array(items)) => {
                let needle = args.first().ok_or_else(|| bad_arg(0))?;
                Ok(Value::Bool(items.contains(needle)))
            },
            ("includes", Value::String(s)) => match args.first() {
                Some(Value::String(needle)) => Ok(Value::Bool(s.contains(needle.as_str()))),
                _ => Err(bad_arg(0).into()),
            },
            ("indexOf", Value::Array(items)) => {
                let needle = args.first().ok_or_else(|| bad_arg(0))?;
                Ok(position_or_sentinel(items.iter().position(|item| item == needle)))
            },
            ("indexOf", Value::String(s)) => match args.first() {
                Some(Value::String(needle)) => Ok(position_or_sentinel(
                    s.find(needle.as_str()).map(|byte| s[..byte].chars().count()),
                )),
                _ => Err(bad_arg(0).into()),
            },
            (
                "sort" | "reverse" | "toUpperCase" | "toLowerCase" | "trim" | "keys" | "values"
                | "join" | "includes" | "indexOf",
                _,
            ) => Err(mismatch().into()),
            _ => Err(UnknownMethodError {
                name: name.to_owned(),
            }
            .into()),
        }
    }
}

fn position_or_sentinel(position: Option<usize>) -> Value {
    match position {
        Some(index) => Value::from(index),
        None => Value::Number(-1.0),
    }
}
