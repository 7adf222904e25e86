//! Total accessor over untyped, positionally-encoded JSON trees.
//!
//! [`get`] descends a sequence of array indices and coerces the leaf into the
//! requested type. Any divergence from the expected shape (a non-array
//! along the way, an out-of-range index, a leaf of the wrong type) yields the
//! type's zero value instead of an error.
//!
//! JSON objects are never descended into: positional payloads only nest
//! arrays, so an object where an array was expected is a shape mismatch.

use serde_json::Value;

/// Fallback root for lookups that did not resolve.
pub static NULL: Value = Value::Null;

/// Conversion from a raw leaf into a typed value.
///
/// Returns `None` when the leaf has the wrong JSON type; no implicit
/// stringification or numeric parsing happens here.
pub trait FromRaw<'a>: Sized {
    fn from_raw(value: &'a Value) -> Option<Self>;
}

impl<'a> FromRaw<'a> for &'a str {
    fn from_raw(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromRaw<'a> for String {
    fn from_raw(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl<'a> FromRaw<'a> for f64 {
    fn from_raw(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromRaw<'a> for i64 {
    /// Numbers are truncated toward zero, so `4.9` yields `4`.
    // `as` saturates at the i64 bounds and maps NaN to 0.
    #[allow(clippy::cast_possible_truncation)]
    fn from_raw(value: &'a Value) -> Option<Self> {
        if let Some(n) = value.as_i64() {
            return Some(n);
        }
        value.as_f64().map(|f| f.trunc() as i64)
    }
}

impl<'a> FromRaw<'a> for bool {
    fn from_raw(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromRaw<'a> for &'a [Value] {
    fn from_raw(value: &'a Value) -> Option<Self> {
        value.as_array().map(Vec::as_slice)
    }
}

/// Walk `path` from `root`, returning the node it lands on.
///
/// Returns `None` as soon as a step hits a non-array or an out-of-range index.
#[must_use]
pub fn descend<'a>(root: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |current, &idx| current.as_array()?.get(idx))
}

/// Fetch the value at `path` below `root`, coerced to `T`.
///
/// Never fails: an unresolvable path or a type mismatch yields
/// `T::default()`.
#[must_use]
pub fn get<'a, T>(root: &'a Value, path: &[usize]) -> T
where
    T: FromRaw<'a> + Default,
{
    descend(root, path)
        .and_then(T::from_raw)
        .unwrap_or_default()
}

/// Fetch the node at `path`, or [`NULL`] when it does not resolve.
///
/// Useful for picking a sub-tree that further lookups are rooted at.
#[must_use]
pub fn node<'a>(root: &'a Value, path: &[usize]) -> &'a Value {
    descend(root, path).unwrap_or(&NULL)
}

/// Render a raw leaf as display text.
///
/// Strings pass through, numbers use their natural decimal form (integral
/// floats lose the trailing `.0`), booleans render as `true`/`false`, and
/// anything else falls back to its compact JSON text.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{f:.0}")
                }
                Some(f) => f.to_string(),
                None => n.to_string(),
            }
        }
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
