//! Request parameter collection and scalar value types.
//!
//! Every API call carries a flat set of key/value parameters. Values are
//! restricted to a small closed set of scalar shapes, each with a single
//! canonical string rendering that is used both for signing and for the
//! transmitted query string.

use std::fmt;

/// A scalar parameter value.
///
/// The platform treats every parameter as a string on the wire; this enum
/// exists so callers can pass numbers and booleans without stringifying
/// them by hand. The `Display` impl is the canonical rendering rule:
/// strings pass through, numbers render in their natural decimal form, and
/// booleans render as `true`/`false`.
///
/// # Example
///
/// ```rust
/// use taobao_api::ParamValue;
///
/// assert_eq!(ParamValue::from("json").to_string(), "json");
/// assert_eq!(ParamValue::from(42).to_string(), "42");
/// assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
/// assert_eq!(ParamValue::from(true).to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A string value, passed through verbatim.
    String(String),
    /// A numeric value, rendered in decimal form.
    Number(serde_json::Number),
    /// A boolean value, rendered as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON number form; fall back to the
        // literal rendering so the canonical rule still applies.
        serde_json::Number::from_f64(value)
            .map_or_else(|| Self::String(value.to_string()), Self::Number)
    }
}

/// An insertion-ordered set of unique request parameters.
///
/// `RequestParams` maps parameter names to [`ParamValue`]s. Iteration order
/// is insertion order, which is the order the query string is rendered in.
/// Inserting an existing key replaces its value in place without changing
/// its position.
///
/// # Example
///
/// ```rust
/// use taobao_api::RequestParams;
///
/// let mut params = RequestParams::new();
/// params.insert("method", "taobao.user.get");
/// params.insert("nick", "hello");
/// params.insert("fields", "user_id,nick");
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("nick").unwrap().to_string(), "hello");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a parameter, replacing any existing value for the same key.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for RequestParams {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for RequestParams {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
