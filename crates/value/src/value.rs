//! Unified Value enum covering every shape the engine can inspect.

use std::fmt;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::kind::ValueKind;

/// Keyed, insertion-ordered mapping of values.
pub type Mapping = IndexMap<String, Value>;

/// Shared `Null` returned by lookups that find nothing.
pub static NULL: Value = Value::Null;

/// Dynamic value inspected by validators.
///
/// Validation is read-only: nothing in the engine takes a `Value` mutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent / null value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Whole number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// Arbitrary precision decimal
    Decimal(Decimal),

    /// UTF-8 text string
    Text(String),

    /// Ordered values of arbitrary length
    Sequence(Vec<Value>),

    /// Ordered values of fixed length
    Tuple(Vec<Value>),

    /// Keyed values in insertion order
    Mapping(Mapping),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a decimal value
    pub const fn decimal(v: Decimal) -> Self {
        Self::Decimal(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create a sequence from anything convertible into values
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Create a tuple from anything convertible into values
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Create a mapping from key/value pairs, keeping their order
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create an empty mapping
    pub fn mapping_empty() -> Self {
        Self::Mapping(Mapping::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    // ==================== Accessors ====================

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Projects any numeric variant onto `f64`.
    ///
    /// Decimals outside the `f64` range yield `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping.
    ///
    /// Returns [`NULL`] when `self` is not a mapping or the key is absent,
    /// so an absent key and an explicit null are indistinguishable.
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        self.as_mapping()
            .and_then(|map| map.get(key))
            .unwrap_or(&NULL)
    }

    /// Returns `true` if `self` is a mapping that holds `key` (even as null).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_mapping().is_some_and(|map| map.contains_key(key))
    }

    /// Number of elements for collections, `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Sequence(items) | Self::Tuple(items) => Some(items.len()),
            Self::Mapping(map) => Some(map.len()),
            Self::Text(s) => Some(s.chars().count()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Sequence(items) => write_items(f, "[", items, "]"),
            Self::Tuple(items) => write_items(f, "(", items, ")"),
            Self::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_null() {
        let value = Value::mapping([("a", 1)]);
        assert_eq!(value.get("a"), &Value::Integer(1));
        assert!(value.get("b").is_null());
        assert!(Value::from("not a mapping").get("a").is_null());
    }

    #[test]
    fn contains_key_distinguishes_explicit_null() {
        let value = Value::mapping([("a", Value::Null)]);
        assert!(value.contains_key("a"));
        assert!(!value.contains_key("b"));
    }

    #[test]
    fn numeric_projection() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Decimal(Decimal::new(25, 1)).as_f64(), Some(2.5));
        assert_eq!(Value::Boolean(true).as_f64(), None);
    }

    #[test]
    fn tuple_and_sequence_are_distinct() {
        let seq = Value::sequence([1, 2]);
        let tup = Value::tuple([1, 2]);
        assert_ne!(seq, tup);
        assert_eq!(seq.as_tuple(), None);
        assert_eq!(tup.as_tuple().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn display_renders_nested_shapes() {
        let value = Value::mapping([
            ("name", Value::from("J")),
            ("pair", Value::tuple([Value::from(1), Value::Null])),
            ("tags", Value::sequence(["x"])),
        ]);
        assert_eq!(
            value.to_string(),
            r#"{"name": "J", "pair": (1, null), "tags": ["x"]}"#
        );
    }

    #[test]
    fn len_of_collections_and_text() {
        assert_eq!(Value::from("héllo").len(), Some(5));
        assert_eq!(Value::sequence([1, 2, 3]).len(), Some(3));
        assert_eq!(Value::Integer(1).len(), None);
    }
}
