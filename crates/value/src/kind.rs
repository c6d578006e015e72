//! Value kinds.
//!
//! `ValueKind` is a lightweight classification of a [`Value`](crate::Value),
//! used when reporting what was found where something else was expected.

use core::fmt::{Display, Formatter};

/// Represents the kind/type of a `Value`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Decimal,
    Text,
    Sequence,
    Tuple,
    Mapping,
}

impl ValueKind {
    /// Get all available kinds
    pub const ALL: [Self; 9] = [
        Self::Null,
        Self::Boolean,
        Self::Integer,
        Self::Float,
        Self::Decimal,
        Self::Text,
        Self::Sequence,
        Self::Tuple,
        Self::Mapping,
    ];

    /// Lowercase name of the kind, as used in problem parameters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Tuple => "tuple",
            Self::Mapping => "mapping",
        }
    }

    /// Integer, float and decimal are numeric.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Decimal)
    }

    /// Sequences and tuples are ordered collections.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Sequence | Self::Tuple)
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_ordered() && !matches!(self, Self::Mapping | Self::Null)
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.name(), kind.name().to_lowercase());
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn classification() {
        assert!(ValueKind::Decimal.is_numeric());
        assert!(!ValueKind::Boolean.is_numeric());
        assert!(ValueKind::Tuple.is_ordered());
        assert!(ValueKind::Text.is_scalar());
        assert!(!ValueKind::Null.is_scalar());
        assert!(!ValueKind::Mapping.is_scalar());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ValueKind::Sequence).unwrap();
        assert_eq!(json, "\"sequence\"");
    }
}
