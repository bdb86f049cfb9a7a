use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a registry record.
///
/// Freshly generated ids are UUID v7 strings (collision-resistant and
/// time-ordered), but the type itself places no structure on the value:
/// previously persisted data may carry ids in any format, and a `RecordId`
/// round-trips such values verbatim. Ids are compared as plain strings.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, unique record id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an existing id value. Use [`RecordId::generate`] for new records.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 characters) for display in lists.
    pub fn short_id(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.short_id())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_id_is_a_uuid_string() {
        let id = RecordId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert_eq!(id.short_id().len(), 8);
    }

    #[test]
    fn foreign_id_roundtrips_verbatim() {
        let id = RecordId::from_string("legacy-0.8133");
        assert_eq!(id.as_str(), "legacy-0.8133");
        assert_eq!(id.to_string(), "legacy-0.8133");
    }

    #[test]
    fn short_id_of_short_value() {
        let id = RecordId::from_string("abc");
        assert_eq!(id.short_id(), "abc");
    }

    #[test]
    fn serde_is_transparent() {
        let id = RecordId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    proptest::proptest! {
        #[test]
        fn any_string_survives_serde(value in "[^\"\\\\]{0,64}") {
            let id = RecordId::from_string(value.clone());
            let json = serde_json::to_string(&id).unwrap();
            let parsed: RecordId = serde_json::from_str(&json).unwrap();
            proptest::prop_assert_eq!(parsed.as_str(), value);
        }
    }
}
