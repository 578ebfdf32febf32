//! Observation record construction.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::format::SourceFormat;
use super::schema::ObservationSchema;

/// One parsed observation: field name to raw string value, in schema
/// order. Values are never coerced to numbers because several fields
/// are codes, not measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationRecord {
    pairs: Vec<(String, String)>,
}

impl ObservationRecord {
    /// Builds a record from one data line by positional pairing with
    /// the schema. Returns `None` when the cleaned token count differs
    /// from the field count; truncated lines are expected noise in this
    /// data source and must not abort processing.
    pub fn build(
        line: &str,
        schema: &ObservationSchema,
        format: &SourceFormat,
    ) -> Option<Self> {
        let tokens = format.tokens(line);

        if tokens.len() != schema.len() {
            return None;
        }

        let pairs = schema
            .fields()
            .iter()
            .cloned()
            .zip(tokens.into_iter().map(String::from))
            .collect();

        Some(Self { pairs })
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for ObservationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (field, value) in &self.pairs {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

// -- Tests -------------------------------------------------------------------
