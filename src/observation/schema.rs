//! Field schema for one text response.

use super::format::SourceFormat;

/// Ordered field names for a response. Either resolved dynamically from
/// a header line, or supplied statically when the endpoint emits none.
/// A data row is valid only if its token count equals the field count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationSchema {
    fields: Vec<String>,
}

impl ObservationSchema {
    /// Static mode: the caller knows the field list up front.
    pub fn from_fields(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Dynamic mode: resolve the schema from a header line. The marker
    /// is stripped (some endpoints repeat it), then tokens are cleaned
    /// with the same rules as data rows.
    pub fn from_header(line: &str, format: &SourceFormat) -> Self {
        let stripped = line.trim().trim_start_matches(format.header_marker);

        Self {
            fields: format
                .tokens(stripped)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// -- Tests -------------------------------------------------------------------
