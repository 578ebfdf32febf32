//! Per-source response format configuration.
//!
//! The upstream endpoints disagree on delimiter and placeholder handling
//! for what is nominally the same observation format, so every endpoint
//! carries its own `SourceFormat` rather than assuming one universal
//! layout.

/// Field delimiter used by a text endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Whitespace,
}

/// Describes how one endpoint lays out its text response.
#[derive(Debug, Clone)]
pub struct SourceFormat {
    /// Leading character of a schema-declaration line.
    pub header_marker: char,
    /// Substring marking a "no data" line, excluded from results.
    pub sentinel: &'static str,
    pub delimiter: Delimiter,
    /// Token discarded during header and row cleanup.
    pub placeholder: &'static str,
}

/// Surface observation endpoint: whitespace-delimited, `#` headers.
pub const SFC_OBS: SourceFormat = SourceFormat {
    header_marker: '#',
    sentinel: "77777",
    delimiter: Delimiter::Whitespace,
    placeholder: "=",
};

/// AWS minutely endpoint with `disp=1`: comma-delimited, no header line.
pub const AWS_MINUTELY: SourceFormat = SourceFormat {
    header_marker: '#',
    sentinel: "77777",
    delimiter: Delimiter::Comma,
    placeholder: "=",
};

impl SourceFormat {
    /// Splits a line into cleaned tokens: trimmed, with empty and
    /// placeholder tokens dropped. Used for both header and data lines
    /// so the two always agree on field counts.
    pub fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            Delimiter::Comma => line
                .split(',')
                .map(str::trim)
                .filter(|token| self.keeps(token))
                .collect(),
            Delimiter::Whitespace => line
                .split_whitespace()
                .filter(|token| self.keeps(token))
                .collect(),
        }
    }

    fn keeps(&self, token: &str) -> bool {
        !token.is_empty() && token != self.placeholder
    }
}

// -- Tests -------------------------------------------------------------------
