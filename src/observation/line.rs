//! Response line classification.

use super::format::SourceFormat;

/// What one line of a text response is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Schema declaration, begins with the header marker.
    Header,
    /// Blank, or carries the missing-data sentinel. Discarded.
    Sentinel,
    /// Candidate observation row.
    Data,
}

/// Classifies a line. Marker checks happen before any tokenization, so
/// a header line never reaches the tokenizer as data.
pub fn classify(line: &str, format: &SourceFormat) -> LineKind {
    let trimmed = line.trim();

    if trimmed.starts_with(format.header_marker) {
        LineKind::Header
    } else if trimmed.is_empty() || trimmed.contains(format.sentinel) {
        LineKind::Sentinel
    } else {
        LineKind::Data
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::observation::format::SFC_OBS;

    #[test]
    fn should_classify_header_line() {
        assert_eq!(classify("# tm ta", &SFC_OBS), LineKind::Header);
        assert_eq!(classify("  #tm,ta", &SFC_OBS), LineKind::Header);
    }

    #[test]
    fn should_classify_blank_line_as_sentinel() {
        assert_eq!(classify("", &SFC_OBS), LineKind::Sentinel);
        assert_eq!(classify("   ", &SFC_OBS), LineKind::Sentinel);
    }

    #[test]
    fn should_classify_sentinel_anywhere_in_line() {
        assert_eq!(classify("77777", &SFC_OBS), LineKind::Sentinel);
        assert_eq!(classify("202401010000 77777 0", &SFC_OBS), LineKind::Sentinel);
    }

    #[test]
    fn should_classify_everything_else_as_data() {
        assert_eq!(classify("202401010000 5.2 0", &SFC_OBS), LineKind::Data);
    }

    #[test]
    fn should_prefer_header_over_sentinel() {
        // A header carrying the sentinel substring is still a header.
        assert_eq!(classify("# tm 77777", &SFC_OBS), LineKind::Header);
    }
}
