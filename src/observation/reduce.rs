//! Selection reducers over one page of response text.
//!
//! Both reducers scan lines in document order, resolving the schema
//! from header lines unless the caller supplied a static one. A data
//! line arriving before any schema has been resolved is dropped, the
//! same as a malformed line.

use super::format::SourceFormat;
use super::line::{self, LineKind};
use super::record::ObservationRecord;
use super::schema::ObservationSchema;

/// Returns the first record that builds successfully, in document
/// order. The observation endpoints return most-recent-first, so the
/// first match is the latest reading. `None` when the page holds no
/// valid data row; that is an absent result, not an error.
pub fn first_match(
    body: &str,
    format: &SourceFormat,
    static_schema: Option<&ObservationSchema>,
) -> Option<ObservationRecord> {
    let mut schema = static_schema.cloned();

    for raw_line in body.lines() {
        match line::classify(raw_line, format) {
            LineKind::Header => {
                // Last header wins; ignored entirely in static mode.
                if static_schema.is_none() {
                    schema = Some(ObservationSchema::from_header(raw_line, format));
                }
            }
            LineKind::Sentinel => {}
            LineKind::Data => {
                if let Some(schema) = schema.as_ref() {
                    if let Some(record) = ObservationRecord::build(raw_line, schema, format) {
                        return Some(record);
                    }
                }
            }
        }
    }

    None
}

/// Appends every record that builds successfully and passes the
/// predicate to the caller-owned accumulator, preserving document
/// order. Never stops early; malformed lines are skipped silently.
pub fn collect_matching<F>(
    body: &str,
    format: &SourceFormat,
    static_schema: Option<&ObservationSchema>,
    predicate: F,
    out: &mut Vec<ObservationRecord>,
) where
    F: Fn(&ObservationRecord) -> bool,
{
    let mut schema = static_schema.cloned();

    for raw_line in body.lines() {
        match line::classify(raw_line, format) {
            LineKind::Header => {
                if static_schema.is_none() {
                    schema = Some(ObservationSchema::from_header(raw_line, format));
                }
            }
            LineKind::Sentinel => {}
            LineKind::Data => {
                if let Some(schema) = schema.as_ref() {
                    if let Some(record) = ObservationRecord::build(raw_line, schema, format) {
                        if predicate(&record) {
                            out.push(record);
                        }
                    }
                }
            }
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::observation::format::{AWS_MINUTELY, SFC_OBS};

    #[test]
    fn should_take_first_valid_record_and_ignore_later_ones() {
        let body = "# tm ta\n202401010300 5.2\n202401010200 4.8\n202401010100 4.1\n";
        let record = first_match(body, &SFC_OBS, None).unwrap();

        assert_eq!(record.get("tm"), Some("202401010300"));
        assert_eq!(record.get("ta"), Some("5.2"));
    }

    #[test]
    fn should_skip_malformed_lines_when_selecting_first() {
        let body = "# tm ta\n202401010300\n202401010200 4.8\n";
        let record = first_match(body, &SFC_OBS, None).unwrap();

        assert_eq!(record.get("tm"), Some("202401010200"));
    }

    #[test]
    fn should_return_none_for_page_without_data() {
        let body = "# tm ta\n77777\n\n";
        assert!(first_match(body, &SFC_OBS, None).is_none());
    }

    #[test]
    fn should_drop_data_arriving_before_any_header() {
        let body = "202401010300 5.2\n# tm ta\n202401010200 4.8\n";
        let record = first_match(body, &SFC_OBS, None).unwrap();

        assert_eq!(record.get("tm"), Some("202401010200"));
    }

    #[test]
    fn should_let_last_header_win() {
        let body = "# x y\n# tm ta\n202401010300 5.2\n";
        let record = first_match(body, &SFC_OBS, None).unwrap();

        assert_eq!(record.get("tm"), Some("202401010300"));
        assert_eq!(record.get("x"), None);
    }

    #[test]
    fn should_never_emit_sentinel_lines() {
        // Token count matches the schema, but the sentinel appears.
        let body = "# tm ta\n202401010300 77777\n";
        assert!(first_match(body, &SFC_OBS, None).is_none());
    }

    #[test]
    fn should_collect_records_matching_predicate_in_order() {
        let schema = ObservationSchema::from_fields(&["sn", "code"]);
        let body = "1,27\n2,11\n3,27\n";

        let mut out = Vec::new();
        collect_matching(
            body,
            &AWS_MINUTELY,
            Some(&schema),
            |r| r.get("code") == Some("27"),
            &mut out,
        );

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].get("sn"), Some("1"));
        assert_eq!(out[1].get("sn"), Some("3"));
    }

    #[test]
    fn should_never_emit_more_records_than_data_lines() {
        let body = "# tm ta\n1 2\n77777\nmalformed\n3 4\n";

        let mut out = Vec::new();
        collect_matching(body, &SFC_OBS, None, |_| true, &mut out);

        // Three lines classify as data ("malformed" included); only two
        // build into records.
        assert!(out.len() <= 3);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn should_reduce_identically_on_repeated_input() {
        let body = "# tm ta\n202401010300 5.2\n202401010200 4.8\n";

        let mut first_pass = Vec::new();
        let mut second_pass = Vec::new();
        collect_matching(body, &SFC_OBS, None, |_| true, &mut first_pass);
        collect_matching(body, &SFC_OBS, None, |_| true, &mut second_pass);

        assert_eq!(first_pass, second_pass);
        assert_eq!(
            first_match(body, &SFC_OBS, None),
            first_match(body, &SFC_OBS, None)
        );
    }

    #[test]
    fn should_parse_comma_header_and_row() {
        let body = "#a,b,c\n1,2,3\n";
        let record = first_match(body, &AWS_MINUTELY, None).unwrap();

        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.get("c"), Some("3"));
    }
}
