//! Save flood history records to a CSV file.

use std::{fs::File, io::Write, path::PathBuf};

use anyhow::Result;
use serde_json::Value;

/// Column order and relabeling for the flood history dump: API field
/// name to the Korean label from the service specification.
pub static FLOOD_COLUMNS: &[(&str, &str)] = &[
    ("SN", "일련번호"),
    ("FLDN_DOWA", "침수수심"),
    ("FLDN_GRD", "침수등급"),
    ("FLDN_AREA", "침수면적"),
    ("FLDN_YR", "침수연도"),
    ("FLDN_DST_NM", "침수재해명"),
    ("FLDN_CS_DTL_NM", "침수원인상세명"),
    ("FLDN_BGNG_YMD", "침수시작일자"),
    ("STDG_CTPV_CD", "시도코드"),
    ("STDG_SGG_CD", "시군구코드"),
    ("GEOM", "지오메트리"),
];

/// Writes the records as CSV with relabeled columns. Spreadsheet tools
/// need the leading UTF-8 BOM to decode the Hangul labels correctly.
pub fn save_flood(items: &[Value], file_path: &PathBuf) -> Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(FLOOD_COLUMNS.iter().map(|(_, label)| *label))?;

    for item in items {
        let row: Vec<String> = FLOOD_COLUMNS
            .iter()
            .map(|(field, _)| field_text(item, field))
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

/// Renders one field as CSV cell text. Strings are written bare,
/// numbers in their JSON form, absent or null fields as empty cells.
fn field_text(item: &Value, field: &str) -> String {
    match item.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn should_write_relabeled_header_and_rows() {
        let tmp_dir = TempDir::new().unwrap();
        let file_path = tmp_dir.path().join("flood.csv");

        let items = vec![json!({
            "SN": 1,
            "FLDN_YR": "2023",
            "STDG_CTPV_CD": "27",
            "FLDN_DST_NM": "호우"
        })];
        save_flood(&items, &file_path).unwrap();

        let text = std::fs::read_to_string(&file_path).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.contains("일련번호"));
        assert!(header.contains("시도코드"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("1,"));
        assert!(row.contains("2023"));
        assert!(row.contains("호우"));
    }

    #[test]
    fn should_prefix_file_with_utf8_bom() {
        let tmp_dir = TempDir::new().unwrap();
        let file_path = tmp_dir.path().join("flood.csv");

        save_flood(&[], &file_path).unwrap();

        let bytes = std::fs::read(&file_path).unwrap();
        assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn should_write_header_only_for_empty_result() {
        let tmp_dir = TempDir::new().unwrap();
        let file_path = tmp_dir.path().join("flood.csv");

        save_flood(&[], &file_path).unwrap();

        let text = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn should_leave_missing_fields_empty() {
        let item = json!({ "SN": 7 });

        assert_eq!(field_text(&item, "SN"), "7");
        assert_eq!(field_text(&item, "FLDN_YR"), "");
        assert_eq!(field_text(&json!({ "FLDN_YR": null }), "FLDN_YR"), "");
    }
}
