//! Dump the national flood history listing.
//!
//! Walks every page of the paginated JSON listing, optionally keeps
//! only records for one province code, and writes a CSV with the
//! Korean column labels from the service specification.

use anyhow::Result;
use serde_json::Value;

use crate::{credentials, fetch, output::csv};

use super::make_output_file_name;

/// Field carrying the province code in each listing record.
const REGION_CODE_FIELD: &str = "STDG_CTPV_CD";

pub async fn flood(region: Option<&str>) -> Result<String> {
    let service_key = credentials::require(credentials::SAFETYDATA_SERVICE_KEY)?;
    let client = reqwest::Client::new();
    let output_file_name = make_output_file_name("flood-history", "csv");

    let items = fetch::fetch_flood_pages(&client, &service_key).await?;

    let kept: Vec<Value> = match region {
        Some(code) => items
            .into_iter()
            .filter(|item| region_matches(item, code))
            .collect(),
        None => items,
    };

    if kept.is_empty() {
        println!("No flood records matched; writing an empty result file");
    } else {
        println!("Collected {} flood records", kept.len());
    }
    csv::save_flood(&kept, &output_file_name)?;

    Ok(output_file_name.to_string_lossy().to_string())
}

// The listing has served the province code as both a string and a
// number, so the comparison goes through text.
fn region_matches(item: &Value, code: &str) -> bool {
    match item.get(REGION_CODE_FIELD) {
        Some(Value::String(s)) => s == code,
        Some(Value::Number(n)) => n.to_string() == code,
        _ => false,
    }
}

// -- Tests -------------------------------------------------------------------
