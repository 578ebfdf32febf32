//! HTTP driver for the upstream APIs.
//!
//! The extractor core never touches the network; everything that
//! issues requests, walks listing pages, and skips failed responses
//! lives here. A failed page is reported and skipped, not fatal.

use std::time::Duration;

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::cli::create_progress_bar;

/// Flood history listing endpoint (Safetydata DSSP-IF-00117).
pub const FLOOD_BASE_URL: &str = "http://www.safetydata.go.kr/V2/api/DSSP-IF-00117";

/// Largest page size the listing service accepts.
pub const FLOOD_ROWS_PER_PAGE: usize = 1000;

/// Courtesy pause between listing pages. Keeps load on the server
/// polite; not a correctness mechanism.
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// Fetches a text response body, treating any non-success status as an
/// error for this request only.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("Request failed: {}", response.status()));
    }

    Ok(response.text().await?)
}

/// Downloads every page of the flood history listing and returns the
/// concatenated items. The total is probed with a single-row request
/// first, then pages are fetched in order with a fixed delay between
/// requests. Failed pages are skipped.
pub async fn fetch_flood_pages(client: &reqwest::Client, service_key: &str) -> Result<Vec<Value>> {
    let probe = fetch_flood_page(client, service_key, 1, 1).await?;
    let total = total_count(&probe);
    let total_pages = page_count(total);

    println!("Listing reports {} records over {} pages", total, total_pages);

    let pb = create_progress_bar(total_pages as u64, "Downloading flood history...".to_string());
    let mut items = Vec::new();

    for page in 1..=total_pages {
        match fetch_flood_page(client, service_key, page, FLOOD_ROWS_PER_PAGE).await {
            Ok(value) => items.extend(page_items(&value)),
            Err(e) => eprintln!("Skipping page {}: {}", page, e),
        }

        pb.inc(1);
        tokio::time::sleep(PAGE_DELAY).await;
    }
    pb.finish_with_message("Flood history downloaded");

    Ok(items)
}

async fn fetch_flood_page(
    client: &reqwest::Client,
    service_key: &str,
    page: usize,
    rows: usize,
) -> Result<Value> {
    let response = client
        .get(FLOOD_BASE_URL)
        .query(&page_params(service_key, page, rows))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("Request failed: {}", response.status()));
    }

    Ok(response.json().await?)
}

fn page_params(service_key: &str, page: usize, rows: usize) -> Vec<(&'static str, String)> {
    vec![
        ("serviceKey", service_key.to_string()),
        ("returnType", "json".to_string()),
        ("pageNo", page.to_string()),
        ("numOfRows", rows.to_string()),
    ]
}

// The trailing page is empty when the total is an exact multiple of the
// page size; the listing service tolerates the extra request.
fn page_count(total_records: usize) -> usize {
    total_records / FLOOD_ROWS_PER_PAGE + 1
}

// The listing has reported totalCount as both a number and a string.
fn total_count(value: &Value) -> usize {
    match value.get("totalCount") {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as usize,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn page_items(value: &Value) -> Vec<Value> {
    value
        .get("body")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

// -- Tests -------------------------------------------------------------------
