//! Download the latest surface observation for every registered point.
//!
//! The endpoint returns a delimited-text page per point, most recent
//! reading first, so the first valid row is the one that is kept. One
//! point failing does not stop the rest of the batch.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Duration, Local};

use crate::{
    cli::create_progress_bar,
    credentials,
    fetch::fetch_text,
    observation::{format::SFC_OBS, reduce},
    output::{json, StationReport},
    stations::{ObsPoint, OBS_POINTS},
};

use super::make_output_file_name;

const SFC_OBS_URL: &str = "https://apihub.kma.go.kr/api/typ01/cgi-bin/url/nph-sfc_obs_nc_pt_api";

/// Observation window length. The endpoint rejects open-ended queries,
/// so the request asks for the last few hours at a 10 minute interval
/// and keeps only the newest row.
const WINDOW_HOURS: i64 = 3;

pub async fn current() -> Result<String> {
    let auth_key = credentials::require(credentials::KMA_API_KEY)?;
    let client = reqwest::Client::new();
    let output_file_name = make_output_file_name("kma-current", "json");

    let end = Local::now();
    let begin = end - Duration::hours(WINDOW_HOURS);

    let pb = create_progress_bar(
        OBS_POINTS.len() as u64,
        "Fetching surface observations...".to_string(),
    );
    let mut reports = BTreeMap::new();

    for point in OBS_POINTS {
        let url = build_obs_url(&auth_key, point, &begin, &end);

        match fetch_text(&client, &url).await {
            Ok(body) => {
                // A page with no valid row leaves the point absent
                // from the report; that is not an error.
                if let Some(record) = reduce::first_match(&body, &SFC_OBS, None) {
                    reports.insert(
                        point.label.to_string(),
                        StationReport {
                            latitude: point.latitude,
                            longitude: point.longitude,
                            observation: record,
                        },
                    );
                }
            }
            Err(e) => eprintln!("Skipping {}: {}", point.label, e),
        }

        pb.inc(1);
    }
    pb.finish_with_message("Surface observations fetched");

    if reports.is_empty() {
        println!("No observations collected; writing an empty result file");
    }
    json::save_current(&reports, &output_file_name)?;

    Ok(output_file_name.to_string_lossy().to_string())
}

fn build_obs_url(
    auth_key: &str,
    point: &ObsPoint,
    begin: &DateTime<Local>,
    end: &DateTime<Local>,
) -> String {
    format!(
        "{}?obs=ta&tm1={}&tm2={}&itv=10&lon={}&lat={}&authKey={}",
        SFC_OBS_URL,
        begin.format("%Y%m%d%H%M"),
        end.format("%Y%m%d%H%M"),
        point.longitude,
        point.latitude,
        auth_key
    )
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_build_obs_url() {
        let point = ObsPoint {
            label: "제주",
            latitude: 33.361,
            longitude: 126.5329,
        };
        let begin = Local.with_ymd_and_hms(2023, 6, 11, 0, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2023, 6, 11, 3, 0, 0).unwrap();

        let url = build_obs_url("testkey", &point, &begin, &end);

        assert!(url.starts_with(SFC_OBS_URL));
        assert!(url.contains("tm1=202306110000"));
        assert!(url.contains("tm2=202306110300"));
        assert!(url.contains("itv=10"));
        assert!(url.contains("lon=126.5329"));
        assert!(url.contains("lat=33.361"));
        assert!(url.contains("authKey=testkey"));
    }
}
