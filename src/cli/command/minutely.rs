//! Download minutely AWS observations for every registered point.
//!
//! With `disp=1` the endpoint returns comma-delimited rows and no
//! header line, so the field list is supplied statically. Every valid
//! row is kept and labelled with its point.

use anyhow::Result;

use crate::{
    cli::create_progress_bar,
    credentials,
    fetch::fetch_text,
    observation::{format::AWS_MINUTELY, reduce, ObservationSchema},
    output::{json, LabelledRecord},
    stations::{ObsPoint, OBS_POINTS},
};

use super::make_output_file_name;

const AWS_OBS_URL: &str = "https://apihub.kma.go.kr/api/typ01/cgi-bin/url/nph-aws2_min";

/// Field layout of the headerless minutely response.
static AWS_FIELDS: &[&str] = &["tm", "ta", "rn_ox", "rn_60m", "vs"];

pub async fn minutely() -> Result<String> {
    let auth_key = credentials::require(credentials::KMA_API_KEY)?;
    let client = reqwest::Client::new();
    let output_file_name = make_output_file_name("kma-minutely", "json");

    let schema = ObservationSchema::from_fields(AWS_FIELDS);

    let pb = create_progress_bar(
        OBS_POINTS.len() as u64,
        "Fetching minutely observations...".to_string(),
    );
    let mut records: Vec<LabelledRecord> = Vec::new();

    for point in OBS_POINTS {
        let url = build_aws_url(&auth_key, point);

        match fetch_text(&client, &url).await {
            Ok(body) => {
                let mut page_records = Vec::new();
                reduce::collect_matching(
                    &body,
                    &AWS_MINUTELY,
                    Some(&schema),
                    |_| true,
                    &mut page_records,
                );

                records.extend(page_records.into_iter().map(|record| LabelledRecord {
                    station: point.label.to_string(),
                    record,
                }));
            }
            Err(e) => eprintln!("Skipping {}: {}", point.label, e),
        }

        pb.inc(1);
    }
    pb.finish_with_message("Minutely observations fetched");

    if records.is_empty() {
        println!("No observations collected; writing an empty result file");
    }
    json::save_minutely(&records, &output_file_name)?;

    Ok(output_file_name.to_string_lossy().to_string())
}

fn build_aws_url(auth_key: &str, point: &ObsPoint) -> String {
    format!(
        "{}?lon={}&lat={}&disp=1&authKey={}",
        AWS_OBS_URL, point.longitude, point.latitude, auth_key
    )
}

// -- Tests -------------------------------------------------------------------
