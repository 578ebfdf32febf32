//! Save extracted observations to JSON files.
//!
//! Output is UTF-8 with non-ASCII characters written as-is, so the
//! Korean labels stay readable in the file.

use std::{collections::BTreeMap, fs::File, path::PathBuf};

use anyhow::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::observation::ObservationRecord;

/// The selected observation for one point, merged with its
/// coordinates. Serializes as a single flat object.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReport {
    pub latitude: f64,
    pub longitude: f64,
    pub observation: ObservationRecord,
}

impl Serialize for StationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.observation.len()))?;
        map.serialize_entry("latitude", &self.latitude)?;
        map.serialize_entry("longitude", &self.longitude)?;
        for (field, value) in self.observation.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// One observation with its point label attached, for the flat-array
/// output shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledRecord {
    pub station: String,
    pub record: ObservationRecord,
}

impl Serialize for LabelledRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.record.len()))?;
        map.serialize_entry("station", &self.station)?;
        for (field, value) in self.record.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// Saves the per-station report map, keyed by point label.
pub fn save_current(reports: &BTreeMap<String, StationReport>, file_path: &PathBuf) -> Result<()> {
    let file = File::create(file_path)?;
    serde_json::to_writer_pretty(file, reports)?;

    Ok(())
}

/// Saves the flat record sequence.
pub fn save_minutely(records: &[LabelledRecord], file_path: &PathBuf) -> Result<()> {
    let file = File::create(file_path)?;
    serde_json::to_writer_pretty(file, records)?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
