//! Observation point registry.
//!
//! Canonical list of the locations this tool queries. The observation
//! API keys results on coordinates only, so the label and coordinates
//! here are the query context attached to each downloaded record. All
//! commands reference points from here rather than hardcoding
//! coordinates.

/// One monitored location.
#[derive(Debug)]
pub struct ObsPoint {
    /// Location label, used as the result key in output files.
    pub label: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// All monitored observation points.
pub static OBS_POINTS: &[ObsPoint] = &[
    ObsPoint {
        label: "제주",
        latitude: 33.361,
        longitude: 126.5329,
    },
    ObsPoint {
        label: "서울",
        latitude: 37.5714,
        longitude: 126.9658,
    },
    ObsPoint {
        label: "대구",
        latitude: 35.878,
        longitude: 128.653,
    },
    ObsPoint {
        label: "부산",
        latitude: 35.1047,
        longitude: 129.032,
    },
    ObsPoint {
        label: "인천",
        latitude: 37.4777,
        longitude: 126.6249,
    },
];

/// Looks up a point by label. Returns `None` if not registered.
pub fn find_point(label: &str) -> Option<&'static ObsPoint> {
    OBS_POINTS.iter().find(|p| p.label == label)
}

// -- Tests -------------------------------------------------------------------
