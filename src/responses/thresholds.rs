use serde::{Deserialize, Serialize};

/// Answer shape of `GET web-api/v1/thresholds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub thresholds: ThresholdProfile,
}

/// Per-sensor rating bands for the dashboard gauges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdProfile {
    pub temp: SensorThreshold,
    pub humidity: SensorThreshold,
    pub voc: SensorThreshold,
    pub co2: SensorThreshold,
    pub radon_short_term_avg: SensorThreshold,
    pub pressure: PressureThreshold,
    pub mold: SensorThreshold,
    pub virus_risk: SensorThreshold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorThreshold {
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub unit: String,
    pub ranges: Vec<SensorRange>,
}

/// A rating band; open-ended bands omit `to` or `from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRange {
    pub rating: Rating,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub from: Option<i64>,
}

/// Pressure carries ratings only, no numeric bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureThreshold {
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub unit: String,
    pub ranges: Vec<PressureRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureRange {
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Fair,
    Good,
    Poor,
}
