use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer shape of `GET web-api/v1/locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locations {
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub devices: Vec<Device>,
    pub low_battery_count: i64,
    pub device_count: i64,
    pub floorplans: Vec<serde_json::Value>,
    pub usage_hours: UsageHours,
    #[serde(default)]
    pub address: Option<String>,
}

/// Present in the payload but always empty for the dashboard account view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageHours {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial_number: String,
    pub location_name: String,
    pub location_id: Uuid,
    pub room_name: String,
    pub publicly_available: bool,
    pub segment_id: Uuid,
    pub segment_start: NaiveDateTime,
    pub current_sensor_values: Vec<CurrentSensorValue>,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub latest_sample: Option<NaiveDateTime>,
    #[serde(default)]
    pub battery_percentage: Option<i64>,
    #[serde(default)]
    pub rssi: Option<i64>,
    #[serde(default)]
    pub relay_device: Option<String>,
    #[serde(default)]
    pub is_hub_connection_lost: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSensorValue {
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub value: f64,
    pub provided_unit: String,
    pub preferred_unit: String,
    pub is_alert: bool,
    pub thresholds: Vec<i64>,
}
