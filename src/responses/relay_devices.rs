use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer shape of `GET web-api/v1/relay-devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayDevices {
    pub hubs: Vec<Hub>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    pub serial_number: String,
    pub device_type: String,
    pub location_id: Uuid,
    pub name: String,
    pub meta_data: MetaData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub last_seen: NaiveDateTime,
    pub ble_firmware_version: String,
    pub sub_firmware_version: String,
    pub st_firmware_version: String,
    pub last_seen_devices: Vec<String>,
    /// Serial number to signal-strength map, as reported by the hub.
    pub devices: HashMap<String, i64>,
    pub region: String,
    pub cell: bool,
}
