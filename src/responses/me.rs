use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer shape of `GET web-api/v1/me/`: the account profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub name: String,
    pub email: String,
    pub date_format: String,
    pub measurement_unit: String,
    pub is_pro_user: bool,
    pub notifications: Notifications,
    pub rf_region: String,
    pub is_demo_user: bool,
    pub groups: Vec<Group>,
    pub language: String,
    pub intercom_user_hash: String,
    pub user_id: Uuid,
}

/// Notification thresholds keyed by sensor type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notifications {
    pub thresholds: HashMap<String, NotificationThreshold>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationThreshold {
    pub default_high: i64,
    pub default_low: i64,
    pub min_selectable_value: i64,
    pub max_selectable_value: i64,
    pub unit: String,
    pub threshold_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub group_name: String,
    pub genesis: bool,
    pub role: String,
    pub created_by_user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub display_subscription: bool,
}
