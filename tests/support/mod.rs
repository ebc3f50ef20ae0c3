#![allow(dead_code)]

use airthings_web::{AirthingsClient, Config, Credentials};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "user@example.com";
pub const PASSWORD: &str = "hunter2";
pub const ACCOUNTS_TOKEN: &str = "accounts-access-1";
pub const ACCESS_TOKEN: &str = "dashboard-access-1";
pub const REFRESH_TOKEN: &str = "dashboard-refresh-1";
pub const AUTH_CODE: &str = "auth-code-1";

pub const LOCATION_ID: &str = "8c10cb25-c3ba-413e-9a6e-2d4c0f6aaf1e";
pub const SEGMENT_ID: &str = "61000c91-5bfa-4e4c-8e86-7f3a1cb0e1f3";
pub const USER_ID: &str = "7d25e936-16d7-4182-9ba9-50fdfc1f30c2";

/// Client whose accounts and web API bases point at the mock server.
pub fn client(server: &MockServer) -> AirthingsClient {
    let config = Config::default()
        .with_accounts_api_base(format!("{}/accounts/v1", server.uri()))
        .with_web_api_base(format!("{}/web/v1", server.uri()));
    AirthingsClient::with_config(Credentials::new(USERNAME, PASSWORD), config)
}

/// The opaque consent blob step 2 returns and step 3 must echo back.
pub fn consent_payload() -> serde_json::Value {
    json!({
        "clientId": "dashboard",
        "scopes": ["dashboard"],
        "userId": USER_ID
    })
}

/// Mount the four login steps, each expecting `expected_logins` hits.
///
/// The final token exchange answers with `expires_in` so tests can hand out
/// already-expired tokens.
pub async fn mount_login(server: &MockServer, expires_in: u64, expected_logins: u64) {
    Mock::given(method("POST"))
        .and(path("/accounts/v1/token"))
        .and(body_json(json!({
            "username": USERNAME,
            "password": PASSWORD,
            "grant_type": "password",
            "client_id": "accounts",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": ACCOUNTS_TOKEN })),
        )
        .expect(expected_logins)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accounts/v1/consents/dashboard"))
        .and(query_param("client_id", "dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(consent_payload()))
        .expect(expected_logins)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/accounts/v1/authorize"))
        .and(query_param("client_id", "dashboard"))
        .and(body_json(consent_payload()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirect_uri":
                format!("https://dashboard.airthings.com/?code={AUTH_CODE}&state=ok")
        })))
        .expect(expected_logins)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/accounts/v1/token"))
        .and(body_partial_json(json!({
            "grant_type": "authorization_code",
            "code": AUTH_CODE,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "refresh_token": REFRESH_TOKEN,
            "expires_in": expires_in,
        })))
        .expect(expected_logins)
        .mount(server)
        .await;
}

pub fn relay_devices_payload() -> serde_json::Value {
    json!({
        "hubs": [{
            "serialNumber": "2820098765",
            "deviceType": "HUB",
            "locationId": LOCATION_ID,
            "name": "Hallway Hub",
            "metaData": {
                "lastSeen": "2021-04-11T08:59:31",
                "bleFirmwareVersion": "2.2.1",
                "subFirmwareVersion": "1.2.6",
                "stFirmwareVersion": "1.4.8",
                "lastSeenDevices": ["2930012345"],
                "devices": { "2930012345": -58 },
                "region": "eu",
                "cell": false
            }
        }]
    })
}

pub fn locations_payload() -> serde_json::Value {
    json!({
        "locations": [{
            "id": LOCATION_ID,
            "name": "Home",
            "lat": 59.9139,
            "lng": 10.7522,
            "devices": [
                {
                    "serialNumber": "2930012345",
                    "locationName": "Home",
                    "locationId": LOCATION_ID,
                    "roomName": "Bedroom",
                    "publiclyAvailable": false,
                    "segmentId": SEGMENT_ID,
                    "segmentStart": "2021-03-14T09:21:12",
                    "currentSensorValues": [
                        {
                            "type": "radonShortTermAvg",
                            "value": 23.0,
                            "providedUnit": "bq",
                            "preferredUnit": "bq",
                            "isAlert": false,
                            "thresholds": [100, 150]
                        },
                        {
                            "type": "temp",
                            "value": 21.3,
                            "providedUnit": "c",
                            "preferredUnit": "c",
                            "isAlert": false,
                            "thresholds": [18, 25]
                        }
                    ],
                    "type": "WAVE_PLUS",
                    "latestSample": "2021-04-11T08:59:58",
                    "batteryPercentage": 85,
                    "rssi": -61,
                    "relayDevice": "2820098765",
                    "isHubConnectionLost": false
                },
                {
                    "serialNumber": "2820098765",
                    "locationName": "Home",
                    "locationId": LOCATION_ID,
                    "roomName": "Hallway",
                    "publiclyAvailable": false,
                    "segmentId": SEGMENT_ID,
                    "segmentStart": "2021-03-14T09:21:12",
                    "currentSensorValues": [],
                    "type": "HUB",
                    "latestSample": null,
                    "batteryPercentage": null,
                    "rssi": null,
                    "relayDevice": null,
                    "isHubConnectionLost": null
                }
            ],
            "lowBatteryCount": 0,
            "deviceCount": 2,
            "floorplans": [],
            "usageHours": {},
            "address": "Storgata 1, Oslo"
        }]
    })
}

fn banded(kind: &str, unit: &str, low: i64, high: i64) -> serde_json::Value {
    json!({
        "type": kind,
        "unit": unit,
        "ranges": [
            { "rating": "GOOD", "from": null, "to": low },
            { "rating": "FAIR", "from": low, "to": high },
            { "rating": "POOR", "from": high, "to": null }
        ]
    })
}

pub fn thresholds_payload() -> serde_json::Value {
    json!({
        "thresholds": {
            "temp": {
                "type": "temp",
                "unit": "c",
                "ranges": [
                    { "rating": "POOR", "from": null, "to": 18 },
                    { "rating": "GOOD", "from": 18, "to": 25 },
                    { "rating": "POOR", "from": 25, "to": null }
                ]
            },
            "humidity": {
                "type": "humidity",
                "unit": "pct",
                "ranges": [
                    { "rating": "POOR", "from": null, "to": 25 },
                    { "rating": "FAIR", "from": 25, "to": 30 },
                    { "rating": "GOOD", "from": 30, "to": 60 },
                    { "rating": "FAIR", "from": 60, "to": 70 },
                    { "rating": "POOR", "from": 70, "to": null }
                ]
            },
            "voc": banded("voc", "ppb", 250, 2000),
            "co2": banded("co2", "ppm", 800, 1000),
            "radonShortTermAvg": banded("radonShortTermAvg", "bq", 100, 150),
            "pressure": {
                "type": "pressure",
                "unit": "hpa",
                "ranges": [{ "rating": "GOOD" }]
            },
            "mold": banded("mold", "riskIndex", 3, 7),
            "virusRisk": banded("virusRisk", "riskIndex", 3, 7)
        }
    })
}

pub fn me_payload() -> serde_json::Value {
    json!({
        "name": "Kari Nordmann",
        "email": USERNAME,
        "dateFormat": "dd.MM.yyyy",
        "measurementUnit": "METRIC",
        "isProUser": false,
        "notifications": {
            "thresholds": {
                "co2": {
                    "defaultHigh": 1000,
                    "defaultLow": 400,
                    "minSelectableValue": 400,
                    "maxSelectableValue": 5000,
                    "unit": "ppm",
                    "thresholdDelta": 50.0
                }
            }
        },
        "rfRegion": "eu",
        "isDemoUser": false,
        "groups": [{
            "id": "a7f3dd44-1a64-4c1b-9c60-0fb3cbd1a8c5",
            "groupName": USERNAME,
            "genesis": true,
            "role": "OWNER",
            "createdByUserId": USER_ID,
            "createdAt": "2020-12-26T18:11:07.142",
            "updatedAt": "2020-12-26T18:11:07.142",
            "displaySubscription": false
        }],
        "language": "en",
        "intercomUserHash": "3f1fb3a06cdb92f0d52b04a686de683bb906a4f5",
        "userId": USER_ID
    })
}
