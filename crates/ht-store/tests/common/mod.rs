#![allow(dead_code)]

//! Test infrastructure for repository tests against a wiremock store.

use ht_store::{StoreClient, StoreConfig};

use serde_json::{Value, json};

pub const BASE_ID: &str = "appTEST";

/// Client pointed at a mock store server
pub fn test_client(uri: &str) -> StoreClient {
    let config = StoreConfig::new(BASE_ID, "test-token").with_api_root(uri);
    StoreClient::new(config).expect("Failed to build store client")
}

/// One-record page payload
pub fn page(records: Vec<Value>) -> Value {
    json!({ "records": records })
}

pub fn empty_page() -> Value {
    json!({ "records": [] })
}

pub fn user_record(id: &str, email: &str, name: &str) -> Value {
    json!({
        "id": id,
        "createdTime": "2026-01-02T03:04:05.000Z",
        "fields": { "Email": email, "Name": name }
    })
}

pub fn session_record(
    id: &str,
    user_id: &str,
    email: &str,
    device_id: &str,
    session_token: &str,
    created_time: &str,
) -> Value {
    json!({
        "id": id,
        "createdTime": created_time,
        "fields": {
            "Email": email,
            "UserId": user_id,
            "DeviceId": device_id,
            "SessionId": session_token
        }
    })
}
