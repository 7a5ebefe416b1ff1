use serde::Deserialize;

/// Inbound sync body.
///
/// Every field is optional at the deserialization layer so that a missing
/// required field surfaces as a 400 from handler validation rather than a
/// 422 from the JSON extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncUserRequest {
    #[serde(default)]
    pub email: Option<String>,

    /// Optional display name, used only when a new identity is created
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub device_id: Option<String>,

    /// Client-generated session token
    #[serde(default)]
    pub session_id: Option<String>,
}
