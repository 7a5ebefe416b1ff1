use ht_core::{Session, UserIdentity};

use serde::Serialize;

/// Minimal user/session view returned to the client after a sync
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncedUserDto {
    pub email: String,
    pub user_id: String,
    pub session_id: String,
    pub device_id: String,
    pub name: String,
}

impl SyncedUserDto {
    /// Combine the resolved identity and reconciled session.
    ///
    /// `requested_name` takes precedence over the stored name so a client
    /// that just supplied a name sees it echoed back even though the
    /// lookup path never rewrites the stored record.
    pub fn from_parts(user: UserIdentity, session: Session, requested_name: Option<&str>) -> Self {
        Self {
            email: session.user_email,
            user_id: user.id,
            session_id: session.session_token,
            device_id: session.device_id,
            name: requested_name.map(str::to_string).unwrap_or(user.name),
        }
    }
}
