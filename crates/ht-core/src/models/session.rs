//! Session - one device's login state against a user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session row for a device. For a given `device_id`, at most one session
/// has `revoked = false` at any time; a device may have many historical
/// revoked sessions. Sessions hold a weak reference to their user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque record id assigned by the remote store
    pub id: String,
    /// Record id of the owning user identity
    pub user_id: String,
    pub user_email: String,
    /// Stable per-installation device identifier
    pub device_id: String,
    /// Client-generated session token
    pub session_token: String,
    /// A revoked session is equivalent to "no session"; it is superseded
    /// by a new row, never reactivated by mutation.
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        !self.revoked
    }
}
