//! User identity - the canonical user record behind an email address.

use serde::{Deserialize, Serialize};

/// A user identity is keyed case-insensitively by email: at most one
/// identity exists per email value, regardless of casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Opaque record id assigned by the remote store
    pub id: String,
    pub email: String,
    /// Display name; empty when never supplied
    pub name: String,
}

impl UserIdentity {
    pub fn new(id: String, email: String, name: String) -> Self {
        Self { id, email, name }
    }

    /// Normalized form of the email used for identity comparison
    pub fn email_key(&self) -> String {
        self.email.to_lowercase()
    }

    /// Whether this identity refers to the same user as `email`
    pub fn matches_email(&self, email: &str) -> bool {
        self.email_key() == email.to_lowercase()
    }
}
