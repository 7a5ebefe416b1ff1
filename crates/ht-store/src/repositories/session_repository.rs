//! Session reconciliation: converging a new login with a device's
//! existing session state.
//!
//! ## Reconcile state machine
//!
//! For the device's current non-revoked session:
//! - none exists → insert a new row with `Revoked = false` (**Created**)
//! - one exists → patch its email, user id, and token in place (**Updated**)
//!
//! The branch is decided strictly after the lookup result is observed, and
//! exactly one write happens per successful call. Two overlapping
//! reconciles for the same device can still both insert; the
//! most-recent-wins lookup collapses the duplicates on the next reconcile.
//! Acceptable for session state, unlike anything financial.

use crate::{Formula, ListQuery, Result, SortDirection, StoreClient, StoreRecord};

use ht_core::Session;

use serde::Serialize;

const TABLE: &str = "Sessions";
const FIELD_EMAIL: &str = "Email";
const FIELD_USER_ID: &str = "UserId";
const FIELD_DEVICE_ID: &str = "DeviceId";
const FIELD_SESSION_ID: &str = "SessionId";
const FIELD_REVOKED: &str = "Revoked";
const FIELD_CREATED_AT: &str = "CreatedAt";

#[derive(Serialize)]
struct NewSessionFields<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "UserId")]
    user_id: &'a str,
    #[serde(rename = "DeviceId")]
    device_id: &'a str,
    #[serde(rename = "SessionId")]
    session_token: &'a str,
    #[serde(rename = "Revoked")]
    revoked: bool,
}

/// Patch for an existing row. `DeviceId` is the lookup key and never
/// changes; `Revoked` is re-asserted to false in case the lookup served a
/// stale read.
#[derive(Serialize)]
struct RefreshSessionFields<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "UserId")]
    user_id: &'a str,
    #[serde(rename = "SessionId")]
    session_token: &'a str,
    #[serde(rename = "Revoked")]
    revoked: bool,
}

pub struct SessionRepository {
    store: StoreClient,
}

impl SessionRepository {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// The device's current session: the most recently created non-revoked
    /// row. Sorting descending is the tie-break when more than one
    /// non-revoked row improperly exists.
    pub async fn find_active_by_device(&self, device_id: &str) -> Result<Option<Session>> {
        let query = ListQuery::new()
            .filter(Formula::and([
                Formula::eq(FIELD_DEVICE_ID, device_id),
                Formula::not(Formula::is_set(FIELD_REVOKED)),
            ]))
            .max_records(1)
            .sort_by(FIELD_CREATED_AT, SortDirection::Descending);

        let records = self.store.list(TABLE, &query).await?;
        records.into_iter().next().map(decode_session).transpose()
    }

    pub async fn create(
        &self,
        user_email: &str,
        user_id: &str,
        device_id: &str,
        session_token: &str,
    ) -> Result<Session> {
        let fields = NewSessionFields {
            email: user_email,
            user_id,
            device_id,
            session_token,
            revoked: false,
        };

        let record = self.store.create(TABLE, &fields).await?;
        decode_session(record)
    }

    pub async fn update(
        &self,
        id: &str,
        user_email: &str,
        user_id: &str,
        session_token: &str,
    ) -> Result<Session> {
        let fields = RefreshSessionFields {
            email: user_email,
            user_id,
            session_token,
            revoked: false,
        };

        let record = self.store.update(TABLE, id, &fields).await?;
        decode_session(record)
    }

    /// Create-or-update the device's session for a fresh login.
    ///
    /// A revoked session is treated as "no session" (the lookup filters it
    /// out) and is superseded by a new row, never reactivated. On failure
    /// nothing is partially applied and the caller re-runs the whole
    /// reconcile; re-running repeats the same lookup-then-branch logic.
    pub async fn reconcile(
        &self,
        user_email: &str,
        user_id: &str,
        device_id: &str,
        session_token: &str,
    ) -> Result<Session> {
        match self.find_active_by_device(device_id).await? {
            Some(current) => {
                self.update(&current.id, user_email, user_id, session_token)
                    .await
            }
            None => {
                self.create(user_email, user_id, device_id, session_token)
                    .await
            }
        }
    }
}

fn decode_session(record: StoreRecord) -> Result<Session> {
    Ok(Session {
        user_id: record.str_field(FIELD_USER_ID)?.to_string(),
        user_email: record.str_field(FIELD_EMAIL)?.to_string(),
        device_id: record.str_field(FIELD_DEVICE_ID)?.to_string(),
        session_token: record.str_field(FIELD_SESSION_ID)?.to_string(),
        revoked: record.bool_field(FIELD_REVOKED),
        created_at: record.created_time,
        id: record.id,
    })
}
