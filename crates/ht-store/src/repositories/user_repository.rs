//! Identity resolution: find-or-create of user identities keyed by email.
//!
//! ## Concurrent creation
//!
//! The lookup-then-create sequence is not atomic. Two concurrent resolves
//! of the same new email can both observe "not found" and both create a
//! row. The store offers neither a uniqueness constraint nor
//! compare-and-set, and in-process locks are ruled out because deployments
//! run multiple independent instances, so the documented fallback applies:
//! lookups sort by creation time ascending, meaning every later resolve
//! converges on the earliest row and duplicates become unreachable dead
//! rows rather than split identities.

use crate::{Formula, ListQuery, Result, SortDirection, StoreClient, StoreRecord};

use ht_core::UserIdentity;

use serde::Serialize;

const TABLE: &str = "Users";
const FIELD_EMAIL: &str = "Email";
const FIELD_NAME: &str = "Name";
const FIELD_CREATED_AT: &str = "CreatedAt";

#[derive(Serialize)]
struct UserFields<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
}

pub struct UserRepository {
    store: StoreClient,
}

impl UserRepository {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// Look up the canonical identity for `email`, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>> {
        let query = ListQuery::new()
            .filter(Formula::eq_fold(FIELD_EMAIL, email))
            .max_records(1)
            .sort_by(FIELD_CREATED_AT, SortDirection::Ascending);

        let records = self.store.list(TABLE, &query).await?;
        let user = records.into_iter().next().map(decode_user).transpose()?;

        // Re-check the case-insensitive match locally: a row the store
        // returned whose Email does not fold to the lookup key is no match,
        // not a canonical identity.
        Ok(user.filter(|user| user.matches_email(email)))
    }

    /// Insert a new identity; `name` defaults to empty at the call sites.
    pub async fn create(&self, email: &str, name: &str) -> Result<UserIdentity> {
        let record = self
            .store
            .create(TABLE, &UserFields { email, name })
            .await?;

        decode_user(record)
    }

    /// Find-or-create the identity for `email`.
    ///
    /// An existing identity is returned unchanged: the stored name is never
    /// refreshed on the lookup path. At most one write occurs per call,
    /// only when no match existed. Failures propagate without retry; the
    /// operation is safe to re-run from scratch.
    pub async fn resolve(&self, email: &str, name: Option<&str>) -> Result<UserIdentity> {
        if let Some(user) = self.find_by_email(email).await? {
            return Ok(user);
        }

        self.create(email, name.unwrap_or("")).await
    }
}

fn decode_user(record: StoreRecord) -> Result<UserIdentity> {
    let email = record.str_field(FIELD_EMAIL)?.to_string();
    let name = record.str_field_or_default(FIELD_NAME).to_string();

    Ok(UserIdentity::new(record.id, email, name))
}
