use crate::SyncedUserDto;

use serde::Serialize;

/// Successful sync response
#[derive(Debug, Serialize)]
pub struct SyncUserResponse {
    pub ok: bool,
    pub user: SyncedUserDto,
}
