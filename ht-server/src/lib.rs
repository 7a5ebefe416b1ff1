pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::{ApiError, Result as ApiResult},
    sync::{
        sync_user::sync_user, sync_user_request::SyncUserRequest,
        sync_user_response::SyncUserResponse, synced_user_dto::SyncedUserDto,
    },
};
pub use config::Config;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::AppState;

#[cfg(test)]
mod tests;
