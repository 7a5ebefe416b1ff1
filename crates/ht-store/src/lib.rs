pub mod client;
pub mod config;
pub mod error;
pub mod formula;
pub mod record;
pub mod repositories;

pub use client::{ListQuery, SortDirection, StoreClient};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use formula::Formula;
pub use record::StoreRecord;
pub use repositories::session_repository::SessionRepository;
pub use repositories::user_repository::UserRepository;
