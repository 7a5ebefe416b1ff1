pub mod models;

pub use models::session::Session;
pub use models::user_identity::UserIdentity;

#[cfg(test)]
mod tests;
