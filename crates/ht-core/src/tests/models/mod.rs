mod session;
mod user_identity;
