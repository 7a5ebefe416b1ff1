pub mod sync_user;
pub mod sync_user_request;
pub mod sync_user_response;
pub mod synced_user_dto;
