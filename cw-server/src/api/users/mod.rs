pub mod auth_response;
pub mod list_users_query;
pub mod login_request;
pub mod signup_request;
pub mod update_user_request;
pub mod user_dto;
pub mod user_service;
pub mod users;
