pub mod auth;
pub mod bookmark;
