pub mod auth;
pub mod tables;
