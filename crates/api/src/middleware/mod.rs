//! Request guards.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated staff identity from a
//!   Bearer session token.

pub mod auth;
