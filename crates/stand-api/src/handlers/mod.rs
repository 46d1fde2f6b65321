//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod fallback;
pub mod favorites;
pub mod health;
pub mod reviews;
pub mod stands;
pub mod users;
