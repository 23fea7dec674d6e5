//! HTTP route handlers.

pub mod analyze;
pub mod fallback;
pub mod health;
