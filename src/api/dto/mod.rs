//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names.

pub mod health;
pub mod index;
pub mod shorten;
pub mod stats;
