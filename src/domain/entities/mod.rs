//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], which ties an original URL to
//! its short code and visit counter.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! [`NewUrlMapping`] carries only the fields supplied by the caller, the store fills
//! in the rest.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
