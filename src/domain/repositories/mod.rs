//! Store trait definitions for the domain layer.
//!
//! The [`MappingStore`] trait abstracts durable access to [`UrlMapping`] records
//! following the Repository pattern. Implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! A mock implementation is auto-generated via `mockall` for unit tests.
//!
//! [`UrlMapping`]: crate::domain::entities::UrlMapping

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, UniqueKey};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
