//! Business logic services for the application layer.

pub mod shortener_service;

pub use shortener_service::{
    ResolveMode, Resolved, Shortened, ShortenerError, ShortenerService, ShortenerSettings,
};
