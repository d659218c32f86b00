//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Absolute URL validation for shorten requests

pub mod code_generator;
pub mod url_validator;
