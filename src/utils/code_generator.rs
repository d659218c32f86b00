//! Short code generation.
//!
//! Codes are fixed-length strings over a 64-symbol URL-safe alphabet. Randomness
//! only needs to spread codes well; uniqueness is enforced by the store.

use rand::Rng;

/// Number of characters in every generated short code.
pub const SHORT_CODE_LENGTH: usize = 7;

/// URL-safe alphabet: ASCII letters, digits, `-` and `_`.
pub const SHORT_CODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a random short code using the thread-local generator.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a short code from the given random source.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    (0..SHORT_CODE_LENGTH)
        .map(|_| SHORT_CODE_ALPHABET[rng.random_range(0..SHORT_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b))
}
