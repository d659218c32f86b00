//! Validation of URLs submitted for shortening.
//!
//! The submitted string is checked, never rewritten: the stored value is exactly
//! what the client sent.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    Malformed(String),
}

/// Checks that `input` is an absolute URI with a scheme and an authority.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] for an empty string.
/// Returns [`ValidationError::Malformed`] when the input contains characters outside
/// the URI character set (whitespace, control bytes, non-ASCII, stray `%`), does not
/// parse, or parses without a host (`mailto:`, `data:`, bare paths).
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("ftp://files.example.com").is_ok());
///
/// assert_eq!(validate_url(""), Err(ValidationError::Missing));
/// assert!(validate_url("not a url").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Missing);
    }

    check_uri_chars(input)?;

    let url = Url::parse(input).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(ValidationError::Malformed(
            "URL must contain a scheme and a host".to_string(),
        ));
    }

    Ok(())
}

/// Rejects anything outside RFC 3986 `unreserved / reserved / pct-encoded`.
///
/// `Url::parse` silently strips tabs, newlines and surrounding spaces, and the
/// input is stored unparsed.
fn check_uri_chars(input: &str) -> Result<(), ValidationError> {
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'%' {
            let escaped = bytes.get(i + 1..i + 3);
            if !escaped.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(ValidationError::Malformed(format!(
                    "invalid percent-encoding at position {i}"
                )));
            }
            i += 3;
            continue;
        }

        if !is_uri_char(b) {
            return Err(ValidationError::Malformed(format!(
                "character not allowed in a URL at position {i}"
            )));
        }
        i += 1;
    }

    Ok(())
}

fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=".contains(&b)
}
