//! Input guards shared by entity factories and mutators.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::error::{DomainError, DomainResult};

/// Reject a blank required input (`""` or whitespace only).
pub fn require_non_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::argument(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject a value longer than `max` characters with the given message.
pub fn ensure_max_chars(value: &str, max: usize, message: &str) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

/// Same as [`ensure_max_chars`] but a `None` passes.
pub fn ensure_optional_max_chars(value: Option<&str>, max: usize, message: &str) -> DomainResult<()> {
    match value {
        Some(v) => ensure_max_chars(v, max, message),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_an_argument_error() {
        let err = require_non_blank("name", "   ").unwrap_err();
        assert_eq!(err, DomainError::argument("name cannot be empty"));
    }

    #[test]
    fn length_cap_counts_chars() {
        // 3 chars, 6 bytes
        assert!(ensure_max_chars("äöü", 3, "too long").is_ok());
        assert!(ensure_max_chars("äöüx", 3, "too long").is_err());
    }

    #[test]
    fn optional_none_passes() {
        assert!(ensure_optional_max_chars(None, 0, "too long").is_ok());
        assert!(ensure_optional_max_chars(Some("a"), 0, "too long").is_err());
    }
}
