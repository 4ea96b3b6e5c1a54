//! Slug generation and validation utilities.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

/// Length of randomly generated slugs.
pub const GENERATED_SLUG_LENGTH: usize = 6;

/// Minimum length of user-supplied slugs.
pub const MIN_CUSTOM_SLUG_LENGTH: usize = 3;

/// Maximum length of user-supplied slugs.
pub const MAX_CUSTOM_SLUG_LENGTH: usize = 64;

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("slug regex is valid")
});

/// Generates a random slug of [`GENERATED_SLUG_LENGTH`] characters drawn from
/// `[A-Za-z0-9]`.
///
/// Uniqueness is not checked here; the store rejects collisions.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_slug() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SLUG_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `slug` uses only the slug alphabet.
///
/// Anything else cannot name a stored link and must not reach the store.
pub fn is_well_formed_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Validates a user-provided custom slug.
///
/// # Rules
///
/// - Length: 3-64 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidSlug`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < MIN_CUSTOM_SLUG_LENGTH {
        return Err(AppError::InvalidSlug(format!(
            "must be at least {MIN_CUSTOM_SLUG_LENGTH} characters"
        )));
    }

    if slug.len() > MAX_CUSTOM_SLUG_LENGTH {
        return Err(AppError::InvalidSlug(format!(
            "must be at most {MAX_CUSTOM_SLUG_LENGTH} characters"
        )));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::InvalidSlug(
            "only letters and digits are allowed".to_string(),
        ));
    }

    Ok(())
}
