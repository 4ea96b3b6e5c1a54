//! SafeLink token encoding and Google-style redirect wrapping.
//!
//! A SafeLink token is the URL-safe base64 encoding of the target URL. The
//! final page hands visitors a redirect through Google's `/url` endpoint
//! instead of the raw target.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Redirect wrapper endpoint.
const REDIRECT_BASE: &str = "https://www.google.com/url";

/// Everything except `A-Za-z0-9-._~` is escaped in the wrapped target.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes with padding, decodes with or without it.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SafeLinkError {
    #[error("Invalid SafeLink Token!")]
    InvalidToken,
}

/// Stateless SafeLink codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeLinkService;

impl SafeLinkService {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a URL into a SafeLink token.
    pub fn encode_token(&self, url: &str) -> String {
        metrics::counter!("safelink_tokens_total").increment(1);
        TOKEN_ENGINE.encode(url.as_bytes())
    }

    /// Decodes a SafeLink token back into the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`SafeLinkError::InvalidToken`] if the token is not valid
    /// URL-safe base64 or does not decode to UTF-8.
    pub fn decode_token(&self, token: &str) -> Result<String, SafeLinkError> {
        let bytes = TOKEN_ENGINE
            .decode(token)
            .map_err(|_| SafeLinkError::InvalidToken)?;

        String::from_utf8(bytes).map_err(|_| SafeLinkError::InvalidToken)
    }

    /// Wraps `url` in a Google-style redirect link.
    pub fn wrap_redirect(&self, url: &str) -> String {
        format!(
            "{REDIRECT_BASE}?q={}&sa=D&source=hangouts",
            utf8_percent_encode(url, QUERY_VALUE)
        )
    }

    /// Decodes a token and wraps the result, the full final-step transform.
    ///
    /// # Errors
    ///
    /// Returns [`SafeLinkError::InvalidToken`] if the token cannot be decoded.
    pub fn resolve(&self, token: &str) -> Result<String, SafeLinkError> {
        let url = self.decode_token(token)?;
        Ok(self.wrap_redirect(&url))
    }
}
