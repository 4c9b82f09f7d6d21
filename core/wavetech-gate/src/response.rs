//! Interpretation of validation responses.
//!
//! The server answers with plain text `"<token>#<url>"`. Anything else is a
//! definitive refusal: the caller must not retry it.

use reqwest::Url;
use std::fmt;

/// Separator between the token and the URL.
pub const DELIMITER: char = '#';

/// Why a response was not an approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The body did not split into exactly two parts.
    Shape { parts: usize },
    /// The token did not equal the expected verification key.
    TokenMismatch,
    /// The second part is not an absolute URL.
    InvalidUrl(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { parts } => write!(f, "expected 2 '#'-separated parts, got {parts}"),
            Self::TokenMismatch => write!(f, "verification token mismatch"),
            Self::InvalidUrl(reason) => write!(f, "invalid URL: {reason}"),
        }
    }
}

/// The meaning of one response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Show `url`; `token` is to be cached.
    Approved { token: String, url: Url },
    /// Use the native UI.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns true for [`Verdict::Approved`].
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }
}

/// Parses a raw body against the expected verification key.
///
/// Surrounding whitespace and newlines are ignored; whitespace inside the
/// parts is not.
#[must_use]
pub fn parse_response(body: &str, expected_token: &str) -> Verdict {
    let parts: Vec<&str> = body.trim().split(DELIMITER).collect();
    let [token, url] = parts.as_slice() else {
        return Verdict::Rejected(Rejection::Shape { parts: parts.len() });
    };

    if *token != expected_token {
        return Verdict::Rejected(Rejection::TokenMismatch);
    }

    match Url::parse(url) {
        Ok(url) => Verdict::Approved {
            token: (*token).to_string(),
            url,
        },
        Err(e) => Verdict::Rejected(Rejection::InvalidUrl(e.to_string())),
    }
}
