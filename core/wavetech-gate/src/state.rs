//! Launch state published to the shell.

use reqwest::Url;

/// Where the gate currently stands.
///
/// `Idle → Validating → {Approved | UseNative}`, or `Idle → Approved` when a
/// trusted record is already cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    /// Nothing has happened yet.
    #[default]
    Idle,
    /// A network validation is in flight.
    Validating,
    /// Show the remote content at `url`.
    Approved {
        /// The verification token that approved `url`.
        token: String,
        /// Remote content to show.
        url: Url,
    },
    /// Show the built-in application.
    UseNative,
}

impl GateState {
    /// Returns true for `Approved` and `UseNative`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved { .. } | Self::UseNative)
    }

    /// Returns true while the shell should show a loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Validating)
    }

    /// Short name for logs. Never includes the token.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Approved { .. } => "approved",
            Self::UseNative => "native",
        }
    }

    /// Returns the approved URL, if any.
    #[must_use]
    pub fn remote_url(&self) -> Option<&Url> {
        match self {
            Self::Approved { url, .. } => Some(url),
            _ => None,
        }
    }
}
