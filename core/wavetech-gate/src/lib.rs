//! Startup gate for WaveTech.
//!
//! On every launch the shell asks the gate one question: show the remote
//! web content, or the built-in application? The answer comes from, in
//! order:
//!
//! 1. A cached trust record (URL in preferences, token in the secure store).
//!    When the token matches the expected verification key, no network call
//!    is made.
//! 2. A remote validation request carrying a small device fingerprint,
//!    retried with capped exponential backoff on transport failures.
//!
//! # Outcomes
//!
//! Every path ends in one of two terminal [`GateState`]s:
//! - `Approved { token, url }`: show `url`.
//! - `UseNative`: show the built-in UI.
//!
//! Transport failures are retried; anything the server actually says that is
//! not a well-formed approval is a definitive "use native". No failure mode
//! surfaces an error to the user or leaves the launch stuck.

pub mod backoff;
pub mod config;
pub mod controller;
pub mod device;
mod error;
pub mod request;
pub mod response;
pub mod state;
pub mod transport;
pub mod trust;
pub mod validator;

pub use backoff::{Pause, TokioPause, backoff_delay};
pub use config::{DEFAULT_VERIFICATION_KEY, GateConfig};
pub use controller::GateController;
pub use device::DeviceProfile;
pub use error::{GateError, GateResult};
pub use response::{Rejection, Verdict};
pub use state::GateState;
pub use transport::{HttpTransport, Transport};
pub use trust::{TrustRecord, TrustStore};
pub use validator::RemoteValidator;

/// Re-exported so callers can name URLs without depending on `reqwest`.
pub use reqwest::Url;
