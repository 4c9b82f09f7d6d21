//! Validation request construction.

use crate::config::GateConfig;
use crate::device::DeviceProfile;
use crate::error::{GateError, GateResult};
use reqwest::Url;

/// Builds `<endpoint>?p=<access key>&os=..&lng=..&devicemodel=..[&country=..]`.
///
/// Query values are percent-encoded. Any query already present on the
/// endpoint is kept ahead of the gate's own parameters.
///
/// # Errors
///
/// Returns [`GateError::InvalidEndpoint`] if the endpoint is empty, does not
/// parse, or is not an `http(s)` URL.
pub fn build_request_url(config: &GateConfig, profile: &DeviceProfile) -> GateResult<Url> {
    let endpoint = config.endpoint_url.trim();
    if endpoint.is_empty() {
        return Err(GateError::InvalidEndpoint("no endpoint configured".into()));
    }

    let mut url =
        Url::parse(endpoint).map_err(|e| GateError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(GateError::InvalidEndpoint(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("p", &config.access_key);
        for (name, value) in profile.query_pairs() {
            query.append_pair(name, &value);
        }
    }

    Ok(url)
}
