//! Device fingerprint sent with validation requests.
//!
//! Four values: region, language, OS name + version, and hardware model.
//! They are only ever rendered as query parameters; nothing here validates
//! them.

use std::env;

/// Language used when the locale does not name one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// The values sent alongside a validation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Region code (e.g. `US`), if the locale names one.
    pub region: Option<String>,
    /// Lowercased language code (e.g. `en`).
    pub language: String,
    /// OS name and version (e.g. `Linux 24.04`).
    pub system: String,
    /// Hardware model identifier (e.g. `x86_64`, `iPhone14,2`).
    pub model: String,
}

impl DeviceProfile {
    /// Collects the profile of the current device.
    #[must_use]
    pub fn collect() -> Self {
        Self {
            region: region_code(),
            language: language_code(),
            system: system_info(),
            model: model_identifier(),
        }
    }

    /// Renders the profile as `(name, value)` query pairs.
    ///
    /// `country` is only present when a region is known.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("os", self.system.clone()),
            ("lng", self.language.clone()),
            ("devicemodel", self.model.clone()),
        ];
        if let Some(region) = &self.region {
            pairs.push(("country", region.clone()));
        }
        pairs
    }
}

/// Returns the region of the process locale, if it names one.
#[must_use]
pub fn region_code() -> Option<String> {
    current_locale().and_then(|raw| parse_locale(&raw).1)
}

/// Returns the preferred language code, or [`FALLBACK_LANGUAGE`].
#[must_use]
pub fn language_code() -> String {
    // LANGUAGE is a colon-separated preference list; its head wins.
    let preferred = env::var("LANGUAGE")
        .ok()
        .and_then(|list| list.split(':').find(|s| !s.is_empty()).map(String::from))
        .or_else(current_locale);

    preferred
        .and_then(|raw| parse_locale(&raw).0)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Returns `"<os name> <os version>"`.
#[must_use]
pub fn system_info() -> String {
    format!("{} {}", os_name(), os_version())
}

/// Returns the hardware model identifier.
#[must_use]
pub fn model_identifier() -> String {
    raw_machine()
        .map(|bytes| decode_machine(&bytes))
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| env::consts::ARCH.to_string())
}

/// Decodes a fixed-size, NUL-padded machine buffer.
#[must_use]
pub fn decode_machine(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Splits a POSIX or BCP 47 locale into `(language, region)`.
///
/// `en_US.UTF-8` → `(en, US)`, `pt-BR` → `(pt, BR)`, `fr` → `(fr, -)`.
/// `C` and `POSIX` name neither.
#[must_use]
pub fn parse_locale(raw: &str) -> (Option<String>, Option<String>) {
    // Drop codeset and modifier: `de_DE.UTF-8@euro` → `de_DE`.
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return (None, None);
    }

    let mut parts = base.split(['_', '-']);
    let language = parts
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    // Skip script subtags such as `Hant` in `zh-Hant-TW`.
    let region = parts
        .find(|s| (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
            || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())))
        .map(str::to_uppercase);

    (language, region)
}

fn current_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}

fn os_name() -> &'static str {
    match env::consts::OS {
        "macos" => "macOS",
        "ios" => "iOS",
        "linux" => "Linux",
        "windows" => "Windows",
        "android" => "Android",
        other => other,
    }
}

fn os_version() -> String {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }

    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/os-release")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("VERSION_ID="))
                    .map(|l| {
                        l.trim_start_matches("VERSION_ID=")
                            .trim_matches('"')
                            .to_string()
                    })
            })
            .unwrap_or_else(|| "unknown".to_string())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        "unknown".to_string()
    }
}

#[cfg(unix)]
fn raw_machine() -> Option<Vec<u8>> {
    // SAFETY: utsname is plain old data; all-zero is a valid value.
    let mut name: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: `name` is a valid, writable utsname for the duration of the call.
    if unsafe { libc::uname(&mut name) } != 0 {
        return None;
    }
    Some(name.machine.iter().map(|&c| c as u8).collect())
}

#[cfg(not(unix))]
fn raw_machine() -> Option<Vec<u8>> {
    None
}
