//! URL validation

use tracing::warn;
use url::Url;

/// Returns true when `input` parses as an absolute URL carrying both a scheme
/// and a non-empty host.
///
/// Malformed input never raises; it is reported with a warning naming the
/// rejected string so operators can spot bad invocations in the log stream.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| !host.is_empty()) => true,
        _ => {
            warn!("Invalid URL provided: {input}");
            false
        }
    }
}
