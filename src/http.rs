//! Shared handling for the blocking HTTP calls.

use anyhow::anyhow;

/// Turn a ureq failure into a user-facing error.
///
/// `auth_hint` is appended for 401/403 responses, which almost always mean a
/// bad or revoked key.
pub fn request_error(err: ureq::Error, auth_hint: &str) -> anyhow::Error {
    match err {
        ureq::Error::Status(code, response) => {
            let status_text = response.status_text().to_string();
            if code == 401 || code == 403 {
                anyhow!("HTTP {}: {}. {}", code, status_text, auth_hint)
            } else {
                anyhow!("HTTP {}: {}", code, status_text)
            }
        }
        ureq::Error::Transport(transport) => anyhow!("HTTP request failed: {}", transport),
    }
}
