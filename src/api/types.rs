//! Wire types for the status endpoint.

use serde::Deserialize;

/// Placeholder shown when the server reports no IP address.
pub const IP_PLACEHOLDER: &str = "Not available";

/// Pairing status returned by `GET /status`.
///
/// Each successful poll produces a fresh record that fully replaces the
/// previous one; nothing is merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairingStatus {
    pub hostname: String,
    #[serde(default)]
    pub ip: Option<String>,
    pub discovery_port: u16,
    pub command_port: u16,
    pub app_download_url: String,
}

impl PairingStatus {
    /// IP address for display, substituting the fixed placeholder when absent.
    pub fn ip_display(&self) -> &str {
        self.ip.as_deref().unwrap_or(IP_PLACEHOLDER)
    }
}
