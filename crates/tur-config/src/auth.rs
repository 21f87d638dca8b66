//! Session token handling settings.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "turismo-cli".to_string()
}

const fn default_expiry_buffer_secs() -> i64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OS keychain service name for the stored session token.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Tokens expiring within this many seconds are treated as expired.
    #[serde(default = "default_expiry_buffer_secs")]
    pub expiry_buffer_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            expiry_buffer_secs: default_expiry_buffer_secs(),
        }
    }
}
