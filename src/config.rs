//! Process-wide gateway configuration

use crate::error::{LookupError, LookupResult};

/// Environment variable holding the Pexels API key
pub const API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Configuration read once at startup and injected where needed.
///
/// Nothing re-reads the environment after this is constructed; handlers see
/// only the injected value.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Credential sent to the provider on every search call
    pub pexels_api_key: String,
}

impl GatewayConfig {
    /// Load configuration from the environment.
    ///
    /// A missing or empty `PEXELS_API_KEY` is a startup error; per-request
    /// handling never sees an absent credential.
    pub fn from_env() -> LookupResult<Self> {
        let key = std::env::var(API_KEY_VAR)
            .map_err(|_| LookupError::Config(format!("{API_KEY_VAR} is missing")))?;

        if key.trim().is_empty() {
            return Err(LookupError::Config(format!("{API_KEY_VAR} is empty")));
        }

        Ok(Self {
            pexels_api_key: key,
        })
    }
}
