//! Client configuration
//!
//! Values are baked in at build time, e.g.
//! `EDUGPT_API_BASE=http://127.0.0.1:5000 trunk build`.
//! Anything unset falls back to the embedded defaults.

use once_cell::sync::Lazy;

/// Empty base means "same origin as the page".
const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_LOCAL_MODEL: &str = "llama3.1:8b";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path
    pub api_base: String,
    /// Name of the model the local backend serves; display only
    pub local_model: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            local_model: DEFAULT_LOCAL_MODEL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build the configuration from `EDUGPT_*` build-time variables
    pub fn load() -> Self {
        Self::from_overrides(
            option_env!("EDUGPT_API_BASE"),
            option_env!("EDUGPT_LOCAL_MODEL"),
            option_env!("EDUGPT_LOG_LEVEL"),
        )
    }

    pub fn from_overrides(
        api_base: Option<&str>,
        local_model: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let local_model = local_model
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.local_model);

        // Unknown level names are ignored rather than failing the whole app
        let log_level = log_level
            .and_then(|level| level.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base,
            local_model,
            log_level,
        }
    }
}

static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::load);

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static ClientConfig {
    &CONFIG
}
