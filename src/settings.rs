use serde::Deserialize;
use std::fmt::Display;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        ProviderSettings {
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

/// Read-only after startup; constructed once and passed into the translation
/// service.
#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: ProviderSettings,
    pub api_key: String,
}

#[derive(Debug)]
pub enum SettingsError {
    MissingApiKey,
    ConfigError(config::ConfigError),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::MissingApiKey => {
                write!(f, "{} environment variable is not set", API_KEY_VAR)
            }
            SettingsError::ConfigError(e) => {
                write!(f, "Invalid settings: {}", e)
            }
        }
    }
}

impl Settings {
    /// Loads the API key from the environment, plus optional model/endpoint
    /// overrides from `lingo.toml` and `LINGO_*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let provider = config::Config::builder()
            .add_source(config::File::with_name("lingo").required(false))
            .add_source(config::Environment::with_prefix("LINGO"))
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(SettingsError::ConfigError)?;

        Ok(Settings { provider, api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn provider_defaults_target_gemini() {
        let provider = ProviderSettings::default();
        assert_eq!(provider.model, "gemini-2.0-flash");
        assert_eq!(
            provider.base_url,
            "https://generativelanguage.googleapis.com/v1beta/openai/"
        );
    }

    #[test]
    fn missing_api_key_names_the_variable() {
        let msg = SettingsError::MissingApiKey.to_string();
        assert_eq!(msg, "GEMINI_API_KEY environment variable is not set");
    }
}
