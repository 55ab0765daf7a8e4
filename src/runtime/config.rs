use thiserror::Error;

pub const CORP_VAR: &str = "TEMPLATED_RULE_CORP";
pub const PLATFORM_BUFFER_VAR: &str = "TEMPLATED_RULE_PLATFORM_BUFFER";
pub const CLEANUP_ORPHANS_VAR: &str = "TEMPLATED_RULE_CLEANUP_ORPHANS";

const DEFAULT_PLATFORM_BUFFER: usize = 32;

/// Provider configuration, loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Corp every remote call is scoped to.
    pub corp: String,
    /// Request channel capacity of the in-memory platform.
    pub platform_buffer: usize,
    /// Delete a freshly provisioned rule when create cannot read it back.
    pub cleanup_orphans: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

impl ProviderConfig {
    /// Configuration for `corp` with every other setting at its default.
    pub fn new(corp: impl Into<String>) -> Self {
        Self {
            corp: corp.into(),
            platform_buffer: DEFAULT_PLATFORM_BUFFER,
            cleanup_orphans: true,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let corp = lookup(CORP_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(CORP_VAR))?;
        let mut config = Self::new(corp);

        if let Some(value) = lookup(PLATFORM_BUFFER_VAR) {
            config.platform_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: PLATFORM_BUFFER_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(CLEANUP_ORPHANS_VAR) {
            config.cleanup_orphans = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: CLEANUP_ORPHANS_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
