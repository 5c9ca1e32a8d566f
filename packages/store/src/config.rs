//! # Application configuration (`helpdesk.toml`)
//!
//! The web binary embeds a `helpdesk.toml` next to its manifest and parses it
//! at start-up. Every field has a default, so a missing section or key falls
//! back to the values below.
//!
//! ```toml
//! [verification]
//! code = "123456"                 # the only accepted one-time code
//! sentinel_password = "incorrect" # always fails login
//! latency_ms = 1000               # simulated delay per verification step
//!
//! [tickets]
//! submit_latency_ms = 1000        # simulated write delay
//! redirect_delay_ms = 2000        # pause before returning to the dashboard
//!
//! [dashboard]
//! page_size = 8
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};

use crate::verification::VerificationPolicy;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub verification: VerificationConfig,
    #[serde(default)]
    pub tickets: TicketsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_code")]
    pub code: String,
    #[serde(default = "default_sentinel")]
    pub sentinel_password: String,
    #[serde(default = "default_latency")]
    pub latency_ms: u64,
}

fn default_code() -> String {
    "123456".to_string()
}

fn default_sentinel() -> String {
    "incorrect".to_string()
}

fn default_latency() -> u64 {
    1000
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code: default_code(),
            sentinel_password: default_sentinel(),
            latency_ms: default_latency(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketsConfig {
    #[serde(default = "default_latency")]
    pub submit_latency_ms: u64,
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_redirect_delay() -> u64 {
    2000
}

impl Default for TicketsConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: default_latency(),
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    8
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl HelpdeskConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "helpdesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, falling back to the defaults if it is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("invalid {}: {e}; using defaults", Self::filename());
            Self::default()
        })
    }

    pub fn policy(&self) -> VerificationPolicy {
        VerificationPolicy {
            code: self.verification.code.clone(),
            sentinel_password: self.verification.sentinel_password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = HelpdeskConfig::from_toml("").unwrap();
        assert_eq!(config, HelpdeskConfig::default());
        assert_eq!(config.dashboard.page_size, 8);
        assert_eq!(config.policy(), VerificationPolicy::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = HelpdeskConfig::from_toml(
            r#"
            [verification]
            latency_ms = 10

            [dashboard]
            page_size = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.verification.latency_ms, 10);
        assert_eq!(config.verification.code, "123456");
        assert_eq!(config.dashboard.page_size, 20);
        assert_eq!(config.tickets.redirect_delay_ms, 2000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = HelpdeskConfig::default();
        config.verification.code = "654321".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(HelpdeskConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_falls_back() {
        let config = HelpdeskConfig::from_toml_or_default("[dashboard]\npage_size = \"many\"");
        assert_eq!(config, HelpdeskConfig::default());
    }

    #[test]
    fn test_bundled_file_parses() {
        let text = include_str!("../../web/helpdesk.toml");
        let config = HelpdeskConfig::from_toml(text).unwrap();
        assert_eq!(config.policy(), VerificationPolicy::default());
    }
}
