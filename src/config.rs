//! Configuration management for Lawgorithm using the prefer crate.

use serde::{Deserialize, Serialize};

use crate::analysis::{DEFAULT_ANALYSIS_DELAY_MS, DEFAULT_MAX_DOCUMENT_BYTES};

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the web server binds to.
    pub host: String,
    /// Port the web server listens on.
    pub port: u16,
    /// Simulated analysis delay in milliseconds.
    pub analysis_delay_ms: u64,
    /// Maximum accepted document size in bytes.
    pub max_document_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bind address for the web server.
    #[serde(default)]
    pub host: Option<String>,
    /// Listen port for the web server.
    #[serde(default)]
    pub port: Option<u16>,
    /// Simulated analysis delay in milliseconds.
    #[serde(default)]
    pub analysis_delay_ms: Option<u64>,
    /// Maximum accepted document size in bytes.
    #[serde(default)]
    pub max_document_bytes: Option<usize>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers lawgorithm config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("lawgorithm").await {
            Ok(pref_config) => {
                let host: Option<String> = pref_config.get("host").ok();
                let port: Option<u16> = pref_config.get("port").ok();
                let analysis_delay_ms: Option<u64> =
                    pref_config.get("analysis_delay_ms").ok();
                let max_document_bytes: Option<usize> =
                    pref_config.get("max_document_bytes").ok();

                Config {
                    host,
                    port,
                    analysis_delay_ms,
                    max_document_bytes,
                }
            }
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(delay) = self.analysis_delay_ms {
            settings.analysis_delay_ms = delay;
        }
        if let Some(max) = self.max_document_bytes {
            settings.max_document_bytes = max;
        }
    }
}

/// Load settings from configuration (async version).
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.analysis_delay_ms, 3000);
        assert_eq!(settings.max_document_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn config_overrides_only_what_it_sets() {
        let config = Config {
            port: Some(8080),
            analysis_delay_ms: Some(25),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.analysis_delay_ms, 25);
    }
}
