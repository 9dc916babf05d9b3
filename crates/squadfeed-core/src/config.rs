//! Configuration loading and typed config structures for Squadfeed.
//!
//! The configuration lives in `squadfeed.yaml` next to the binary's working
//! directory. Every field has a default, so an absent file or a partial
//! file is valid; the route paths are checked by [`ObserverConfig::validate`]
//! before the router is built.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot be used.
    #[error("invalid config: {message}")]
    Invalid {
        /// What is wrong with the value.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SquadfeedConfig {
    /// HTTP observer settings (bind address and route paths).
    #[serde(default)]
    pub observer: ObserverConfig,

    /// Game-session connector feed settings.
    #[serde(default)]
    pub connector: ConnectorConfig,
}

impl SquadfeedConfig {
    /// Load configuration from a YAML file, apply environment overrides and
    /// validate it.
    ///
    /// Environment variables override YAML values:
    /// - `NATS_URL` overrides `connector.nats_url`
    /// - `SQUADFEED_PORT` overrides `observer.port`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        config.observer.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without environment overrides.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override values with environment variables when set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("NATS_URL") {
            self.connector.nats_url = val;
        }
        if let Ok(val) = std::env::var("SQUADFEED_PORT") {
            self.observer.port = val.parse().map_err(|e| ConfigError::Invalid {
                message: format!("SQUADFEED_PORT={val:?}: {e}"),
            })?;
        }
        Ok(())
    }
}

/// HTTP observer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObserverConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route serving the full player list.
    #[serde(default = "default_players_path")]
    pub players_path: String,

    /// Route serving the squad leaders.
    #[serde(default = "default_leaders_path")]
    pub leaders_path: String,

    /// Route serving the kill feed.
    #[serde(default = "default_killfeed_path")]
    pub killfeed_path: String,
}

impl ObserverConfig {
    /// Check that the route paths can be mounted.
    ///
    /// Each path must be absolute and static (no captures or wildcards), and
    /// the three paths must be distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("players_path", &self.players_path),
            ("leaders_path", &self.leaders_path),
            ("killfeed_path", &self.killfeed_path),
        ];

        for (key, path) in paths {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid {
                    message: format!("{key} must start with '/', got {path:?}"),
                });
            }
            let dynamic = path.contains(['{', '}'])
                || path
                    .split('/')
                    .any(|segment| segment.starts_with([':', '*']));
            if dynamic {
                return Err(ConfigError::Invalid {
                    message: format!("{key} must be a static path, got {path:?}"),
                });
            }
        }

        for (i, (key, path)) in paths.iter().enumerate() {
            let duplicate = paths
                .iter()
                .skip(i.saturating_add(1))
                .find(|(_, p)| p == path);
            if let Some((other, _)) = duplicate {
                return Err(ConfigError::Invalid {
                    message: format!("{key} and {other} are both {path:?}"),
                });
            }
        }

        Ok(())
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            players_path: default_players_path(),
            leaders_path: default_leaders_path(),
            killfeed_path: default_killfeed_path(),
        }
    }
}

/// Game-session connector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectorConfig {
    /// NATS server URL.
    #[serde(default = "default_nats_url")]
    pub nats_url: String,

    /// Subject carrying "player wounded" notifications.
    #[serde(default = "default_wound_subject")]
    pub wound_subject: String,

    /// Subject carrying full roster snapshots.
    #[serde(default = "default_roster_subject")]
    pub roster_subject: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            nats_url: default_nats_url(),
            wound_subject: default_wound_subject(),
            roster_subject: default_roster_subject(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_players_path() -> String {
    "/players".to_owned()
}

fn default_leaders_path() -> String {
    "/leaders".to_owned()
}

fn default_killfeed_path() -> String {
    "/killfeed".to_owned()
}

fn default_nats_url() -> String {
    "nats://localhost:4222".to_owned()
}

fn default_wound_subject() -> String {
    "squad.player_wounded".to_owned()
}

fn default_roster_subject() -> String {
    "squad.players".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SquadfeedConfig::default();
        assert_eq!(config.observer.port, 3000);
        assert_eq!(config.observer.killfeed_path, "/killfeed");
        assert_eq!(config.connector.wound_subject, "squad.player_wounded");
        assert!(config.observer.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
observer:
  host: "127.0.0.1"
  port: 8081
  players_path: "/api/players"
  leaders_path: "/api/leaders"
  killfeed_path: "/api/killfeed"

connector:
  nats_url: "nats://nats:4222"
  wound_subject: "server1.wounded"
  roster_subject: "server1.players"
"#;
        let config = SquadfeedConfig::parse(yaml).unwrap();
        assert_eq!(config.observer.host, "127.0.0.1");
        assert_eq!(config.observer.port, 8081);
        assert_eq!(config.observer.leaders_path, "/api/leaders");
        assert_eq!(config.connector.nats_url, "nats://nats:4222");
        assert_eq!(config.connector.roster_subject, "server1.players");
        assert!(config.observer.validate().is_ok());
    }

    #[test]
    fn parse_partial_yaml_fills_defaults() {
        let config = SquadfeedConfig::parse("observer:\n  port: 9000\n").unwrap();
        assert_eq!(config.observer.port, 9000);
        assert_eq!(config.observer.players_path, "/players");
        assert_eq!(config.connector, ConnectorConfig::default());
    }

    #[test]
    fn parse_rejects_bad_yaml() {
        let result = SquadfeedConfig::parse("observer: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn validate_rejects_relative_path() {
        let config = ObserverConfig {
            players_path: "players".to_owned(),
            ..ObserverConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn validate_rejects_duplicate_paths() {
        let config = ObserverConfig {
            leaders_path: "/players".to_owned(),
            ..ObserverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("players_path and leaders_path"));
    }

    #[test]
    fn validate_rejects_dynamic_segments() {
        for path in ["/feed/{id}", "/feed/:id", "/feed/*rest"] {
            let config = ObserverConfig {
                killfeed_path: path.to_owned(),
                ..ObserverConfig::default()
            };
            assert!(config.validate().is_err(), "{path}");
        }
    }
}
