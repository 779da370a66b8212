//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analytics backend.
    pub host: String,
    /// API key for the backend.
    pub api_key: String,
    /// Default output file; stdout when unset. Overridden by `--output`.
    pub output: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("api_key", &"[REDACTED]")
            .field("output", &self.output)
            .finish()
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Layering: defaults, then the platform config file, then the explicit
    /// file, then `EVLOG_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("EVLOG_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for evlog.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("evlog"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_empty() {
        let config = Config::default();
        assert!(config.host.is_empty());
        assert!(config.api_key.is_empty());
        assert!(config.output.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"https://backend.example.com\"").unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();
        writeln!(file, "output = \"/var/log/events.log\"").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.host, "https://backend.example.com");
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.output, Some(PathBuf::from("/var/log/events.log")));
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    host = "https://file.example.com"
                    api_key = "from-file"
                "#,
            )?;
            jail.set_env("EVLOG_HOST", "https://env.example.com");

            let config = Config::load_from(Some(Path::new("config.toml"))).unwrap();
            assert_eq!(config.host, "https://env.example.com");
            assert_eq!(config.api_key, "from-file");
            Ok(())
        });
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config {
            host: "https://backend.example.com".to_string(),
            api_key: "secret".to_string(),
            output: None,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
