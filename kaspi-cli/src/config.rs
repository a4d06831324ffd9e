use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use kaspi_ingest::DEFAULT_CURRENCY;

use crate::logging::DEFAULT_LEVEL;
use crate::state::kaspi_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Currency symbol every amount cell must carry
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// env_logger filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(kaspi_home()?.join("config.toml"))
}

/// Config for this run plus the error that made an implicit config fall back to defaults.
pub struct Loaded {
    pub config: Config,
    pub ignored: Option<anyhow::Error>,
}

/// Load an explicit config file, or `~/.kaspi/config.toml` if it exists, or defaults.
///
/// Only a broken explicit file is an error; a broken `~/.kaspi/config.toml` is
/// reported through [`Loaded::ignored`].
pub fn load_config(explicit: Option<&Path>) -> Result<Loaded> {
    load_config_from(explicit, default_config_path().ok())
}

fn load_config_from(explicit: Option<&Path>, implicit: Option<PathBuf>) -> Result<Loaded> {
    if let Some(p) = explicit {
        if !p.exists() {
            bail!("config not found: {}", p.display());
        }
        return Ok(Loaded {
            config: read_config(p)?,
            ignored: None,
        });
    }

    let (config, ignored) = match implicit {
        Some(p) if p.exists() => match read_config(&p) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Config::default(), Some(e)),
        },
        _ => (Config::default(), None),
    };
    Ok(Loaded { config, ignored })
}

fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.parser.currency, "₸");
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[parser]\ncurrency = \"$\"\n").unwrap();

        let cfg = load_config(Some(&p)).unwrap().config;
        assert_eq!(cfg.parser.currency, "$");
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.log.level = "debug".to_string();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(toml::from_str::<Config>(&s).unwrap(), cfg);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[parser\ncurrency = 1").unwrap();
        assert!(load_config(Some(&p)).is_err());
    }

    #[test]
    fn test_broken_home_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[parser\ncurrency = 1").unwrap();

        let loaded = load_config_from(None, Some(p)).unwrap();
        assert_eq!(loaded.config, Config::default());
        let reason = format!("{:#}", loaded.ignored.unwrap());
        assert!(reason.contains("config.toml"), "{reason}");
    }

    #[test]
    fn test_home_config_is_used_when_valid() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[log]\nlevel = \"warn\"\n").unwrap();

        let loaded = load_config_from(None, Some(p)).unwrap();
        assert_eq!(loaded.config.log.level, "warn");
        assert!(loaded.ignored.is_none());

        let absent = load_config_from(None, Some(dir.path().join("none.toml"))).unwrap();
        assert_eq!(absent.config, Config::default());
        assert!(absent.ignored.is_none());
    }
}
