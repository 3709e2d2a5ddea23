//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.patternbook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatternbookConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_route: Option<String>,
    pub catalog_file: Option<String>,
    pub show_source: Option<bool>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROUTE: &str = "designpattern";
pub const DEFAULT_LOG_FILE: &str = "patternbook.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_route: String,
    /// Page requested on the command line, navigated to after startup.
    pub start_route: Option<String>,
    pub catalog_file: Option<PathBuf>,
    pub show_source: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides<'a> {
    pub route: Option<&'a str>,
    pub catalog: Option<&'a Path>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.patternbook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".patternbook").join("config.toml"))
}

/// Load config from `~/.patternbook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PatternbookConfig::default()`.
pub fn load_config() -> Result<PatternbookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PatternbookConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PatternbookConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PatternbookConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PatternbookConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Patternbook Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_route = "designpattern"      # Landing page (PATTERNBOOK_DEFAULT_ROUTE)
# catalog_file = "extra-pages.toml"    # Extra pages, relative to ~/.patternbook/ (PATTERNBOOK_CATALOG)
# show_source = true                   # Show source listings under each example
# log_level = "info"                   # off, error, warn, info, debug, trace (PATTERNBOOK_LOG_LEVEL)
# log_file = "patternbook.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PatternbookConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &PatternbookConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Default route: env → config → built-in. `--route` is a navigation
    // on top of it, so an unknown key still leaves a landing page.
    let default_route = env("PATTERNBOOK_DEFAULT_ROUTE")
        .or_else(|| config.general.default_route.clone())
        .unwrap_or_else(|| DEFAULT_ROUTE.to_string());
    let start_route = cli.route.map(|s| s.to_string());

    // Catalog file: CLI → env → config (config path is relative to ~/.patternbook/)
    let catalog_file = cli
        .catalog
        .map(Path::to_path_buf)
        .or_else(|| env("PATTERNBOOK_CATALOG").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .catalog_file
                .as_deref()
                .map(resolve_relative_to_config_dir)
        });

    // Log level: env → config → default
    let log_level = env("PATTERNBOOK_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        default_route,
        start_route,
        catalog_file,
        show_source: config.general.show_source.unwrap_or(true),
        log_level,
        log_file: config
            .general
            .log_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
    }
}

fn resolve_relative_to_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".patternbook").join(path),
        None => path,
    }
}

/// Parse a level name, falling back to the default on anything unknown.
fn parse_level(raw: &str) -> LevelFilter {
    match raw.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            warn!("Unknown log level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PatternbookConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_route, DEFAULT_ROUTE);
        assert!(resolved.start_route.is_none());
        assert!(resolved.catalog_file.is_none());
        assert!(resolved.show_source);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = PatternbookConfig {
            general: GeneralConfig {
                default_route: Some("strategy".to_string()),
                catalog_file: Some("/tmp/pages.toml".to_string()),
                show_source: Some(false),
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/pb.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_route, "strategy");
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("/tmp/pages.toml")));
        assert!(!resolved.show_source);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/pb.log"));
    }

    #[test]
    fn test_env_beats_config_and_cli_route_is_separate() {
        let config = PatternbookConfig {
            general: GeneralConfig {
                default_route: Some("strategy".to_string()),
                ..Default::default()
            },
        };
        let env = |name: &str| match name {
            "PATTERNBOOK_DEFAULT_ROUTE" => Some("observer".to_string()),
            "PATTERNBOOK_LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.default_route, "observer");
        assert_eq!(resolved.log_level, LevelFilter::Warn);

        let cli = CliOverrides {
            route: Some("factory"),
            catalog: Some(Path::new("cli.toml")),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.default_route, "observer");
        assert_eq!(resolved.start_route.as_deref(), Some("factory"));
        assert_eq!(resolved.catalog_file, Some(PathBuf::from("cli.toml")));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        assert_eq!(parse_level("chatty"), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: PatternbookConfig = toml::from_str(
            r#"
[general]
default_route = "adaptar"
"#,
        )
        .unwrap();
        assert_eq!(config.general.default_route.as_deref(), Some("adaptar"));
        assert!(config.general.show_source.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: PatternbookConfig = toml::from_str("").unwrap();
        assert!(config.general.default_route.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nshow_source = false\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.show_source, Some(false));
    }

    #[test]
    fn test_generate_default_config_is_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_route.is_none());
    }
}
