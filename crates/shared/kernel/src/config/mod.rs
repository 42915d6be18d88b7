use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`DIALECTA__CHALLENGE__SEED=7`).
pub const ENV_PREFIX: &str = "DIALECTA";
/// Config file used when no path is given (extension resolved by `config`).
pub const DEFAULT_CONFIG_PATH: &str = "config/dialecta";

/// Custom error type for config loading.
#[dialecta_derive::dialecta_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment overrides.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG_PATH`]. The format follows the
///    extension (`.toml`, `.json`, ...); a missing file is only tolerated when
///    `required` is `false`.
/// 2. **Environment Overrides**: variables prefixed with `DIALECTA__`, nested
///    with double underscores (`DIALECTA__DATA__PATH` maps to `data.path`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when a required file is missing, a value cannot
/// be parsed, or the merged tree does not match `T`.
///
/// # Example
/// ```rust,ignore
/// use dialecta_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     seed: u64,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local"), true).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, required, None)
}

/// `env` replaces the process environment when given.
fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    required: bool,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialecta_domain::config::AppConfig;
    use std::fs;

    #[test]
    fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("dialecta.toml");
        fs::write(&path, "[challenge]\nseed = 11\ndouble_click_ms = 300\n")?;

        let env = Map::from([("DIALECTA__CHALLENGE__SEED".to_owned(), "99".to_owned())]);
        let cfg: AppConfig = load_layered(Some(&path), true, Some(env))?;

        assert_eq!(cfg.challenge.seed, Some(99));
        assert_eq!(cfg.challenge.double_click_ms, 300);
        Ok(())
    }

    #[test]
    fn empty_environment_keeps_file_values() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("dialecta.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n")?;

        let cfg: AppConfig = load_layered(Some(&path), true, Some(Map::new()))?;
        assert_eq!(cfg.logging.level, "debug");
        Ok(())
    }
}
