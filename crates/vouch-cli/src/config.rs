//! Gating configuration lookup for the CLI.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use vouch_gatekeeper::GatingConfig;

/// Default configuration file location (`~/.vouch/gating.toml`).
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".vouch").join("gating.toml"))
}

/// Load the gating configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// when present, otherwise the built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<GatingConfig> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "Loading gating config");
        return Ok(GatingConfig::from_file(path)?);
    }

    match default_path() {
        Ok(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading gating config");
            Ok(GatingConfig::from_file(&path)?)
        }
        _ => Ok(GatingConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_min_confidence = 0.65").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.default_min_confidence, 0.65);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let result = load(Some(Path::new("/nonexistent/vouch.toml")));
        assert!(matches!(result, Err(CliError::Gatekeeper(_))));
    }

    #[test]
    fn test_default_path_location() {
        if let Ok(path) = default_path() {
            assert!(path.ends_with(".vouch/gating.toml"));
        }
    }
}
