//! Deployment configuration
//!
//! Loaded from `mergeup/config.toml` in the user config directory. The
//! only setting today is the extra conflict-lexicon tokens: conflict
//! detection pattern-matches localized tool output, so the word list for a
//! deployment's locale belongs in configuration, not in code.

use crate::error::{Error, Result};
use crate::merge::ConflictLexicon;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Filename for the deployment configuration.
const CONFIG_FILE: &str = "config.toml";

/// User-level mergeup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extra tokens (e.g. a localized word for "conflict") appended to the
    /// built-in conflict lexicon
    #[serde(default)]
    pub conflict_tokens: Vec<String>,
}

impl Config {
    /// Build the conflict lexicon for this deployment.
    #[must_use]
    pub fn conflict_lexicon(&self) -> ConflictLexicon {
        ConflictLexicon::with_extra_tokens(&self.conflict_tokens)
    }
}

/// Path of the user configuration file, if a config directory exists.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mergeup").join(CONFIG_FILE))
}

/// Load the user configuration.
///
/// A missing file (or missing config directory) yields the defaults; a
/// present but unreadable or malformed file is an error, so a deployment
/// notices a broken word list instead of silently losing it.
pub fn load_config() -> Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_extra_tokens() {
        let config = Config::default();
        assert!(config.conflict_tokens.is_empty());
    }

    #[test]
    fn test_lexicon_includes_configured_tokens() {
        let config: Config = toml::from_str(r#"conflict_tokens = ["冲突"]"#).unwrap();
        let lexicon = config.conflict_lexicon();
        assert!(lexicon.matches("合并失败: 存在冲突"));
        assert!(lexicon.matches("Automatic merge failed"));
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.conflict_tokens.is_empty());
    }
}
