use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI defaults, loaded from `prelo.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub formatting: FormattingConfig,

    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    /// Default citation style when `--style` is not given.
    #[serde(default = "default_style")]
    pub style: String,

    /// Emit JSON instead of plain text by default.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Logistics table name, for display purposes.
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            json: false,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
        }
    }
}

fn default_style() -> String {
    "abnt".to_string()
}

fn default_table() -> String {
    "logistica_livros".to_string()
}

impl Config {
    /// Load the given path, or `prelo.toml` in the working directory, or
    /// defaults when neither exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        let candidate = match path {
            Some(p) => p.to_path_buf(),
            None => Path::new("prelo.toml").to_path_buf(),
        };
        if !candidate.exists() {
            if path.is_some() {
                anyhow::bail!("arquivo de configuração não encontrado: {}", candidate.display());
            }
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&candidate)
            .with_context(|| format!("lendo {}", candidate.display()))?;
        toml::from_str(&content).with_context(|| format!("interpretando {}", candidate.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.formatting.style, "abnt");
        assert!(!config.formatting.json);
        assert_eq!(config.board.table, "logistica_livros");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[formatting]
style = "apa"
"#,
        )
        .unwrap();
        assert_eq!(config.formatting.style, "apa");
        assert_eq!(config.board.table, "logistica_livros");
    }
}
