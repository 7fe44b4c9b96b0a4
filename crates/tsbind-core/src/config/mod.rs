use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TsbindError};

/// Root configuration for TSBIND.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TsbindConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Generation configuration.
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl TsbindConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TsbindError::Config(format!("Failed to read config file: {}", e)))?;

        tracing::debug!(path = ?path.as_ref(), "Loaded configuration");
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| TsbindError::Config(format!("Failed to parse config: {}", e)))
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

fn default_project_name() -> String {
    "tsbind-project".to_string()
}

/// Generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Source directory scanned for script members.
    #[serde(default = "default_src_dir")]
    pub src: String,

    /// Output directory for the scaffolded project.
    #[serde(default = "default_output_dir")]
    pub output: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            src: default_src_dir(),
            output: default_output_dir(),
        }
    }
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_output_dir() -> String {
    "scripts".to_string()
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TsbindConfig::default();
        assert_eq!(config.project.name, "tsbind-project");
        assert_eq!(config.generate.src, "src");
        assert_eq!(config.generate.output, "scripts");
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [project]
            name = "game-scripts"
        "#;

        let config = TsbindConfig::parse_toml(toml).unwrap();
        assert_eq!(config.project.name, "game-scripts");
        assert_eq!(config.generate.output, "scripts");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [project]
            name = "game-scripts"

            [generate]
            src = "host/src"
            output = "editor/scripts"
        "#;

        let config = TsbindConfig::parse_toml(toml).unwrap();
        assert_eq!(config.project.name, "game-scripts");
        assert_eq!(config.generate.src, "host/src");
        assert_eq!(config.generate.output, "editor/scripts");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let result = TsbindConfig::parse_toml("[generate\nsrc = ");
        assert!(matches!(result, Err(TsbindError::Config(_))));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TSBIND_TEST_OUTPUT", "generated/scripts");

        let toml = r#"
            [generate]
            output = "${TSBIND_TEST_OUTPUT}"
        "#;

        let config = TsbindConfig::parse_toml(toml).unwrap();
        assert_eq!(config.generate.output, "generated/scripts");

        std::env::remove_var("TSBIND_TEST_OUTPUT");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = TsbindConfig::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config.project.name, "tsbind-project");
    }
}
