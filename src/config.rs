//! Generator configuration: where templates, fragments, and output live

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::resolver::{Language, Tag};

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Filesystem layout for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the per-language master templates (`en.txt`, `jp.txt`)
    pub template_dir: PathBuf,
    /// Directory holding markdown fragments (`<tag>/<code>.md`)
    pub fragment_dir: PathBuf,
    /// Directory holding the repository READMEs with description markers
    pub readme_dir: PathBuf,
    /// Directory the generated files are written to, created if absent
    pub output_dir: PathBuf,
}

/// TOML structure for deserializing configurations
#[derive(Deserialize)]
struct TomlConfig {
    paths: Option<TomlPaths>,
}

#[derive(Deserialize)]
struct TomlPaths {
    template_dir: Option<PathBuf>,
    fragment_dir: Option<PathBuf>,
    readme_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    ///
    /// Keys missing from the `[paths]` table keep their default values.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(paths) = parsed.paths {
            if let Some(dir) = paths.template_dir {
                config.template_dir = dir;
            }
            if let Some(dir) = paths.fragment_dir {
                config.fragment_dir = dir;
            }
            if let Some(dir) = paths.readme_dir {
                config.readme_dir = dir;
            }
            if let Some(dir) = paths.output_dir {
                config.output_dir = dir;
            }
        }

        Ok(config)
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    pub fn with_fragment_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fragment_dir = dir.into();
        self
    }

    pub fn with_readme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.readme_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path of the master template for a language
    pub fn template_path(&self, language: Language) -> PathBuf {
        self.template_dir.join(format!("{}.txt", language.code()))
    }

    /// Path of a tag's markdown fragment for a language
    pub fn fragment_path(&self, tag: &Tag, language: Language) -> PathBuf {
        self.fragment_dir
            .join(tag.fragment_dir())
            .join(format!("{}.md", language.code()))
    }

    /// Path of the repository README for a language
    pub fn readme_path(&self, language: Language) -> PathBuf {
        self.readme_dir
            .join(format!("README{}.md", language.readme_suffix()))
    }

    /// Path the generated file for a language is written to
    pub fn output_path(&self, language: Language) -> PathBuf {
        self.output_dir.join(language.output_file_name())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            fragment_dir: PathBuf::from("templates/fragments"),
            readme_dir: PathBuf::from(".github"),
            output_dir: PathBuf::from("out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.fragment_dir, PathBuf::from("templates/fragments"));
        assert_eq!(config.readme_dir, PathBuf::from(".github"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_toml_with_paths() {
        let toml_str = r#"
[paths]
template_dir = "tpl"
output_dir = "dist"
"#;
        let config = GeneratorConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.template_dir, PathBuf::from("tpl"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        // Unset keys keep their defaults.
        assert_eq!(config.fragment_dir, PathBuf::from("templates/fragments"));
        assert_eq!(config.readme_dir, PathBuf::from(".github"));
    }

    #[test]
    fn test_parse_empty_toml_keeps_defaults() {
        let config = GeneratorConfig::from_str("").expect("Should parse");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = GeneratorConfig::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme-gen.toml");
        std::fs::write(&path, "[paths]\nreadme_dir = \"docs\"\n").unwrap();

        let config = GeneratorConfig::from_file(&path).expect("Should load");
        assert_eq!(config.readme_dir, PathBuf::from("docs"));
    }

    #[test]
    fn test_builders_override_paths() {
        let config = GeneratorConfig::default()
            .with_template_dir("a")
            .with_fragment_dir("b")
            .with_readme_dir("c")
            .with_output_dir("d");
        assert_eq!(config.template_dir, PathBuf::from("a"));
        assert_eq!(config.fragment_dir, PathBuf::from("b"));
        assert_eq!(config.readme_dir, PathBuf::from("c"));
        assert_eq!(config.output_dir, PathBuf::from("d"));
    }

    #[test]
    fn test_derived_paths() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.template_path(Language::Jp),
            PathBuf::from("templates/jp.txt")
        );
        assert_eq!(
            config.fragment_path(&Tag::HowToUse, Language::En),
            PathBuf::from("templates/fragments/how_to_use/en.md")
        );
        assert_eq!(
            config.readme_path(Language::Jp),
            PathBuf::from(".github/README_jp.md")
        );
        assert_eq!(
            config.output_path(Language::En),
            PathBuf::from("out/README.txt")
        );
    }
}
