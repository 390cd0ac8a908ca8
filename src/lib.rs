//! readme-gen - localized plain-text README generation
//!
//! This library renders line-oriented text templates containing `${TAG}`
//! placeholders into per-language README files, pulling replacement text from
//! repository metadata and markdown template fragments.
//!
//! # Example
//!
//! ```rust
//! use readme_gen::{render_line, GeneratorConfig, Language, RepoId, TagResolver};
//!
//! let config = GeneratorConfig::default();
//! let repo: RepoId = "acme/widget".parse().unwrap();
//! let mut resolver = TagResolver::new(&config, &repo, None);
//!
//! let line = render_line("Name: ${REPOSITORY_NAME}", &mut resolver, Language::En).unwrap();
//! assert_eq!(line, "Name: widget\n");
//! ```

pub mod config;
pub mod markdown;
pub mod renderer;
pub mod repo;
pub mod resolver;
pub mod scanner;

pub use config::{ConfigError, GeneratorConfig};
pub use renderer::{render_line, write_readme, GenerateError};
pub use repo::{parse_release_date, Release, RepoId, RepoIdError};
pub use resolver::{Language, ResolveError, Tag, TagResolver};
pub use scanner::{scan_line, Segment};

use std::path::PathBuf;

/// Generate the localized readme files for a repository
///
/// This is the main entry point for the library. It runs one pass per
/// language, English first, sharing a single tag cache across both passes,
/// and returns the written paths in generation order.
///
/// # Example
///
/// ```no_run
/// use readme_gen::{generate_readmes, GeneratorConfig, RepoId};
///
/// let config = GeneratorConfig::default();
/// let repo: RepoId = "acme/widget".parse().unwrap();
///
/// let written = generate_readmes(&config, &repo, None).unwrap();
/// assert_eq!(written.len(), 2);
/// ```
pub fn generate_readmes(
    config: &GeneratorConfig,
    repo: &RepoId,
    release: Option<&Release>,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut resolver = TagResolver::new(config, repo, release);
    let mut written = Vec::with_capacity(Language::ALL.len());

    for language in Language::ALL {
        written.push(renderer::write_readme(config, &mut resolver, language)?);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_generate_readmes_writes_both_languages() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(dir.path().join("templates/en.txt"), "Hi from ${AUTHOR}\n").unwrap();
        fs::write(dir.path().join("templates/jp.txt"), "${AUTHOR}より\n").unwrap();

        let config = GeneratorConfig::default()
            .with_template_dir(dir.path().join("templates"))
            .with_output_dir(dir.path().join("out"));
        let repo: RepoId = "acme/widget".parse().unwrap();

        let written = generate_readmes(&config, &repo, None).unwrap();
        assert_eq!(
            written,
            vec![
                dir.path().join("out/README.txt"),
                dir.path().join("out/お読みください.txt"),
            ]
        );
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            "Hi from acme\n"
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "acmeより\n");
    }

    #[test]
    fn test_generate_readmes_surfaces_resolve_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(dir.path().join("templates/en.txt"), "${TAG_INFORMATION}\n").unwrap();
        fs::write(dir.path().join("templates/jp.txt"), "\n").unwrap();

        let config = GeneratorConfig::default()
            .with_template_dir(dir.path().join("templates"))
            .with_output_dir(dir.path().join("out"));
        let repo: RepoId = "acme/widget".parse().unwrap();

        let result = generate_readmes(&config, &repo, None);
        assert!(matches!(
            result,
            Err(GenerateError::Resolve(ResolveError::MissingRelease))
        ));
    }
}
