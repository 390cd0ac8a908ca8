//! Tag resolution with a per-run memo cache

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Datelike;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::markdown;
use crate::repo::{RepoId, Release};

use super::tag::{Language, Tag};

/// Errors that can occur while resolving a tag's replacement text
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A fragment or README file could not be read
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `${TAG_INFORMATION}` was used without release metadata
    #[error("${{TAG_INFORMATION}} requires release metadata (a tag and a date)")]
    MissingRelease,
}

/// Resolves tags to replacement text, memoizing per (tag, language).
///
/// One resolver is shared across both language passes, so each fragment and
/// README file is read at most once per run. Resolved text is returned as-is
/// by later lookups; it is never re-scanned for placeholders.
pub struct TagResolver<'a> {
    config: &'a GeneratorConfig,
    repo: &'a RepoId,
    release: Option<&'a Release>,
    cache: HashMap<(Tag, Language), String>,
}

impl<'a> TagResolver<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        repo: &'a RepoId,
        release: Option<&'a Release>,
    ) -> Self {
        Self {
            config,
            repo,
            release,
            cache: HashMap::new(),
        }
    }

    /// Replacement text for a tag name, computed once per (tag, language).
    pub fn resolve(&mut self, name: &str, language: Language) -> Result<String, ResolveError> {
        let key = (Tag::from_name(name), language);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let value = self.compute(&key.0, language)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    fn compute(&self, tag: &Tag, language: Language) -> Result<String, ResolveError> {
        match tag {
            Tag::RepositoryName => Ok(self.repo.name.clone()),
            Tag::Author => Ok(self.repo.owner.clone()),
            Tag::TagInformation => {
                let release = self.release.ok_or(ResolveError::MissingRelease)?;
                Ok(format_tag_information(release, language))
            }
            Tag::Description => {
                let readme = self.read(self.config.readme_path(language))?;
                Ok(markdown::clean(&markdown::extract_description(&readme)))
            }
            Tag::HowToUse | Tag::Notes => {
                let fragment = self.read(self.config.fragment_path(tag, language))?;
                Ok(clean_lines(&fragment))
            }
            Tag::ReadmeUrl => Ok(format!(
                "https://github.com/{}/blob/base/.github/README{}.md",
                self.repo,
                language.readme_suffix()
            )),
            // Unresolvable tags fall back to their own placeholder text.
            Tag::Unknown(_) => Ok(tag.placeholder()),
        }
    }

    fn read(&self, path: PathBuf) -> Result<String, ResolveError> {
        fs::read_to_string(&path).map_err(|source| ResolveError::FileRead { path, source })
    }
}

/// Clean each line of a markdown fragment, preserving the line structure.
fn clean_lines(text: &str) -> String {
    text.lines().map(markdown::clean).collect::<Vec<_>>().join("\n")
}

/// `<tag> (<date>)` with the date formatted per language, plus an optional
/// ` - <branch>` suffix. The release date is already in JST.
fn format_tag_information(release: &Release, language: Language) -> String {
    let date = &release.date;
    let formatted = match language {
        Language::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Language::Jp => format!("{}/{}/{}", date.year(), date.month(), date.day()),
    };

    let mut info = format!("{} ({})", release.tag, formatted);
    if let Some(branch) = &release.branch {
        info.push_str(" - ");
        info.push_str(branch);
    }
    info
}
