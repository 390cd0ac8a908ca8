//! Template rendering and output writing

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::resolver::{Language, ResolveError, TagResolver};
use crate::scanner::{scan_line, Segment};

/// Errors that can occur while generating a readme file
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The master template could not be opened or read
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output directory or file could not be written
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A tag in the template failed to resolve
    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

/// Render one template line: literals pass through verbatim, placeholders
/// are replaced by their resolved text, and a trailing newline is appended.
///
/// Resolved text is inserted as-is. It is never scanned again, so a
/// replacement containing `${...}` stays literal in the output.
pub fn render_line(
    line: &str,
    resolver: &mut TagResolver<'_>,
    language: Language,
) -> Result<String, ResolveError> {
    let mut rendered = String::with_capacity(line.len() + 1);

    for segment in scan_line(line) {
        match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Placeholder(name) => rendered.push_str(&resolver.resolve(name, language)?),
        }
    }

    rendered.push('\n');
    Ok(rendered)
}

/// Generate one language's readme: stream the master template through
/// [`render_line`] into `<output_dir>/<output_file_name>`.
///
/// The output directory is created if absent. A pass that fails mid-stream
/// removes its partially written file, so no truncated readme is left
/// behind. Returns the written path.
pub fn write_readme(
    config: &GeneratorConfig,
    resolver: &mut TagResolver<'_>,
    language: Language,
) -> Result<PathBuf, GenerateError> {
    let template_path = config.template_path(language);
    let template = File::open(&template_path).map_err(|source| GenerateError::Template {
        path: template_path.clone(),
        source,
    })?;

    fs::create_dir_all(&config.output_dir).map_err(|source| GenerateError::Output {
        path: config.output_dir.clone(),
        source,
    })?;

    let output_path = config.output_path(language);
    let output = File::create(&output_path).map_err(|source| GenerateError::Output {
        path: output_path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(output);

    if let Err(error) = render_into(
        template,
        &template_path,
        &mut writer,
        &output_path,
        resolver,
        language,
    ) {
        // Close the handle before unlinking.
        drop(writer);
        let _ = fs::remove_file(&output_path);
        return Err(error);
    }

    Ok(output_path)
}

fn render_into(
    template: File,
    template_path: &Path,
    writer: &mut BufWriter<File>,
    output_path: &Path,
    resolver: &mut TagResolver<'_>,
    language: Language,
) -> Result<(), GenerateError> {
    for line in BufReader::new(template).lines() {
        let line = line.map_err(|source| GenerateError::Template {
            path: template_path.to_path_buf(),
            source,
        })?;
        let rendered = render_line(&line, resolver, language)?;
        writer
            .write_all(rendered.as_bytes())
            .map_err(|source| GenerateError::Output {
                path: output_path.to_path_buf(),
                source,
            })?;
    }

    writer.flush().map_err(|source| GenerateError::Output {
        path: output_path.to_path_buf(),
        source,
    })
}
