//! readme-gen CLI
//!
//! Usage:
//!   readme-gen [OPTIONS] [REPOSITORY]
//!
//! Options:
//!   -t, --tag <TAG>          Release tag to display
//!   -r, --released <TIME>    Release timestamp (RFC 3339 or YYYY-MM-DD)
//!   -b, --branch <NAME>      Branch to display next to the tag
//!   -c, --config <FILE>      Configuration file (TOML format)
//!   -o, --output-dir <DIR>   Where to write the generated files
//!   --tags                   List the supported placeholder tags
//!   -h, --help               Print help

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::Parser;

use readme_gen::{
    parse_release_date, write_readme, GeneratorConfig, Language, Release, RepoId, TagResolver,
};

#[derive(Parser)]
#[command(name = "readme-gen")]
#[command(about = "Localized plain-text README generation")]
struct Cli {
    /// Repository to generate for, as OWNER/NAME
    #[arg(required_unless_present = "tags")]
    repository: Option<RepoId>,

    /// Release tag to display via ${TAG_INFORMATION}
    #[arg(short, long, requires = "released")]
    tag: Option<String>,

    /// Release timestamp, RFC 3339 or YYYY-MM-DD
    #[arg(short, long, requires = "tag", value_parser = parse_release_date)]
    released: Option<DateTime<FixedOffset>>,

    /// Branch name to display next to the release tag
    #[arg(short, long, requires = "tag")]
    branch: Option<String>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the generated files (overrides the config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// List the supported placeholder tags
    #[arg(long)]
    tags: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.tags {
        print_tags();
        return;
    }

    // clap enforces the positional argument unless --tags was given
    let Some(repo) = cli.repository else {
        return;
    };

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };

    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let release = match (cli.tag, cli.released) {
        (Some(tag), Some(date)) => Some(Release::new(tag, date, cli.branch)),
        _ => None,
    };

    // One pass per language, sharing the resolver so files are read once
    let mut resolver = TagResolver::new(&config, &repo, release.as_ref());

    for language in Language::ALL {
        eprintln!("Generating {} readme...", language.english_name());
        match write_readme(&config, &mut resolver, language) {
            Ok(path) => eprintln!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_tags() {
    println!(
        r#"SUPPORTED TAGS
==============

${{REPOSITORY_NAME}}   Repository name (the part after the slash)
${{AUTHOR}}            Repository owner
${{TAG_INFORMATION}}   Release tag and date, e.g. "v1.0 (3/5/2024)"
                     Needs --tag and --released; --branch appends " - NAME"
${{DESCRIPTION}}       Text between the DESCRIPTION_START/END markers of the
                     repository README under .github/
${{HOW_TO_USE}}        Contents of templates/fragments/how_to_use/<lang>.md
${{NOTES}}             Contents of templates/fragments/notes/<lang>.md
${{README_URL}}        Link to the repository README on GitHub

Markdown in fragments and the description is flattened for plain text:
links keep their text, pairs of # collapse to one #, asterisks are
dropped, and backticks become double quotes.

Unknown tags pass through unchanged. Master templates live in
templates/<lang>.txt with lang "en" or "jp"; the outputs are README.txt
and お読みください.txt."#
    );
}
