//! Markdown cleanup for plain-text output

use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]()]+)\]\([^\[\]()]+\)").unwrap());

static DESCRIPTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\sDESCRIPTION_START\s-->").unwrap());

static DESCRIPTION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\sDESCRIPTION_END\s-->").unwrap());

/// Strip markdown syntax that reads poorly in a plain-text file.
///
/// Inline links keep their text and lose their URL (only when neither part
/// contains further brackets or parentheses), `##` pairs collapse to a
/// single `#`, emphasis asterisks are dropped, and backticks become double
/// quotes.
pub fn clean(text: &str) -> String {
    LINK.replace_all(text, "$1")
        .replace("##", "#")
        .replace('*', "")
        .replace('`', "\"")
}

/// Collect the lines between the `DESCRIPTION_START` and `DESCRIPTION_END`
/// marker comments of a README.
///
/// The marker lines themselves are excluded, lines outside the markers are
/// ignored, and the collected lines are joined with `\n`. A README without
/// markers yields an empty string.
pub fn extract_description(readme: &str) -> String {
    let mut inside = false;
    let mut collected = Vec::new();

    for line in readme.lines() {
        if DESCRIPTION_START.is_match(line) {
            inside = true;
            continue;
        }
        if DESCRIPTION_END.is_match(line) {
            inside = false;
            continue;
        }
        if inside {
            collected.push(line);
        }
    }

    collected.join("\n")
}
