//! Placeholder scanner for template lines using logos

use logos::Logos;

/// Tokens of a single template line.
///
/// There are no skip patterns: every byte of the line is significant and is
/// either a placeholder or literal text to copy through verbatim.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `${NAME}` placeholder. NAME is ASCII word characters only, and the
    /// first `}` closes the tag.
    #[regex(r"\$\{[A-Za-z0-9_]+\}")]
    Placeholder,

    /// A run of literal text containing no `$`.
    #[regex(r"[^$]+")]
    Text,

    /// A `$` that does not open a well-formed placeholder.
    #[token("$")]
    Dollar,
}

/// One piece of a scanned template line, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied to the output unchanged.
    Literal(&'a str),
    /// A placeholder occurrence, holding the bare tag name.
    Placeholder(&'a str),
}

/// Split a template line into its ordered literal and placeholder segments.
///
/// Adjacent non-placeholder tokens are merged into a single literal span, so
/// text before, between, and after placeholders comes back exactly as
/// written. Malformed placeholder syntax (`${}`, `${a b}`, an unclosed
/// `${...`) never forms a tag and stays literal.
pub fn scan_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal = 0..0;

    for (token, span) in Token::lexer(line).spanned() {
        match token {
            Ok(Token::Placeholder) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(&line[literal.clone()]));
                }
                segments.push(Segment::Placeholder(&line[span.start + 2..span.end - 1]));
                literal = span.end..span.end;
            }
            // Text or a bare dollar: part of the current literal run.
            _ => {
                if literal.is_empty() {
                    literal = span;
                } else {
                    literal.end = span.end;
                }
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(&line[literal]));
    }

    segments
}
