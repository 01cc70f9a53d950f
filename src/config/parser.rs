//! Line parser for INI-style configuration files.
//!
//! Accepts the dialect written by the desktop shell: `[Section]` headers,
//! `key = value` or `key: value` entries, and full-line `#` / `;` comments.

/// Represents one classified line of a configuration file.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Full-line comment, without its leading marker.
    Comment(&'a str),
    /// Section header, e.g. `Containers` for `[Containers]`.
    Section(&'a str),
    /// `key = value` entry. The key is trimmed but not yet case-folded.
    Entry { key: &'a str, value: &'a str },
}

/// Errors that may occur when parsing a single configuration line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated section header: `{0}`")]
    UnterminatedSection(String),

    #[error("empty section name: `{0}`")]
    EmptySection(String),

    #[error("missing `=` or `:` separator in line: `{0}`")]
    MissingSeparator(String),

    #[error("empty key in line: `{0}`")]
    EmptyKey(String),
}

/// Parses a single line of configuration text.
///
/// The returned [`Line`] borrows from the input and does not allocate.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed headers or entries.
pub fn parse_line(line: &str) -> Result<Line<'_>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(comment) = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix(';'))
    {
        return Ok(Line::Comment(comment.trim_start()));
    }

    if let Some(header) = trimmed.strip_prefix('[') {
        let name = header
            .strip_suffix(']')
            .ok_or_else(|| ParseError::UnterminatedSection(line.to_owned()))?
            .trim();
        if name.is_empty() {
            return Err(ParseError::EmptySection(line.to_owned()));
        }
        return Ok(Line::Section(name));
    }

    // The first separator wins, so values may themselves contain `=` or `:`.
    let separator = trimmed
        .find(|c| c == '=' || c == ':')
        .ok_or_else(|| ParseError::MissingSeparator(line.to_owned()))?;
    let key = trimmed[..separator].trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(line.to_owned()));
    }
    let value = trimmed[separator + 1..].trim();

    Ok(Line::Entry { key, value })
}
