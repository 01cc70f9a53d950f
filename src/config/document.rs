use super::parser::{Line, parse_line};
use super::{Error, Result};

/// One `[Section]` of a configuration document with its entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            entries: Vec::new(),
        }
    }

    /// Returns the section name as written in the header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a value by key. Keys are matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, value)` pairs in declaration order.
    ///
    /// Keys are returned lower-cased.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed INI-style configuration document.
///
/// Section names are case-sensitive, keys are not. Both sections and entries
/// keep the order they were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Parses a configuration document from text.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] if a line is malformed.
    /// - [`Error::EntryOutsideSection`] if an entry precedes the first header.
    /// - [`Error::DuplicateSection`] / [`Error::DuplicateKey`] on redefinitions.
    pub fn parse(text: &str) -> Result<Self> {
        let mut sections: Vec<Section> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            match parse_line(raw).map_err(|source| Error::Parse { line, source })? {
                Line::Blank | Line::Comment(_) => {}
                Line::Section(name) => {
                    if sections.iter().any(|s| s.name == name) {
                        return Err(Error::DuplicateSection {
                            section: name.to_owned(),
                            line,
                        });
                    }
                    sections.push(Section::new(name));
                }
                Line::Entry { key, value } => {
                    let section = sections
                        .last_mut()
                        .ok_or(Error::EntryOutsideSection { line })?;
                    let key = key.to_ascii_lowercase();
                    if section.entries.iter().any(|(k, _)| *k == key) {
                        return Err(Error::DuplicateKey {
                            section: section.name.clone(),
                            key,
                            line,
                        });
                    }
                    section.entries.push((key, value.to_owned()));
                }
            }
        }

        Ok(Self { sections })
    }

    /// Returns the section with the given name, if declared.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::ParseError;

    const SAMPLE: &str = "\
# shell configuration
[Containers]
ollama = ollama-server
OpenWebUI: open-webui

[Monitor]
interval_ms = 2500
";

    #[test]
    fn parses_sections_in_order() {
        let doc = Document::parse(SAMPLE).unwrap();
        let names: Vec<&str> = doc.sections().map(Section::name).collect();
        assert_eq!(names, vec!["Containers", "Monitor"]);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let doc = Document::parse(SAMPLE).unwrap();
        let containers = doc.section("Containers").unwrap();
        assert_eq!(containers.get("openwebui"), Some("open-webui"));
        assert_eq!(containers.get("OLLAMA"), Some("ollama-server"));
        assert_eq!(containers.get("missing"), None);
    }

    #[test]
    fn section_names_are_case_sensitive() {
        let doc = Document::parse(SAMPLE).unwrap();
        assert!(doc.section("containers").is_none());
    }

    #[test]
    fn entries_keep_declaration_order() {
        let doc = Document::parse(SAMPLE).unwrap();
        let entries: Vec<(&str, &str)> = doc.section("Containers").unwrap().entries().collect();
        assert_eq!(
            entries,
            vec![("ollama", "ollama-server"), ("openwebui", "open-webui")]
        );
    }

    #[test]
    fn empty_document_has_no_sections() {
        let doc = Document::parse("\n# nothing here\n").unwrap();
        assert_eq!(doc.sections().count(), 0);
    }

    #[test]
    fn error_on_entry_before_section() {
        let err = Document::parse("ollama = c1\n[Containers]\n").unwrap_err();
        assert!(matches!(err, Error::EntryOutsideSection { line: 1 }));
    }

    #[test]
    fn error_on_duplicate_section() {
        let err = Document::parse("[Containers]\n[Monitor]\n[Containers]\n").unwrap_err();
        match err {
            Error::DuplicateSection { section, line } => {
                assert_eq!(section, "Containers");
                assert_eq!(line, 3);
            }
            other => panic!("Expected DuplicateSection, got {other:?}"),
        }
    }

    #[test]
    fn error_on_duplicate_key_ignoring_case() {
        let err = Document::parse("[Containers]\nollama = a\nOllama = b\n").unwrap_err();
        match err {
            Error::DuplicateKey { section, key, line } => {
                assert_eq!(section, "Containers");
                assert_eq!(key, "ollama");
                assert_eq!(line, 3);
            }
            other => panic!("Expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn error_reports_line_of_malformed_entry() {
        let err = Document::parse("[Containers]\n\nollama c1\n").unwrap_err();
        match err {
            Error::Parse { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, ParseError::MissingSeparator(_)));
            }
            other => panic!("Expected Parse, got {other:?}"),
        }
    }
}
