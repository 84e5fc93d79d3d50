// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Memeforge.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A quote body paired with its attributed author.
///
/// Immutable once constructed: fields are private and only exposed through
/// accessors. Two records are equal when both strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteRecord {
    body: String,
    author: String,
}

impl QuoteRecord {
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
        }
    }

    /// The quote text, without surrounding quotation marks.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl std::fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}

/// Supported quote document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// One quote per line.
    Text,
    /// Header row with `body` and `author` columns.
    Csv,
    /// One quote per paragraph of an OOXML word document.
    Docx,
    /// Converted to text by an external extraction tool.
    Pdf,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 4] = [Self::Text, Self::Csv, Self::Docx, Self::Pdf];

    /// Extension token declared for this format (lowercase, no dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// Whether `path` carries this format's extension.
    pub fn matches(&self, path: &Path) -> bool {
        matches_extension(path, self.extension())
    }

    /// Infer the format from the path's final suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.matches(path))
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Canonical extension matcher shared by every ingestor.
///
/// Compares the text after the last `.` of the file name against `token`,
/// ignoring ASCII case. A file name without a dot never matches, and only the
/// final suffix counts (`quotes.txt.bak` is not a `txt` file).
pub fn matches_extension(path: &Path, token: &str) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    match name.rsplit_once('.') {
        Some((_, suffix)) => suffix.eq_ignore_ascii_case(token),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(matches_extension(Path::new("quotes.PDF"), "pdf"));
        assert!(matches_extension(Path::new("quotes.pdf"), "pdf"));
        assert!(matches_extension(Path::new("dir.v2/Quotes.Txt"), "txt"));
    }

    #[test]
    fn extension_match_uses_final_suffix_only() {
        assert!(!matches_extension(Path::new("quotes.txt.bak"), "txt"));
        assert!(!matches_extension(Path::new("quotes.mytxt"), "txt"));
        assert!(!matches_extension(Path::new("txt"), "txt"));
        assert!(!matches_extension(Path::new("dir.txt/README"), "txt"));
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/DogQuotesDOCX.docx")),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.CSV")),
            Some(DocumentFormat::Csv)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.xyz")), None);
    }

    #[test]
    fn quote_display() {
        let quote = QuoteRecord::new("Life is what happens", "John Lennon");
        assert_eq!(quote.to_string(), "\"Life is what happens\" - John Lennon");
        assert_eq!(quote.body(), "Life is what happens");
        assert_eq!(quote.author(), "John Lennon");
    }
}
