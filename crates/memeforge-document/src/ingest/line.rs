// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quote line splitting shared by the text, DOCX, and PDF ingestors.

use std::path::Path;

use memeforge_core::QuoteRecord;
use memeforge_core::error::{MemeforgeError, Result};

/// Separator between a quote body and its author.
pub const DELIMITER: &str = " - ";

/// Split one line (or paragraph) of the form `"<body>" - <author>`.
///
/// Returns `Ok(None)` when the delimiter is absent. More than one delimiter
/// makes the split point ambiguous and is reported as an error message.
pub fn split_quote(line: &str) -> std::result::Result<Option<QuoteRecord>, String> {
    let line = line.trim();
    match line.matches(DELIMITER).count() {
        0 => Ok(None),
        1 => {
            let (body, author) = line
                .split_once(DELIMITER)
                .ok_or_else(|| "delimiter vanished while splitting".to_string())?;
            Ok(Some(QuoteRecord::new(trim_quotes(body), author.trim())))
        }
        n => Err(format!(
            "found {n} occurrences of \"{DELIMITER}\"; expected exactly one"
        )),
    }
}

/// Parse a whole text document, one quote per line.
pub fn parse_lines(path: &Path, text: &str) -> Result<Vec<QuoteRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut quotes = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match split_quote(line) {
            Ok(Some(quote)) => quotes.push(quote),
            Ok(None) => {}
            Err(reason) => {
                return Err(MemeforgeError::parse(
                    path,
                    format!("line {}: {}", index + 1, reason),
                ));
            }
        }
    }
    Ok(quotes)
}

/// Decode file bytes as UTF-8, reporting invalid data as a parse error.
pub fn decode_utf8(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|err| MemeforgeError::parse(path, format!("not valid UTF-8: {err}")))
}

fn trim_quotes(body: &str) -> &str {
    body.trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\u{201c}' | '\u{201d}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_line() {
        let quote = split_quote("\"Hello\" - World").unwrap().unwrap();
        assert_eq!(quote, QuoteRecord::new("Hello", "World"));
    }

    #[test]
    fn line_without_delimiter_is_skipped() {
        assert_eq!(split_quote("just a heading").unwrap(), None);
        assert_eq!(split_quote("well-known").unwrap(), None);
        assert_eq!(split_quote("").unwrap(), None);
    }

    #[test]
    fn two_delimiters_rejected() {
        let err = split_quote("\"A - B\" - C").unwrap_err();
        assert!(err.contains("2 occurrences"));
    }

    #[test]
    fn inner_text_preserved() {
        let quote = split_quote("  \"Bark  like  nobody's listening\" -   Rex  \r")
            .unwrap()
            .unwrap();
        assert_eq!(quote.body(), "Bark  like  nobody's listening");
        assert_eq!(quote.author(), "Rex");
    }

    #[test]
    fn typographic_quotes_trimmed() {
        let quote = split_quote("\u{201c}Chase the mailman\u{201d} - Skittle")
            .unwrap()
            .unwrap();
        assert_eq!(quote.body(), "Chase the mailman");
    }

    #[test]
    fn parse_lines_reports_line_number() {
        let text = "\"One\" - A\n\"Two - too\" - B\n";
        let err = parse_lines(Path::new("q.txt"), text).unwrap_err();
        match err {
            MemeforgeError::Parse { path, reason } => {
                assert_eq!(path, "q.txt");
                assert!(reason.starts_with("line 2:"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_lines_skips_noise_and_bom() {
        let text = "\u{feff}\"Hello\" - World\n\nDog Quotes\n\u{c}\"Sit\" - Fido\n";
        let quotes = parse_lines(Path::new("q.txt"), text).unwrap();
        assert_eq!(
            quotes,
            vec![
                QuoteRecord::new("Hello", "World"),
                QuoteRecord::new("Sit", "Fido"),
            ]
        );
    }
}
