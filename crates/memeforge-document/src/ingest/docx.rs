// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DOCX ingestor: one quote per paragraph of `word/document.xml`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use memeforge_core::error::{MemeforgeError, Result};
use memeforge_core::{DocumentFormat, QuoteRecord};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};
use zip::ZipArchive;

use super::QuoteIngestor;
use super::line::split_quote;

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Reads `.docx` word-processing documents. Paragraphs without the delimiter
/// are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxIngestor;

impl QuoteIngestor for DocxIngestor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|err| MemeforgeError::parse(path, format!("not a DOCX archive: {err}")))?;
        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_ENTRY)
            .map_err(|err| MemeforgeError::parse(path, format!("{DOCUMENT_ENTRY}: {err}")))?
            .read_to_string(&mut xml)
            .map_err(|err| MemeforgeError::parse(path, format!("{DOCUMENT_ENTRY}: {err}")))?;

        let paragraphs = paragraphs(&xml)
            .map_err(|reason| MemeforgeError::parse(path, reason))?;
        debug!(paragraphs = paragraphs.len(), "DOCX paragraphs extracted");

        let mut quotes = Vec::new();
        for (index, paragraph) in paragraphs.iter().enumerate() {
            if paragraph.trim().is_empty() {
                continue;
            }
            match split_quote(paragraph) {
                Ok(Some(quote)) => quotes.push(quote),
                Ok(None) => {}
                Err(reason) => {
                    return Err(MemeforgeError::parse(
                        path,
                        format!("paragraph {}: {}", index + 1, reason),
                    ));
                }
            }
        }
        Ok(quotes)
    }
}

/// Collect the text of every `w:p` paragraph, in document order of their
/// closing tags. Text runs (`w:t`) are concatenated; tabs and breaks become
/// `\t` and `\n`.
fn paragraphs(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut open: Vec<String> = Vec::new();
    let mut finished = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                let ch = match e.name().as_ref() {
                    b"w:tab" => Some('\t'),
                    b"w:br" | b"w:cr" => Some('\n'),
                    _ => None,
                };
                if let (Some(ch), Some(current)) = (ch, open.last_mut()) {
                    current.push(ch);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(done) = open.pop() {
                        finished.push(done);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Ok(Event::CData(e)) if in_text => {
                let raw = e.into_inner();
                if let Some(current) = open.last_mut() {
                    current.push_str(&String::from_utf8_lossy(raw.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(format!(
                    "malformed XML at byte {}: {}",
                    reader.buffer_position(),
                    err
                ));
            }
        }
    }
    Ok(finished)
}
