// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingest module — format variants and the dispatcher that chooses between them.

pub mod csv;
pub mod docx;
pub mod line;
pub mod pdf;
pub mod text;

use std::path::Path;

use memeforge_core::error::{MemeforgeError, Result};
use memeforge_core::{DocumentFormat, EngineConfig, QuoteRecord};
use tracing::{debug, info, instrument, warn};

/// One document shape that can be turned into quotes.
///
/// Implementations are stateless apart from fixed settings, so a single
/// instance can be shared by every caller.
pub trait QuoteIngestor: Send + Sync {
    /// Format handled by this variant.
    fn format(&self) -> DocumentFormat;

    /// Whether this variant handles `path`. Defaults to the format detected
    /// from the path's extension being this variant's format.
    fn can_ingest(&self, path: &Path) -> bool {
        DocumentFormat::from_path(path) == Some(self.format())
    }

    /// Read every quote in the document.
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>>;
}

/// Dispatches a path to the first registered variant that accepts it.
///
/// The registry order is fixed at construction and decides ties: when two
/// variants accept the same path, the earlier one always wins.
pub struct Ingestor {
    ingestors: Vec<Box<dyn QuoteIngestor>>,
}

impl Ingestor {
    /// Build a dispatcher over an explicit, ordered list of variants.
    pub fn new(ingestors: Vec<Box<dyn QuoteIngestor>>) -> Self {
        Self { ingestors }
    }

    /// Default registry, with the PDF extractor taken from `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(vec![
            Box::new(text::TextIngestor),
            Box::new(csv::CsvIngestor),
            Box::new(docx::DocxIngestor),
            Box::new(pdf::PdfIngestor::with_tool(config.pdf_tool.clone())),
        ])
    }

    /// Formats in registry order.
    pub fn formats(&self) -> Vec<DocumentFormat> {
        self.ingestors.iter().map(|ingestor| ingestor.format()).collect()
    }

    /// True when any registered variant accepts `path`.
    pub fn can_ingest(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.ingestors.iter().any(|ingestor| ingestor.can_ingest(path))
    }

    /// Parse `path` with the first variant that accepts it.
    ///
    /// Errors from the chosen variant are returned unchanged.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>> {
        let path = path.as_ref();
        let ingestor = self
            .ingestors
            .iter()
            .find(|ingestor| ingestor.can_ingest(path))
            .ok_or_else(|| MemeforgeError::unsupported(path))?;

        debug!(format = %ingestor.format(), "Dispatching to ingestor");
        let quotes = ingestor.parse(path)?;
        info!(count = quotes.len(), "Quotes ingested");
        Ok(quotes)
    }

    /// Parse every path, skipping (and logging) documents that fail.
    pub fn parse_all<P: AsRef<Path>>(&self, paths: impl IntoIterator<Item = P>) -> Vec<QuoteRecord> {
        let mut quotes = Vec::new();
        for path in paths {
            let path = path.as_ref();
            match self.parse(path) {
                Ok(found) => quotes.extend(found),
                Err(err) => warn!(path = %path.display(), %err, "Skipping quote file"),
            }
        }
        quotes
    }
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor")
            .field("formats", &self.formats())
            .finish()
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
