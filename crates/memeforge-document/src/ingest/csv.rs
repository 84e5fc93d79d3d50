// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CSV ingestor: a header row naming `body` and `author`, one quote per row.

use std::fs::File;
use std::path::Path;

use memeforge_core::error::{MemeforgeError, Result};
use memeforge_core::{DocumentFormat, QuoteRecord};
use tracing::{debug, instrument};

use super::QuoteIngestor;

const BODY_COLUMN: &str = "body";
const AUTHOR_COLUMN: &str = "author";

/// Reads `.csv` files. Cell values are taken verbatim (no trimming).
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvIngestor;

impl QuoteIngestor for CsvIngestor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Csv
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let file = File::open(path)?;
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|err| MemeforgeError::parse(path, format!("unreadable header: {err}")))?;
        let column = |name: &str| {
            headers.iter().position(|header| header == name).ok_or_else(|| {
                MemeforgeError::parse(path, format!("missing required column `{name}`"))
            })
        };
        let body_index = column(BODY_COLUMN)?;
        let author_index = column(AUTHOR_COLUMN)?;
        debug!(body_index, author_index, "CSV header validated");

        let mut quotes = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|err| {
                MemeforgeError::parse(path, format!("row {}: {}", row + 1, err))
            })?;
            let cell = |index: usize, name: &str| {
                record.get(index).ok_or_else(|| {
                    MemeforgeError::parse(path, format!("row {}: no `{}` value", row + 1, name))
                })
            };
            let body = cell(body_index, BODY_COLUMN)?;
            let author = cell(author_index, AUTHOR_COLUMN)?;
            quotes.push(QuoteRecord::new(body, author));
        }
        Ok(quotes)
    }
}
