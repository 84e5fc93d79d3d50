// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// memeforge-document — Quote ingestion for Memeforge.
//
// Reads attributed quotes out of plain text, CSV, DOCX, and PDF documents and
// normalises them into `QuoteRecord`s. The `Ingestor` picks the first
// registered format variant whose extension matches the input path.

pub mod ingest;

// Re-export the primary structs so callers can use `memeforge_document::Ingestor` etc.
pub use ingest::csv::CsvIngestor;
pub use ingest::docx::DocxIngestor;
pub use ingest::pdf::PdfIngestor;
pub use ingest::text::TextIngestor;
pub use ingest::{Ingestor, QuoteIngestor};
