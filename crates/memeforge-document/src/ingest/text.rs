// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-text ingestor: one `"<body>" - <author>` quote per line.

use std::path::Path;

use memeforge_core::error::Result;
use memeforge_core::{DocumentFormat, QuoteRecord};
use tracing::{debug, instrument};

use super::QuoteIngestor;
use super::line::{decode_utf8, parse_lines};

/// Reads `.txt` files line by line. Lines without the delimiter are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextIngestor;

impl QuoteIngestor for TextIngestor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let bytes = std::fs::read(path)?;
        debug!(bytes = bytes.len(), "Text file read");
        let text = decode_utf8(path, bytes)?;
        parse_lines(path, &text)
    }
}
