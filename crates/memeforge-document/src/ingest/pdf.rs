// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF ingestor — converts the document to plain text with an external tool
// (`pdftotext` from poppler by default), then reads it like a `.txt` file.
//
// The conversion runs inside a scoped temporary directory that is removed
// when the guard drops, whether the tool fails, the text fails to parse, or
// everything succeeds. The tool call blocks and has no timeout of its own.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use memeforge_core::error::{MemeforgeError, Result};
use memeforge_core::{DocumentFormat, QuoteRecord};
use tracing::{debug, info, instrument};

use super::QuoteIngestor;
use super::line::{decode_utf8, parse_lines};

/// Default text extraction executable.
pub const DEFAULT_PDF_TOOL: &str = "pdftotext";

/// Name of the extracted text file inside the temporary directory.
const EXTRACTED_FILENAME: &str = "output.txt";

/// Reads `.pdf` files through an external `<tool> <input> <output>` converter.
#[derive(Debug, Clone)]
pub struct PdfIngestor {
    tool: String,
}

impl PdfIngestor {
    /// Use a specific extraction executable (name on `PATH` or full path).
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    fn tool_failure(&self, reason: impl Into<String>) -> MemeforgeError {
        MemeforgeError::ExternalToolFailure {
            tool: self.tool.clone(),
            reason: reason.into(),
        }
    }
}

impl Default for PdfIngestor {
    fn default() -> Self {
        Self::with_tool(DEFAULT_PDF_TOOL)
    }
}

impl QuoteIngestor for PdfIngestor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    #[instrument(skip_all, fields(path = %path.display(), tool = %self.tool))]
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let scratch = tempfile::Builder::new().prefix("memeforge-pdf-").tempdir()?;
        let extracted = scratch.path().join(EXTRACTED_FILENAME);

        info!("Extracting PDF text");
        let output = Command::new(&self.tool)
            .arg(path)
            .arg(&extracted)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => self.tool_failure("program not found"),
                _ => self.tool_failure(format!("could not start: {err}")),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.tool_failure(format!("{}: {}", output.status, stderr.trim())));
        }

        let bytes = std::fs::read(&extracted)
            .map_err(|err| self.tool_failure(format!("produced no text output: {err}")))?;
        debug!(bytes = bytes.len(), "PDF text extracted");

        let text = decode_utf8(path, bytes)?;
        parse_lines(path, &text)
    }
}
