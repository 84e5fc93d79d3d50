// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Engine configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MemeforgeError, Result};

/// Settings shared by the ingestor, the compositor, and the command-line
/// front end. Every field has a default, so a config file only needs the keys
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory that receives composed images.
    pub output_dir: PathBuf,
    /// TrueType font used for the quote text.
    pub font_path: PathBuf,
    /// Font size in pixels.
    pub font_size: f32,
    /// Characters per wrapped line.
    pub line_width: usize,
    /// Width of the composed image in pixels.
    pub image_width: u32,
    /// JPEG quality (1-100) for composed images.
    pub jpeg_quality: u8,
    /// Executable that converts PDF documents to plain text.
    pub pdf_tool: String,
    /// Quote documents loaded by the front end.
    pub quote_files: Vec<PathBuf>,
    /// Directory scanned for candidate images.
    pub image_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./tmp"),
            font_path: PathBuf::from("./fonts/LilitaOne-Regular.ttf"),
            font_size: 20.0,
            line_width: 40,
            image_width: 500,
            jpeg_quality: 90,
            pdf_tool: "pdftotext".to_string(),
            quote_files: vec![
                PathBuf::from("./_data/DogQuotes/DogQuotesTXT.txt"),
                PathBuf::from("./_data/DogQuotes/DogQuotesDOCX.docx"),
                PathBuf::from("./_data/DogQuotes/DogQuotesPDF.pdf"),
                PathBuf::from("./_data/DogQuotes/DogQuotesCSV.csv"),
            ],
            image_dir: PathBuf::from("./_data/photos/dog/"),
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing keys take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| {
            MemeforgeError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|err| {
            MemeforgeError::Config(format!("invalid config {}: {}", path.display(), err))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the compositor cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 {
            return Err(MemeforgeError::Config("image_width must be positive".into()));
        }
        if self.line_width == 0 {
            return Err(MemeforgeError::Config("line_width must be positive".into()));
        }
        if !(self.font_size > 0.0) {
            return Err(MemeforgeError::Config("font_size must be positive".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(MemeforgeError::Config(
                "jpeg_quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}
