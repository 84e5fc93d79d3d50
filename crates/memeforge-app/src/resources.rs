// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resource snapshot — the quotes and candidate images the front end picks
// from when the user does not supply their own.

use std::path::{Path, PathBuf};

use memeforge_core::QuoteRecord;
use memeforge_core::error::{MemeforgeError, Result};
use memeforge_document::Ingestor;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

/// Quotes and images loaded once at startup. Never changes after it is
/// built; builder methods consume and return the snapshot.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    quotes: Vec<QuoteRecord>,
    images: Vec<PathBuf>,
}

impl Resources {
    pub fn new(quotes: Vec<QuoteRecord>, images: Vec<PathBuf>) -> Self {
        Self { quotes, images }
    }

    /// Add every quote found in `files`. Unreadable files are logged and
    /// skipped.
    pub fn with_quotes<P: AsRef<Path>>(
        mut self,
        ingestor: &Ingestor,
        files: impl IntoIterator<Item = P>,
    ) -> Self {
        self.quotes.extend(ingestor.parse_all(files));
        info!(count = self.quotes.len(), "Quotes loaded");
        self
    }

    /// Add every decodable image under `dir`, recursively.
    pub fn with_images(mut self, dir: &Path) -> Self {
        self.images.extend(scan_images(dir));
        info!(dir = %dir.display(), count = self.images.len(), "Images found");
        self
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&QuoteRecord> {
        self.quotes
            .choose(rng)
            .ok_or_else(|| MemeforgeError::NoResources("quotes".into()))
    }

    pub fn random_image<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Path> {
        self.images
            .choose(rng)
            .map(PathBuf::as_path)
            .ok_or_else(|| MemeforgeError::NoResources("images".into()))
    }
}

/// Files under `dir` whose extension names an image format, sorted so that a
/// seeded pick is reproducible. A missing directory yields nothing.
pub fn scan_images(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = match std::fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %current.display(), %err, "Cannot read image directory");
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if image::ImageFormat::from_path(&path).is_ok() {
                found.push(path);
            }
        }
    }

    found.sort();
    found
}
