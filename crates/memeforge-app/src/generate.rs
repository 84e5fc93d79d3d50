// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Meme generation — fills in whatever the user left out from the resource
// snapshot and hands the result to the compositor.

use std::path::PathBuf;

use memeforge_core::QuoteRecord;
use memeforge_core::error::{MemeforgeError, Result};
use memeforge_render::MemeEngine;
use rand::{Rng, RngCore};
use tracing::{info, instrument};

use crate::resources::Resources;

/// What the user asked for. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct MemeRequest {
    pub image: Option<PathBuf>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub width: Option<u32>,
}

impl MemeRequest {
    /// The user's own quote, if they gave one. A body without an author is
    /// rejected.
    pub fn quote(&self) -> Result<Option<QuoteRecord>> {
        match (&self.body, &self.author) {
            (Some(body), Some(author)) => Ok(Some(QuoteRecord::new(body.as_str(), author.as_str()))),
            (Some(_), None) => Err(MemeforgeError::MissingAuthor),
            (None, _) => Ok(None),
        }
    }

    pub fn needs_random_image(&self) -> bool {
        self.image.is_none()
    }

    pub fn needs_random_quote(&self) -> bool {
        self.body.is_none()
    }
}

/// Produce one meme and return its path.
#[instrument(skip_all)]
pub fn generate_meme<E: RngCore, R: Rng + ?Sized>(
    request: &MemeRequest,
    resources: &Resources,
    engine: &mut MemeEngine<E>,
    rng: &mut R,
) -> Result<PathBuf> {
    let own_quote = request.quote()?;

    let image = match &request.image {
        Some(path) => path.clone(),
        None => resources.random_image(rng)?.to_path_buf(),
    };
    let quote = match own_quote {
        Some(quote) => quote,
        None => resources.random_quote(rng)?.clone(),
    };
    info!(image = %image.display(), %quote, "Generating meme");

    engine.make_meme(&image, quote.body(), quote.author(), request.width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::Path;

    fn engine(dir: &Path) -> MemeEngine<StdRng> {
        MemeEngine::with_rng(dir.join("out"), StdRng::seed_from_u64(1))
            .unwrap()
            .with_font("/nonexistent/font.ttf", 20.0)
    }

    fn dog_picture(dir: &Path) -> PathBuf {
        let path = dir.join("dog.png");
        RgbImage::from_pixel(120, 80, Rgb([40, 90, 140])).save(&path).unwrap();
        path
    }

    #[test]
    fn body_without_author_is_rejected_before_work() {
        let dir = tempfile::tempdir().unwrap();
        let request = MemeRequest {
            body: Some("Woof".into()),
            ..Default::default()
        };
        let err = generate_meme(
            &request,
            &Resources::default(),
            &mut engine(dir.path()),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert!(matches!(err, MemeforgeError::MissingAuthor));
    }

    #[test]
    fn author_alone_is_ignored() {
        let request = MemeRequest {
            author: Some("Rex".into()),
            ..Default::default()
        };
        assert!(request.quote().unwrap().is_none());
        assert!(request.needs_random_quote());
    }

    #[test]
    fn own_image_and_quote() {
        let dir = tempfile::tempdir().unwrap();
        let request = MemeRequest {
            image: Some(dog_picture(dir.path())),
            body: Some("Sit".into()),
            author: Some("Fido".into()),
            width: Some(100),
        };
        let path = generate_meme(
            &request,
            &Resources::default(),
            &mut engine(dir.path()),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (100, 67));
    }

    #[test]
    fn random_picks_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let resources = Resources::new(
            vec![QuoteRecord::new("Woof", "Rex")],
            vec![dog_picture(dir.path())],
        );
        let path = generate_meme(
            &MemeRequest::default(),
            &resources,
            &mut engine(dir.path()),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_snapshot_reports_missing_images() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_meme(
            &MemeRequest::default(),
            &Resources::default(),
            &mut engine(dir.path()),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert!(matches!(err, MemeforgeError::NoResources(_)));
    }
}
