// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Meme compositor — resize an image, lay out a quote, place it at a random
// position that keeps it inside the frame where possible, draw it with an
// outline, and save the result as a new JPEG.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use memeforge_core::EngineConfig;
use memeforge_core::error::{MemeforgeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, instrument};

use crate::font::RenderFont;
use crate::layout::{self, LINE_SPACING, STROKE_WIDTH, TextExtent, WrappedText};
use crate::naming::{OutputNamer, RandomNamer};

/// Output width used when the caller does not ask for one.
pub const DEFAULT_WIDTH: u32 = 500;

/// Minimum distance between the text block and the image edge.
pub const MARGIN: u32 = 10;

const DEFAULT_JPEG_QUALITY: u8 = 90;
const FILL: Rgb<u8> = Rgb([255, 255, 255]);
const OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);

/// Top-left corner of the text block in the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Everything the compositor decided while producing one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeOutput {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub placement: Placement,
    pub extent: TextExtent,
}

/// Draws quotes onto images and writes the results into one output directory.
///
/// The random source `R` drives both text placement and (through the default
/// [`RandomNamer`]) output file names. Seeding it makes runs reproducible.
/// Methods take `&mut self`; share an engine across threads only behind a
/// lock.
pub struct MemeEngine<R: RngCore = StdRng> {
    output_dir: PathBuf,
    font_path: PathBuf,
    font_size: f32,
    line_width: usize,
    default_width: u32,
    jpeg_quality: u8,
    rng: R,
    namer: Box<dyn OutputNamer>,
}

impl<R: RngCore> std::fmt::Debug for MemeEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemeEngine")
            .field("output_dir", &self.output_dir)
            .field("font_path", &self.font_path)
            .field("font_size", &self.font_size)
            .field("line_width", &self.line_width)
            .field("default_width", &self.default_width)
            .field("jpeg_quality", &self.jpeg_quality)
            .finish_non_exhaustive()
    }
}

impl MemeEngine<StdRng> {
    /// Engine writing to `output_dir` (created if missing), seeded from the OS.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_rng(output_dir, StdRng::from_entropy())
    }

    /// Engine configured from `config`, seeded from the OS.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(&config.output_dir)?
            .with_font(&config.font_path, config.font_size)
            .with_line_width(config.line_width)
            .with_default_width(config.image_width)
            .with_jpeg_quality(config.jpeg_quality))
    }
}

impl<R: RngCore> MemeEngine<R> {
    /// Engine using a caller-supplied random source.
    pub fn with_rng(output_dir: impl Into<PathBuf>, rng: R) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        let defaults = EngineConfig::default();
        Ok(Self {
            output_dir,
            font_path: defaults.font_path,
            font_size: defaults.font_size,
            line_width: defaults.line_width,
            default_width: DEFAULT_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            rng,
            namer: Box::new(RandomNamer),
        })
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>, size: f32) -> Self {
        self.font_path = path.into();
        self.font_size = size;
        self
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_default_width(mut self, width: u32) -> Self {
        self.default_width = width;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn with_namer(mut self, namer: impl OutputNamer + 'static) -> Self {
        self.namer = Box::new(namer);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Compose `body`/`author` onto the image at `image_path` and return the
    /// path of the new JPEG. `width` defaults to the engine's default width
    /// (500 unless configured).
    pub fn make_meme(
        &mut self,
        image_path: impl AsRef<Path>,
        body: &str,
        author: &str,
        width: Option<u32>,
    ) -> Result<PathBuf> {
        let width = width.unwrap_or(self.default_width);
        self.compose(image_path, body, author, width)
            .map(|output| output.path)
    }

    /// Like [`MemeEngine::make_meme`], but also reports the size, placement,
    /// and text extent that were used.
    #[instrument(skip(self, image_path, body, author), fields(image = %image_path.as_ref().display()))]
    pub fn compose(
        &mut self,
        image_path: impl AsRef<Path>,
        body: &str,
        author: &str,
        width: u32,
    ) -> Result<MemeOutput> {
        let image_path = image_path.as_ref();
        if width == 0 {
            return Err(MemeforgeError::ImageError("width must be positive".into()));
        }

        let source = image::open(image_path)
            .map_err(|err| MemeforgeError::image_open(image_path, err))?;
        let height = scaled_height(source.width(), source.height(), width);
        info!(
            from_w = source.width(),
            from_h = source.height(),
            width,
            height,
            "Resizing image"
        );
        let mut canvas = source
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_rgb8();

        let font = RenderFont::resolve(&self.font_path, self.font_size);
        let wrapped = layout::wrap(body, author, self.line_width);
        let extent = layout::measure(&wrapped, &font);
        let placement = choose_placement(&mut self.rng, width, height, extent);
        debug!(
            lines = wrapped.line_count(),
            text_w = extent.width,
            text_h = extent.height,
            x = placement.x,
            y = placement.y,
            "Text placed"
        );

        draw_outlined(&mut canvas, &font, &wrapped, placement);

        let path = self.output_dir.join(self.namer.next_name(&mut self.rng));
        save_jpeg(&canvas, &path, self.jpeg_quality)?;
        info!(path = %path.display(), "Meme saved");

        Ok(MemeOutput {
            path,
            width,
            height,
            placement,
            extent,
        })
    }
}

/// Height that keeps the aspect ratio at the new width, rounded to the
/// nearest pixel and never below 1.
pub fn scaled_height(original_width: u32, original_height: u32, width: u32) -> u32 {
    let scaled = f64::from(width) * f64::from(original_height) / f64::from(original_width.max(1));
    (scaled.round() as u32).max(1)
}

/// Largest top-left coordinates that keep the block `MARGIN` pixels from the
/// right and bottom edges. Collapses to `MARGIN` when the block is too big, in
/// which case the text overflows the image.
pub fn placement_bounds(width: u32, height: u32, extent: TextExtent) -> Placement {
    Placement {
        x: width
            .saturating_sub(extent.width)
            .saturating_sub(MARGIN)
            .max(MARGIN),
        y: height
            .saturating_sub(extent.height)
            .saturating_sub(MARGIN)
            .max(MARGIN),
    }
}

/// Pick a uniformly random placement within [`placement_bounds`], inclusive.
pub fn choose_placement<G: Rng + ?Sized>(
    rng: &mut G,
    width: u32,
    height: u32,
    extent: TextExtent,
) -> Placement {
    let max = placement_bounds(width, height, extent);
    Placement {
        x: rng.gen_range(MARGIN..=max.x),
        y: rng.gen_range(MARGIN..=max.y),
    }
}

/// Draw every line with a black outline and white fill. The outline is the
/// text stamped at each of the eight neighbouring offsets.
fn draw_outlined(canvas: &mut RgbImage, font: &RenderFont, wrapped: &WrappedText, at: Placement) {
    let stroke = STROKE_WIDTH as i32;
    let advance = (font.line_height() + LINE_SPACING) as i32;
    let origin_x = at.x as i32 + stroke;
    let origin_y = at.y as i32 + stroke;

    for (index, line) in wrapped.lines().iter().enumerate() {
        let y = origin_y + index as i32 * advance;
        for dy in -stroke..=stroke {
            for dx in -stroke..=stroke {
                if dx != 0 || dy != 0 {
                    font.draw_line(canvas, OUTLINE, origin_x + dx, y + dy, line);
                }
            }
        }
        font.draw_line(canvas, FILL, origin_x, y, line);
    }
}

fn save_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    canvas.write_with_encoder(encoder).map_err(|err| {
        MemeforgeError::ImageError(format!(
            "failed to save image to {}: {}",
            path.display(),
            err
        ))
    })
}
