// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font resolution and glyph drawing.
//
// A TrueType font is loaded from disk when possible. When the file is missing
// or unreadable the compositor falls back to a built-in 5x8 bitmap font
// (printable ASCII, scaled up 2x) instead of failing.

use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::{debug, warn};

use crate::layout::TextExtent;

/// Integer scale applied to the bitmap glyphs.
const BUILTIN_SCALE: u32 = 2;

/// Advance of one built-in character cell (5 glyph columns + 1 gap), in pixels.
pub const BUILTIN_CELL_WIDTH: u32 = 6 * BUILTIN_SCALE;

/// Height of one built-in character cell, in pixels.
pub const BUILTIN_CELL_HEIGHT: u32 = 8 * BUILTIN_SCALE;

/// Font used to draw the quote.
#[derive(Clone)]
pub enum RenderFont {
    /// Outline font rendered at a fixed pixel size.
    TrueType { font: FontArc, scale: PxScale },
    /// Built-in bitmap font. Has no bounding-box primitive.
    Builtin,
}

impl std::fmt::Debug for RenderFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueType { scale, .. } => f
                .debug_struct("TrueType")
                .field("scale", &scale.y)
                .finish_non_exhaustive(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl RenderFont {
    /// Load the TrueType font at `path` at `size` pixels, or fall back to the
    /// built-in font. Never fails.
    pub fn resolve(path: &Path, size: f32) -> Self {
        match probe_truetype(path) {
            Some(font) => {
                debug!(path = %path.display(), size, "TrueType font loaded");
                Self::TrueType {
                    font,
                    scale: PxScale::from(size),
                }
            }
            None => {
                warn!(path = %path.display(), "Font unavailable, using built-in bitmap font");
                Self::Builtin
            }
        }
    }

    pub fn builtin() -> Self {
        Self::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Height of one line of text, excluding spacing, in pixels.
    pub fn line_height(&self) -> u32 {
        match self {
            Self::TrueType { font, scale } => font.as_scaled(*scale).height().ceil() as u32,
            Self::Builtin => BUILTIN_CELL_HEIGHT,
        }
    }

    /// Bounding box of `lines` stacked with `spacing` pixels between them and
    /// an outline of `stroke` pixels. `None` when the font cannot measure
    /// itself.
    pub fn multiline_extent(&self, lines: &[String], spacing: u32, stroke: u32) -> Option<TextExtent> {
        let Self::TrueType { font, scale } = self else {
            return None;
        };
        let count = lines.len() as u32;
        let width = lines
            .iter()
            .map(|line| text_size(*scale, font, line).0)
            .max()
            .unwrap_or(0);
        Some(TextExtent {
            width: width + 2 * stroke,
            height: count * self.line_height() + count.saturating_sub(1) * spacing + 2 * stroke,
        })
    }

    /// Draw one line with its top-left corner at (`x`, `y`).
    pub fn draw_line(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, line: &str) {
        match self {
            Self::TrueType { font, scale } => draw_text_mut(canvas, color, x, y, *scale, font, line),
            Self::Builtin => draw_bitmap_line(canvas, color, x, y, line),
        }
    }
}

/// Try to read and parse a TrueType/OpenType font file.
pub fn probe_truetype(path: &Path) -> Option<FontArc> {
    let data = std::fs::read(path)
        .map_err(|err| debug!(path = %path.display(), %err, "Font file unreadable"))
        .ok()?;
    FontArc::try_from_vec(data)
        .map_err(|err| debug!(path = %path.display(), %err, "Font file invalid"))
        .ok()
}

fn draw_bitmap_line(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, line: &str) {
    let scale = BUILTIN_SCALE as i32;
    for (index, ch) in line.chars().enumerate() {
        let origin_x = x + index as i32 * BUILTIN_CELL_WIDTH as i32;
        for (column, bits) in bitmap_glyph(ch).iter().enumerate() {
            for row in 0..8 {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let rect = Rect::at(origin_x + column as i32 * scale, y + row * scale)
                    .of_size(BUILTIN_SCALE, BUILTIN_SCALE);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}

/// Column bitmaps for `ch` (bit 0 is the top row). Characters outside
/// printable ASCII are drawn as `?`.
fn bitmap_glyph(ch: char) -> &'static [u8; 5] {
    let index = match ch {
        ' '..='~' => ch as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    &BITMAP_GLYPHS[index]
}

#[rustfmt::skip]
static BITMAP_GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x08, 0x07, 0x03, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x80, 0x70, 0x30, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x60, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x14, 0x00, 0x00], // :
    [0x00, 0x40, 0x34, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x59, 0x09, 0x06], // ?
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], // @
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x41, 0x3E], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x73], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x03, 0x01, 0x7F, 0x01, 0x03], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x59, 0x49, 0x4D, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x41, 0x7F], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x03, 0x07, 0x08, 0x00], // `
    [0x20, 0x54, 0x54, 0x78, 0x40], // a
    [0x7F, 0x28, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x28], // c
    [0x38, 0x44, 0x44, 0x28, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x00, 0x08, 0x7E, 0x09, 0x02], // f
    [0x18, 0xA4, 0xA4, 0x9C, 0x78], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x78, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0xFC, 0x18, 0x24, 0x24, 0x18], // p
    [0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x04, 0x3F, 0x44, 0x24], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x4C, 0x90, 0x90, 0x90, 0x7C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x77, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_falls_back() {
        let font = RenderFont::resolve(Path::new("/nonexistent/LilitaOne-Regular.ttf"), 20.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn garbage_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(RenderFont::resolve(&path, 20.0).is_builtin());
    }

    #[test]
    fn builtin_has_no_bounding_box() {
        let lines = vec!["abc".to_string()];
        assert_eq!(RenderFont::builtin().multiline_extent(&lines, 4, 1), None);
    }

    #[test]
    fn non_ascii_uses_question_mark() {
        assert_eq!(bitmap_glyph('é'), bitmap_glyph('?'));
        assert_eq!(bitmap_glyph('A'), &[0x7C, 0x12, 0x11, 0x12, 0x7C]);
    }

    #[test]
    fn builtin_draws_inside_its_cell() {
        let mut canvas = RgbImage::new(40, 40);
        let white = Rgb([255, 255, 255]);
        RenderFont::builtin().draw_line(&mut canvas, white, 2, 3, "I");

        let lit: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel == white)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        for (x, y) in lit {
            assert!((2..2 + BUILTIN_CELL_WIDTH).contains(&x));
            assert!((3..3 + BUILTIN_CELL_HEIGHT).contains(&y));
        }
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut canvas = RgbImage::new(8, 8);
        RenderFont::builtin().draw_line(&mut canvas, Rgb([255, 0, 0]), -5, 4, "WWWW");
    }
}
