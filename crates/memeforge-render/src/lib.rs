// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// memeforge-render — Quote-on-image composition for Memeforge.
//
// Provides text wrapping and measurement (`layout`), font resolution with a
// built-in bitmap fallback (`font`), output file naming (`naming`), and the
// `MemeEngine` compositor that resizes an image, places the wrapped quote at a
// random position that fits, and writes the result as a JPEG.

pub mod compositor;
pub mod font;
pub mod layout;
pub mod naming;

// Re-export the primary structs so callers can use `memeforge_render::MemeEngine` etc.
pub use compositor::{MemeEngine, MemeOutput, Placement};
pub use font::RenderFont;
pub use layout::{TextExtent, WrappedText};
pub use naming::{OutputNamer, RandomNamer, SequentialNamer};
