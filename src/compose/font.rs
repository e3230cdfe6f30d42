use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::UnicodeFonts;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::{debug, warn};

/// Side of a built-in glyph, in font pixels.
const BITMAP_GLYPH_SIZE: u32 = 8;

/// A font at a fixed pixel size.
///
/// Outline fonts are loaded from disk. When that fails the built-in 8x8 bitmap font is used,
/// scaled up to roughly the requested size.
pub enum TextFont {
    /// TrueType/OpenType font
    Outline {
        /// Parsed font data
        font: FontVec,
        /// Pixel scale
        scale: PxScale,
    },
    /// Built-in bitmap font, every glyph is `8 * factor` pixels square
    Bitmap {
        /// Integer upscale of the 8x8 glyphs
        factor: u32,
    },
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline { scale, .. } => write!(f, "TextFont::Outline({}px)", scale.y),
            Self::Bitmap { factor } => write!(f, "TextFont::Bitmap(x{factor})"),
        }
    }
}

impl TextFont {
    /// Loads the font at `path`, falling back to the built-in font.
    pub fn load(path: &Path, size: f32) -> Self {
        let font = std::fs::read(path)
            .map_err(|err| err.to_string())
            .and_then(|bytes| FontVec::try_from_vec(bytes).map_err(|err| err.to_string()));
        match font {
            Ok(font) => {
                debug!("Loaded font {} at {}px", path.display(), size);
                Self::Outline {
                    font,
                    scale: PxScale::from(size),
                }
            }
            Err(err) => {
                warn!(
                    "Failed to load font {} ({}), using the built-in font",
                    path.display(),
                    err
                );
                Self::builtin(size)
            }
        }
    }

    /// The built-in bitmap font at roughly `size` pixels.
    pub fn builtin(size: f32) -> Self {
        let factor = (size / BITMAP_GLYPH_SIZE as f32).round().max(1.0) as u32;
        Self::Bitmap { factor }
    }

    /// Rendered width of `text` in pixels.
    pub fn text_width(&self, text: &str) -> u32 {
        match self {
            Self::Outline { font, scale } => text_size(*scale, font, text).0,
            Self::Bitmap { factor } => {
                let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                chars.saturating_mul(BITMAP_GLYPH_SIZE * factor)
            }
        }
    }

    /// Draws `text` with its top left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
        match self {
            Self::Outline { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            Self::Bitmap { factor } => draw_bitmap_text(canvas, color, x, y, *factor, text),
        }
    }
}

fn glyph(c: char) -> Option<[u8; 8]> {
    font8x8::BASIC_FONTS
        .get(c)
        .or_else(|| font8x8::LATIN_FONTS.get(c))
        .or_else(|| font8x8::GREEK_FONTS.get(c))
        .or_else(|| font8x8::HIRAGANA_FONTS.get(c))
        .or_else(|| font8x8::MISC_FONTS.get(c))
}

fn draw_bitmap_text(
    canvas: &mut RgbaImage,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    factor: u32,
    text: &str,
) {
    let step = (BITMAP_GLYPH_SIZE * factor) as i32;
    let pixel = factor as i32;
    for (index, c) in text.chars().enumerate() {
        // unknown glyphs still take up their cell
        let Some(rows) = glyph(c) else {
            continue;
        };
        let origin_x = x + index as i32 * step;
        for (row, bits) in rows.iter().enumerate() {
            for bit in 0..BITMAP_GLYPH_SIZE {
                if bits & (1 << bit) == 0 {
                    continue;
                }
                let rect = Rect::at(origin_x + bit as i32 * pixel, y + row as i32 * pixel)
                    .of_size(factor, factor);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}
