//! Draws the quote onto the background.

mod font;

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};
use tracing::debug;

use crate::constants::{
    AUTHOR_FONT_SIZE, BLOCK_GAP, CANVAS_HEIGHT, CANVAS_WIDTH, MAX_LINE_WIDTH, OVERLAY_ALPHA,
    QUOTE_ANCHOR_Y, QUOTE_FONT_SIZE, QUOTE_LINE_HEIGHT, TRANSLATION_FONT_SIZE,
};
use crate::quote::Quote;

pub use font::TextFont;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The three fonts used on a quote image.
#[derive(Debug)]
pub struct Fonts {
    /// Quote lines
    pub quote: TextFont,
    /// `- author`
    pub author: TextFont,
    /// `(translation)`
    pub translation: TextFont,
}

impl Fonts {
    /// Loads the bold quote font and the regular body font, each falling back to the
    /// built-in font on its own.
    pub fn load(quote_font: &Path, body_font: &Path) -> Self {
        Self {
            quote: TextFont::load(quote_font, QUOTE_FONT_SIZE),
            author: TextFont::load(body_font, AUTHOR_FONT_SIZE),
            translation: TextFont::load(body_font, TRANSLATION_FONT_SIZE),
        }
    }

    /// Built-in fonts only.
    pub fn builtin() -> Self {
        Self {
            quote: TextFont::builtin(QUOTE_FONT_SIZE),
            author: TextFont::builtin(AUTHOR_FONT_SIZE),
            translation: TextFont::builtin(TRANSLATION_FONT_SIZE),
        }
    }
}

/// Greedy character wrap.
///
/// Characters are appended one at a time; when the candidate line gets wider than
/// `max_width` and the current line is not empty, the current line is committed and the
/// character starts a new one. Lines are never rebalanced.
pub fn wrap_text<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// x that centers a line of `width` on the canvas
fn centered_x(width: u32) -> i32 {
    (CANVAS_WIDTH as i32 - width as i32).div_euclid(2)
}

fn draw_centered(canvas: &mut RgbaImage, font: &TextFont, y: i32, text: &str) {
    let x = centered_x(font.text_width(text));
    font.draw(canvas, TEXT_COLOR, x, y, text);
}

/// Resizes and darkens `background`, then draws the quote, author and translation.
pub fn compose_quote_image(quote: &Quote, background: &DynamicImage, fonts: &Fonts) -> RgbImage {
    let mut canvas = background
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3)
        .to_rgba8();

    let shade = RgbaImage::from_pixel(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        Rgba([0, 0, 0, OVERLAY_ALPHA]),
    );
    imageops::overlay(&mut canvas, &shade, 0, 0);

    let lines = wrap_text(&quote.text, MAX_LINE_WIDTH, |line| fonts.quote.text_width(line));
    debug!("Quote wrapped into {} lines: {:?}", lines.len(), lines);

    let block_height = lines.len() as i32 * QUOTE_LINE_HEIGHT;
    let start_y = QUOTE_ANCHOR_Y - block_height.div_euclid(2);
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + i as i32 * QUOTE_LINE_HEIGHT;
        draw_centered(&mut canvas, &fonts.quote, y, line);
    }

    let author_y = start_y + block_height + BLOCK_GAP;
    draw_centered(&mut canvas, &fonts.author, author_y, &format!("- {}", quote.author));

    if let Some(translation) = &quote.translation {
        draw_centered(
            &mut canvas,
            &fonts.translation,
            author_y + BLOCK_GAP,
            &format!("({translation})"),
        );
    }

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::gradient_background;

    fn fixed_width(width: u32) -> impl Fn(&str) -> u32 {
        move |line: &str| line.chars().count() as u32 * width
    }

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap_text("Short and sweet.", 700, fixed_width(10));
        assert_eq!(lines, vec!["Short and sweet.".to_string()]);
    }

    #[test]
    fn line_count_is_ceil_of_total_width() {
        for n in [1usize, 69, 70, 71, 140, 141, 500] {
            let text = "x".repeat(n);
            let lines = wrap_text(&text, 700, fixed_width(10));
            assert_eq!(lines.len(), (n * 10).div_ceil(700), "n = {n}");
            assert_eq!(lines.concat(), text);
            assert!(lines.iter().all(|line| line.chars().count() <= 70));
        }
    }

    #[test]
    fn wrap_is_character_granular() {
        let lines = wrap_text("abcd efgh", 40, fixed_width(10));
        assert_eq!(lines, vec!["abcd", " efg", "h"]);
        let lines = wrap_text("継続は力なり", 30, fixed_width(10));
        assert_eq!(lines, vec!["継続は", "力なり"]);
    }

    #[test]
    fn oversized_char_gets_its_own_line() {
        let lines = wrap_text("ab", 5, fixed_width(10));
        assert_eq!(lines, vec!["a", "b"]);
        assert!(wrap_text("", 5, fixed_width(10)).is_empty());
    }

    #[test]
    fn canvas_is_fixed_size_and_darkened() {
        let quote = Quote::new("Hello", "World", Some("こんにちは".to_string()));
        let white = RgbImage::from_pixel(1920, 1080, image::Rgb([255; 3]));
        let white = DynamicImage::ImageRgb8(white);
        let out = compose_quote_image(&quote, &white, &Fonts::builtin());
        assert_eq!(out.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        let corner = out.get_pixel(0, 0);
        assert!((150..=160).contains(&corner[0]), "{corner:?}");
        assert_eq!(corner[0], corner[2]);
    }

    #[test]
    fn text_is_drawn_around_the_anchor() {
        let quote = Quote::new("HHHH", "A", None);
        let background = DynamicImage::ImageRgb8(gradient_background());
        let out = compose_quote_image(&quote, &background, &Fonts::builtin());
        // one line: start_y = 225, glyphs are 40px tall
        let row_has_white = |y: u32| (0..CANVAS_WIDTH).any(|x| out.get_pixel(x, y).0 == [255; 3]);
        assert!((225..265).any(row_has_white));
        assert!(!(0..200).any(row_has_white));
        assert!(!(330..CANVAS_HEIGHT).any(row_has_white));
    }

    #[test]
    fn centered_x_floors() {
        assert_eq!(centered_x(700), 50);
        assert_eq!(centered_x(801), -1);
    }
}
