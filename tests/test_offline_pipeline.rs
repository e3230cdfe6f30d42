use std::path::Path;

use image::DynamicImage;
use quotepost::background::{BackgroundProvider, gradient_background};
use quotepost::caption::build_caption;
use quotepost::compose::{Fonts, compose_quote_image};
use quotepost::config::setup_logging;
use quotepost::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, CAPTION_LIMIT, FALLBACK_QUOTES};
use quotepost::quote::{Quote, fallback_quote};

#[tokio::test]
async fn fallback_run_without_credentials() {
    let _ = setup_logging(true);

    let quote = fallback_quote();
    assert!(
        FALLBACK_QUOTES
            .iter()
            .any(|(text, author, _)| quote.text == *text && quote.author == *author)
    );

    let background = BackgroundProvider::new(reqwest::Client::new(), None)
        .background()
        .await;
    assert_eq!(background.to_rgb8(), gradient_background());

    let fonts = Fonts::load(
        Path::new("/nonexistent/bold.ttf"),
        Path::new("/nonexistent/regular.ttf"),
    );
    let image = compose_quote_image(&quote, &background, &fonts);
    assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));

    let caption = build_caption(&quote);
    assert!(caption.chars().count() <= CAPTION_LIMIT);
    assert!(caption.contains(&quote.author));
}

#[test]
fn system_fonts_or_builtin_both_render() {
    // DejaVu may or may not be installed, either way the image comes out.
    let quote = Quote::new(
        "The only way to do great work is to love what you do. ".repeat(4),
        "Steve Jobs",
        Some("素晴らしい仕事をする唯一の方法は、自分のやっていることを愛することだ。".to_string()),
    );
    let fonts = Fonts::load(
        Path::new(quotepost::constants::DEFAULT_QUOTE_FONT),
        Path::new(quotepost::constants::DEFAULT_BODY_FONT),
    );
    let small = DynamicImage::ImageRgb8(image::RgbImage::new(40, 30));
    let image = compose_quote_image(&quote, &small, &fonts);
    assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert!(image.pixels().any(|p| p.0 == [255, 255, 255]));
}
