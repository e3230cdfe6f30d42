//! One run: quote, background, image, caption, post.

use image::ImageFormat;
use tracing::info;

use crate::background::BackgroundProvider;
use crate::caption::build_caption;
use crate::cli::QuoteMode;
use crate::compose::{Fonts, compose_quote_image};
use crate::config::Config;
use crate::error::QuotePostError;
use crate::gemini::GeminiClient;
use crate::publish::{TwitterClient, publish};
use crate::quote::{fetch_generated_quote, fetch_translated_quote};
use crate::zenquotes::ZenQuotesClient;

/// Runs the whole pipeline once.
pub async fn run(config: &Config) -> Result<(), QuotePostError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let gemini = GeminiClient::new(client.clone(), &config.gemini_api_key, &config.gemini_model);

    info!("Generating quote...");
    let quote = match config.mode {
        QuoteMode::Translate => {
            fetch_translated_quote(&ZenQuotesClient::new(client.clone()), &gemini).await
        }
        QuoteMode::Generate => fetch_generated_quote(&gemini).await,
    };
    info!(
        "Quote: '{}' - {} ({})",
        quote.text,
        quote.author,
        quote.translation.as_deref().unwrap_or_default()
    );

    info!("Getting background image...");
    let background = BackgroundProvider::new(client.clone(), config.unsplash_access_key.clone())
        .background()
        .await;

    info!("Creating quote image...");
    let fonts = Fonts::load(&config.quote_font, &config.body_font);
    let image = compose_quote_image(&quote, &background, &fonts);
    let caption = build_caption(&quote);

    if config.dry_run {
        image.save_with_format(&config.output, ImageFormat::Png)?;
        info!("Dry run, wrote {}", config.output.display());
        info!("Caption:\n{}", caption);
        return Ok(());
    }

    let credentials = config.twitter.clone().ok_or_else(|| {
        QuotePostError::Config("Twitter credentials are required to post".to_string())
    })?;

    info!("Posting to Twitter...");
    publish(&TwitterClient::new(client, credentials), &caption, &image).await?;
    Ok(())
}
