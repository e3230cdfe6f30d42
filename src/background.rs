//! Background images: a random Unsplash photo or a generated gradient.

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::constants::{
    BACKGROUND_TOPICS, CANVAS_HEIGHT, CANVAS_WIDTH, GRADIENT_BOTTOM, GRADIENT_TOP,
    UNSPLASH_RANDOM_URL,
};
use crate::error::{QuotePostError, check_status, read_json};

#[derive(Deserialize, Debug)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
}

#[derive(Deserialize, Debug)]
struct UnsplashUrls {
    regular: String,
}

/// Hands out a background image for each run.
#[derive(Clone)]
pub struct BackgroundProvider {
    client: reqwest::Client,
    unsplash_access_key: Option<String>,
}

impl BackgroundProvider {
    /// Without an access key every call returns the gradient.
    pub fn new(client: reqwest::Client, unsplash_access_key: Option<String>) -> Self {
        Self {
            client,
            unsplash_access_key,
        }
    }

    /// Returns a photo if one can be fetched, the gradient otherwise.
    pub async fn background(&self) -> DynamicImage {
        let Some(access_key) = self.unsplash_access_key.as_deref() else {
            info!("No Unsplash access key, drawing a gradient background");
            return DynamicImage::ImageRgb8(gradient_background());
        };

        let topic = BACKGROUND_TOPICS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(BACKGROUND_TOPICS[0]);

        match self.fetch_photo(access_key, topic).await {
            Ok(image) => image,
            Err(err) => {
                warn!("Error fetching background image: {}", err);
                DynamicImage::ImageRgb8(gradient_background())
            }
        }
    }

    async fn fetch_photo(
        &self,
        access_key: &str,
        topic: &str,
    ) -> Result<DynamicImage, QuotePostError> {
        info!("Fetching an Unsplash photo for '{}'", topic);
        let url = reqwest::Url::parse_with_params(
            UNSPLASH_RANDOM_URL,
            &[
                ("query", topic),
                ("orientation", "landscape"),
                ("w", "800"),
                ("h", "600"),
            ],
        )
        .map_err(|err| QuotePostError::Config(format!("Invalid Unsplash URL: {err}")))?;
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Client-ID {access_key}"))
            .header("Accept-Version", "v1")
            .send()
            .await?;
        let response = check_status("Unsplash", response).await?;
        let photo: UnsplashPhoto = read_json(response).await?;
        debug!("Unsplash photo url: {}", photo.urls.regular);

        let response = self.client.get(&photo.urls.regular).send().await?;
        let response = check_status("Unsplash image download", response).await?;
        let bytes = response.bytes().await?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// Vertical gradient from [GRADIENT_TOP] to [GRADIENT_BOTTOM], one colour per row.
pub fn gradient_background() -> RgbImage {
    let height = f64::from(CANVAS_HEIGHT);
    ImageBuffer::from_fn(CANVAS_WIDTH, CANVAS_HEIGHT, |_, y| {
        let t = f64::from(y) / height;
        let channel = |i: usize| {
            let top = f64::from(GRADIENT_TOP[i]);
            let bottom = f64::from(GRADIENT_BOTTOM[i]);
            // truncate like an int cast, both ends are in 0..=255
            (top + (bottom - top) * t) as u8
        };
        Rgb([channel(0), channel(1), channel(2)])
    })
}
