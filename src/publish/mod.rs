//! Publishing the finished image and caption.

mod oauth;
mod twitter;

use std::future::Future;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::{debug, error, info};

use crate::error::QuotePostError;

pub use twitter::TwitterClient;

/// A social platform that takes an uploaded image and a post referencing it.
pub trait SocialApi {
    /// Uploads the image file at `path`, returning the platform's media id.
    fn upload_media(&self, path: &Path) -> impl Future<Output = Result<String, QuotePostError>>;

    /// Creates a post with `text` and the uploaded media, returning the post id.
    fn create_post(
        &self,
        text: &str,
        media_id: &str,
    ) -> impl Future<Output = Result<String, QuotePostError>>;
}

/// Uploads `image` and posts it with `caption`, returning the post id.
///
/// The image goes through a temporary PNG file which is removed however this returns.
pub async fn publish<S: SocialApi>(
    api: &S,
    caption: &str,
    image: &RgbImage,
) -> Result<String, QuotePostError> {
    let result = upload_and_post(api, caption, image).await;
    match &result {
        Ok(post_id) => info!("Successfully posted {}: {}", post_id, caption),
        Err(err) => error!("Error posting: {}", err),
    }
    result
}

async fn upload_and_post<S: SocialApi>(
    api: &S,
    caption: &str,
    image: &RgbImage,
) -> Result<String, QuotePostError> {
    let file = tempfile::Builder::new()
        .prefix("quotepost-")
        .suffix(".png")
        .tempfile()?;
    image.save_with_format(file.path(), ImageFormat::Png)?;
    debug!("Wrote upload image to {}", file.path().display());

    let media_id = api.upload_media(file.path()).await?;
    debug!("Uploaded media {}", media_id);
    let post_id = api.create_post(caption, &media_id).await?;

    file.close()?;
    Ok(post_id)
}
