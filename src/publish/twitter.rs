//! Twitter client: v1.1 media upload plus v2 post creation, both OAuth 1.0a user context.

use std::path::Path;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SocialApi;
use super::oauth::{authorization_header, generate_nonce, unix_timestamp};
use crate::config::TwitterCredentials;
use crate::constants::{TWITTER_CREATE_TWEET_URL, TWITTER_MEDIA_UPLOAD_URL};
use crate::error::{QuotePostError, check_status, read_json};

#[derive(Deserialize, Debug)]
struct MediaUploadResponse {
    media_id_string: String,
}

/// Request body for POST /2/tweets
#[derive(Serialize, Debug)]
struct CreateTweetRequest<'a> {
    text: &'a str,
    media: TweetMedia<'a>,
}

#[derive(Serialize, Debug)]
struct TweetMedia<'a> {
    media_ids: [&'a str; 1],
}

#[derive(Deserialize, Debug)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Deserialize, Debug)]
struct CreatedTweet {
    id: String,
}

/// Posts to Twitter on behalf of one account.
#[derive(Clone, Debug)]
pub struct TwitterClient {
    client: reqwest::Client,
    credentials: TwitterCredentials,
}

impl TwitterClient {
    /// Creates a client for the account behind `credentials`.
    pub fn new(client: reqwest::Client, credentials: TwitterCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn authorization(&self, method: &str, url: &str) -> Result<String, QuotePostError> {
        authorization_header(
            &self.credentials,
            method,
            url,
            &[],
            &generate_nonce(),
            unix_timestamp(),
        )
    }
}

impl SocialApi for TwitterClient {
    async fn upload_media(&self, path: &Path) -> Result<String, QuotePostError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "quote.png".to_string());
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("image/png")?;
        let form = Form::new().part("media", part);

        let response = self
            .client
            .post(TWITTER_MEDIA_UPLOAD_URL)
            .header(AUTHORIZATION, self.authorization("POST", TWITTER_MEDIA_UPLOAD_URL)?)
            .multipart(form)
            .send()
            .await?;
        let response = check_status("Twitter media upload", response).await?;
        let media: MediaUploadResponse = read_json(response).await?;
        Ok(media.media_id_string)
    }

    async fn create_post(&self, text: &str, media_id: &str) -> Result<String, QuotePostError> {
        let body = CreateTweetRequest {
            text,
            media: TweetMedia {
                media_ids: [media_id],
            },
        };
        let response = self
            .client
            .post(TWITTER_CREATE_TWEET_URL)
            .header(AUTHORIZATION, self.authorization("POST", TWITTER_CREATE_TWEET_URL)?)
            .json(&body)
            .send()
            .await?;
        let response = check_status("Twitter create tweet", response).await?;
        let created: CreateTweetResponse = read_json(response).await?;
        Ok(created.data.id)
    }
}
