//! Config handling

use std::path::PathBuf;

use tracing::log::LevelFilter;

use crate::cli::{CliOptions, QuoteMode};
use crate::error::QuotePostError;

/// Sets up logging based on the debug flag
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("tracing", LevelFilter::Warn)
            .with_module_level("reqwest", LevelFilter::Info)
            .with_module_level("rustls", LevelFilter::Info)
            .with_module_level("hyper_util", LevelFilter::Info)
            .with_module_level("h2", LevelFilter::Info);
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}

/// OAuth 1.0a user-context credentials for Twitter.
#[derive(Clone)]
pub struct TwitterCredentials {
    /// Consumer (API) key
    pub consumer_key: String,
    /// Consumer (API) secret
    pub consumer_secret: String,
    /// Access token
    pub access_token: String,
    /// Access token secret
    pub access_token_secret: String,
}

impl std::fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

/// Everything a single run needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the quote comes from
    pub mode: QuoteMode,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model name
    pub gemini_model: String,
    /// Present unless this is a dry run
    pub twitter: Option<TwitterCredentials>,
    /// Optional photo search key
    pub unsplash_access_key: Option<String>,
    /// Bold font for the quote
    pub quote_font: PathBuf,
    /// Regular font for author and translation
    pub body_font: PathBuf,
    /// Write the image to `output` instead of posting
    pub dry_run: bool,
    /// Dry-run output path
    pub output: PathBuf,
}

impl TryFrom<CliOptions> for Config {
    type Error = QuotePostError;

    fn try_from(cli: CliOptions) -> Result<Self, Self::Error> {
        let twitter = match (
            cli.twitter_api_key,
            cli.twitter_api_secret,
            cli.twitter_access_token,
            cli.twitter_access_token_secret,
        ) {
            (
                Some(consumer_key),
                Some(consumer_secret),
                Some(access_token),
                Some(access_token_secret),
            ) => Some(TwitterCredentials {
                consumer_key,
                consumer_secret,
                access_token,
                access_token_secret,
            }),
            _ if cli.dry_run => None,
            _ => {
                return Err(QuotePostError::Config(
                    "all four Twitter credentials are required unless --dry-run is set"
                        .to_string(),
                ));
            }
        };

        // An empty env var is as good as unset.
        let unsplash_access_key = cli
            .unsplash_access_key
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            mode: cli.mode,
            gemini_api_key: cli.gemini_api_key,
            gemini_model: cli.gemini_model,
            twitter,
            unsplash_access_key,
            quote_font: cli.quote_font,
            body_font: cli.body_font,
            dry_run: cli.dry_run,
            output: cli.output,
        })
    }
}
