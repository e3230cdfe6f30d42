//! Quote sourcing: remote quote API, generated quotes and the canned fallback.

mod parse;

use std::future::Future;

use rand::seq::IndexedRandom;
use tracing::{info, warn};

use crate::constants::{FALLBACK_QUOTES, GENERATION_PROMPTS, TRANSLATION_PROMPT};
use crate::error::QuotePostError;

pub use parse::parse_generated_quote;

/// A quote as it is drawn and posted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// The quote itself
    pub text: String,
    /// Who said it
    pub author: String,
    /// Optional translation shown under the author
    pub translation: Option<String>,
}

impl Quote {
    /// Builds a quote, treating an empty translation as none.
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        translation: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            translation: translation.filter(|t| !t.trim().is_empty()),
        }
    }
}

/// A service handing out random `(quote, author)` pairs.
pub trait QuoteApi {
    /// Fetches one random quote.
    fn random_quote(&self) -> impl Future<Output = Result<(String, String), QuotePostError>>;
}

/// A generative text model.
pub trait TextGenerator {
    /// Returns the model's answer to `prompt`.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, QuotePostError>>;
}

/// Picks one of the canned quotes.
pub fn fallback_quote() -> Quote {
    let (text, author, translation) = FALLBACK_QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_QUOTES[0]);
    Quote::new(text, author, Some(translation.to_string()))
}

/// Fetches an English quote and asks the generator for a Japanese translation.
///
/// Falls back to a canned quote if the quote API fails. A failed translation only drops the
/// translation.
pub async fn fetch_translated_quote<Q, T>(quotes: &Q, generator: &T) -> Quote
where
    Q: QuoteApi,
    T: TextGenerator,
{
    let (text, author) = match quotes.random_quote().await {
        Ok(pair) => pair,
        Err(err) => {
            warn!("Error fetching English quote, using a fallback: {}", err);
            return fallback_quote();
        }
    };

    let prompt = format!("{TRANSLATION_PROMPT}{text}");
    let translation = match generator.generate(&prompt).await {
        Ok(translation) => Some(translation.trim().to_string()),
        Err(err) => {
            warn!("Error translating quote: {}", err);
            None
        }
    };
    Quote::new(text, author, translation)
}

/// Asks the generator for a quote using a randomly picked prompt.
pub async fn fetch_generated_quote<T: TextGenerator>(generator: &T) -> Quote {
    let prompt = GENERATION_PROMPTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(GENERATION_PROMPTS[0]);

    match generator.generate(prompt).await {
        Ok(response) => {
            info!("Generated text: {}", response.trim());
            let (text, author) = parse_generated_quote(&response);
            Quote::new(text, author, None)
        }
        Err(err) => {
            warn!("Error generating quote, using a fallback: {}", err);
            fallback_quote()
        }
    }
}
