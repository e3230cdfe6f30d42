//! ZenQuotes random quote client.

use serde::Deserialize;
use tracing::debug;

use crate::constants::ZENQUOTES_URL;
use crate::error::{QuotePostError, check_status, read_json};
use crate::quote::QuoteApi;

/// ZenQuotes hands out this author alongside a placeholder quote when rate limiting.
const RATE_LIMIT_AUTHOR: &str = "zenquotes.io";

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

/// Client for <https://zenquotes.io>, no authentication needed.
#[derive(Clone, Debug)]
pub struct ZenQuotesClient {
    client: reqwest::Client,
    url: String,
}

impl ZenQuotesClient {
    /// Creates a client using the shared HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            url: ZENQUOTES_URL.to_string(),
        }
    }
}

impl QuoteApi for ZenQuotesClient {
    async fn random_quote(&self) -> Result<(String, String), QuotePostError> {
        let response = self.client.get(&self.url).send().await?;
        let response = check_status("ZenQuotes", response).await?;
        let quotes: Vec<ZenQuote> = read_json(response).await?;
        parse_first(quotes)
    }
}

fn parse_first(quotes: Vec<ZenQuote>) -> Result<(String, String), QuotePostError> {
    let first = quotes
        .into_iter()
        .next()
        .ok_or_else(|| QuotePostError::InvalidResponse("ZenQuotes returned no quotes".into()))?;
    debug!("ZenQuotes returned {:?}", first);
    if first.a == RATE_LIMIT_AUTHOR {
        return Err(QuotePostError::InvalidResponse(format!(
            "ZenQuotes rate limited: {}",
            first.q
        )));
    }
    if first.q.trim().is_empty() || first.a.trim().is_empty() {
        return Err(QuotePostError::InvalidResponse(
            "ZenQuotes returned an empty quote".into(),
        ));
    }
    Ok((first.q.trim().to_string(), first.a.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<(String, String), QuotePostError> {
        let quotes: Vec<ZenQuote> = serde_json::from_str(raw).expect("valid json");
        parse_first(quotes)
    }

    #[test]
    fn first_quote_is_used() {
        let raw = r#"[{"q":"Well begun is half done. ","a":"Aristotle","h":"<blockquote>...</blockquote>"}]"#;
        let (quote, author) = parse(raw).expect("quote");
        assert_eq!(quote, "Well begun is half done.");
        assert_eq!(author, "Aristotle");
    }

    #[test]
    fn empty_and_rate_limited_are_errors() {
        assert!(parse("[]").is_err());
        assert!(parse(r#"[{"q":"Too many requests. Obtain an auth key for unlimited access.","a":"zenquotes.io"}]"#).is_err());
    }
}
