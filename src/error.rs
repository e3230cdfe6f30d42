//! Error handling

use std::fmt;

use serde::de::DeserializeOwned;

/// Errors raised while producing or publishing a quote post.
#[derive(Debug)]
pub enum QuotePostError {
    /// Transport level failure talking to a remote API
    Http(reqwest::Error),
    /// A remote API answered with a non-success status
    Api {
        /// Which API we were talking to
        service: &'static str,
        /// HTTP status code returned
        status: u16,
        /// Response body, for the logs
        body: String,
    },
    /// A remote API answered, but not with what we expected
    InvalidResponse(String),
    /// Image decoding or encoding failed
    Image(image::ImageError),
    /// Filesystem failure
    Io(std::io::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Invalid or incomplete configuration
    Config(String),
}

impl fmt::Display for QuotePostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "HTTP request failed: {err}"),
            Self::Api {
                service,
                status,
                body,
            } => write!(f, "{service} API error {status}: {body}"),
            Self::InvalidResponse(message) => write!(f, "Invalid API response: {message}"),
            Self::Image(err) => write!(f, "Image error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::Config(message) => write!(f, "Configuration error: {message}"),
        }
    }
}

impl std::error::Error for QuotePostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Api { .. } | Self::InvalidResponse(_) | Self::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for QuotePostError {
    fn from(err: reqwest::Error) -> Self {
        QuotePostError::Http(err)
    }
}

impl From<image::ImageError> for QuotePostError {
    fn from(err: image::ImageError) -> Self {
        QuotePostError::Image(err)
    }
}

impl From<std::io::Error> for QuotePostError {
    fn from(err: std::io::Error) -> Self {
        QuotePostError::Io(err)
    }
}

impl From<serde_json::Error> for QuotePostError {
    fn from(err: serde_json::Error) -> Self {
        QuotePostError::Json(err)
    }
}

/// Decodes a JSON body, keeping parse failures apart from transport failures.
pub(crate) fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, QuotePostError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads the whole body of `response` and decodes it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, QuotePostError> {
    let bytes = response.bytes().await?;
    decode_json(&bytes)
}

/// Turns a non-success response into [QuotePostError::Api], passing successful ones through.
pub(crate) async fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, QuotePostError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(QuotePostError::Api {
        service,
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug)]
    struct Id {
        id: String,
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        let err = decode_json::<Id>(b"<html>rate limited</html>").expect_err("not json");
        assert!(matches!(err, QuotePostError::Json(_)), "{err:?}");
        let err = decode_json::<Id>(br#"{"other": 1}"#).expect_err("missing field");
        assert!(matches!(err, QuotePostError::Json(_)), "{err:?}");
    }

    #[test]
    fn well_formed_body_decodes() {
        let id: Id = decode_json(br#"{"id": "42"}"#).expect("decode");
        assert_eq!(id.id, "42");
    }
}
