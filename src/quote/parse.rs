//! Splits free-form generated text into quote and author.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::UNKNOWN_AUTHOR;

static BRACKET_DASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"「(.+?)」\s*[-—]\s*(.+)").ok());

static QUOTE_DASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"["“](.+?)["”]\s*[-—]\s*(.+)"#).ok());

type Matcher = fn(&str) -> Option<(String, String)>;

/// Tried in order, first match wins.
const MATCHERS: [Matcher; 3] = [bracket_dash, quote_dash, last_dash];

fn captures(regex: &Option<Regex>, text: &str) -> Option<(String, String)> {
    let caps = regex.as_ref()?.captures(text)?;
    let quote = caps.get(1)?.as_str().trim();
    let author = caps.get(2)?.as_str().trim();
    if quote.is_empty() || author.is_empty() {
        return None;
    }
    Some((quote.to_string(), author.to_string()))
}

/// `「quote」- author`
fn bracket_dash(text: &str) -> Option<(String, String)> {
    captures(&BRACKET_DASH, text)
}

/// `"quote" - author`
fn quote_dash(text: &str) -> Option<(String, String)> {
    captures(&QUOTE_DASH, text)
}

/// `quote - author`, splitting on the last dash
fn last_dash(text: &str) -> Option<(String, String)> {
    let (quote, author) = text.rsplit_once('-')?;
    let quote = quote.replace(['「', '」', '"'], "");
    let quote = quote.trim();
    let author = author.trim();
    if quote.is_empty() || author.is_empty() {
        return None;
    }
    Some((quote.to_string(), author.to_string()))
}

/// Extracts `(quote, author)` from generated text.
///
/// Never fails: text that matches no pattern becomes the quote itself, attributed to
/// [UNKNOWN_AUTHOR].
pub fn parse_generated_quote(text: &str) -> (String, String) {
    let text = text.trim();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(text))
        .unwrap_or_else(|| (text.to_string(), UNKNOWN_AUTHOR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_dash_wins() {
        let (quote, author) = parse_generated_quote("「継続は力なり」- 住岡夜晃\n");
        assert_eq!(quote, "継続は力なり");
        assert_eq!(author, "住岡夜晃");
    }

    #[test]
    fn bracket_dash_beats_later_dashes() {
        let (quote, author) = parse_generated_quote("「一期一会」 - 千利休 - 茶人");
        assert_eq!(quote, "一期一会");
        assert_eq!(author, "千利休 - 茶人");
    }

    #[test]
    fn quote_dash() {
        let (quote, author) =
            parse_generated_quote(r#""Stay hungry, stay foolish." - Steve Jobs"#);
        assert_eq!(quote, "Stay hungry, stay foolish.");
        assert_eq!(author, "Steve Jobs");
    }

    #[test]
    fn plain_dash_splits_on_last() {
        let (quote, author) = parse_generated_quote("Well-being is everything - Anonymous");
        assert_eq!(quote, "Well-being is everything");
        assert_eq!(author, "Anonymous");
    }

    #[test]
    fn plain_dash_drops_inner_brackets() {
        let (quote, author) = parse_generated_quote("「ab」 c - d");
        assert_eq!(quote, "ab c");
        assert_eq!(author, "d");
    }

    #[test]
    fn no_delimiter_is_unknown() {
        let (quote, author) = parse_generated_quote("  Be yourself.  ");
        assert_eq!(quote, "Be yourself.");
        assert_eq!(author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn trailing_dash_is_not_an_author() {
        let (quote, author) = parse_generated_quote("Keep going -");
        assert_eq!(quote, "Keep going -");
        assert_eq!(author, UNKNOWN_AUTHOR);
    }
}
