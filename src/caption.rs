//! Post caption assembly.

use tracing::warn;

use crate::constants::{CAPTION_LIMIT, HASHTAGS};
use crate::quote::Quote;

/// Room kept free besides the fixed parts when shortening the quote.
const TRUNCATION_SLACK: usize = 5;
const ELLIPSIS: &str = "...";

fn format_caption(text: &str, author: &str, translation: Option<&str>) -> String {
    match translation {
        Some(translation) => {
            format!("\"{text}\" - {author}\n({translation})\n\n{HASHTAGS}")
        }
        None => format!("\"{text}\" - {author}\n\n{HASHTAGS}"),
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Builds the post text, shortening the quote once if the caption is over [CAPTION_LIMIT].
///
/// Lengths are counted in chars. If the author or translation alone leave no room, the
/// shortened caption is still clipped to the limit.
pub fn build_caption(quote: &Quote) -> String {
    let translation = quote.translation.as_deref();
    let caption = format_caption(&quote.text, &quote.author, translation);
    if char_len(&caption) <= CAPTION_LIMIT {
        return caption;
    }

    let fixed = char_len(&format!(" - {}\n()\n\n{HASHTAGS}", quote.author));
    let budget = CAPTION_LIMIT
        .saturating_sub(fixed)
        .saturating_sub(translation.map_or(0, char_len))
        .saturating_sub(TRUNCATION_SLACK);

    let caption = if char_len(&quote.text) > budget {
        let keep = budget.saturating_sub(ELLIPSIS.len());
        let text = format!("{}{ELLIPSIS}", take_chars(&quote.text, keep));
        format_caption(&text, &quote.author, translation)
    } else {
        caption
    };

    if char_len(&caption) <= CAPTION_LIMIT {
        return caption;
    }
    warn!(
        "Caption still {} chars after shortening the quote, clipping it",
        char_len(&caption)
    );
    format!("{}…", take_chars(&caption, CAPTION_LIMIT - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_caption_is_untouched() {
        let quote = Quote::new("Be kind.", "Anon", Some("親切に。".to_string()));
        assert_eq!(
            build_caption(&quote),
            format!("\"Be kind.\" - Anon\n(親切に。)\n\n{HASHTAGS}")
        );
    }

    #[test]
    fn no_translation_drops_the_line() {
        let quote = Quote::new("Be kind.", "Anon", None);
        assert_eq!(build_caption(&quote), format!("\"Be kind.\" - Anon\n\n{HASHTAGS}"));
    }

    #[test]
    fn long_quote_is_shortened_with_ellipsis() {
        let quote = Quote::new("A".repeat(500), "X", None);
        let caption = build_caption(&quote);
        assert!(char_len(&caption) <= CAPTION_LIMIT, "{}", char_len(&caption));
        assert!(caption.starts_with("\"AAAA"));
        assert!(caption.contains("...\" - X\n\n"));
        assert!(caption.ends_with(HASHTAGS));
    }

    #[test]
    fn shortening_counts_the_translation() {
        let quote = Quote::new("B".repeat(300), "Someone", Some("訳".repeat(100)));
        let caption = build_caption(&quote);
        assert!(char_len(&caption) <= CAPTION_LIMIT);
        assert!(caption.contains(&format!("...\" - Someone\n({})", "訳".repeat(100))));
        assert!(caption.ends_with(HASHTAGS));
    }

    #[test]
    fn multibyte_quote_is_cut_on_char_boundary() {
        let quote = Quote::new("継".repeat(400), "作者", None);
        let caption = build_caption(&quote);
        assert!(char_len(&caption) <= CAPTION_LIMIT);
        assert!(caption.contains("継..."));
    }

    #[test]
    fn huge_author_is_clipped() {
        let quote = Quote::new("Hi", "Y".repeat(400), Some("やあ".to_string()));
        let caption = build_caption(&quote);
        assert_eq!(char_len(&caption), CAPTION_LIMIT);
        assert!(caption.starts_with("\"...\" - YYY"));
        assert!(caption.ends_with('…'));
    }

    #[test]
    fn huge_translation_is_clipped() {
        let quote = Quote::new("Hi", "Z", Some("長".repeat(600)));
        assert!(char_len(&build_caption(&quote)) <= CAPTION_LIMIT);
    }
}
