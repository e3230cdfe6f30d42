//! CLI parser
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::constants::{DEFAULT_BODY_FONT, DEFAULT_GEMINI_MODEL, DEFAULT_QUOTE_FONT};

/// Where the quote text comes from
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum QuoteMode {
    /// English quote from ZenQuotes, translated to Japanese by Gemini
    #[default]
    Translate,
    /// Quote written directly by Gemini
    Generate,
}

#[derive(Parser, Debug)]
#[command(name = "quotepost")]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "QUOTEPOST_DEBUG")]
    /// Enable debug logging. Env: QUOTEPOST_DEBUG
    pub debug: bool,

    #[clap(long, value_enum, default_value = "translate", env = "QUOTEPOST_MODE")]
    /// How to source the quote. Env: QUOTEPOST_MODE
    pub mode: QuoteMode,

    #[arg(required = true, long, env = "GEMINI_API_KEY", hide_env_values = true)]
    /// Gemini API key
    pub gemini_api_key: String,

    #[arg(long, default_value = DEFAULT_GEMINI_MODEL)]
    /// Gemini model used for translation and generation
    pub gemini_model: String,

    #[arg(
        long,
        env = "TWITTER_API_KEY",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    /// Twitter consumer key
    pub twitter_api_key: Option<String>,

    #[arg(
        long,
        env = "TWITTER_API_SECRET",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    /// Twitter consumer secret
    pub twitter_api_secret: Option<String>,

    #[arg(
        long,
        env = "TWITTER_ACCESS_TOKEN",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    /// Twitter access token
    pub twitter_access_token: Option<String>,

    #[arg(
        long,
        env = "TWITTER_ACCESS_TOKEN_SECRET",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    /// Twitter access token secret
    pub twitter_access_token_secret: Option<String>,

    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    /// Unsplash access key, a gradient background is drawn without it
    pub unsplash_access_key: Option<String>,

    #[arg(long, default_value = DEFAULT_QUOTE_FONT)]
    /// Font used for the quote
    pub quote_font: PathBuf,

    #[arg(long, default_value = DEFAULT_BODY_FONT)]
    /// Font used for the author and translation
    pub body_font: PathBuf,

    #[arg(long)]
    /// Build everything but write the image to --output instead of posting
    pub dry_run: bool,

    #[arg(long, short, default_value = "quote.png")]
    /// Where --dry-run writes the image
    pub output: PathBuf,
}

/// Exit status for a failed parse: 0 for `--help`/`--version`, 1 for everything else,
/// missing credentials included.
pub fn parse_error_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_exits_zero() {
        let err = CliOptions::try_parse_from(["quotepost", "--help"]).expect_err("help");
        assert_eq!(parse_error_status(&err), 0);
    }

    #[test]
    fn bad_arguments_exit_one() {
        let err = CliOptions::try_parse_from([
            "quotepost",
            "--gemini-api-key",
            "g",
            "--dry-run",
            "--mode",
            "nope",
        ])
        .expect_err("bad mode");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_error_status(&err), 1);

        let missing = clap::Error::new(ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_error_status(&missing), 1);
    }
}
