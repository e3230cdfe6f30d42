//! Posts an inspirational quote, drawn over a background image, to Twitter.

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod background;
pub mod caption;
pub mod cli;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod gemini;
pub mod pipeline;
pub mod publish;
pub mod quote;
pub mod zenquotes;
