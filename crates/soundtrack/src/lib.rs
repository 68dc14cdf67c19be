#![deny(clippy::all)]
// CLI crate with a small public text layout API; internal surfaces stay quiet.
#![allow(dead_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Weekly Last.fm chart published to a GitHub gist.
//!
//! The reusable part is [`domain::text_width`]: grapheme-aware display width
//! measurement and fixed-column fitting for monospace output.

mod adapters;
pub mod app;
mod common;
pub mod domain;
pub mod infra;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use app::Application;
