//! Core domain logic for the subscription-gated PDF bot.
//!
//! This crate is framework-agnostic. Telegram and the HTTP server live in the
//! adapter crate and reach the core through the [`messaging::port::MessagingPort`] trait.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod pdf;

pub use errors::{Error, Result};
