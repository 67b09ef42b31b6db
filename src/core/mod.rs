//! Core components of the `pechincha` pipeline.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`ScrapeClient`] and its builder.
//! - The primary [`ScrapeError`] type.

/// The main client (`ScrapeClient`), builder, and per-strategy configuration.
pub mod client;
/// The primary error type (`ScrapeError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::ScrapeClient`
pub use client::{ScrapeClient, ScrapeClientBuilder};
pub use error::ScrapeError;
