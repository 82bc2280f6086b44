//! # ChainRS Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the ChainRS demo driver. The
//! handler chain itself has no failure mode (an unmatched request is simply
//! `None`), so every error here comes from configuration or argument
//! handling.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChainrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if cfg.chain.is_empty() {
//!     return Err(anyhow!(ChainrsError::EmptyChain));
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e)
//!         if matches!(
//!             e.downcast_ref::<ChainrsError>(),
//!             Some(ChainrsError::UnknownHandler { .. })
//!         ) =>
//!     {
//!         println!("Check the handler names in your config.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the ChainRS demo driver.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Unknown handler '{name}'. Define it under [[handlers]] or use Monkey, Squirrel or Dog."
    )]
    UnknownHandler { name: String },

    #[error("Handler '{name}' is defined more than once.")]
    DuplicateHandler { name: String },

    #[error("The configured chain is empty.")]
    EmptyChain,

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
