//! # ChainRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure of the demo driver:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `registry`: Handler lookup by name and chain construction from configuration
//!
pub mod config;
pub mod error;
pub mod registry;
