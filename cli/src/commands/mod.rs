//! # ChainRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `chainrs` CLI. Each
//! command defines its own arguments struct and a handler function that takes
//! the parsed arguments, the loaded configuration, and an output sink.
//!
//! ## Commands
//!
//! - `run`: Sends requests to the chain (or a sub-chain) and reports the results
//! - `demo`: Replays the classic feeding demo: the full chain, then a sub-chain
//! - `show`: Prints the configured chain and what each handler accepts
//!

/// Sends requests through the configured chain, optionally entering mid-chain.
pub mod run;
/// Runs the two-pass feeding demonstration.
pub mod demo;
/// Describes the configured chain without handling any request.
pub mod show;
