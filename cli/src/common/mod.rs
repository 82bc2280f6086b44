//! # ChainRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers used by the command handlers. Currently only console
//! output lives here:
//!
//! - **`ui`**: Chain headings and the client's request/response lines.
//!
pub mod ui;
