//! # ChainRS Run Command
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! This module implements `chainrs run`, which builds the configured chain and
//! feeds it requests. The client only ever talks to one node: the head by
//! default, or the node named by `--from`. Handlers before that node are never
//! consulted.
//!
//! ## Usage
//!
//! ```bash
//! # Send the configured requests to the full chain
//! chainrs run
//!
//! # Send specific requests, entering at the squirrel
//! chainrs run --from Squirrel Banana Nut
//! ```
//!
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::{ChainrsError, Result};
use crate::core::registry;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

/// # Run Arguments (`RunArgs`)
#[derive(Parser, Debug)]
#[command(about = "Send requests through the chain and report which handler served each one")]
pub struct RunArgs {
    /// Enter the chain at this handler instead of the head.
    #[arg(long, value_name = "HANDLER")]
    pub from: Option<String>,

    /// Requests to send. Defaults to the configured `requests` list.
    #[arg(value_name = "REQUEST")]
    pub requests: Vec<String>,
}

/// # Handle Run Command (`handle_run`)
///
/// ## Workflow:
/// 1. Builds the chain described by `cfg`.
/// 2. Resolves the entry node (`--from` or the head). An entry outside the chain is an error.
/// 3. Prints `Chain: ...` or, for an inner entry, `Subchain: ...`.
/// 4. Serves each request through the entry node.
pub fn handle_run<W: Write>(args: RunArgs, cfg: &Config, out: &mut W) -> Result<()> {
    info!("Handling run command...");
    let chain = registry::build_chain(cfg)?;

    let entry = match args.from.as_deref() {
        Some(name) => chain.entry(name).ok_or_else(|| {
            anyhow!(ChainrsError::ArgumentParsing(format!(
                "--from '{}' is not part of the chain ({}).",
                name,
                chainrs::describe(chain.head())
            )))
        })?,
        None => chain.head(),
    };
    let label = if std::rc::Rc::ptr_eq(entry, chain.head()) {
        "Chain"
    } else {
        "Subchain"
    };

    let requests = if args.requests.is_empty() {
        debug!("No requests given, using configured list: {:?}", cfg.requests);
        cfg.requests.as_slice()
    } else {
        args.requests.as_slice()
    };

    ui::print_heading(out, label, entry).context("Failed to write output")?;
    ui::serve_requests(out, entry.as_ref(), requests).context("Failed to write output")?;
    Ok(())
}
