//! # ChainRS Demo Command
//!
//! File: cli/src/commands/demo.rs
//!
//! ## Overview
//!
//! `chainrs demo` replays the classic feeding demonstration. The configured
//! requests go first to the full chain and then to the sub-chain starting at
//! `subchain_from` (the second node when unset). The second pass shows that a
//! client holding an inner node never reaches the handlers before it.
//!
//! With the default configuration:
//!
//! ```text
//! Chain: Monkey > Squirrel > Dog
//!
//! Client: Who wants a Nut
//! Squirrel: I'll eat the Nut
//! Client: Who wants a Banana
//! Monkey: I'll eat the Banana
//! Client: Who wants a Coffee
//! Coffee was left untouched.
//! Subchain: Squirrel > Dog
//!
//! Client: Who wants a Nut
//! Squirrel: I'll eat the Nut
//! Client: Who wants a Banana
//! Banana was left untouched.
//! Client: Who wants a Coffee
//! Coffee was left untouched.
//! ```
//!
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::{ChainrsError, Result};
use crate::core::registry;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

/// # Demo Arguments (`DemoArgs`)
///
/// The demo takes no options of its own; everything comes from configuration.
#[derive(Parser, Debug)]
#[command(about = "Run the full chain and then a sub-chain over the configured requests")]
pub struct DemoArgs {}

pub fn handle_demo<W: Write>(_args: DemoArgs, cfg: &Config, out: &mut W) -> Result<()> {
    info!("Handling demo command...");
    let chain = registry::build_chain(cfg)?;

    ui::print_heading(out, "Chain", chain.head()).context("Failed to write output")?;
    ui::serve_requests(out, chain.head().as_ref(), cfg.requests.as_slice())
        .context("Failed to write output")?;

    let Some(name) = cfg.subchain_entry() else {
        debug!("Chain has a single node, skipping the sub-chain pass.");
        return Ok(());
    };
    let entry = chain.entry(name).ok_or_else(|| {
        anyhow!(ChainrsError::UnknownHandler {
            name: name.to_string()
        })
    })?;
    if Rc::ptr_eq(entry, chain.head()) {
        debug!("Sub-chain entry '{}' is the head, skipping the sub-chain pass.", name);
        return Ok(());
    }

    ui::print_heading(out, "Subchain", entry).context("Failed to write output")?;
    ui::serve_requests(out, entry.as_ref(), cfg.requests.as_slice())
        .context("Failed to write output")?;
    Ok(())
}
