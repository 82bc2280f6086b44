//! # ChainRS Show Command
//!
//! File: cli/src/commands/show.rs
//!
//! ## Overview
//!
//! `chainrs show` prints the configured chain in link order with the literal
//! each handler accepts. No request is handled.
//!
//! Example output:
//!
//! ```text
//! Chain: Monkey > Squirrel > Dog
//!
//!   1. Monkey     accepts 'Banana'
//!   2. Squirrel   accepts 'Nut'
//!   3. Dog        accepts 'MeatBall'
//! ```
//!
use crate::common::ui;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::registry;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Show the configured chain and what each handler accepts")]
pub struct ShowArgs {}

pub fn handle_show<W: Write>(_args: ShowArgs, cfg: &Config, out: &mut W) -> Result<()> {
    info!("Handling show command...");
    let chain = registry::build_chain(cfg)?;

    ui::print_heading(out, "Chain", chain.head()).context("Failed to write output")?;

    let width = chain
        .nodes()
        .iter()
        .map(|node| node.name().len())
        .max()
        .unwrap_or(0);
    for (position, node) in chain.nodes().iter().enumerate() {
        let accepts = chain.accepts(node.name()).unwrap_or_default();
        writeln!(
            out,
            "  {}. {:<width$}   accepts '{}'",
            position + 1,
            node.name(),
            accepts,
            width = width
        )
        .context("Failed to write output")?;
    }
    Ok(())
}
