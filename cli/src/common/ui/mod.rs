//! # ChainRS UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Console output of the demo. This is the "client" side of the pattern: it
//! only holds one handler and does not know whether a chain sits behind it.
//!
//! All functions write to any `io::Write` so tests can capture the output.
//!
//! ## Example Output
//!
//! ```text
//! Chain: Monkey > Squirrel > Dog
//!
//! Client: Who wants a Nut
//! Squirrel: I'll eat the Nut
//! Client: Who wants a Coffee
//! Coffee was left untouched.
//! ```
//!
use chainrs::Handler;
use std::io::{self, Write};
use std::rc::Rc;

/// Prints `"{label}: A > B > C"` for the chain starting at `head`, then a blank line.
pub fn print_heading<W: Write>(
    out: &mut W,
    label: &str,
    head: &Rc<dyn Handler>,
) -> io::Result<()> {
    writeln!(out, "{}: {}", label, chainrs::describe(head))?;
    writeln!(out)
}

/// Sends each request to `handler` and reports who took it.
pub fn serve_requests<W: Write, S: AsRef<str>>(
    out: &mut W,
    handler: &dyn Handler,
    requests: &[S],
) -> io::Result<()> {
    for request in requests {
        let request = request.as_ref();
        writeln!(out, "Client: Who wants a {}", request)?;
        match handler.handle(request) {
            Some(result) => writeln!(out, "{}", result)?,
            None => writeln!(out, "{} was left untouched.", request)?,
        }
    }
    Ok(())
}
