//! # ChainRS Handler Chain Library
//!
//! File: lib/src/lib.rs
//!
//! ## Overview
//!
//! A small Chain of Responsibility primitive. A chain is a singly linked
//! sequence of handler nodes. A request enters at any node and travels
//! forward until one node accepts it. If the end of the chain is reached
//! first, the request comes back unhandled (`None`).
//!
//! ## Architecture
//!
//! - `handler`: the `Handler` trait, the `Successor` delegation helper every
//!   variant embeds, and the configurable `LiteralHandler`.
//! - `animals`: the three fixed variants (`MonkeyHandler`, `SquirrelHandler`,
//!   `DogHandler`).
//! - `chain`: helpers to link a list of nodes and walk an existing chain.
//!
//! ## Examples
//!
//! ```rust
//! use chainrs::animals::{DogHandler, MonkeyHandler, SquirrelHandler};
//! use chainrs::Handler;
//! use std::rc::Rc;
//!
//! let monkey: Rc<dyn Handler> = Rc::new(MonkeyHandler::new());
//! let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::new());
//! let dog: Rc<dyn Handler> = Rc::new(DogHandler::new());
//!
//! monkey.set_next(squirrel.clone()).set_next(dog);
//!
//! assert_eq!(monkey.handle("Nut").as_deref(), Some("Squirrel: I'll eat the Nut"));
//! assert_eq!(monkey.handle("Coffee"), None);
//! // Entering mid-chain skips the monkey.
//! assert_eq!(squirrel.handle("Banana"), None);
//! ```
//!
pub mod animals;
pub mod chain;
pub mod handler;

pub use chain::{describe, iter, link, ChainIter};
pub use handler::{Handler, LiteralHandler, Successor};
