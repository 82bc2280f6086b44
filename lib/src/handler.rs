//! # ChainRS Handler Contract
//!
//! File: lib/src/handler.rs
//!
//! ## Overview
//!
//! Defines the `Handler` trait every chain node implements, plus the shared
//! `Successor` helper that owns a node's outgoing link and provides the
//! default "delegate to the next node" behavior.
//!
//! ## Architecture
//!
//! Variants do not inherit delegation. Each one embeds a `Successor` and, when
//! its own predicate rejects a request, calls `Successor::forward` explicitly.
//! Nodes are shared as `Rc<dyn Handler<R>>` so whoever built the chain can keep
//! handles to inner nodes and enter the chain there. The link itself sits in a
//! `RefCell`, which is why `set_next` only needs `&self`.
//!
//! Linking never checks for cycles. A cyclic chain delegates forever.
//!
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// A node in a chain of responsibility.
///
/// `R` is the request type. It defaults to `str`, which is what every
/// handler shipped with this crate accepts.
pub trait Handler<R: ?Sized = str> {
    /// Installs `handler` as this node's successor, replacing any previous one.
    ///
    /// Returns `handler` unchanged so chains can be built fluently:
    /// `a.set_next(b).set_next(c)` links a→b and b→c.
    fn set_next(&self, handler: Rc<dyn Handler<R>>) -> Rc<dyn Handler<R>>;

    /// The current successor, if any.
    fn next(&self) -> Option<Rc<dyn Handler<R>>>;

    /// Serves `request` or passes it on.
    ///
    /// Returns `None` when neither this node nor anything after it accepts
    /// the request.
    fn handle(&self, request: &R) -> Option<String>;

    /// Display name, used when describing a chain.
    fn name(&self) -> &str;
}

/// The outgoing link of a handler node and the default delegation behavior.
pub struct Successor<R: ?Sized = str> {
    next: RefCell<Option<Rc<dyn Handler<R>>>>,
}

impl<R: ?Sized> Successor<R> {
    pub fn new() -> Self {
        Self {
            next: RefCell::new(None),
        }
    }

    /// Replaces the stored successor and hands `handler` back.
    pub fn set(&self, handler: Rc<dyn Handler<R>>) -> Rc<dyn Handler<R>> {
        trace!(next = handler.name(), "linking successor");
        *self.next.borrow_mut() = Some(Rc::clone(&handler));
        handler
    }

    pub fn get(&self) -> Option<Rc<dyn Handler<R>>> {
        self.next.borrow().clone()
    }

    /// Hands `request` to the successor, or reports it unhandled at the end of the chain.
    pub fn forward(&self, request: &R) -> Option<String> {
        // The borrow is released before recursing.
        let next = self.get();
        match next {
            Some(next) => {
                trace!(to = next.name(), "forwarding request");
                next.handle(request)
            }
            None => {
                trace!("end of chain reached, request unhandled");
                None
            }
        }
    }
}

impl<R: ?Sized> Default for Successor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> fmt::Debug for Successor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next = self.next.borrow();
        f.debug_struct("Successor")
            .field("next", &next.as_ref().map(|handler| handler.name().to_string()))
            .finish()
    }
}

/// Formats the acceptance message shared by every string handler.
pub(crate) fn eat(name: &str, request: &str) -> String {
    format!("{}: I'll eat the {}", name, request)
}

/// A handler that accepts exactly one literal, both chosen at construction.
///
/// Used to build chains from configuration without defining a new type per
/// handler.
#[derive(Debug)]
pub struct LiteralHandler {
    name: String,
    accepts: String,
    next: Successor,
}

impl LiteralHandler {
    pub fn new(name: impl Into<String>, accepts: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepts: accepts.into(),
            next: Successor::new(),
        }
    }

    /// The only request this handler serves.
    pub fn accepts(&self) -> &str {
        &self.accepts
    }
}

impl Handler for LiteralHandler {
    fn set_next(&self, handler: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(handler)
    }

    fn next(&self) -> Option<Rc<dyn Handler>> {
        self.next.get()
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == self.accepts {
            debug!(handler = %self.name, request, "request accepted");
            return Some(eat(&self.name, request));
        }
        self.next.forward(request)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
