//! # ChainRS Animal Handlers
//!
//! File: lib/src/animals.rs
//!
//! ## Overview
//!
//! The three fixed handler variants of the feeding demo. Each accepts exactly
//! one kind of food and forwards everything else:
//!
//! | Handler           | Accepts     |
//! |-------------------|-------------|
//! | `MonkeyHandler`   | `Banana`    |
//! | `SquirrelHandler` | `Nut`       |
//! | `DogHandler`      | `MeatBall`  |
//!
use crate::handler::{eat, Handler, Successor};
use std::rc::Rc;
use tracing::debug;

/// Eats bananas.
#[derive(Debug, Default)]
pub struct MonkeyHandler {
    next: Successor,
}

impl MonkeyHandler {
    pub const NAME: &'static str = "Monkey";
    pub const ACCEPTS: &'static str = "Banana";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for MonkeyHandler {
    fn set_next(&self, handler: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(handler)
    }

    fn next(&self) -> Option<Rc<dyn Handler>> {
        self.next.get()
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == Self::ACCEPTS {
            debug!(handler = Self::NAME, request, "request accepted");
            return Some(eat(Self::NAME, request));
        }
        self.next.forward(request)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Eats nuts.
#[derive(Debug, Default)]
pub struct SquirrelHandler {
    next: Successor,
}

impl SquirrelHandler {
    pub const NAME: &'static str = "Squirrel";
    pub const ACCEPTS: &'static str = "Nut";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for SquirrelHandler {
    fn set_next(&self, handler: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(handler)
    }

    fn next(&self) -> Option<Rc<dyn Handler>> {
        self.next.get()
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == Self::ACCEPTS {
            debug!(handler = Self::NAME, request, "request accepted");
            return Some(eat(Self::NAME, request));
        }
        self.next.forward(request)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Eats meatballs.
#[derive(Debug, Default)]
pub struct DogHandler {
    next: Successor,
}

impl DogHandler {
    pub const NAME: &'static str = "Dog";
    pub const ACCEPTS: &'static str = "MeatBall";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for DogHandler {
    fn set_next(&self, handler: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(handler)
    }

    fn next(&self) -> Option<Rc<dyn Handler>> {
        self.next.get()
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == Self::ACCEPTS {
            debug!(handler = Self::NAME, request, "request accepted");
            return Some(eat(Self::NAME, request));
        }
        self.next.forward(request)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
