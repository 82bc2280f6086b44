//! # ChainRS Handler Registry
//!
//! File: cli/src/core/registry.rs
//!
//! ## Overview
//!
//! Turns a validated `Config` into a linked chain. The registry holds one
//! fresh instance of every available handler (the builtin animals plus the
//! configured literal handlers), looked up by name. `build_chain` then links
//! the configured names in order.
//!
//! Each call builds new handler instances, so links made for one chain never
//! leak into another.
//!
use crate::core::config::Config;
use crate::core::error::{ChainrsError, Result};
use anyhow::anyhow;
use chainrs::animals::{DogHandler, MonkeyHandler, SquirrelHandler};
use chainrs::{link, Handler, LiteralHandler};
use std::rc::Rc;
use tracing::debug;

struct Entry {
    accepts: String,
    handler: Rc<dyn Handler>,
}

/// Every handler a chain may be built from, in registration order.
pub struct HandlerRegistry {
    entries: Vec<Entry>,
}

impl HandlerRegistry {
    fn builtin() -> Self {
        let entries = vec![
            Entry {
                accepts: MonkeyHandler::ACCEPTS.to_string(),
                handler: Rc::new(MonkeyHandler::new()),
            },
            Entry {
                accepts: SquirrelHandler::ACCEPTS.to_string(),
                handler: Rc::new(SquirrelHandler::new()),
            },
            Entry {
                accepts: DogHandler::ACCEPTS.to_string(),
                handler: Rc::new(DogHandler::new()),
            },
        ];
        Self { entries }
    }

    /// Builtin handlers plus the `[[handlers]]` section of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::builtin();
        for handler in &config.handlers {
            registry.register(&handler.name, &handler.accepts)?;
        }
        Ok(registry)
    }

    fn register(&mut self, name: &str, accepts: &str) -> Result<()> {
        if self.get(name).is_some() {
            return Err(anyhow!(ChainrsError::DuplicateHandler {
                name: name.to_string()
            }));
        }
        debug!("Registering literal handler '{}' accepting '{}'", name, accepts);
        self.entries.push(Entry {
            accepts: accepts.to_string(),
            handler: Rc::new(LiteralHandler::new(name, accepts)),
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn Handler>> {
        self.entry(name).map(|entry| Rc::clone(&entry.handler))
    }

    /// The literal the named handler accepts.
    pub fn accepts(&self, name: &str) -> Option<&str> {
        self.entry(name).map(|entry| entry.accepts.as_str())
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.handler.name() == name)
    }
}

/// A linked chain together with the registry its nodes came from.
pub struct BuiltChain {
    nodes: Vec<Rc<dyn Handler>>,
    registry: HandlerRegistry,
}

impl BuiltChain {
    /// The first node.
    pub fn head(&self) -> &Rc<dyn Handler> {
        &self.nodes[0]
    }

    /// The node called `name`, if it is part of this chain.
    pub fn entry(&self, name: &str) -> Option<&Rc<dyn Handler>> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    pub fn nodes(&self) -> &[Rc<dyn Handler>] {
        &self.nodes
    }

    pub fn accepts(&self, name: &str) -> Option<&str> {
        self.registry.accepts(name)
    }
}

/// Links the handlers named in `config.chain`, in order.
pub fn build_chain(config: &Config) -> Result<BuiltChain> {
    let registry = HandlerRegistry::from_config(config)?;

    let mut nodes: Vec<Rc<dyn Handler>> = Vec::with_capacity(config.chain.len());
    for name in &config.chain {
        let handler = registry.get(name).ok_or_else(|| {
            anyhow!(ChainrsError::UnknownHandler {
                name: name.to_string()
            })
        })?;
        // A node linked twice would point back into the chain.
        if nodes.iter().any(|node| Rc::ptr_eq(node, &handler)) {
            return Err(anyhow!(ChainrsError::Config(format!(
                "Handler '{}' appears more than once in the chain.",
                name
            ))));
        }
        nodes.push(handler);
    }

    if link(&nodes).is_none() {
        return Err(anyhow!(ChainrsError::EmptyChain));
    }
    debug!("Built chain: {}", chainrs::describe(&nodes[0]));
    Ok(BuiltChain { nodes, registry })
}
