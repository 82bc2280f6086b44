//! # ChainRS Chain Helpers
//!
//! File: lib/src/chain.rs
//!
//! ## Overview
//!
//! A chain is not a type of its own. It is whatever can be reached by
//! following `next` links from some node. These helpers link a list of nodes
//! in order and walk an existing chain.
//!
//! Neither `iter` nor `describe` terminates on a cyclic chain.
//!
use crate::handler::Handler;
use std::rc::Rc;

/// Links `handlers` in slice order and returns the first one.
///
/// Returns `None` for an empty slice. Existing successors of the given nodes
/// are overwritten, except for the last node, which keeps whatever link it
/// already had.
pub fn link<R: ?Sized>(handlers: &[Rc<dyn Handler<R>>]) -> Option<Rc<dyn Handler<R>>> {
    let head = handlers.first()?;
    for pair in handlers.windows(2) {
        pair[0].set_next(Rc::clone(&pair[1]));
    }
    Some(Rc::clone(head))
}

/// Iterator over the nodes of a chain, starting at the node it was created from.
pub struct ChainIter<R: ?Sized = str> {
    cursor: Option<Rc<dyn Handler<R>>>,
}

impl<R: ?Sized> Iterator for ChainIter<R> {
    type Item = Rc<dyn Handler<R>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        self.cursor = current.next();
        Some(current)
    }
}

/// Walks the chain from `head` onward, following `next` links.
pub fn iter<R: ?Sized>(head: &Rc<dyn Handler<R>>) -> ChainIter<R> {
    ChainIter {
        cursor: Some(Rc::clone(head)),
    }
}

/// Node names from `head` onward, joined by `" > "`.
pub fn describe<R: ?Sized>(head: &Rc<dyn Handler<R>>) -> String {
    iter(head)
        .map(|handler| handler.name().to_string())
        .collect::<Vec<_>>()
        .join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animals::{DogHandler, MonkeyHandler, SquirrelHandler};

    fn animals() -> Vec<Rc<dyn Handler>> {
        vec![
            Rc::new(MonkeyHandler::new()),
            Rc::new(SquirrelHandler::new()),
            Rc::new(DogHandler::new()),
        ]
    }

    #[test]
    fn test_link_empty_is_none() {
        let empty: Vec<Rc<dyn Handler>> = Vec::new();
        assert!(link(&empty).is_none());
    }

    #[test]
    fn test_link_single_node() {
        let nodes: Vec<Rc<dyn Handler>> = vec![Rc::new(DogHandler::new())];
        let head = link(&nodes).unwrap();
        assert!(head.next().is_none());
        assert_eq!(describe(&head), "Dog");
    }

    #[test]
    fn test_link_preserves_order() {
        let nodes = animals();
        let head = link(&nodes).unwrap();
        assert!(Rc::ptr_eq(&head, &nodes[0]));
        assert_eq!(describe(&head), "Monkey > Squirrel > Dog");
        assert_eq!(describe(&nodes[1]), "Squirrel > Dog");
    }

    #[test]
    fn test_iter_visits_every_node_once() {
        let nodes = animals();
        let head = link(&nodes).unwrap();
        let visited: Vec<_> = iter(&head).collect();
        assert_eq!(visited.len(), 3);
        for (seen, expected) in visited.iter().zip(nodes.iter()) {
            assert!(Rc::ptr_eq(seen, expected));
        }
    }
}
