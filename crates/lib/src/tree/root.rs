//! Ownership modes for a tree's root container.

use std::{cell::RefCell, rc::Rc};

use crate::value::Map;

/// A root map shared between a [`PathTree`](crate::PathTree) and its caller.
///
/// Mutations through the tree are visible through every clone of the handle
/// and vice versa. There is no synchronization; the handle is `!Send`.
pub type SharedMap = Rc<RefCell<Map>>;

/// The root container, either exclusively owned or bound to a shared map.
#[derive(Debug)]
pub(crate) enum Root {
    Owned(Map),
    Shared(SharedMap),
}

impl Root {
    /// Runs `f` with read access to the root map
    pub(crate) fn with<R>(&self, f: impl FnOnce(&Map) -> R) -> R {
        match self {
            Root::Owned(map) => f(map),
            Root::Shared(cell) => f(&cell.borrow()),
        }
    }

    /// Runs `f` with write access to the root map
    pub(crate) fn with_mut<R>(&mut self, f: impl FnOnce(&mut Map) -> R) -> R {
        match self {
            Root::Owned(map) => f(map),
            Root::Shared(cell) => f(&mut cell.borrow_mut()),
        }
    }

    /// Replaces the root contents, returning the old contents.
    ///
    /// In shared mode the new contents are written through the handle.
    pub(crate) fn replace(&mut self, map: Map) -> Map {
        self.with_mut(|root| std::mem::replace(root, map))
    }

    pub(crate) fn is_shared(&self) -> bool {
        matches!(self, Root::Shared(_))
    }

    /// Switches to shared mode, returning the handle.
    ///
    /// An owned root moves into a new handle; a shared root returns a clone
    /// of its existing handle.
    pub(crate) fn share(&mut self) -> SharedMap {
        match self {
            Root::Shared(cell) => Rc::clone(cell),
            Root::Owned(map) => {
                let cell = Rc::new(RefCell::new(std::mem::take(map)));
                *self = Root::Shared(Rc::clone(&cell));
                cell
            }
        }
    }
}

impl Default for Root {
    fn default() -> Self {
        Root::Owned(Map::new())
    }
}
