//! Store - the in-memory state container.
//!
//! The store owns the one authoritative collection of items. Readers get a
//! shared snapshot; writers hand back a whole replacement collection which is
//! swapped in as a single reference update, so nobody ever observes a
//! half-applied change.

use crate::record::{self, Item};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;

/// Immutable view of the collection at one point in time.
pub type Snapshot = Arc<Vec<Item>>;

/// Owner of the item collection.
pub struct ItemStore {
    /// Current collection, replaced wholesale on every write
    items: RwLock<Snapshot>,
    /// Serializes read-modify-write cycles
    writer: Mutex<()>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Arc::new(Vec::new())),
            writer: Mutex::new(()),
        }
    }

    /// Create a store populated with `count` items.
    pub fn with_items(count: usize) -> Self {
        let store = Self::new();
        store.initialize(count);
        store
    }

    /// Populate the store with `count` freshly generated items.
    pub fn initialize(&self, count: usize) {
        tracing::debug!(count, "generating items");
        self.replace_all(record::generate(count));
    }

    /// Get the current collection.
    ///
    /// The snapshot stays valid and unchanged even if the store is written
    /// to afterwards.
    pub fn get_all(&self) -> Snapshot {
        self.items.read().clone()
    }

    /// Swap the stored collection for `items`.
    pub fn replace_all(&self, items: Vec<Item>) {
        let _guard = self.writer.lock();
        self.swap(items);
    }

    /// Run a read-modify-write cycle.
    ///
    /// `f` sees the current collection and returns an optional replacement
    /// along with a result. Concurrent calls run one after another, so no
    /// update is computed from a collection another update already replaced.
    /// Readers keep seeing the old collection until the swap.
    ///
    /// `f` must not write to this store itself.
    pub fn update<R>(&self, f: impl FnOnce(&[Item]) -> (Option<Vec<Item>>, R)) -> R {
        let _guard = self.writer.lock();
        let current = self.get_all();

        let (replacement, result) = f(&current);
        if let Some(items) = replacement {
            self.swap(items);
        }
        result
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn swap(&self, items: Vec<Item>) {
        *self.items.write() = Arc::new(items);
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("len", &self.len())
            .finish()
    }
}
