//! # Itemdeck Engine
//!
//! An in-memory engine for a large ordered collection of items.
//!
//! This crate keeps up to millions of items searchable, sortable, paginated
//! and reorderable with deterministic results - the same collection and the
//! same request always produce the same page.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of files, network, or platform
//! - **Deterministic**: Sorting is stable, storage order is explicit
//! - **Atomic**: Writers replace the whole collection in one swap
//! - **Injectable**: Stores are plain values, build as many as you like
//!
//! ## Core Concepts
//!
//! ### Items
//!
//! Each [`Item`] has:
//! - Unique ID, assigned once
//! - Label (`"Item {id}"`)
//! - Selection flag
//! - Position (display rank)
//!
//! ### Store
//!
//! The [`ItemStore`] owns the collection. [`ItemStore::get_all`] returns a
//! shared snapshot, [`ItemStore::replace_all`] swaps in a new collection and
//! [`ItemStore::update`] runs a serialized read-modify-write cycle.
//!
//! ### Service
//!
//! The [`ItemService`] implements the operations:
//! - [`ItemService::list`] - search, sort and paginate
//! - [`ItemService::update_selection`] - bulk select / deselect
//! - [`ItemService::update_order`] - partial reorder
//! - [`ItemService::get_state`] - selected ids and storage order
//! - [`ItemService::reset_state`] - back to the initial layout
//! - [`ItemService::get_page_with_state`] - page and state in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use itemdeck_engine::{ItemService, ItemStore, ListQuery, SortDirection, SortField};
//! use std::sync::Arc;
//!
//! // 1. Create a store with generated items
//! let store = Arc::new(ItemStore::with_items(1_000));
//!
//! // 2. Wrap it in a service
//! let service = ItemService::new(store);
//!
//! // 3. Query
//! let page = service.list(
//!     &ListQuery::new()
//!         .search("item 99")
//!         .sort(SortField::Position, SortDirection::Desc),
//! );
//! assert_eq!(page.total, 11);
//! assert_eq!(page.items[0].id, 999);
//!
//! // 4. Mutate
//! assert_eq!(service.update_selection(&[1, 2, 3], true), 3);
//! assert_eq!(service.update_order(&[3, 2, 1]), 2);
//! assert_eq!(service.get_state().order[..3], [3, 2, 1]);
//! ```

pub mod error;
pub mod query;
pub mod record;
pub mod service;
pub mod store;

// Re-export main types at crate root
pub use error::Error;
pub use query::{ListQuery, Page, SortDirection, SortField, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use record::Item;
pub use service::{ItemService, ItemState, PageWithState};
pub use store::{ItemStore, Snapshot};

/// Type aliases for clarity
pub type ItemId = u64;
pub type Position = u64;

/// Number of items generated at startup.
pub const DEFAULT_ITEM_COUNT: usize = 1_000_000;
