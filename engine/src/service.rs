//! Service - the query and mutation operations over an [`ItemStore`].
//!
//! The service holds no state of its own. Reads work on a store snapshot;
//! writes compute a full replacement collection and hand it back to the store
//! inside a single [`ItemStore::update`] cycle.

use crate::query::{CollationKey, ListQuery, Page, SortDirection, SortField};
use crate::{Item, ItemId, ItemStore, Position};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Selection and storage order of the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    /// Ids of selected items, in storage order
    pub selected: Vec<ItemId>,
    /// Ids of all items, in storage order
    pub order: Vec<ItemId>,
}

/// A listing page together with the collection state it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWithState {
    #[serde(flatten)]
    pub page: Page,
    #[serde(flatten)]
    pub state: ItemState,
}

/// Stateless operations over a shared store.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<ItemStore>,
}

impl ItemService {
    /// Create a service over `store`.
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<ItemStore> {
        &self.store
    }

    /// Search, sort and paginate the collection.
    pub fn list(&self, query: &ListQuery) -> Page {
        let snapshot = self.store.get_all();
        page_of(&snapshot, query)
    }

    /// Set the selection flag on every item whose id is in `ids`.
    ///
    /// Unknown ids are ignored. Returns the number of items matched, each
    /// counted once however often its id appears in `ids`.
    pub fn update_selection(&self, ids: &[ItemId], selected: bool) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let wanted: HashSet<ItemId> = ids.iter().copied().collect();

        let updated = self.store.update(|items| {
            let mut updated = 0;
            let next: Vec<Item> = items
                .iter()
                .map(|item| {
                    if wanted.contains(&item.id) {
                        updated += 1;
                        item.with_selected(selected)
                    } else {
                        item.clone()
                    }
                })
                .collect();

            if updated == 0 {
                (None, 0)
            } else {
                (Some(next), updated)
            }
        });

        tracing::debug!(requested = ids.len(), updated, selected, "selection updated");
        updated
    }

    /// Renumber the items named in `ids` to positions `1..=k`, in order.
    ///
    /// Unknown ids are skipped without taking a position, and only the first
    /// occurrence of a repeated id counts. Items not named keep their
    /// positions and are stored after the renumbered block, ordered by
    /// position. Returns how many named items changed position.
    pub fn update_order(&self, ids: &[ItemId]) -> usize {
        let updated = self.store.update(|items| {
            let slots: HashMap<ItemId, usize> = items
                .iter()
                .enumerate()
                .map(|(slot, item)| (item.id, slot))
                .collect();

            let mut named: HashSet<ItemId> = HashSet::with_capacity(ids.len());
            let mut reordered: Vec<Item> = Vec::with_capacity(items.len());
            let mut updated = 0;

            for id in ids {
                let Some(&slot) = slots.get(id) else {
                    continue;
                };
                if !named.insert(*id) {
                    continue;
                }

                let existing = &items[slot];
                let position = reordered.len() as Position + 1;
                if existing.position != position {
                    updated += 1;
                    reordered.push(existing.with_position(position));
                } else {
                    reordered.push(existing.clone());
                }
            }

            let mut untouched: Vec<&Item> = items
                .iter()
                .filter(|item| !named.contains(&item.id))
                .collect();
            untouched.sort_by_key(|item| item.position);
            reordered.extend(untouched.into_iter().cloned());

            (Some(reordered), updated)
        });

        tracing::debug!(requested = ids.len(), updated, "order updated");
        updated
    }

    /// Selected ids and storage order of the whole collection.
    pub fn get_state(&self) -> ItemState {
        let snapshot = self.store.get_all();
        state_of(&snapshot)
    }

    /// Clear every selection and put every item back at `position = id`.
    pub fn reset_state(&self) {
        self.store.update(|items| {
            let mut next: Vec<Item> = items.iter().map(Item::reset).collect();
            next.sort_unstable_by_key(|item| item.id);
            (Some(next), ())
        });

        tracing::debug!("state reset");
    }

    /// A listing page and the collection state, taken from one snapshot.
    pub fn get_page_with_state(&self, query: &ListQuery) -> PageWithState {
        let snapshot = self.store.get_all();
        PageWithState {
            page: page_of(&snapshot, query),
            state: state_of(&snapshot),
        }
    }
}

fn page_of(items: &[Item], query: &ListQuery) -> Page {
    let needle = query.search.to_lowercase();
    let mut matched: Vec<&Item> = if needle.is_empty() {
        items.iter().collect()
    } else {
        items.iter().filter(|item| item.matches(&needle)).collect()
    };

    sort_items(&mut matched, query.sort_by, query.sort_dir);

    let total = matched.len();
    let items = matched
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();

    Page { items, total }
}

/// Stable sort, so equal keys keep their storage order.
fn sort_items(items: &mut [&Item], field: SortField, direction: SortDirection) {
    match (field, direction) {
        (SortField::Position, SortDirection::Asc) => items.sort_by_key(|item| item.position),
        (SortField::Position, SortDirection::Desc) => {
            items.sort_by_key(|item| Reverse(item.position))
        }
        (SortField::Label, SortDirection::Asc) => {
            items.sort_by_cached_key(|item| CollationKey::new(&item.label))
        }
        (SortField::Label, SortDirection::Desc) => {
            items.sort_by_cached_key(|item| Reverse(CollationKey::new(&item.label)))
        }
    }
}

fn state_of(items: &[Item]) -> ItemState {
    ItemState {
        selected: items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id)
            .collect(),
        order: items.iter().map(|item| item.id).collect(),
    }
}
