//! Item records held by the store.

use crate::{ItemId, Position};
use serde::{Deserialize, Serialize};

/// A single entry in the collection.
///
/// On the wire the label is exposed as `value` and the position as `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned once at creation
    pub id: ItemId,
    /// Display text
    #[serde(rename = "value")]
    pub label: String,
    /// Selection flag
    pub selected: bool,
    /// Current display rank
    #[serde(rename = "order")]
    pub position: Position,
}

impl Item {
    /// Create an item in its default state: unselected, positioned at its id.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            label: Self::label_for(id),
            selected: false,
            position: id,
        }
    }

    /// The display label derived from an id.
    pub fn label_for(id: ItemId) -> String {
        format!("Item {}", id)
    }

    /// Copy of this item with a different selection flag.
    pub fn with_selected(&self, selected: bool) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }

    /// Copy of this item moved to another position.
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy of this item restored to its creation state.
    pub fn reset(&self) -> Self {
        Self {
            selected: false,
            position: self.id,
            ..self.clone()
        }
    }

    /// Case-insensitive substring match against the label.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.label.to_lowercase().contains(needle)
    }
}

/// Generate `count` items with `id = position = index + 1`.
pub fn generate(count: usize) -> Vec<Item> {
    (1..=count as ItemId).map(Item::new).collect()
}
