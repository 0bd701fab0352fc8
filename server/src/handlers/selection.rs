//! Selection and reorder handlers - bulk mutations of the collection.

use crate::error::{AppError, Result};
use itemdeck_engine::{ItemId, ItemService};
use serde::{Deserialize, Serialize};

/// Request body for a bulk selection update.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    /// Ids to update; must be non-empty, each at least 1
    pub ids: Vec<i64>,
    /// New value of the selection flag
    pub selected: bool,
}

impl SelectionRequest {
    /// Check the request and return the ids as item ids.
    pub fn validate(&self) -> Result<Vec<ItemId>> {
        if self.ids.is_empty() {
            return Err(AppError::BadRequest(
                "ids must be a non-empty array".to_string(),
            ));
        }

        self.ids
            .iter()
            .map(|&id| {
                ItemId::try_from(id)
                    .ok()
                    .filter(|&id| id >= 1)
                    .ok_or_else(|| {
                        AppError::BadRequest("each id must be an integer ≥ 1".to_string())
                    })
            })
            .collect()
    }
}

/// Request body for a reorder.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// Ids in their new display order
    pub ids: Vec<ItemId>,
}

/// Response for bulk mutations.
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    /// Number of items affected
    pub updated: usize,
}

/// Apply a selection update.
pub async fn handle_selection(
    service: ItemService,
    request: SelectionRequest,
) -> Result<UpdatedResponse> {
    let ids = request.validate()?;
    let selected = request.selected;

    let updated =
        tokio::task::spawn_blocking(move || service.update_selection(&ids, selected)).await?;

    tracing::info!(updated, selected, "Selection updated");
    Ok(UpdatedResponse { updated })
}

/// Apply a reorder.
pub async fn handle_order(service: ItemService, request: OrderRequest) -> Result<UpdatedResponse> {
    let ids = request.ids;
    let requested = ids.len();

    let updated = tokio::task::spawn_blocking(move || service.update_order(&ids)).await?;

    tracing::info!(requested, updated, "Order updated");
    Ok(UpdatedResponse { updated })
}
