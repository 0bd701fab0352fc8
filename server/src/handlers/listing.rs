//! Listing handlers - pages and collection state.

use crate::error::Result;
use itemdeck_engine::{ItemService, ItemState, ListQuery, Page, PageWithState};
use serde::{Deserialize, Serialize};

/// Query parameters for a listing.
///
/// Everything stays a raw string here; the engine decides what a bad value
/// falls back to.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    /// `order` or `value`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_dir: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::parse(
            self.search.as_deref(),
            self.limit.as_deref(),
            self.offset.as_deref(),
            self.sort_by.as_deref(),
            self.sort_dir.as_deref(),
        )
    }
}

/// Response for a state reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub reset: bool,
}

/// Search, sort and paginate.
pub async fn handle_list(service: ItemService, params: ListParams) -> Result<Page> {
    let query = params.to_query();
    let page = tokio::task::spawn_blocking(move || service.list(&query)).await?;
    Ok(page)
}

/// A page plus the collection state.
pub async fn handle_page_with_state(
    service: ItemService,
    params: ListParams,
) -> Result<PageWithState> {
    let query = params.to_query();
    let combined = tokio::task::spawn_blocking(move || service.get_page_with_state(&query)).await?;
    Ok(combined)
}

/// Selected ids and storage order.
pub async fn handle_state(service: ItemService) -> Result<ItemState> {
    let state = tokio::task::spawn_blocking(move || service.get_state()).await?;
    Ok(state)
}

/// Restore the initial layout.
pub async fn handle_reset(service: ItemService) -> Result<ResetResponse> {
    tokio::task::spawn_blocking(move || service.reset_state()).await?;

    tracing::info!("State reset");
    Ok(ResetResponse { reset: true })
}
