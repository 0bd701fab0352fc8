//! Item endpoint routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, patch, post},
    Json, Router,
};
use itemdeck_engine::{ItemState, Page, PageWithState};

use crate::error::Result;
use crate::handlers::{
    handle_list, handle_order, handle_page_with_state, handle_reset, handle_selection,
    handle_state, ListParams, OrderRequest, ResetResponse, SelectionRequest, UpdatedResponse,
};
use crate::AppState;

/// Create item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_handler))
        .route("/items/page", get(page_with_state_handler))
        .route("/items/selection", patch(selection_handler))
        .route("/items/order", patch(order_handler))
        .route("/items/state", get(state_handler))
        .route("/items/state/reset", post(reset_handler))
}

/// GET /items - Search, sort and paginate.
async fn list_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Page>> {
    let Query(params) = params?;
    let page = handle_list(state.service, params).await?;
    Ok(Json(page))
}

/// GET /items/page - A page together with the collection state.
async fn page_with_state_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PageWithState>> {
    let Query(params) = params?;
    let combined = handle_page_with_state(state.service, params).await?;
    Ok(Json(combined))
}

/// PATCH /items/selection - Select or deselect items in bulk.
async fn selection_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<SelectionRequest>, JsonRejection>,
) -> Result<Json<UpdatedResponse>> {
    let Json(request) = request?;
    let response = handle_selection(state.service, request).await?;
    Ok(Json(response))
}

/// PATCH /items/order - Reorder items.
async fn order_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<UpdatedResponse>> {
    let Json(request) = request?;
    let response = handle_order(state.service, request).await?;
    Ok(Json(response))
}

/// GET /items/state - Selected ids and storage order.
async fn state_handler(State(state): State<AppState>) -> Result<Json<ItemState>> {
    let item_state = handle_state(state.service).await?;
    Ok(Json(item_state))
}

/// POST /items/state/reset - Restore the initial layout.
async fn reset_handler(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    let response = handle_reset(state.service).await?;
    Ok(Json(response))
}
