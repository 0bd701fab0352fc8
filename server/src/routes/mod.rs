//! HTTP route definitions.

mod health;
mod items;

use crate::error::AppError;
use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/api", items::routes())
        .fallback(not_found)
}

/// Fallback for unknown routes.
async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use itemdeck_engine::{ItemService, ItemStore};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(count: usize) -> Router {
        let state = AppState {
            service: ItemService::new(Arc::new(ItemStore::with_items(count))),
        };
        create_routes().with_state(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn list_default_page() {
        let app = test_app(50);

        let (status, body) = send(&app, Method::GET, "/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 50);
        assert_eq!(body["items"].as_array().unwrap().len(), 20);
        assert_eq!(
            body["items"][0],
            json!({"id": 1, "value": "Item 1", "selected": false, "order": 1})
        );
    }

    #[tokio::test]
    async fn list_with_query_parameters() {
        let app = test_app(50);

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/items?search=ITEM%204&limit=3&offset=1&sortBy=order&sortDir=desc",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // 4, 40..=49
        assert_eq!(body["total"], 11);
        assert_eq!(body["items"][0]["id"], 48);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_bad_numbers_fall_back() {
        let app = test_app(30);

        let (status, body) =
            send(&app, Method::GET, "/api/items?limit=abc&offset=-5&sortBy=nope", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 20);
        assert_eq!(body["items"][0]["id"], 1);
    }

    #[tokio::test]
    async fn list_reads_leading_integers() {
        let app = test_app(50);

        let (status, body) =
            send(&app, Method::GET, "/api/items?limit=5abc&offset=40.0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
        assert_eq!(body["items"][0]["id"], 41);
    }

    #[tokio::test]
    async fn selection_round_trip() {
        let app = test_app(10);

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/items/selection",
            Some(json!({"ids": [1, 2, 3], "selected": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"updated": 3}));

        let (status, body) = send(&app, Method::GET, "/api/items/state", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], json!([1, 2, 3]));
        assert_eq!(body["order"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn selection_rejects_malformed_bodies() {
        let app = test_app(10);

        for bad in [
            json!({"ids": [], "selected": true}),
            json!({"ids": [0], "selected": true}),
            json!({"ids": ["a"], "selected": true}),
            json!({"ids": 5, "selected": true}),
            json!({"ids": [1], "selected": "yes"}),
            json!({"selected": true}),
        ] {
            let (status, body) =
                send(&app, Method::PATCH, "/api/items/selection", Some(bad.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", bad);
            assert_eq!(body["error"], "Bad Request");
        }
    }

    #[tokio::test]
    async fn order_then_reset() {
        let app = test_app(5);

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/items/order",
            Some(json!({"ids": [5, 4, 3, 2, 1]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"updated": 4}));

        let (_, body) = send(&app, Method::GET, "/api/items/state", None).await;
        assert_eq!(body["order"], json!([5, 4, 3, 2, 1]));

        let (status, body) = send(&app, Method::POST, "/api/items/state/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reset": true}));

        let (_, body) = send(&app, Method::GET, "/api/items/state", None).await;
        assert_eq!(body, json!({"selected": [], "order": [1, 2, 3, 4, 5]}));
    }

    #[tokio::test]
    async fn order_rejects_non_integer_ids() {
        let app = test_app(5);

        for bad in [json!({"ids": [1.5]}), json!({"ids": [-1]}), json!({"ids": ["2"]})] {
            let (status, _) =
                send(&app, Method::PATCH, "/api/items/order", Some(bad.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", bad);
        }

        let (_, body) = send(&app, Method::GET, "/api/items/state", None).await;
        assert_eq!(body["order"], json!([1, 2, 3, 4, 5]));
    }

    #[tokio::test]
    async fn page_with_state() {
        let app = test_app(15);
        send(
            &app,
            Method::PATCH,
            "/api/items/selection",
            Some(json!({"ids": [2], "selected": true})),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/api/items/page?limit=10", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["total"], 15);
        assert_eq!(body["selected"], json!([2]));
        assert_eq!(body["order"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn health_reports_item_count() {
        let app = test_app(7);

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["items"], 7);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = test_app(1);

        let (status, body) = send(&app, Method::GET, "/api/nothing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not Found"}));
    }
}
