//! REST API exposure for the contas service
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`.
//! Token checking is a router-wide layer, so it covers the resource routes,
//! the health routes and the not-found fallback alike.

pub mod handlers;

use super::super::host::ServerHost;
use crate::core::auth::require_api_token;
use anyhow::Result;
use axum::{Router, middleware, routing::get};
use handlers::{
    create_conta, delete_conta, empty_conta_id, get_conta, health_check, list_contas,
    route_not_found, update_conta,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - `/contas` collection and item routes
    /// - A JSON 404 fallback
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let app = Self::health_routes()
            .merge(Self::conta_routes())
            .fallback(route_not_found)
            .layer(middleware::from_fn_with_state(
                host.auth.clone(),
                require_api_token,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(host);

        Ok(app)
    }

    fn conta_routes() -> Router<Arc<ServerHost>> {
        Router::new()
            .route("/contas", get(list_contas).post(create_conta))
            .route(
                "/contas/",
                get(empty_conta_id)
                    .patch(empty_conta_id)
                    .delete(empty_conta_id),
            )
            .route(
                "/contas/{id}",
                get(get_conta).patch(update_conta).delete(delete_conta),
            )
    }

    fn health_routes() -> Router<Arc<ServerHost>> {
        Router::new()
            .route("/health", get(health_check))
            .route("/healthz", get(health_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::StaticTokenProvider;
    use crate::storage::InMemoryContaService;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let host = ServerHost::new(
            Arc::new(InMemoryContaService::new()),
            Arc::new(StaticTokenProvider::new("masterkey")),
        );
        RestExposure::build_router(Arc::new(host)).unwrap()
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<(&str, String)>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("x-api-token", token);
        }

        let request = match body {
            Some((content_type, body)) => builder
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_unsupported_method_still_requires_token() {
        let router = test_router();

        let (status, body) = send(&router, Method::PUT, "/contas/1", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");

        let (status, _) = send(&router, Method::PUT, "/contas/1", Some("masterkey"), None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_empty_id_segment_is_invalid_id() {
        let router = test_router();

        for method in [Method::GET, Method::PATCH, Method::DELETE] {
            let (status, body) = send(&router, method, "/contas/", Some("masterkey"), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], "INVALID_ENTITY_ID");
        }

        let (status, _) = send(&router, Method::GET, "/contas/", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_utf8_id_reports_raw_segment() {
        let router = test_router();

        let (status, body) =
            send(&router, Method::GET, "/contas/%FF", Some("masterkey"), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_ENTITY_ID");
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("'%FF'"), "unexpected message: {}", message);
        assert!(!message.contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_invalid_json() {
        let router = test_router();
        let payload = json!({
            "descricao": "Luz",
            "categoria": "Casa",
            "formapgto": "Boleto",
            "valor": 10
        })
        .to_string();

        let (status, body) = send(
            &router,
            Method::POST,
            "/contas",
            Some("masterkey"),
            Some(("text/plain", payload)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_JSON");
    }

    #[tokio::test]
    async fn test_repeated_categoria_param_is_invalid_query() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::GET,
            "/contas?categoria=Casa&categoria=Lazer",
            Some("masterkey"),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_blank_categoria_lists_everything() {
        let router = test_router();
        let payload = json!({
            "descricao": "Luz",
            "categoria": "Casa",
            "formapgto": "Boleto",
            "valor": 10
        })
        .to_string();
        send(
            &router,
            Method::POST,
            "/contas",
            Some("masterkey"),
            Some(("application/json", payload)),
        )
        .await;

        let (status, body) =
            send(&router, Method::GET, "/contas?categoria=", Some("masterkey"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_posts_get_distinct_ids() {
        let router = test_router();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let router = router.clone();
                tokio::spawn(async move {
                    let payload = json!({
                        "descricao": format!("conta {}", i),
                        "categoria": "Casa",
                        "formapgto": "Pix",
                        "valor": i
                    })
                    .to_string();
                    let (status, body) = send(
                        &router,
                        Method::POST,
                        "/contas",
                        Some("masterkey"),
                        Some(("application/json", payload)),
                    )
                    .await;
                    assert_eq!(status, StatusCode::CREATED);
                    body["id"].as_u64().unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }
}
