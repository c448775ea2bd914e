//! Authorization for the contas service
//!
//! Every request must carry the shared secret in the `x-api-token` header.
//! The check runs as a router-wide middleware, ahead of path parsing, body
//! parsing and the store, so a bad token always wins over any other error.

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::core::error::{ContasError, RequestError};

/// Header carrying the API token
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Accept or reject a request from its headers
    async fn authenticate(&self, headers: &HeaderMap) -> Result<(), RequestError>;
}

/// Single shared-secret provider
///
/// Exactly one token value is valid for the lifetime of the process.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Create a provider accepting exactly `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AuthProvider for StaticTokenProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<(), RequestError> {
        let Some(presented) = headers.get(API_TOKEN_HEADER) else {
            return Err(RequestError::Unauthorized {
                message: format!("missing {} header", API_TOKEN_HEADER),
            });
        };

        if bool::from(presented.as_bytes().ct_eq(self.token.as_bytes())) {
            Ok(())
        } else {
            Err(RequestError::Unauthorized {
                message: "invalid API token".to_string(),
            })
        }
    }
}

/// Middleware rejecting requests without a valid token
///
/// Install with `axum::middleware::from_fn_with_state(provider, require_api_token)`.
pub async fn require_api_token(
    State(auth): State<Arc<dyn AuthProvider>>,
    req: Request,
    next: Next,
) -> Response {
    // Body is not Sync, so only the parts are borrowed across the await
    let (parts, body) = req.into_parts();

    if let Err(err) = auth.authenticate(&parts.headers).await {
        tracing::warn!(
            method = %parts.method,
            path = %parts.uri.path(),
            "rejected request: {}",
            err
        );
        return ContasError::from(err).into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}
