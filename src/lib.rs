//! # Contas API
//!
//! A small REST service managing financial entries ("contas"), guarded by a
//! shared `x-api-token`.
//!
//! ## Features
//!
//! - **CRUD over `/contas`**: create, fetch, list with a `categoria` filter,
//!   partial update and delete
//! - **Strict request pipeline**: token check, then id parsing, then payload
//!   validation, then the store
//! - **Typed errors**: every failure maps to one status and a JSON body with
//!   `code` and `message`
//! - **Pluggable storage**: handlers only see the `ContaService` trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contas::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_service(InMemoryContaService::new())
//!         .with_api_token("masterkey")
//!         .serve("0.0.0.0:5000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{API_TOKEN_HEADER, AuthProvider, StaticTokenProvider, require_api_token},
        entity::{Conta, ContaPatch, NewConta, RESOURCE_NAME},
        error::{
            ContasError, ContasResult, EntityError, ErrorResponse, FieldValidationError,
            RequestError, StorageError, ValidationError,
        },
        extractors::ContaId,
        query::ContaFilter,
        service::ContaService,
        validation::{Operation, PayloadRules, Validated},
    };

    // === Storage ===
    pub use crate::storage::InMemoryContaService;

    // === Config ===
    pub use crate::config::{ConfigError, ServiceConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
