//! Core module containing the record model, errors and service traits

pub mod auth;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod query;
pub mod service;
pub mod validation;

pub use auth::{API_TOKEN_HEADER, AuthProvider, StaticTokenProvider};
pub use entity::{Conta, ContaPatch, NewConta};
pub use error::{ContasError, ContasResult, ErrorResponse};
pub use extractors::ContaId;
pub use query::ContaFilter;
pub use service::ContaService;
