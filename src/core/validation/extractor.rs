//! Axum extractor for validated write payloads
//!
//! This module provides the `Validated<T>` extractor that parses the JSON
//! body, runs the payload rules for the operation, and only then hands a
//! typed payload to the handler.

use super::rules::{Operation, PayloadRules};
use crate::core::entity::{ContaPatch, NewConta};
use crate::core::error::{ContasError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for payloads that can be validated before deserialization
pub trait ValidatablePayload: DeserializeOwned {
    /// The operation whose rules apply to this payload
    fn operation() -> Operation;
}

impl ValidatablePayload for NewConta {
    fn operation() -> Operation {
        Operation::Create
    }
}

impl ValidatablePayload for ContaPatch {
    fn operation() -> Operation {
        Operation::Update
    }
}

/// Axum extractor that validates a write payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_conta(
///     Validated(new): Validated<NewConta>,
/// ) -> ContasResult<Json<Conta>> {
///     // new is complete and well-typed here
/// }
/// ```
///
/// Must be the last handler argument since it consumes the body.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatablePayload + Send,
{
    type Rejection = ContasError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidJson {
                message: rejection.body_text(),
            })?;

        PayloadRules::for_operation(T::operation()).validate(&payload)?;

        let typed = serde_json::from_value(payload)?;
        Ok(Validated(typed))
    }
}
