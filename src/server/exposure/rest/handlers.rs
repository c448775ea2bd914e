//! HTTP handlers for the `/contas` resource

use crate::core::entity::{Conta, ContaPatch, NewConta};
use crate::core::error::{ContasError, ContasResult, EntityError, RequestError, ValidationError};
use crate::core::extractors::ContaId;
use crate::core::query::ContaFilter;
use crate::core::validation::Validated;
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub async fn list_contas(
    State(host): State<Arc<ServerHost>>,
    filter: Result<Query<ContaFilter>, QueryRejection>,
) -> ContasResult<Json<Vec<Conta>>> {
    let Query(filter) = filter.map_err(|rejection| ValidationError::InvalidQuery {
        message: rejection.body_text(),
    })?;

    let contas = host.service.list(&filter).await?;
    tracing::debug!(count = contas.len(), ?filter, "listed contas");
    Ok(Json(contas))
}

pub async fn create_conta(
    State(host): State<Arc<ServerHost>>,
    Validated(new): Validated<NewConta>,
) -> ContasResult<(StatusCode, Json<Conta>)> {
    let conta = host.service.create(new).await?;
    Ok((StatusCode::CREATED, Json(conta)))
}

pub async fn get_conta(
    State(host): State<Arc<ServerHost>>,
    ContaId(id): ContaId,
) -> ContasResult<Json<Conta>> {
    host.service
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| EntityError::not_found(id).into())
}

pub async fn update_conta(
    State(host): State<Arc<ServerHost>>,
    ContaId(id): ContaId,
    Validated(patch): Validated<ContaPatch>,
) -> ContasResult<Json<Conta>> {
    host.service
        .update(id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| EntityError::not_found(id).into())
}

pub async fn delete_conta(
    State(host): State<Arc<ServerHost>>,
    ContaId(id): ContaId,
) -> ContasResult<Json<Value>> {
    match host.service.delete(id).await? {
        Some(_) => Ok(Json(json!({
            "message": "conta removed",
            "id": id
        }))),
        None => Err(EntityError::not_found(id).into()),
    }
}

/// `/contas/` with an empty id segment
pub async fn empty_conta_id() -> ContasError {
    RequestError::InvalidEntityId { id: String::new() }.into()
}

/// Fallback for paths no route matches
pub async fn route_not_found(uri: Uri) -> ContasError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "contas"
    }))
}
