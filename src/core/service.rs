//! Service trait for conta storage

use crate::core::entity::{Conta, ContaPatch, NewConta};
use crate::core::error::ContasResult;
use crate::core::query::ContaFilter;
use async_trait::async_trait;

/// Service trait for managing contas
///
/// Implementations own id and timestamp assignment. The HTTP layer is
/// agnostic to the underlying storage mechanism.
#[async_trait]
pub trait ContaService: Send + Sync {
    /// Store a new record, assigning its `id` and `data`
    async fn create(&self, new: NewConta) -> ContasResult<Conta>;

    /// Get a record by id
    async fn get(&self, id: u64) -> ContasResult<Option<Conta>>;

    /// List records passing the filter, ordered by id
    async fn list(&self, filter: &ContaFilter) -> ContasResult<Vec<Conta>>;

    /// Merge supplied fields into an existing record
    ///
    /// Returns `None` when no record has this id; nothing is created.
    async fn update(&self, id: u64, patch: ContaPatch) -> ContasResult<Option<Conta>>;

    /// Remove a record, returning it if it existed
    async fn delete(&self, id: u64) -> ContasResult<Option<Conta>>;
}
