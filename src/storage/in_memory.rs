//! In-memory implementation of ContaService

use crate::core::entity::{Conta, ContaPatch, NewConta};
use crate::core::error::{ContasResult, StorageError};
use crate::core::query::ContaFilter;
use crate::core::service::ContaService;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Records plus the id counter, guarded together so that id assignment and
/// insertion are one atomic step.
#[derive(Debug, Default)]
struct ContaTable {
    /// Last id handed out; ids are never reused, even after deletion
    last_id: u64,
    rows: BTreeMap<u64, Conta>,
}

impl ContaTable {
    fn insert_new(&mut self, new: NewConta) -> ContasResult<Conta> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| StorageError::IntegrityError {
                message: "conta id space exhausted".to_string(),
            })?;
        self.last_id = id;

        let conta = Conta::from_new(id, new, Utc::now());
        self.rows.insert(id, conta.clone());
        Ok(conta)
    }
}

/// In-memory conta service implementation
///
/// Uses a single RwLock for thread-safe access. Listing order is ascending id.
#[derive(Clone, Default)]
pub struct InMemoryContaService {
    table: Arc<RwLock<ContaTable>>,
}

impl InMemoryContaService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with records, in order
    pub fn seeded(records: impl IntoIterator<Item = NewConta>) -> ContasResult<Self> {
        let service = Self::new();
        {
            let mut table = service.write("seed")?;
            for new in records {
                table.insert_new(new)?;
            }
        }
        Ok(service)
    }

    /// Number of live records
    pub fn len(&self) -> ContasResult<usize> {
        Ok(self.read("len")?.rows.len())
    }

    fn read(&self, operation: &str) -> ContasResult<RwLockReadGuard<'_, ContaTable>> {
        self.table.read().map_err(|e| {
            StorageError::LockPoisoned {
                operation: operation.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self, operation: &str) -> ContasResult<RwLockWriteGuard<'_, ContaTable>> {
        self.table.write().map_err(|e| {
            StorageError::LockPoisoned {
                operation: operation.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl ContaService for InMemoryContaService {
    async fn create(&self, new: NewConta) -> ContasResult<Conta> {
        let conta = self.write("create")?.insert_new(new)?;
        tracing::info!(id = conta.id, categoria = %conta.categoria, "conta created");
        Ok(conta)
    }

    async fn get(&self, id: u64) -> ContasResult<Option<Conta>> {
        Ok(self.read("get")?.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &ContaFilter) -> ContasResult<Vec<Conta>> {
        let table = self.read("list")?;
        Ok(filter.apply(table.rows.values().cloned()))
    }

    async fn update(&self, id: u64, patch: ContaPatch) -> ContasResult<Option<Conta>> {
        let mut table = self.write("update")?;
        let Some(conta) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        if patch.is_empty() {
            tracing::debug!(id, "empty patch, conta unchanged");
        } else {
            conta.apply(patch);
            tracing::info!(id, "conta updated");
        }
        Ok(Some(conta.clone()))
    }

    async fn delete(&self, id: u64) -> ContasResult<Option<Conta>> {
        let removed = self.write("delete")?.rows.remove(&id);
        if removed.is_some() {
            tracing::info!(id, "conta deleted");
        }
        Ok(removed)
    }
}
