//! Query parameters for listing contas

use serde::Deserialize;

use crate::core::entity::Conta;

/// Filter accepted by `GET /contas`
///
/// # Example
/// ```text
/// GET /contas
/// GET /contas?categoria=Casa
/// ```
///
/// The only supported filter is `categoria`, compared case-insensitively.
/// A blank value is treated as no filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContaFilter {
    pub categoria: Option<String>,
}

impl ContaFilter {
    /// Filter on a single category
    pub fn by_categoria(categoria: impl Into<String>) -> Self {
        Self {
            categoria: Some(categoria.into()),
        }
    }

    /// Lower-cased category, if a non-blank one was given
    fn normalized_categoria(&self) -> Option<String> {
        self.categoria
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Check whether a record passes this filter
    pub fn matches(&self, conta: &Conta) -> bool {
        match self.normalized_categoria() {
            Some(wanted) => conta.categoria.to_lowercase() == wanted,
            None => true,
        }
    }

    /// Keep only the records that pass this filter, preserving order
    pub fn apply(&self, contas: impl IntoIterator<Item = Conta>) -> Vec<Conta> {
        contas.into_iter().filter(|c| self.matches(c)).collect()
    }
}
