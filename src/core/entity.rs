//! The conta record and its write payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource name used in URLs and error messages
pub const RESOURCE_NAME: &str = "contas";

/// A financial entry.
///
/// `id` and `data` are assigned by the store on creation and never change
/// afterwards; the four remaining fields are the client-owned part of the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conta {
    pub id: u64,
    pub descricao: String,
    pub categoria: String,
    pub formapgto: String,
    pub valor: f64,
    pub data: DateTime<Utc>,
}

impl Conta {
    /// Build a stored record from a creation payload
    pub fn from_new(id: u64, new: NewConta, data: DateTime<Utc>) -> Self {
        Self {
            id,
            descricao: new.descricao,
            categoria: new.categoria,
            formapgto: new.formapgto,
            valor: new.valor,
            data,
        }
    }

    /// Merge the supplied fields of a patch into this record
    pub fn apply(&mut self, patch: ContaPatch) {
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
        if let Some(categoria) = patch.categoria {
            self.categoria = categoria;
        }
        if let Some(formapgto) = patch.formapgto {
            self.formapgto = formapgto;
        }
        if let Some(valor) = patch.valor {
            self.valor = valor;
        }
    }
}

/// Payload of `POST /contas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConta {
    pub descricao: String,
    pub categoria: String,
    pub formapgto: String,
    pub valor: f64,
}

/// Payload of `PATCH /contas/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formapgto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
}

impl ContaPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.descricao.is_none()
            && self.categoria.is_none()
            && self.formapgto.is_none()
            && self.valor.is_none()
    }
}
