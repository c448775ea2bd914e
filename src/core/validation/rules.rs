//! Per-operation validation rules for conta payloads

use serde_json::Value;
use std::sync::Arc;

use super::validators::{non_empty_string, numeric, required};
use crate::core::error::{FieldValidationError, ValidationError};

/// A type-erased field validator
pub type FieldValidator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Write operation a payload is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST`: every field is required
    Create,
    /// `PATCH`: only supplied fields are checked
    Update,
}

/// Validators attached to one field
#[derive(Clone)]
pub struct FieldRule {
    pub field: &'static str,
    presence: Option<FieldValidator>,
    checks: Vec<FieldValidator>,
}

impl FieldRule {
    fn new(field: &'static str, presence: Option<FieldValidator>, checks: Vec<FieldValidator>) -> Self {
        Self {
            field,
            presence,
            checks,
        }
    }
}

/// Validation rules for one operation
///
/// Runs in two passes: presence of required fields first, then per-field
/// type checks. A payload failing both reports only the missing fields.
#[derive(Clone)]
pub struct PayloadRules {
    pub operation: Operation,
    fields: Vec<FieldRule>,
}

impl PayloadRules {
    /// Rules for a conta payload
    pub fn for_operation(operation: Operation) -> Self {
        let presence = match operation {
            Operation::Create => {
                let present: FieldValidator = Arc::new(required());
                Some(present)
            }
            Operation::Update => None,
        };
        let text: FieldValidator = Arc::new(non_empty_string());
        let number: FieldValidator = Arc::new(numeric());

        Self {
            operation,
            fields: vec![
                FieldRule::new("descricao", presence.clone(), vec![text.clone()]),
                FieldRule::new("categoria", presence.clone(), vec![text.clone()]),
                FieldRule::new("formapgto", presence.clone(), vec![text]),
                FieldRule::new("valor", presence, vec![number]),
            ],
        }
    }

    /// Validate a JSON payload
    pub fn validate(&self, payload: &Value) -> Result<(), ValidationError> {
        let Some(obj) = payload.as_object() else {
            return Err(ValidationError::InvalidBody {
                message: "expected a JSON object".to_string(),
            });
        };

        let missing: Vec<String> = self
            .fields
            .iter()
            .filter_map(|rule| {
                let presence = rule.presence.as_ref()?;
                let value = obj.get(rule.field).unwrap_or(&Value::Null);
                presence(rule.field, value)
                    .err()
                    .map(|_| rule.field.to_string())
            })
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let mut errors = Vec::new();
        for rule in &self.fields {
            // Absent fields only reach this point on update, where they are skipped
            let Some(value) = obj.get(rule.field) else {
                continue;
            };
            for check in &rule.checks {
                if let Err(message) = check(rule.field, value) {
                    errors.push(FieldValidationError {
                        field: rule.field.to_string(),
                        message,
                    });
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "descricao": "X-quasetudo",
            "categoria": "Alimentação",
            "formapgto": "Bonificação",
            "valor": 25.00
        })
    }

    #[test]
    fn test_create_accepts_complete_payload() {
        assert!(PayloadRules::for_operation(Operation::Create).validate(&valid()).is_ok());
    }

    #[test]
    fn test_create_reports_all_missing_fields_in_order() {
        let err = PayloadRules::for_operation(Operation::Create)
            .validate(&json!({"descricao": "Teste sem categoria"}))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["categoria".into(), "formapgto".into(), "valor".into()]
            }
        );
    }

    #[test]
    fn test_create_null_counts_as_missing() {
        let mut payload = valid();
        payload["valor"] = Value::Null;
        let err = PayloadRules::for_operation(Operation::Create)
            .validate(&payload)
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields { .. }));
    }

    #[test]
    fn test_create_rejects_string_valor() {
        let mut payload = valid();
        payload["valor"] = json!("vinte");
        let err = PayloadRules::for_operation(Operation::Create)
            .validate(&payload)
            .unwrap_err();
        match err {
            ValidationError::FieldErrors(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "valor");
            }
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_presence_is_reported_before_type() {
        let err = PayloadRules::for_operation(Operation::Create)
            .validate(&json!({"descricao": "Teste", "valor": "vinte"}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields { .. }));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let rules = PayloadRules::for_operation(Operation::Update);
        assert!(rules.validate(&json!({"descricao": "Internet", "categoria": "Casa"})).is_ok());
        assert!(rules.validate(&json!({})).is_ok());
    }

    #[test]
    fn test_update_checks_supplied_fields() {
        let rules = PayloadRules::for_operation(Operation::Update);
        assert!(rules.validate(&json!({"valor": "10"})).is_err());
        assert!(rules.validate(&json!({"categoria": ""})).is_err());
        assert!(rules.validate(&json!({"descricao": null})).is_err());
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = PayloadRules::for_operation(Operation::Update)
            .validate(&json!([1, 2]))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBody { .. }));
    }
}
