//! Validation system for write payloads
//!
//! Payloads are checked declaratively before they reach the handlers:
//! required-field presence first, then per-field type rules.

pub mod extractor;
pub mod rules;
pub mod validators;

pub use extractor::{ValidatablePayload, Validated};
pub use rules::{Operation, PayloadRules};
