//! Axum extractors for path identifiers
//!
//! `ContaId` rejects anything that is not a plain non-negative integer
//! before the handler touches the store, so a malformed id (400) is always
//! distinguished from a missing record (404).

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::core::error::{ContasError, RequestError};

/// The `{id}` segment of `/contas/{id}`, already parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContaId(pub u64);

impl<S> FromRequestParts<S> for ContaId
where
    S: Send + Sync,
{
    type Rejection = ContasError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = match Path::<String>::from_request_parts(parts, state).await {
            Ok(path) => path,
            Err(rejection) => {
                tracing::debug!("path rejected: {}", rejection.body_text());
                return Err(RequestError::InvalidEntityId {
                    id: last_segment(parts.uri.path()).to_string(),
                }
                .into());
            }
        };

        Ok(ContaId(parse_conta_id(&raw)?))
    }
}

/// Raw, still percent-encoded, final segment of a request path
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Parse a path identifier
///
/// Only ASCII digits are accepted: no sign, no whitespace, and the value
/// must fit in a `u64`.
pub fn parse_conta_id(raw: &str) -> Result<u64, RequestError> {
    let invalid = || RequestError::InvalidEntityId { id: raw.to_string() };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<u64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_conta_id("700"), Ok(700));
        assert_eq!(parse_conta_id("0"), Ok(0));
        assert_eq!(parse_conta_id("007"), Ok(7));
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert_eq!(
            parse_conta_id("abc123"),
            Err(RequestError::InvalidEntityId {
                id: "abc123".into()
            })
        );
        assert!(parse_conta_id("12a").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_blanks() {
        assert!(parse_conta_id("-1").is_err());
        assert!(parse_conta_id("+1").is_err());
        assert!(parse_conta_id(" 1").is_err());
        assert!(parse_conta_id("").is_err());
        assert!(parse_conta_id("1.5").is_err());
    }

    #[test]
    fn test_last_segment_keeps_raw_encoding() {
        assert_eq!(last_segment("/contas/%FF"), "%FF");
        assert_eq!(last_segment("/contas/"), "");
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_conta_id("99999999999999999999999").is_err());
        assert_eq!(parse_conta_id(&u64::MAX.to_string()), Ok(u64::MAX));
    }
}
