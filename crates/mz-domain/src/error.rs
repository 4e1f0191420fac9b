//! Errores del modelo de dominio.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("invalid guid: {0}")] InvalidGuid(String),
    #[error("identifier must not be empty")] EmptyIdentifier,
}

/// Exige un GUID válido; el valor se devuelve tal cual para encadenar.
pub fn require_guid(raw: &str) -> Result<&str, DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::EmptyIdentifier);
    }
    if !crate::ident::is_valid_guid(raw) {
        return Err(DomainError::InvalidGuid(raw.to_string()));
    }
    Ok(raw)
}
