//! Errores del núcleo y taxonomía de errores del servicio remoto.
use thiserror::Error;

/// Taxonomía de errores observables del servicio remoto, espejo de las
/// excepciones del cliente original. Ninguno se reintenta automáticamente;
/// el poller tolera los transitorios de forma explícita y acotada.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("authentication failed (check MINDZIE_TENANT_ID and MINDZIE_API_KEY)")] Auth,
    #[error("resource not found: {resource}")] NotFound { resource: String },
    #[error("validation error: {0}")] Validation(String),
    #[error("request timed out")] Timeout,
    #[error("server error: {0}")] Server(String),
    #[error("unexpected error: {0}")] Unexpected(String),
}

impl ApiError {
    /// Errores que el poller puede tolerar y reintentar en el siguiente
    /// intervalo. Credenciales inválidas o recurso inexistente no mejoran
    /// reintentando.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Server(_) | ApiError::Unexpected(_))
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound { resource: resource.into() }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)] Api(#[from] ApiError),
    #[error("invalid settings: {0}")] InvalidSettings(String),
    #[error("action did not return an execution id and has no recorded executions")] NoExecutionId,
    #[error("internal: {0}")] Internal(String),
}
