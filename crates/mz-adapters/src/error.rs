//! Errores de la capa de adaptadores.
use thiserror::Error;

use mz_core::ApiError;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)] Api(#[from] ApiError),
    #[error("i/o error: {0}")] Io(#[from] std::io::Error),
    #[error("json error: {0}")] Json(#[from] serde_json::Error),
    /// El id contiene separadores de ruta o `..`; no se usa como nombre de
    /// archivo.
    #[error("unsafe file path component: {0}")] UnsafePath(String),
    /// Se pidió el paquete de una ejecución que no terminó con éxito.
    #[error("execution is not completed (status: {0})")] NotCompleted(String),
    #[error("missing credentials: set {0}")] MissingCredentials(String),
}
