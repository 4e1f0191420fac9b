//! Estado y registro de una ejecución remota.
//!
//! El ciclo de vida pertenece al servicio remoto: el registro se crea al
//! enviar la acción, muta del lado servidor y aquí solo se lee. Las
//! transiciones son monótonas hacia un estado terminal:
//! - en vuelo: `pending`, `queued`, `running`, `in_progress`, ...
//! - terminal de éxito: `completed`, `finished`, `success`
//! - terminal de fallo: `failed`, `error`, `cancelled`, `aborted`, `timeout`
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::timefmt;

/// Clasificación local de un status remoto (comparación case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Terminal con resultado exitoso.
    Success,
    /// Terminal con resultado fallido.
    Failure,
    /// No terminal: la ejecución sigue en curso. Incluye cualquier string
    /// no reconocido, que se sigue sondeando hasta terminal o timeout.
    InFlight,
}

/// Status crudo tal como lo reporta el servicio remoto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionStatus(pub String);

impl ExecutionStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Clasifica el status contra los conjuntos terminales conocidos.
    pub fn class(&self) -> StatusClass {
        match self.0.to_ascii_lowercase().as_str() {
            "completed" | "finished" | "success" => StatusClass::Success,
            "failed" | "error" | "cancelled" | "aborted" | "timeout" => StatusClass::Failure,
            _ => StatusClass::InFlight,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.class() != StatusClass::InFlight
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Timestamp opcional de un registro remoto con el caso "presente pero no
/// parseable" explícito. Sustituye las omisiones silenciosas del parseo
/// ad hoc: el consumidor decide qué hacer con `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateStamp {
    /// El campo no vino en el registro.
    Missing,
    /// Vino pero no se pudo interpretar; se conserva el valor crudo.
    Invalid(String),
    At(DateTime<Utc>),
}

impl DateStamp {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => DateStamp::Missing,
            Some(s) if s.trim().is_empty() => DateStamp::Missing,
            Some(s) => match timefmt::parse_timestamp(s) {
                Some(dt) => DateStamp::At(dt),
                None => DateStamp::Invalid(s.to_string()),
            },
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateStamp::At(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Registro de ejecución producido por el servicio remoto (solo lectura).
///
/// Los timestamps se conservan como strings crudos; `start_stamp` y
/// `end_stamp` entregan la versión parseada explícita.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub id: String,
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, alias = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ExecutionRecord {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self { id: id.into(),
               status: ExecutionStatus::new(status),
               progress: None,
               start_time: None,
               end_time: None,
               error: None,
               result: None }
    }

    pub fn start_stamp(&self) -> DateStamp {
        DateStamp::parse(self.start_time.as_deref())
    }

    pub fn end_stamp(&self) -> DateStamp {
        DateStamp::parse(self.end_time.as_deref())
    }

    /// Progreso para consola; `N/A` cuando el servicio no lo reporta.
    pub fn progress_display(&self) -> &str {
        self.progress.as_deref().unwrap_or("N/A")
    }

    /// Duración en segundos si ambos timestamps vinieron y son parseables.
    pub fn run_seconds(&self) -> Option<f64> {
        let start = self.start_stamp().as_datetime()?;
        let end = self.end_stamp().as_datetime()?;
        Some((end - start).num_milliseconds() as f64 / 1000.0)
    }
}
