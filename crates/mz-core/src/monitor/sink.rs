//! Observador de la sesión de monitoreo.
//!
//! El poller no imprime: la CLI registra un sink de consola y los tests
//! capturan las muestras. Todos los hooks tienen default vacío.
use mz_domain::ExecutionStatus;

use super::StatusSample;
use crate::errors::ApiError;

pub trait MonitorSink {
    /// Se invoca en cada poll que devolvió registro.
    fn on_poll(&mut self, _sample: &StatusSample) {}
    /// Se invoca cuando el status difiere del poll anterior. `previous` es
    /// `None` en el primer poll.
    fn on_status_change(&mut self, _previous: Option<&ExecutionStatus>, _sample: &StatusSample) {}
    /// Se invoca por cada error transitorio tolerado.
    fn on_transient_error(&mut self, _error: &ApiError, _consecutive: u32) {}
}

/// Sink que descarta todo.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MonitorSink for NullSink {}
