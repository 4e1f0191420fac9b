//! Poller de estado de ejecuciones.
//!
//! Loop bloqueante sobre el hilo llamante: traer el registro, clasificar su
//! status, dormir un intervalo y repetir hasta status terminal o timeout.
//! No persiste nada; el historial de cambios vive en el reporte devuelto.
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::warn;

use mz_domain::{ExecutionRecord, ExecutionStatus, StatusClass};

use crate::clock::Clock;
use crate::errors::CoreError;
use crate::platform::ExecutionClient;

mod sink;

pub use sink::{MonitorSink, NullSink};

/// Parámetros del loop de polling.
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    /// Intervalo entre consultas (> 0).
    pub interval: Duration,
    /// Duración máxima de la sesión (> 0).
    pub max_duration: Duration,
    /// Errores transitorios consecutivos tolerados antes de abortar. Un
    /// fetch exitoso resetea el contador.
    pub max_transient_errors: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self { interval: Duration::from_secs(5),
               max_duration: Duration::from_secs(1800),
               max_transient_errors: 3 }
    }
}

impl PollSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.interval.is_zero() {
            return Err(CoreError::InvalidSettings("poll interval must be greater than zero".into()));
        }
        if self.max_duration.is_zero() {
            return Err(CoreError::InvalidSettings("max duration must be greater than zero".into()));
        }
        Ok(())
    }
}

/// Muestra tomada en un poll. Al historial solo entran las que cambian de
/// status respecto a la anterior.
#[derive(Debug, Clone)]
pub struct StatusSample {
    pub at: DateTime<Utc>,
    pub elapsed: Duration,
    pub status: ExecutionStatus,
    pub progress: Option<String>,
}

/// Resultado terminal de una sesión de monitoreo.
#[derive(Debug, Clone)]
pub enum MonitorOutcome {
    /// La ejecución llegó a un status terminal de éxito.
    Succeeded(ExecutionRecord),
    /// La ejecución llegó a un status terminal de fallo.
    Failed(ExecutionRecord),
    /// Se agotó `max_duration` sin observar un status terminal.
    TimedOut { last: Option<ExecutionRecord> },
}

impl MonitorOutcome {
    pub fn record(&self) -> Option<&ExecutionRecord> {
        match self {
            MonitorOutcome::Succeeded(r) | MonitorOutcome::Failed(r) => Some(r),
            MonitorOutcome::TimedOut { last } => last.as_ref(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MonitorOutcome::Succeeded(_))
    }
}

#[derive(Debug, Clone)]
pub struct MonitorReport {
    pub outcome: MonitorOutcome,
    /// Consultas que devolvieron un registro (los errores no cuentan).
    pub polls: u32,
    pub elapsed: Duration,
    /// Cambios de estado observados, en orden.
    pub history: Vec<StatusSample>,
}

/// Monitorea una ejecución remota hasta terminal, timeout o error no
/// tolerado. La cancelación es a nivel de proceso (Ctrl-C); no se retiene
/// ningún recurso más allá de la llamada bloqueante.
pub struct ExecutionMonitor<'a, C, K>
    where C: ExecutionClient,
          K: Clock
{
    client: &'a mut C,
    clock: &'a mut K,
    project_id: String,
    execution_id: String,
}

impl<'a, C, K> ExecutionMonitor<'a, C, K>
    where C: ExecutionClient,
          K: Clock
{
    pub fn new(client: &'a mut C, clock: &'a mut K, project_id: impl Into<String>, execution_id: impl Into<String>) -> Self {
        Self { client,
               clock,
               project_id: project_id.into(),
               execution_id: execution_id.into() }
    }

    /// Loop principal.
    ///
    /// Política ante errores de fetch: los transitorios se toleran hasta
    /// `max_transient_errors` consecutivos y luego se devuelve el último
    /// error; los no transitorios (auth, not-found, validación) abortan de
    /// inmediato.
    pub fn monitor(&mut self, settings: &PollSettings, sink: &mut dyn MonitorSink) -> Result<MonitorReport, CoreError> {
        settings.validate()?;

        let started = self.clock.now();
        let mut history: Vec<StatusSample> = Vec::new();
        let mut last_status: Option<ExecutionStatus> = None;
        let mut last_record: Option<ExecutionRecord> = None;
        let mut consecutive_errors = 0u32;
        let mut polls = 0u32;

        loop {
            let now = self.clock.now();
            let elapsed = (now - started).to_std().unwrap_or_default();

            if elapsed >= settings.max_duration {
                return Ok(MonitorReport { outcome: MonitorOutcome::TimedOut { last: last_record },
                                          polls,
                                          elapsed,
                                          history });
            }

            match self.client.get_execution(&self.project_id, &self.execution_id) {
                Ok(record) => {
                    consecutive_errors = 0;
                    polls += 1;

                    let sample = StatusSample { at: now,
                                                elapsed,
                                                status: record.status.clone(),
                                                progress: record.progress.clone() };
                    sink.on_poll(&sample);

                    if last_status.as_ref() != Some(&record.status) {
                        sink.on_status_change(last_status.as_ref(), &sample);
                        history.push(sample);
                        last_status = Some(record.status.clone());
                    }

                    match record.status.class() {
                        StatusClass::Success => {
                            return Ok(MonitorReport { outcome: MonitorOutcome::Succeeded(record),
                                                      polls,
                                                      elapsed,
                                                      history });
                        }
                        StatusClass::Failure => {
                            return Ok(MonitorReport { outcome: MonitorOutcome::Failed(record),
                                                      polls,
                                                      elapsed,
                                                      history });
                        }
                        StatusClass::InFlight => {
                            last_record = Some(record);
                        }
                    }
                }
                Err(err) if err.is_transient() && consecutive_errors < settings.max_transient_errors => {
                    consecutive_errors += 1;
                    warn!("transient fetch error for execution {} ({consecutive_errors}/{}): {err}",
                          self.execution_id, settings.max_transient_errors);
                    sink.on_transient_error(&err, consecutive_errors);
                }
                Err(err) => return Err(err.into()),
            }

            self.clock.sleep(settings.interval);
        }
    }
}
