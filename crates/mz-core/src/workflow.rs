//! Workflow completo de una acción: ejecutar → resolver id de ejecución →
//! monitorear hasta terminal → analizar tiempos → descargar el paquete.
//!
//! Solo la resolución del id es obligatoria: una descarga fallida se
//! reporta pero no tumba el workflow.
use log::{info, warn};

use mz_domain::ExecutionStatus;

use crate::clock::Clock;
use crate::errors::CoreError;
use crate::monitor::{ExecutionMonitor, MonitorOutcome, MonitorSink, PollSettings};
use crate::platform::{ExecutionClient, PackagePayload};

#[derive(Debug, Clone)]
pub struct WorkflowSummary {
    pub action_id: String,
    pub execution_id: String,
    /// Último status observado; `None` si el timeout llegó antes del primer
    /// poll exitoso.
    pub final_status: Option<ExecutionStatus>,
    pub polls: u32,
    /// Duración reportada por el servicio, si ambos timestamps parsean.
    pub run_seconds: Option<f64>,
    pub package: Option<PackagePayload>,
    pub succeeded: bool,
}

pub struct ActionWorkflow<'a, C, K>
    where C: ExecutionClient,
          K: Clock
{
    client: &'a mut C,
    clock: &'a mut K,
    project_id: String,
    action_id: String,
}

impl<'a, C, K> ActionWorkflow<'a, C, K>
    where C: ExecutionClient,
          K: Clock
{
    pub fn new(client: &'a mut C, clock: &'a mut K, project_id: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self { client,
               clock,
               project_id: project_id.into(),
               action_id: action_id.into() }
    }

    pub fn run(&mut self, settings: &PollSettings, sink: &mut dyn MonitorSink) -> Result<WorkflowSummary, CoreError> {
        // Paso 1: lanzar la acción.
        info!("executing action {} in project {}", self.action_id, self.project_id);
        let direct_id = self.client.execute_action(&self.project_id, &self.action_id)?;

        // Paso 2: resolver el id de ejecución, directo o vía la ejecución
        // más reciente registrada para la acción.
        let execution_id = match direct_id {
            Some(id) => id,
            None => self.client
                        .executions_for_action(&self.project_id, &self.action_id)?
                        .into_iter()
                        .next()
                        .map(|execution| execution.id)
                        .ok_or(CoreError::NoExecutionId)?,
        };
        info!("monitoring execution {execution_id}");

        // Paso 3: monitorear hasta terminal o timeout.
        let report = ExecutionMonitor::new(&mut *self.client, &mut *self.clock, &self.project_id, &execution_id)
            .monitor(settings, sink)?;

        // Paso 4: análisis de tiempos del registro final.
        let final_record = report.outcome.record().cloned();
        let final_status = final_record.as_ref().map(|r| r.status.clone());
        let run_seconds = final_record.as_ref().and_then(|r| r.run_seconds());
        let succeeded = report.outcome.is_success();

        // Paso 5: descargar el paquete solo si terminó bien.
        let package = if succeeded {
            match self.client.download_package(&self.project_id, &execution_id) {
                Ok(payload) => Some(payload),
                Err(err) => {
                    warn!("package download failed for execution {execution_id}: {err}");
                    None
                }
            }
        } else {
            None
        };

        Ok(WorkflowSummary { action_id: self.action_id.clone(),
                             execution_id,
                             final_status,
                             polls: report.polls,
                             run_seconds,
                             package,
                             succeeded })
    }
}
