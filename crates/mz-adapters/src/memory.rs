//! Backend en memoria de la plataforma.
//!
//! Implementa los cuatro traits de `mz_core::platform` sobre estructuras
//! locales. Las ejecuciones son guiones de status que avanzan un paso por
//! consulta, de modo que los demos y tests ejercitan el poller real sin
//! transporte HTTP.
use std::collections::HashMap;

use serde_json::{json, Value};

use mz_core::{ApiError, CatalogClient, DatasetClient, ExecutionClient, PackagePayload, ProjectClient};
use mz_domain::{DashboardRecord, DatasetRecord, DatasetSpec, ExecutionRecord, InvestigationRecord, ProjectRecord};

/// Ejecución guionada: cada `get_execution` devuelve el siguiente status
/// del guion; el último se repite.
struct ScriptedExecution {
    execution_id: String,
    action_id: String,
    statuses: Vec<String>,
    cursor: usize,
    start_time: Option<String>,
    end_time: Option<String>,
}

impl ScriptedExecution {
    fn current_record(&self) -> ExecutionRecord {
        let idx = self.cursor.min(self.statuses.len().saturating_sub(1));
        let mut record = ExecutionRecord::new(self.execution_id.as_str(), self.statuses[idx].as_str());
        record.start_time = self.start_time.clone();
        if record.status.is_terminal() {
            record.end_time = self.end_time.clone();
        }
        record
    }
}

/// Plataforma en memoria. `seeded` arma un tenant de demostración; los
/// builders permiten escenarios a medida en tests.
#[derive(Default)]
pub struct InMemoryPlatform {
    projects: Vec<ProjectRecord>,
    datasets: HashMap<String, Vec<DatasetRecord>>,
    dashboards: HashMap<String, Vec<DashboardRecord>>,
    investigations: HashMap<String, Vec<InvestigationRecord>>,
    executions: Vec<ScriptedExecution>,
    packages: HashMap<String, PackagePayload>,
    fail_dataset_marker: Option<String>,
    dataset_seq: u32,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tenant de demostración: dos proyectos con catálogo, una ejecución ya
    /// completada con paquete y otra que completa tras unos polls.
    pub fn seeded() -> Self {
        let mut platform = Self::new();

        let mut sales = ProjectRecord::new("3f2b8c1e-5a47-4d06-9e13-7c55a2b4d901", "Sales Analytics");
        sales.description = Some("Order-to-cash process mining".to_string());
        sales.dataset_count = 8;
        sales.dashboard_count = 14;
        sales.investigation_count = 3;
        sales.user_count = 12;
        sales.date_created = Some("2025-11-03T09:15:00Z".to_string());
        sales.date_modified = Some("2026-08-20T16:40:00Z".to_string());

        let mut support = ProjectRecord::new("8d0a6f42-91bc-4e78-b2a5-1e9c3d7f6502", "Support Tickets");
        support.description = Some("Ticket lifecycle analysis".to_string());
        support.is_active = false;
        support.dataset_count = 2;
        support.dashboard_count = 0;
        support.investigation_count = 1;
        support.user_count = 4;
        support.date_created = Some("2024-05-18T11:00:00Z".to_string());

        let sales_id = sales.project_id.clone();
        let support_id = support.project_id.clone();
        platform.add_project(sales);
        platform.add_project(support);

        platform.datasets.insert(sales_id.clone(),
                                 vec![DatasetRecord { dataset_id: "ds-sales-orders".to_string(),
                                                      name: "orders".to_string(),
                                                      status: Some("ready".to_string()),
                                                      record_count: 125_000,
                                                      source_type: Some("csv".to_string()) },
                                      DatasetRecord { dataset_id: "ds-sales-invoices".to_string(),
                                                      name: "invoices".to_string(),
                                                      status: Some("ready".to_string()),
                                                      record_count: 98_500,
                                                      source_type: Some("database".to_string()) }]);

        platform.dashboards.insert(sales_id.clone(),
                                   vec![DashboardRecord { dashboard_id: "db-throughput".to_string(),
                                                          name: "Throughput Overview".to_string(),
                                                          description: None,
                                                          is_public: true,
                                                          date_created: Some("2026-01-12T10:00:00Z".to_string()) }]);

        platform.investigations.insert(sales_id.clone(),
                                       vec![InvestigationRecord { investigation_id: "inv-late-orders".to_string(),
                                                                  name: "Late Orders".to_string(),
                                                                  description: None,
                                                                  date_created: Some("2026-02-01T08:30:00Z".to_string()) }]);
        platform.investigations.insert(support_id,
                                       vec![InvestigationRecord { investigation_id: "inv-reopened".to_string(),
                                                                  name: "Reopened Tickets".to_string(),
                                                                  description: None,
                                                                  date_created: None }]);

        // Ejecución ya terminada, con paquete descargable.
        platform.script_execution(&sales_id, "action-daily-refresh", "exec-0001", &["completed"]);
        platform.set_package("exec-0001",
                             PackagePayload::Json(json!({ "rows_refreshed": 125_000, "warnings": [] })));

        // Ejecución que el poller ve progresar hasta completar.
        platform.script_execution(&sales_id, "action-weekly-report", "exec-0002",
                                  &["queued", "running", "running", "completed"]);
        platform.set_package("exec-0002", PackagePayload::Text("week,orders\n34,4210\n".to_string()));

        platform
    }

    pub fn add_project(&mut self, project: ProjectRecord) -> &mut Self {
        self.projects.push(project);
        self
    }

    /// Registra una ejecución guionada para una acción. El guion avanza un
    /// status por consulta.
    pub fn script_execution(&mut self, _project_id: &str, action_id: &str, execution_id: &str, statuses: &[&str])
                            -> &mut Self {
        self.executions.push(ScriptedExecution { execution_id: execution_id.to_string(),
                                                 action_id: action_id.to_string(),
                                                 statuses: statuses.iter().map(|s| s.to_string()).collect(),
                                                 cursor: 0,
                                                 start_time: Some("2026-08-27 10:00:00".to_string()),
                                                 end_time: Some("2026-08-27 10:02:30".to_string()) });
        self
    }

    pub fn set_package(&mut self, execution_id: &str, payload: PackagePayload) -> &mut Self {
        self.packages.insert(execution_id.to_string(), payload);
        self
    }

    /// Hace fallar `create_dataset` para specs cuyo nombre contenga el
    /// marcador. Simula fallos de almacenamiento por ítem.
    pub fn fail_dataset_matching(&mut self, marker: &str) -> &mut Self {
        self.fail_dataset_marker = Some(marker.to_string());
        self
    }

    fn find_execution(&mut self, execution_id: &str) -> Option<&mut ScriptedExecution> {
        self.executions.iter_mut().find(|e| e.execution_id == execution_id)
    }
}

impl ProjectClient for InMemoryPlatform {
    fn ping(&mut self) -> Result<(), ApiError> {
        Ok(())
    }

    fn list_projects(&mut self) -> Result<Vec<ProjectRecord>, ApiError> {
        Ok(self.projects.clone())
    }

    fn get_project(&mut self, project_id: &str) -> Result<ProjectRecord, ApiError> {
        self.projects
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("project {project_id}")))
    }
}

impl DatasetClient for InMemoryPlatform {
    fn list_datasets(&mut self, project_id: &str) -> Result<Vec<DatasetRecord>, ApiError> {
        Ok(self.datasets.get(project_id).cloned().unwrap_or_default())
    }

    fn create_dataset(&mut self, project_id: &str, spec: &DatasetSpec) -> Result<DatasetRecord, ApiError> {
        if let Some(marker) = &self.fail_dataset_marker {
            if spec.name.contains(marker.as_str()) {
                return Err(ApiError::Server("simulated storage failure".to_string()));
            }
        }
        self.dataset_seq += 1;
        let record = DatasetRecord { dataset_id: format!("ds-{:04}", self.dataset_seq),
                                     name: spec.name.clone(),
                                     status: Some("created".to_string()),
                                     record_count: spec.estimated_records.unwrap_or(0),
                                     source_type: spec.source_type.clone() };
        self.datasets.entry(project_id.to_string()).or_default().push(record.clone());
        Ok(record)
    }

    fn enrich_dataset(&mut self,
                      project_id: &str,
                      dataset_id: &str,
                      _enrichment_type: &str,
                      _operations: &[Value])
                      -> Result<String, ApiError> {
        let exists = self.datasets
                         .get(project_id)
                         .map(|list| list.iter().any(|d| d.dataset_id == dataset_id))
                         .unwrap_or(false);
        if !exists {
            return Err(ApiError::not_found(format!("dataset {dataset_id}")));
        }
        Ok(format!("enrich-{dataset_id}"))
    }
}

impl ExecutionClient for InMemoryPlatform {
    fn execute_action(&mut self, _project_id: &str, action_id: &str) -> Result<Option<String>, ApiError> {
        // Como el servicio real: lanzar no siempre devuelve el id; aquí se
        // devuelve solo si la acción tiene una ejecución registrada.
        Ok(self.executions
               .iter()
               .find(|e| e.action_id == action_id)
               .map(|e| e.execution_id.clone()))
    }

    fn get_execution(&mut self, _project_id: &str, execution_id: &str) -> Result<ExecutionRecord, ApiError> {
        let execution = self.find_execution(execution_id)
                            .ok_or_else(|| ApiError::not_found(format!("execution {execution_id}")))?;
        let record = execution.current_record();
        execution.cursor += 1;
        Ok(record)
    }

    fn executions_for_action(&mut self, _project_id: &str, action_id: &str) -> Result<Vec<ExecutionRecord>, ApiError> {
        // La más reciente primero: las guionadas se registran en orden, así
        // que se recorre al revés.
        Ok(self.executions
               .iter()
               .rev()
               .filter(|e| e.action_id == action_id)
               .map(ScriptedExecution::current_record)
               .collect())
    }

    fn download_package(&mut self, _project_id: &str, execution_id: &str) -> Result<PackagePayload, ApiError> {
        self.packages
            .get(execution_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("package for execution {execution_id}")))
    }
}

impl CatalogClient for InMemoryPlatform {
    fn list_dashboards(&mut self, project_id: &str) -> Result<Vec<DashboardRecord>, ApiError> {
        Ok(self.dashboards.get(project_id).cloned().unwrap_or_default())
    }

    fn list_investigations(&mut self, project_id: &str) -> Result<Vec<InvestigationRecord>, ApiError> {
        Ok(self.investigations.get(project_id).cloned().unwrap_or_default())
    }
}
