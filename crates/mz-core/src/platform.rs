//! Seam hacia la plataforma remota.
//!
//! El cliente HTTP real es una dependencia externa no examinada: aquí solo
//! se declara el contrato que el núcleo consume ("traer registro por id",
//! "listar", "lanzar acción", "descargar paquete"). `mz-adapters` provee
//! la implementación en memoria usada por demos y tests; un transporte
//! real implementaría estos mismos traits.
use serde_json::Value;

use mz_domain::{DashboardRecord, DatasetRecord, DatasetSpec, ExecutionRecord, InvestigationRecord, ProjectRecord};

use crate::errors::ApiError;

/// Contenido de un paquete de resultados descargado. El servicio puede
/// responder binario crudo, texto plano o JSON estructurado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagePayload {
    Binary(Vec<u8>),
    Text(String),
    Json(Value),
}

pub trait ProjectClient {
    /// Prueba de conectividad barata contra la plataforma.
    fn ping(&mut self) -> Result<(), ApiError>;
    fn list_projects(&mut self) -> Result<Vec<ProjectRecord>, ApiError>;
    fn get_project(&mut self, project_id: &str) -> Result<ProjectRecord, ApiError>;
}

pub trait DatasetClient {
    fn list_datasets(&mut self, project_id: &str) -> Result<Vec<DatasetRecord>, ApiError>;
    fn create_dataset(&mut self, project_id: &str, spec: &DatasetSpec) -> Result<DatasetRecord, ApiError>;
    /// Lanza un job de enriquecimiento sobre un dataset; devuelve el id del
    /// job remoto.
    fn enrich_dataset(&mut self,
                      project_id: &str,
                      dataset_id: &str,
                      enrichment_type: &str,
                      operations: &[Value])
                      -> Result<String, ApiError>;
}

pub trait ExecutionClient {
    /// Lanza una acción. Devuelve el id de ejecución si el servicio lo
    /// reporta; algunas acciones completan de forma síncrona sin id.
    fn execute_action(&mut self, project_id: &str, action_id: &str) -> Result<Option<String>, ApiError>;
    fn get_execution(&mut self, project_id: &str, execution_id: &str) -> Result<ExecutionRecord, ApiError>;
    /// Ejecuciones registradas de una acción, la más reciente primero.
    fn executions_for_action(&mut self, project_id: &str, action_id: &str) -> Result<Vec<ExecutionRecord>, ApiError>;
    fn download_package(&mut self, project_id: &str, execution_id: &str) -> Result<PackagePayload, ApiError>;
}

pub trait CatalogClient {
    fn list_dashboards(&mut self, project_id: &str) -> Result<Vec<DashboardRecord>, ApiError>;
    fn list_investigations(&mut self, project_id: &str) -> Result<Vec<InvestigationRecord>, ApiError>;
}
