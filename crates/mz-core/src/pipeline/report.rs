//! Acumuladores por etapa y resumen final de una corrida ETL.
//!
//! Son registros en memoria locales a una corrida; se descartan al
//! terminar. Los fallos por ítem quedan contados, nunca propagados.
use serde::Serialize;

use mz_domain::DatasetRecord;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractReport {
    pub sources_processed: u32,
    pub sources_failed: u32,
    pub total_records: u64,
    pub datasets_created: Vec<DatasetRecord>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransformReport {
    pub datasets_processed: u32,
    pub datasets_failed: u32,
    pub transformations_applied: u32,
    pub quality_checks_passed: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub datasets_loaded: u32,
    pub datasets_failed: u32,
    pub total_records_loaded: u64,
    pub target_datasets: Vec<DatasetRecord>,
}

/// Resumen de la corrida completa.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub pipeline_id: String,
    pub status: String,
    pub started_at: String,
    pub completed_at: String,
    pub duration_seconds: f64,
    pub steps_completed: u32,
    pub total_records_processed: u64,
    pub final_datasets: Vec<DatasetRecord>,
}
