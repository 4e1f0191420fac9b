//! Datasets: registro remoto y especificación de creación.
use serde::{Deserialize, Serialize};

/// Dataset tal como lo reporta la plataforma.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub dataset_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub record_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

/// Especificación de creación de un dataset. Cubre las dos formas que usa
/// el pipeline: dataset extraído desde una fuente externa y dataset final
/// derivado de otro dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dataset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_schema: Option<String>,
    #[serde(default)]
    pub schema_auto_detect: bool,
    #[serde(default)]
    pub data_quality_verified: bool,
    /// Pista de volumen para backends que no conocen la fuente real.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_records: Option<u64>,
}

impl DatasetSpec {
    /// Spec para la etapa de extracción (fuente externa, esquema
    /// autodetectado).
    pub fn extracted(name: impl Into<String>,
                     source_type: impl Into<String>,
                     source_path: impl Into<String>,
                     estimated_records: u64)
                     -> Self {
        Self { name: name.into(),
               source_type: Some(source_type.into()),
               source_path: Some(source_path.into()),
               source_dataset_id: None,
               target_schema: None,
               schema_auto_detect: true,
               data_quality_verified: false,
               estimated_records: Some(estimated_records) }
    }

    /// Spec para la etapa de carga (dataset final derivado de otro).
    pub fn finalized(name: impl Into<String>,
                     source_dataset_id: impl Into<String>,
                     target_schema: Option<&str>,
                     estimated_records: u64)
                     -> Self {
        Self { name: name.into(),
               source_type: None,
               source_path: None,
               source_dataset_id: Some(source_dataset_id.into()),
               target_schema: target_schema.map(str::to_string),
               schema_auto_detect: false,
               data_quality_verified: true,
               estimated_records: Some(estimated_records) }
    }
}
