//! Descriptores de configuración del pipeline ETL (cargables desde JSON).
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fuente de datos a extraer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    pub name: String,
    #[serde(rename = "type", default = "default_source_kind")]
    pub kind: String,
    pub path: String,
    #[serde(default = "default_estimated_records")]
    pub estimated_records: u64,
}

fn default_source_kind() -> String {
    "csv".to_string()
}

fn default_estimated_records() -> u64 {
    1000
}

/// Transformación a aplicar sobre cada dataset extraído.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    /// Enriquecimiento remoto (campos calculados, lookups).
    Enrichment {
        #[serde(default = "default_enrichment_type")]
        enrichment_type: String,
        #[serde(default)]
        operations: Vec<Value>,
    },
    /// Chequeo de calidad local sobre el dataset.
    Validation {
        #[serde(default)]
        rules: Vec<String>,
    },
}

fn default_enrichment_type() -> String {
    "calculate".to_string()
}

/// Destino de la etapa de carga.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    #[serde(rename = "type", default = "default_target_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

fn default_target_kind() -> String {
    "dataset".to_string()
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self { kind: default_target_kind(),
               schema: None }
    }
}

/// Configuración completa de una corrida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub transformations: Vec<TransformSpec>,
    #[serde(default)]
    pub target: TargetSpec,
}

impl PipelineConfig {
    /// Configuración de demostración: dos fuentes, enriquecimiento con dos
    /// operaciones y validación básica, carga a un dataset analítico.
    pub fn demo() -> Self {
        Self { sources: vec![SourceSpec { name: "sales_data".to_string(),
                                          kind: "csv".to_string(),
                                          path: "/data/sales.csv".to_string(),
                                          estimated_records: 5000 },
                             SourceSpec { name: "customer_data".to_string(),
                                          kind: "database".to_string(),
                                          path: "customers_table".to_string(),
                                          estimated_records: 2000 }],
               transformations: vec![TransformSpec::Enrichment {
                                         enrichment_type: "calculate".to_string(),
                                         operations: vec![serde_json::json!({"field": "total_amount", "formula": "quantity * price"}),
                                                          serde_json::json!({"field": "customer_segment", "lookup_table": "segments"})],
                                     },
                                     TransformSpec::Validation { rules: vec!["not_null".to_string(),
                                                                             "data_types".to_string(),
                                                                             "ranges".to_string()] }],
               target: TargetSpec { kind: "dataset".to_string(),
                                    schema: Some("sales_analytics_v1".to_string()) } }
    }

    /// Configuración mínima a partir de rutas de archivo.
    pub fn from_source_paths(paths: &[String]) -> Self {
        let sources = paths.iter()
                           .enumerate()
                           .map(|(idx, path)| SourceSpec { name: format!("source_{}", idx + 1),
                                                           kind: "csv".to_string(),
                                                           path: path.clone(),
                                                           estimated_records: 1000 })
                           .collect();
        Self { sources,
               transformations: Vec::new(),
               target: TargetSpec::default() }
    }
}
