//! Orquestador ETL: extract → transform → load, estrictamente secuencial.
//!
//! Política por ítem: mejor esfuerzo, no transaccional. Un fallo de la
//! plataforma sobre una fuente o un dataset se loguea y se cuenta; la
//! etapa continúa con el siguiente ítem y el pipeline completo se reporta
//! `completed` igual.
use log::{info, warn};

use mz_domain::{DatasetRecord, DatasetSpec};

use crate::clock::Clock;
use crate::platform::DatasetClient;

mod report;
mod spec;

pub use report::{ExtractReport, LoadReport, PipelineSummary, TransformReport};
pub use spec::{PipelineConfig, SourceSpec, TargetSpec, TransformSpec};

pub struct EtlPipeline<'a, C, K>
    where C: DatasetClient,
          K: Clock
{
    client: &'a mut C,
    clock: K,
    project_id: String,
    pipeline_id: String,
}

impl<'a, C, K> EtlPipeline<'a, C, K>
    where C: DatasetClient,
          K: Clock
{
    pub fn new(client: &'a mut C, clock: K, project_id: impl Into<String>) -> Self {
        let pipeline_id = format!("etl_{}", clock.now().format("%Y%m%d%H%M%S"));
        Self { client,
               clock,
               project_id: project_id.into(),
               pipeline_id }
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    /// Etapa 1: crea un dataset por fuente configurada.
    pub fn extract(&mut self, sources: &[SourceSpec]) -> ExtractReport {
        let mut report = ExtractReport::default();

        for (idx, source) in sources.iter().enumerate() {
            info!("extract {}/{}: source {}", idx + 1, sources.len(), source.name);

            let spec = DatasetSpec::extracted(format!("extracted_{}_{}", source.name, self.pipeline_id),
                                              source.kind.clone(),
                                              source.path.clone(),
                                              source.estimated_records);

            match self.client.create_dataset(&self.project_id, &spec) {
                Ok(dataset) => {
                    report.total_records += dataset.record_count;
                    report.sources_processed += 1;
                    report.datasets_created.push(dataset);
                }
                Err(err) => {
                    warn!("extract failed for source {}: {err}", source.name);
                    report.sources_failed += 1;
                }
            }
        }

        info!("extract complete: {} records from {} sources ({} failed)",
              report.total_records, report.sources_processed, report.sources_failed);
        report
    }

    /// Etapa 2: aplica las transformaciones a cada dataset extraído. Un
    /// enriquecimiento fallido marca el dataset y pasa al siguiente; las
    /// validaciones son chequeos locales.
    pub fn transform(&mut self, datasets: &[DatasetRecord], transformations: &[TransformSpec]) -> TransformReport {
        let mut report = TransformReport::default();

        for dataset in datasets {
            info!("transform: dataset {}", dataset.name);
            let mut failed = false;

            for transformation in transformations {
                match transformation {
                    TransformSpec::Enrichment { enrichment_type, operations } => {
                        match self.client
                                  .enrich_dataset(&self.project_id, &dataset.dataset_id, enrichment_type, operations)
                        {
                            Ok(job_id) => {
                                info!("enrichment job {job_id} submitted for {}", dataset.dataset_id);
                                report.transformations_applied += 1;
                            }
                            Err(err) => {
                                warn!("enrichment failed for dataset {}: {err}", dataset.dataset_id);
                                failed = true;
                                break;
                            }
                        }
                    }
                    TransformSpec::Validation { rules } => {
                        // Chequeo local: un dataset extraído sin registros no
                        // pasa calidad.
                        if dataset.record_count > 0 {
                            report.quality_checks_passed += 1;
                        } else {
                            warn!("quality check failed for dataset {} (rules: {rules:?})", dataset.dataset_id);
                        }
                        report.transformations_applied += 1;
                    }
                }
            }

            if failed {
                report.datasets_failed += 1;
            } else {
                report.datasets_processed += 1;
            }
        }

        info!("transform complete: {} transformations applied", report.transformations_applied);
        report
    }

    /// Etapa 3: materializa cada dataset extraído en el destino.
    pub fn load(&mut self, datasets: &[DatasetRecord], target: &TargetSpec) -> LoadReport {
        let mut report = LoadReport::default();

        if target.kind != "dataset" {
            warn!("unsupported target kind {:?}; nothing loaded", target.kind);
            return report;
        }

        for dataset in datasets {
            info!("load: dataset {}", dataset.name);

            let spec = DatasetSpec::finalized(format!("final_{}", dataset.name),
                                              dataset.dataset_id.clone(),
                                              target.schema.as_deref(),
                                              dataset.record_count);

            match self.client.create_dataset(&self.project_id, &spec) {
                Ok(final_dataset) => {
                    report.total_records_loaded += final_dataset.record_count;
                    report.datasets_loaded += 1;
                    report.target_datasets.push(final_dataset);
                }
                Err(err) => {
                    warn!("load failed for dataset {}: {err}", dataset.dataset_id);
                    report.datasets_failed += 1;
                }
            }
        }

        info!("load complete: {} records loaded to {} datasets",
              report.total_records_loaded, report.datasets_loaded);
        report
    }

    /// Corre el pipeline completo y devuelve el resumen. La carga opera
    /// sobre los datasets extraídos (las transformaciones enriquecen in
    /// situ del lado remoto).
    pub fn run(&mut self, config: &PipelineConfig) -> PipelineSummary {
        let started = self.clock.now();
        info!("starting pipeline {}", self.pipeline_id);

        let extraction = self.extract(&config.sources);
        let _transformation = self.transform(&extraction.datasets_created, &config.transformations);
        let load = self.load(&extraction.datasets_created, &config.target);

        let completed = self.clock.now();
        let duration = (completed - started).num_milliseconds() as f64 / 1000.0;

        PipelineSummary { pipeline_id: self.pipeline_id.clone(),
                          status: "completed".to_string(),
                          started_at: started.to_rfc3339(),
                          completed_at: completed.to_rfc3339(),
                          duration_seconds: duration,
                          steps_completed: 3,
                          total_records_processed: extraction.total_records,
                          final_datasets: load.target_datasets }
    }
}
