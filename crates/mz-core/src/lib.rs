//! Núcleo de orquestación del lado cliente.
//!
//! El patrón central de todo el crate es uno solo: enviar una operación
//! asíncrona a la plataforma remota, sondear su estado hasta un status
//! terminal (o timeout) y ramificar según el resultado. Sobre él se montan
//! el monitor de ejecuciones, el pipeline ETL y el workflow de acciones.
//!
//! El transporte HTTP real queda fuera: la plataforma se consume a través
//! de los traits de `platform`, con una implementación en memoria en
//! `mz-adapters`.

pub mod clock;
pub mod errors;
pub mod monitor;
pub mod pipeline;
pub mod platform;
pub mod stats;
pub mod workflow;

pub use clock::{Clock, SystemClock};
pub use errors::{ApiError, CoreError};
pub use monitor::{ExecutionMonitor, MonitorOutcome, MonitorReport, MonitorSink, NullSink, PollSettings, StatusSample};
pub use pipeline::{EtlPipeline, ExtractReport, LoadReport, PipelineConfig, PipelineSummary, SourceSpec, TargetSpec,
                   TransformReport, TransformSpec};
pub use platform::{CatalogClient, DatasetClient, ExecutionClient, PackagePayload, ProjectClient};
pub use stats::{ProjectDigest, TenantStatistics};
pub use workflow::{ActionWorkflow, WorkflowSummary};
