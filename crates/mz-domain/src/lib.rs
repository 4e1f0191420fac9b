//! Modelo de dominio del lado cliente de la plataforma analítica.
//!
//! Aquí viven los registros tal como los reporta el servicio remoto
//! (ejecuciones, proyectos, datasets, catálogo) y los helpers puros de
//! formateo/validación que comparten el resto de crates. Nada en este
//! crate hace I/O.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod execution;
pub mod ident;
pub mod project;
pub mod timefmt;

pub use catalog::{DashboardRecord, InvestigationRecord};
pub use dataset::{DatasetRecord, DatasetSpec};
pub use error::{require_guid, DomainError};
pub use execution::{DateStamp, ExecutionRecord, ExecutionStatus, StatusClass};
pub use project::ProjectRecord;
