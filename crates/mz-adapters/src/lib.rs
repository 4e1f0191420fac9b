//! Adaptadores alrededor del núcleo: credenciales de entorno, backend en
//! memoria de la plataforma, exportación CSV, guardado de paquetes y
//! reporte de consola.
//!
//! Todo el I/O de la aplicación vive aquí; `mz-core` y `mz-domain` quedan
//! puros.

pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod memory;
pub mod report;

pub use config::{Credentials, DEFAULT_BASE_URL};
pub use download::{download_execution_package, safe_file_path, save_package, sniff_extension};
pub use error::AdapterError;
pub use export::{export_statistics_csv, render_statistics_csv};
pub use memory::InMemoryPlatform;
pub use report::{print_error, print_info, print_monitor_summary, print_pipeline_summary, print_projects,
                 print_section, print_statistics, print_success, print_warning, ConsoleSink};
