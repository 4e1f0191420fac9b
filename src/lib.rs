//! mindzieFlow Rust Library
//!
//! Este crate actúa como el paquete raíz de mindzieFlow:
//! - Expone `config` con la configuración global (`CONFIG`).
//! - El binario `main-flow` corre la demostración completa contra el
//!   backend en memoria.
//!
//! La funcionalidad vive en los crates del workspace: `mz-domain`
//! (modelo), `mz-core` (poller, pipeline, workflow, estadísticas) y
//! `mz-adapters` (credenciales, backend en memoria, exportación y
//! consola).

pub mod config;
