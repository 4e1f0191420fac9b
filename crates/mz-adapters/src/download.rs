//! Descarga y guardado de paquetes de resultados.
//!
//! El servicio no anuncia el tipo de contenido: la extensión del archivo
//! se infiere del payload (magic bytes para binario, primer carácter
//! significativo para texto).
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use mz_core::{ExecutionClient, PackagePayload};
use mz_domain::StatusClass;

use crate::error::AdapterError;

/// Rechaza componentes de nombre que escaparían del directorio destino.
pub fn safe_file_path(component: &str) -> Result<&str, AdapterError> {
    if component.is_empty() || component.contains("..") || component.contains('/') || component.contains('\\') {
        return Err(AdapterError::UnsafePath(component.to_string()));
    }
    Ok(component)
}

/// Infiere la extensión del archivo a partir del contenido.
pub fn sniff_extension(payload: &PackagePayload) -> &'static str {
    match payload {
        PackagePayload::Binary(bytes) => {
            if bytes.starts_with(b"PK") {
                ".zip"
            } else if bytes.starts_with(b"%PDF") {
                ".pdf"
            } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
                ".png"
            } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
                ".jpg"
            } else {
                ".bin"
            }
        }
        PackagePayload::Text(text) => {
            let head = text.trim_start();
            if head.starts_with("<?xml") || head.starts_with('<') {
                ".xml"
            } else if head.starts_with('{') || head.starts_with('[') {
                ".json"
            } else if text.lines().next().map(|l| l.contains(',')).unwrap_or(false) {
                ".csv"
            } else {
                ".txt"
            }
        }
        PackagePayload::Json(_) => ".json",
    }
}

/// Trae el paquete de una ejecución, exigiendo primero que haya terminado
/// con éxito. Pedir el paquete de una ejecución fallida o en curso es un
/// error del llamante, no del servicio.
pub fn download_execution_package<C>(client: &mut C, project_id: &str, execution_id: &str)
                                     -> Result<PackagePayload, AdapterError>
    where C: ExecutionClient
{
    let record = client.get_execution(project_id, execution_id)?;
    if record.status.class() != StatusClass::Success {
        return Err(AdapterError::NotCompleted(record.status.to_string()));
    }
    Ok(client.download_package(project_id, execution_id)?)
}

/// Escribe el paquete como `execution_{id}_package{ext}` dentro de `dir`
/// (creándolo si hace falta) y devuelve la ruta final.
pub fn save_package(dir: &Path, execution_id: &str, payload: &PackagePayload) -> Result<PathBuf, AdapterError> {
    let id = safe_file_path(execution_id)?;
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("execution_{id}_package{}", sniff_extension(payload)));
    match payload {
        PackagePayload::Binary(bytes) => fs::write(&path, bytes)?,
        PackagePayload::Text(text) => fs::write(&path, text)?,
        PackagePayload::Json(value) => fs::write(&path, serde_json::to_string_pretty(value)?)?,
    }
    info!("package for execution {id} saved to {}", path.display());
    Ok(path)
}
