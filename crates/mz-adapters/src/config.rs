//! Credenciales de la plataforma leídas del entorno.
//!
//! Orden de carga: variables ya presentes en el proceso ganan; `.env` del
//! directorio actual rellena las que falten. Nunca se imprime la API key
//! completa: para consola existe `masked`.
use std::env;

use mz_domain::ident::{is_valid_guid, mask_sensitive};

use crate::error::AdapterError;

pub const DEFAULT_BASE_URL: &str = "https://dev.mindziestudio.com";

const TENANT_VAR: &str = "MINDZIE_TENANT_ID";
const API_KEY_VAR: &str = "MINDZIE_API_KEY";
const BASE_URL_VAR: &str = "MINDZIE_API_URL";

/// Credenciales resueltas y validadas.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub api_key: String,
    /// URL base sin `/` final.
    pub base_url: String,
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Credentials {
    /// Carga credenciales del entorno (y `.env` si existe). Reporta en un
    /// solo error todas las variables que falten.
    pub fn from_env() -> Result<Self, AdapterError> {
        // Ignorado a propósito: sin .env se usa solo el entorno.
        let _ = dotenvy::dotenv();

        let tenant_id = read_var(TENANT_VAR);
        let api_key = read_var(API_KEY_VAR);

        let (tenant_id, api_key) = match (tenant_id, api_key) {
            (Some(t), Some(k)) => (t, k),
            (t, k) => {
                let mut missing: Vec<&str> = Vec::new();
                if t.is_none() {
                    missing.push(TENANT_VAR);
                }
                if k.is_none() {
                    missing.push(API_KEY_VAR);
                }
                return Err(AdapterError::MissingCredentials(missing.join(", ")));
            }
        };

        if !is_valid_guid(&tenant_id) {
            return Err(AdapterError::MissingCredentials(format!("{TENANT_VAR} (must be a GUID)")));
        }

        let base_url = read_var(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self { tenant_id,
                  api_key,
                  base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Versión imprimible con tenant y API key enmascarados.
    pub fn masked(&self) -> String {
        format!("tenant={} key={} url={}",
                mask_sensitive(&self.tenant_id, 4),
                mask_sensitive(&self.api_key, 4),
                self.base_url)
    }
}
