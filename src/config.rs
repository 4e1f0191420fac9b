//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) con las credenciales de la plataforma y los parámetros de
//! polling por defecto.
use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;

use mz_adapters::Credentials;
use mz_core::PollSettings;

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Credenciales de la plataforma; `None` si el entorno no las define
    /// (los demos en memoria no las necesitan).
    pub credentials: Option<Credentials>,
    /// Parámetros de polling por defecto, ajustables por entorno.
    pub poll: PollSettings,
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).filter(|v| *v > 0).unwrap_or(default)
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();

    let credentials = match Credentials::from_env() {
        Ok(creds) => Some(creds),
        Err(err) => {
            log::warn!("credentials not configured: {err}");
            None
        }
    };

    let defaults = PollSettings::default();
    let poll = PollSettings { interval:
                                  Duration::from_secs(parse_secs(env::var("MINDZIE_POLL_INTERVAL").ok(),
                                                                 defaults.interval.as_secs())),
                              max_duration:
                                  Duration::from_secs(parse_secs(env::var("MINDZIE_POLL_MAX_SECONDS").ok(),
                                                                 defaults.max_duration.as_secs())),
                              max_transient_errors: defaults.max_transient_errors };

    AppConfig { credentials, poll }
});
