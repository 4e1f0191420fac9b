//! Parseo laxo y formateo de fechas, duraciones y tamaños para consola.
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parseo laxo de timestamps remotos: ISO-8601 (con `Z` u offset) o
/// `YYYY-MM-DD HH:MM:SS` naive interpretado como UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.contains('T') {
        DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc))
    } else {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
                                                             .map(|n| DateTime::from_naive_utc_and_offset(n, Utc))
    }
}

/// Fecha legible (`YYYY-MM-DD HH:MM`). `N/A` si falta; si no parsea se
/// devuelven los primeros 19 caracteres del valor crudo.
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw {
        None => return "N/A".to_string(),
        Some(s) if s.trim().is_empty() => return "N/A".to_string(),
        Some(s) => s,
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.chars().take(19).collect(),
    }
}

/// Duración legible: segundos, minutos u horas con un decimal.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else if seconds < 3600.0 {
        format!("{:.1}m", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3600.0)
    }
}

/// Tamaño legible en bytes (B..PB, dos decimales).
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} PB")
}

/// Barra de progreso textual `[====----] current/total`.
pub fn progress_bar(current: u64, total: u64, width: usize) -> String {
    if total == 0 {
        return format!("[{}]", "=".repeat(width));
    }
    let filled = ((current as f64 / total as f64) * width as f64) as usize;
    let filled = filled.min(width);
    format!("[{}{}] {current}/{total}", "=".repeat(filled), "-".repeat(width - filled))
}
