//! Validación de identificadores y enmascarado de secretos.
use uuid::Uuid;

/// Valida el formato GUID con guiones (8-4-4-4-12). Los ids de proyecto y
/// tenant de la plataforma siempre vienen en esta forma.
pub fn is_valid_guid(raw: &str) -> bool {
    raw.len() == 36 && Uuid::parse_str(raw).is_ok()
}

/// Enmascara un valor sensible mostrando solo los extremos. Valores cortos
/// se enmascaran por completo.
pub fn mask_sensitive(raw: &str, visible_chars: usize) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() <= visible_chars * 2 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..visible_chars].iter().collect();
    let tail: String = chars[chars.len() - visible_chars..].iter().collect();
    format!("{head}...{tail}")
}
