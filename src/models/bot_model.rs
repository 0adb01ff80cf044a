use serde::{Deserialize, Serialize};

/// Canales que el backend del bot entiende; cualquier otro (p.ej. "other:LinkedIn")
/// se queda en el spreadsheet local y no se reenvía.
pub const SUPPORTED_CHANNELS: [&str; 3] = ["whatsapp", "email", "phone"];

/// Request para lanzar una búsqueda de leads en tiempo real
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSearchRequest {
    #[serde(default)]
    pub niche: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Filtra los canales al conjunto soportado por el backend, en minúsculas
/// y sin duplicados. Los "other:*" nunca salen del servicio.
pub fn filter_supported_channels(channels: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ch in channels {
        let ch = ch.trim().to_lowercase();
        if SUPPORTED_CHANNELS.contains(&ch.as_str()) && !out.contains(&ch) {
            out.push(ch);
        }
    }
    out
}
