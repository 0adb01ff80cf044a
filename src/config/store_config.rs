//! config/store_config.rs
//! Configuración global del servicio (rutas de datos, backend del bot, bind).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuración global, con valores por defecto
/// (puede venir de variables de entorno vía .env)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreGlobalConfig {
    pub leads_file: PathBuf,     // documento del spreadsheet inbuilt
    pub sheet_file: PathBuf,     // envíos del formulario de contacto
    pub bot_api_base: String,    // base URL del backend externo del bot
    pub bind_addr: String,
    pub bind_port: u16,
}

impl Default for StoreGlobalConfig {
    fn default() -> Self {
        StoreGlobalConfig {
            leads_file: PathBuf::from("data/inbuilt_leads.json"),
            sheet_file: PathBuf::from("data/sheet_submissions.json"),
            bot_api_base: "http://localhost:5001".to_string(),
            bind_addr: "0.0.0.0".to_string(),
            bind_port: 5022,
        }
    }
}

impl StoreGlobalConfig {
    /// Lee overrides desde el entorno; lo que falte queda en default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        StoreGlobalConfig {
            leads_file: std::env::var("INBUILT_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.leads_file),
            sheet_file: std::env::var("SHEET_SUBMISSIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.sheet_file),
            bot_api_base: std::env::var("BOT_API_BASE").unwrap_or(defaults.bot_api_base),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            bind_port: std::env::var("BIND_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.bind_port),
        }
    }
}
