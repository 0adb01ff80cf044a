//! models/sheet_model.rs
//! Estructuras para el archivo local de envíos del formulario de contacto.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

/// Documento completo del archivo: `{ "submissions": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetDocument {
    #[serde(default)]
    pub submissions: Vec<SheetSubmission>,
}
