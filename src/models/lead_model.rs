use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Estado de seguimiento de un canal ("contactado por este canal").
/// `timestamp` solo existe cuando `done == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>, // ISO-8601
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    pub channels: Vec<String>, // "whatsapp", "email", "phone", "other:<label>"
    pub tasks: BTreeMap<String, TaskStatus>,
    pub created_at: String,
    pub updated_at: String,
}

/// Documento completo persistido en disco: `{ "leads": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub leads: Vec<LeadRecord>,
}

/// Un lead tal como llega en el POST (sin id ni timestamps).
#[derive(Debug, Clone, Deserialize)]
pub struct LeadInput {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub niche: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Request para crear leads en bloque
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeadsRequest {
    #[serde(default)]
    pub leads: Vec<LeadInput>,
}

/// Request para marcar/desmarcar la tarea de un canal
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListLeadsResponse {
    pub leads: Vec<LeadRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLeadsResponse {
    pub success: bool,
    pub added: Vec<LeadRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskResponse {
    pub success: bool,
    pub updated: LeadRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearLeadsResponse {
    pub success: bool,
    pub cleared: bool,
}
