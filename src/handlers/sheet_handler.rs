//! handlers/sheet_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::services::sheet_service::SheetService;

/// GET /api/sheets
/// Devuelve la matriz `[cabecera, ...filas]` que consume la preview de leads.
pub async fn get_sheet_endpoint(sheet_service: web::Data<SheetService>) -> HttpResponse {
    match sheet_service.sheet_values().await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Error leyendo el sheet de contacto: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch sheet data"
            }))
        }
    }
}
