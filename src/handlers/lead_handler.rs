//! handlers/lead_handler.rs
//! Endpoints del spreadsheet inbuilt de leads.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::models::lead_model::{
    ClearLeadsResponse, CreateLeadsRequest, CreateLeadsResponse, ListLeadsResponse,
    UpdateTaskRequest, UpdateTaskResponse,
};
use crate::services::lead_store_service::LeadStoreService;

/// Header que confirma el borrado total del spreadsheet
pub const CONFIRM_CLEAR_HEADER: &str = "x-confirm-clear";

/// GET /api/inbuilt
pub async fn list_leads_endpoint(store: web::Data<LeadStoreService>) -> HttpResponse {
    match store.list_leads().await {
        Ok(leads) => HttpResponse::Ok().json(ListLeadsResponse { leads }),
        Err(e) => {
            log::error!("Error listando leads: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to read inbuilt spreadsheet"
            }))
        }
    }
}

/// POST /api/inbuilt
pub async fn create_leads_endpoint(
    store: web::Data<LeadStoreService>,
    body: web::Json<CreateLeadsRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.leads.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing or empty 'leads' array"
        }));
    }

    match store.create_leads(req.leads).await {
        Ok(added) => HttpResponse::Ok().json(CreateLeadsResponse {
            success: true,
            added,
        }),
        Err(e) => {
            log::error!("Error creando leads: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to save inbuilt spreadsheet"
            }))
        }
    }
}

/// PATCH /api/inbuilt
pub async fn update_task_endpoint(
    store: web::Data<LeadStoreService>,
    body: web::Json<UpdateTaskRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.id.trim().is_empty() || req.task.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing 'id' or 'task'"
        }));
    }

    match store.update_task(&req.id, &req.task, req.done).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(UpdateTaskResponse {
            success: true,
            updated,
        }),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Lead not found"
        })),
        Err(e) => {
            log::error!("Error actualizando tarea: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to save inbuilt spreadsheet"
            }))
        }
    }
}

/// DELETE /api/inbuilt
/// Exige el header `x-confirm-clear: true`; sin él no se borra nada.
pub async fn clear_leads_endpoint(
    store: web::Data<LeadStoreService>,
    req: HttpRequest,
) -> HttpResponse {
    let confirmed = req
        .headers()
        .get(CONFIRM_CLEAR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if !confirmed {
        return HttpResponse::BadRequest().json(json!({
            "error": "Clear not confirmed: send 'x-confirm-clear: true'"
        }));
    }

    match store.clear().await {
        Ok(()) => HttpResponse::Ok().json(ClearLeadsResponse {
            success: true,
            cleared: true,
        }),
        Err(e) => {
            log::error!("Error vaciando el spreadsheet: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to clear inbuilt spreadsheet"
            }))
        }
    }
}
