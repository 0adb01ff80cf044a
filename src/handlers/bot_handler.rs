//! handlers/bot_handler.rs
//! Proxy hacia el backend externo del bot (status, start/stop, task-runs).

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::bot_model::{filter_supported_channels, StartSearchRequest};
use crate::services::bot_client_service::BotClientService;

fn upstream_error(context: &str, e: anyhow::Error) -> HttpResponse {
    log::error!("{}: {:?}", context, e);
    HttpResponse::InternalServerError().json(json!({
        "error": "Bot backend unavailable"
    }))
}

/// GET /api/bot/status
pub async fn bot_status_endpoint(bot: web::Data<BotClientService>) -> HttpResponse {
    match bot.bot_status().await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error consultando status del bot", e),
    }
}

/// GET /api/bot/health
pub async fn bot_health_endpoint(bot: web::Data<BotClientService>) -> HttpResponse {
    match bot.bot_health().await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error consultando health del bot", e),
    }
}

/// POST /api/bot/start
pub async fn start_bot_endpoint(bot: web::Data<BotClientService>) -> HttpResponse {
    match bot.start_bot().await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error iniciando el bot", e),
    }
}

/// POST /api/bot/stop
pub async fn stop_bot_endpoint(bot: web::Data<BotClientService>) -> HttpResponse {
    match bot.stop_bot().await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error deteniendo el bot", e),
    }
}

/// GET /api/bot/task-runs
pub async fn list_task_runs_endpoint(bot: web::Data<BotClientService>) -> HttpResponse {
    match bot.list_task_runs().await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error listando task-runs", e),
    }
}

/// POST /api/bot/task-runs
/// Lanza una búsqueda en tiempo real. Solo los canales soportados por el
/// backend viajan upstream; si no queda ninguno, el backend aplica su default.
pub async fn start_task_run_endpoint(
    bot: web::Data<BotClientService>,
    body: web::Json<StartSearchRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.niche.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing 'niche'"
        }));
    }

    let channels = filter_supported_channels(&req.channels);
    let upstream_body = json!({
        "niche": req.niche,
        "count": req.count,
        "location": req.location,
        "preferences": req.preferences,
        "channels": channels,
    });

    match bot.start_realtime_search(&upstream_body).await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error lanzando búsqueda en tiempo real", e),
    }
}

/// GET /api/bot/task-runs/{run_id}
pub async fn task_run_status_endpoint(
    bot: web::Data<BotClientService>,
    path: web::Path<String>,
) -> HttpResponse {
    let run_id = path.into_inner();
    match bot.realtime_search_status(&run_id).await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => upstream_error("Error consultando task-run", e),
    }
}
