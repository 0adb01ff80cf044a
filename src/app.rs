//! app.rs
use crate::handlers::{bot_handler, lead_handler, sheet_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/inbuilt")
                    .route("", web::get().to(lead_handler::list_leads_endpoint))
                    .route("", web::post().to(lead_handler::create_leads_endpoint))
                    .route("", web::patch().to(lead_handler::update_task_endpoint))
                    .route("", web::delete().to(lead_handler::clear_leads_endpoint)),
            )
            .service(
                web::scope("/sheets").route("", web::get().to(sheet_handler::get_sheet_endpoint)),
            )
            .service(
                web::scope("/bot")
                    .route("/status", web::get().to(bot_handler::bot_status_endpoint))
                    .route("/health", web::get().to(bot_handler::bot_health_endpoint))
                    .route("/start", web::post().to(bot_handler::start_bot_endpoint))
                    .route("/stop", web::post().to(bot_handler::stop_bot_endpoint))
                    .route(
                        "/task-runs",
                        web::get().to(bot_handler::list_task_runs_endpoint),
                    )
                    .route(
                        "/task-runs",
                        web::post().to(bot_handler::start_task_run_endpoint),
                    )
                    .route(
                        "/task-runs/{run_id}",
                        web::get().to(bot_handler::task_run_status_endpoint),
                    ),
            ),
    );
}
