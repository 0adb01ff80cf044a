use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use crate::config::store_config::StoreGlobalConfig;
use crate::logger::init_logger;
use crate::services::bot_client_service::BotClientService;
use crate::services::lead_store_service::{FileLeadRepository, LeadStoreService};
use crate::services::sheet_service::SheetService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = StoreGlobalConfig::from_env();

    // Carpeta "data" para los documentos JSON
    if let Some(dir) = config.leads_file.parent() {
        std::fs::create_dir_all(dir).expect("No se pudo crear directorio de datos");
    }

    log::info!(
        "Spreadsheet inbuilt en {:?}; backend del bot en {}",
        config.leads_file,
        config.bot_api_base
    );

    let lead_store = LeadStoreService::new(Arc::new(FileLeadRepository::new(
        config.leads_file.clone(),
    )));
    let sheet_service = SheetService::new(config.sheet_file.clone());
    let bot_client = BotClientService::new(config.bot_api_base.clone());

    // Levantar servidor
    log::info!(
        "Levantando servidor en {}:{}",
        config.bind_addr,
        config.bind_port
    );
    let bind = (config.bind_addr.clone(), config.bind_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(lead_store.clone()))
            .app_data(web::Data::new(sheet_service.clone()))
            .app_data(web::Data::new(bot_client.clone()))
            .configure(app::init_app)
    })
    // Un solo worker: el store es un documento compartido y las mutaciones
    // ya van serializadas; no hay nada que ganar con más workers en demo.
    .workers(1)
    .bind(bind)?
    .run()
    .await
}
