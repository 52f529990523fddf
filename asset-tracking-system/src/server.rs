use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{
    build_config, telemetry::initialize_telemetry, AppConfig, ServiceProvider,
};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("{}: {}", "Cannot start async runtime".red(), e),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config: AppConfig = match build_config().and_then(|c| Ok(c.try_deserialize()?)) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(&config.telemetry) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {:#}", "Cannot build Service Provider".red(), e);
        }
    };

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
        }
    }
}

/// Registers every route under `/api` together with the shared service
/// provider and the extractor error handlers.
pub fn configure_app(cfg: &mut web::ServiceConfig, sp: Arc<ServiceProvider>) {
    cfg.app_data(web::Data::from(sp))
        .app_data(web::JsonConfig::default().error_handler(api::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(api::query_error_handler))
        .service(
            web::scope("/api")
                .service(api::auth::login)
                .service(api::department::list)
                .service(api::department::get_one)
                .service(api::department::create)
                .service(api::department::update)
                .service(api::user::list)
                .service(api::user::get_one)
                .service(api::user::create)
                .service(api::user::update)
                .service(api::user::remove)
                .service(api::workstation::list)
                .service(api::workstation::get_one)
                .service(api::workstation::list_software)
                .service(api::workstation::status_counts)
                .service(api::workstation::create)
                .service(api::workstation::update)
                .service(api::workstation::remove)
                .service(api::software::list)
                .service(api::software::get_one)
                .service(api::software::create)
                .service(api::software::update)
                .service(api::software::remove)
                .service(api::ticket::list)
                .service(api::ticket::get_one)
                .service(api::ticket::create)
                .service(api::ticket::update)
                .service(api::ticket::remove)
                .service(api::repair::list)
                .service(api::repair::get_one)
                .service(api::repair::create)
                .service(api::repair::update)
                .service(api::repair::remove)
                .service(api::statistics::dashboard),
        );
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config.host.clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);
        let sp = sp.clone();

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .configure(move |cfg| configure_app(cfg, sp))
    })
    .bind((host.bind_address.to_owned(), host.bind_port));

    let server = match server {
        Ok(x) => x,
        Err(e) => {
            return error!(
                "Cannot bind {}:{}: {}",
                host.bind_address, host.bind_port, e
            );
        }
    };
    info!("Listening on {}:{}", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
