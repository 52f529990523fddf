mod config;
pub mod database;
mod repository;
mod service_provider;
pub mod telemetry;

#[rustfmt::skip]
pub use {
    config::{
        build_config, AppConfig, BootstrapConfig, DatabaseConfig, HelpdeskConfig, HostConfig,
    },
    service_provider::ServiceProvider,
};
