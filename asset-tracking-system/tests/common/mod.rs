#![allow(dead_code)]

use std::sync::Arc;

use asset_tracking_system::infrastructure::{AppConfig, DatabaseConfig, ServiceProvider};
use serde::de::DeserializeOwned;

/// A fully wired provider on a fresh in-memory database, with the
/// administrator (id 1, password `admin123`) and the `IT` department seeded.
pub async fn provider() -> Arc<ServiceProvider> {
    provider_with(AppConfig::default()).await
}

pub async fn provider_with(mut config: AppConfig) -> Arc<ServiceProvider> {
    config.db = DatabaseConfig::in_memory();
    Arc::new(ServiceProvider::build(config).await.unwrap())
}

pub fn payload<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
