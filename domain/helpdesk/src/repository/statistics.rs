use async_trait::async_trait;

use crate::model::vo::DashboardStats;

/// Aggregates for the dashboard.
#[async_trait]
pub trait StatisticsRepo: Send + Sync {
    async fn collect(&self) -> anyhow::Result<DashboardStats>;
}
