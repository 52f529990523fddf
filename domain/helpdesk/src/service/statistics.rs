use async_trait::async_trait;

use crate::{exception::HelpdeskResult, model::vo::DashboardStats};

#[async_trait]
pub trait StatisticsService: Send + Sync {
    async fn dashboard(&self) -> HelpdeskResult<DashboardStats>;
}
