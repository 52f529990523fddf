use std::sync::Arc;

use async_trait::async_trait;
use domain_helpdesk::{
    exception::HelpdeskResult, model::vo::DashboardStats, repository::StatisticsRepo,
    service::StatisticsService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct StatisticsServiceImpl {
    statistics_repo: Arc<dyn StatisticsRepo>,
}

#[async_trait]
impl StatisticsService for StatisticsServiceImpl {
    async fn dashboard(&self) -> HelpdeskResult<DashboardStats> {
        Ok(self.statistics_repo.collect().await?)
    }
}
