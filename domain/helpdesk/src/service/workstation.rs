use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{
        entity::{SoftwareView, WorkstationView},
        vo::{WorkstationFilter, WorkstationPayload, WorkstationStatusCount},
    },
};

#[async_trait]
pub trait WorkstationService: Send + Sync {
    async fn list(&self, filter: WorkstationFilter) -> HelpdeskResult<Vec<WorkstationView>>;
    async fn get(&self, id: i32) -> HelpdeskResult<WorkstationView>;
    async fn create(&self, payload: WorkstationPayload) -> HelpdeskResult<WorkstationView>;
    async fn update(&self, id: i32, payload: WorkstationPayload)
        -> HelpdeskResult<WorkstationView>;
    /// Refused while tickets or repairs point at the workstation.
    async fn delete(&self, id: i32) -> HelpdeskResult<()>;
    /// Software installed on one workstation.
    async fn list_software(&self, id: i32) -> HelpdeskResult<Vec<SoftwareView>>;
    /// Number of workstations per status value.
    async fn status_counts(&self) -> HelpdeskResult<Vec<WorkstationStatusCount>>;
}
