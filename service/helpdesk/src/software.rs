use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::{SoftwareView, Workstation},
        vo::{SoftwareFilter, SoftwarePayload},
    },
    repository::{SoftwareRepo, WorkstationRepo},
    service::SoftwareService,
};
use typed_builder::TypedBuilder;

use crate::reference::ensure_reference;

#[derive(TypedBuilder)]
pub struct SoftwareServiceImpl {
    software_repo: Arc<dyn SoftwareRepo>,
    workstation_repo: Arc<dyn WorkstationRepo>,
}

#[async_trait]
impl SoftwareService for SoftwareServiceImpl {
    async fn list(&self, filter: SoftwareFilter) -> HelpdeskResult<Vec<SoftwareView>> {
        Ok(self.software_repo.list_views(&filter).await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<SoftwareView> {
        self.software_repo
            .get_view(id)
            .await?
            .ok_or(HelpdeskException::not_found("Software", id))
    }

    async fn create(&self, payload: SoftwarePayload) -> HelpdeskResult<SoftwareView> {
        let software = payload.into_new()?;
        self.ensure_workstation(software.workstation_id).await?;
        let id = self.software_repo.insert(&software).await?;
        tracing::info!("Registered software {id} on workstation {}", software.workstation_id);
        self.get(id).await
    }

    async fn update(&self, id: i32, payload: SoftwarePayload) -> HelpdeskResult<SoftwareView> {
        let current = self
            .software_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("Software", id))?;
        let software = payload.merge_into(current)?;
        self.ensure_workstation(software.workstation_id).await?;
        if !self.software_repo.update(&software).await? {
            return Err(HelpdeskException::not_found("Software", id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> HelpdeskResult<()> {
        if !self.software_repo.delete_by_id(id).await? {
            return Err(HelpdeskException::not_found("Software", id));
        }
        Ok(())
    }
}

impl SoftwareServiceImpl {
    async fn ensure_workstation(&self, workstation_id: i32) -> HelpdeskResult<()> {
        ensure_reference::<Workstation, _>(
            self.workstation_repo.as_ref(),
            "workstation_id",
            "Workstation",
            Some(workstation_id),
        )
        .await
    }
}
