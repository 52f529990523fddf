use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::{Department, SoftwareView, User, Workstation, WorkstationView},
        vo::{SoftwareFilter, WorkstationFilter, WorkstationPayload, WorkstationStatusCount},
    },
    repository::{DepartmentRepo, SoftwareRepo, UserRepo, WorkstationRepo},
    service::WorkstationService,
};
use typed_builder::TypedBuilder;

use crate::reference::{deletion_result, ensure_reference};

#[derive(TypedBuilder)]
pub struct WorkstationServiceImpl {
    workstation_repo: Arc<dyn WorkstationRepo>,
    software_repo: Arc<dyn SoftwareRepo>,
    department_repo: Arc<dyn DepartmentRepo>,
    user_repo: Arc<dyn UserRepo>,
}

#[async_trait]
impl WorkstationService for WorkstationServiceImpl {
    async fn list(&self, filter: WorkstationFilter) -> HelpdeskResult<Vec<WorkstationView>> {
        Ok(self.workstation_repo.list_views(&filter).await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<WorkstationView> {
        self.workstation_repo
            .get_view(id)
            .await?
            .ok_or(HelpdeskException::not_found("Workstation", id))
    }

    async fn create(&self, payload: WorkstationPayload) -> HelpdeskResult<WorkstationView> {
        let workstation = payload.into_new()?;
        self.ensure_inventory_number_free(&workstation.inventory_number, None).await?;
        self.ensure_references(&workstation).await?;
        let id = self.workstation_repo.insert(&workstation).await?;
        tracing::info!("Created workstation {id} ({})", workstation.inventory_number);
        self.get(id).await
    }

    async fn update(
        &self,
        id: i32,
        payload: WorkstationPayload,
    ) -> HelpdeskResult<WorkstationView> {
        let current = self.current(id).await?;
        let previous_inventory_number = current.inventory_number.clone();
        let workstation = payload.merge_into(current)?;
        if workstation.inventory_number != previous_inventory_number {
            self.ensure_inventory_number_free(&workstation.inventory_number, Some(id)).await?;
        }
        self.ensure_references(&workstation).await?;
        if !self.workstation_repo.update(&workstation).await? {
            return Err(HelpdeskException::not_found("Workstation", id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> HelpdeskResult<()> {
        let deletion = self.workstation_repo.delete_unreferenced(id).await?;
        deletion_result(deletion, "Workstation", id)?;
        tracing::info!("Deleted workstation {id}");
        Ok(())
    }

    async fn list_software(&self, id: i32) -> HelpdeskResult<Vec<SoftwareView>> {
        self.current(id).await?;
        let filter = SoftwareFilter {
            workstation_id: Some(id),
            ..Default::default()
        };
        Ok(self.software_repo.list_views(&filter).await?)
    }

    async fn status_counts(&self) -> HelpdeskResult<Vec<WorkstationStatusCount>> {
        Ok(self.workstation_repo.count_by_status().await?)
    }
}

impl WorkstationServiceImpl {
    async fn current(&self, id: i32) -> HelpdeskResult<Workstation> {
        self.workstation_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("Workstation", id))
    }

    async fn ensure_inventory_number_free(
        &self,
        inventory_number: &str,
        owner: Option<i32>,
    ) -> HelpdeskResult<()> {
        match self.workstation_repo.get_by_inventory_number(inventory_number).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(HelpdeskException::conflict("Inventory number already exists"))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_references(&self, workstation: &Workstation) -> HelpdeskResult<()> {
        ensure_reference::<Department, _>(
            self.department_repo.as_ref(),
            "department_id",
            "Department",
            workstation.department_id,
        )
        .await?;
        ensure_reference::<User, _>(
            self.user_repo.as_ref(),
            "responsible_id",
            "User",
            workstation.responsible_id,
        )
        .await
    }
}
