use std::sync::Arc;

use asset_architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::{
        entity::{Repair, RepairView, User, Workstation},
        vo::{now, RepairFilter, RepairPayload},
    },
    repository::{RepairRepo, UserRepo, WorkstationRepo},
    service::RepairService,
};
use typed_builder::TypedBuilder;

use crate::reference::ensure_reference;

#[derive(TypedBuilder)]
pub struct RepairServiceImpl {
    repair_repo: Arc<dyn RepairRepo>,
    workstation_repo: Arc<dyn WorkstationRepo>,
    user_repo: Arc<dyn UserRepo>,
    #[builder(default)]
    strict_status_transitions: bool,
}

#[async_trait]
impl RepairService for RepairServiceImpl {
    async fn list(&self, filter: RepairFilter) -> HelpdeskResult<Vec<RepairView>> {
        Ok(self.repair_repo.list_views(&filter).await?)
    }

    async fn get(&self, id: i32) -> HelpdeskResult<RepairView> {
        self.repair_repo
            .get_view(id)
            .await?
            .ok_or(HelpdeskException::not_found("Repair", id))
    }

    async fn create(&self, payload: RepairPayload) -> HelpdeskResult<RepairView> {
        let repair = payload.into_new(now())?;
        self.ensure_references(&repair).await?;
        let id = self.repair_repo.insert(&repair).await?;
        tracing::info!("Logged repair {id} on workstation {}", repair.workstation_id);
        self.get(id).await
    }

    async fn update(&self, id: i32, payload: RepairPayload) -> HelpdeskResult<RepairView> {
        let current = self
            .repair_repo
            .get_by_id(id)
            .await?
            .ok_or(HelpdeskException::not_found("Repair", id))?;
        if let Some(next) = payload.status {
            if self.strict_status_transitions && !current.status.can_transition_to(next) {
                return Err(HelpdeskException::IllegalTransition {
                    from: current.status.to_string(),
                    to: next.to_string(),
                });
            }
        }
        let repair = payload.merge_into(current, now())?;
        self.ensure_references(&repair).await?;
        if !self.repair_repo.update(&repair).await? {
            return Err(HelpdeskException::not_found("Repair", id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> HelpdeskResult<()> {
        if !self.repair_repo.delete_by_id(id).await? {
            return Err(HelpdeskException::not_found("Repair", id));
        }
        Ok(())
    }
}

impl RepairServiceImpl {
    async fn ensure_references(&self, repair: &Repair) -> HelpdeskResult<()> {
        ensure_reference::<Workstation, _>(
            self.workstation_repo.as_ref(),
            "workstation_id",
            "Workstation",
            Some(repair.workstation_id),
        )
        .await?;
        ensure_reference::<User, _>(
            self.user_repo.as_ref(),
            "technician_id",
            "User",
            repair.technician_id,
        )
        .await
    }
}
