use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{
    model::{
        entity::{Repair, RepairView},
        vo::RepairFilter,
    },
    repository::RepairRepo,
};
use sea_orm::{
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QueryResult,
};

use super::joined_text;
use crate::infrastructure::database::{
    model::{repair, user, workstation},
    store_error, OrmRepo,
};

const WORKSTATION_INVENTORY_NUMBER: &str = "workstation_inventory_number";
const TECHNICIAN_NAME: &str = "technician_name";

fn view_query() -> SelectStatement {
    Query::select()
        .expr(Expr::table_asterisk(repair::Entity))
        .expr_as(
            Expr::col((workstation::Entity, workstation::Column::InventoryNumber)),
            Alias::new(WORKSTATION_INVENTORY_NUMBER),
        )
        .expr_as(
            Expr::col((user::Entity, user::Column::FullName)),
            Alias::new(TECHNICIAN_NAME),
        )
        .from(repair::Entity)
        .left_join(
            workstation::Entity,
            Expr::col((workstation::Entity, workstation::Column::Id))
                .equals((repair::Entity, repair::Column::WorkstationId)),
        )
        .left_join(
            user::Entity,
            Expr::col((user::Entity, user::Column::Id))
                .equals((repair::Entity, repair::Column::TechnicianId)),
        )
        .to_owned()
}

fn parse_view(row: &QueryResult) -> anyhow::Result<RepairView> {
    Ok(RepairView {
        repair: repair::Model::from_query_result(row, "")?.try_into()?,
        workstation_inventory_number: joined_text(row, WORKSTATION_INVENTORY_NUMBER)?,
        technician_name: joined_text(row, TECHNICIAN_NAME)?,
    })
}

impl OrmRepo {
    async fn query_repair_views(&self, query: &SelectStatement) -> anyhow::Result<Vec<RepairView>> {
        let rows = self.db.query_all(self.db.backend().build(query)).await?;
        rows.iter().map(parse_view).collect()
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Repair> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Repair>> {
        repair::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Repair::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Repair>> {
        repair::Entity::find()
            .order_by_desc(repair::Column::RepairDate)
            .order_by_desc(repair::Column::Id)
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Repair::try_from)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Repair> for OrmRepo {
    async fn insert(&self, entity: &Repair) -> anyhow::Result<i32> {
        Ok(repair::Entity::insert(repair::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &Repair) -> anyhow::Result<bool> {
        let result = repair::Entity::update_many()
            .set(repair::ActiveModel::from(entity))
            .filter(repair::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = repair::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<Repair> for OrmRepo {}

#[async_trait::async_trait]
impl RepairRepo for OrmRepo {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<RepairView>> {
        let query = view_query()
            .and_where(Expr::col((repair::Entity, repair::Column::Id)).eq(id))
            .to_owned();
        self.db
            .query_one(self.db.backend().build(&query))
            .await?
            .as_ref()
            .map(parse_view)
            .transpose()
    }

    async fn list_views(&self, filter: &RepairFilter) -> anyhow::Result<Vec<RepairView>> {
        let mut query = view_query();
        if let Some(status) = filter.status {
            query.and_where(Expr::col((repair::Entity, repair::Column::Status)).eq(status.as_str()));
        }
        if let Some(workstation_id) = filter.workstation_id {
            query.and_where(
                Expr::col((repair::Entity, repair::Column::WorkstationId)).eq(workstation_id),
            );
        }
        query
            .order_by((repair::Entity, repair::Column::RepairDate), Order::Desc)
            .order_by((repair::Entity, repair::Column::Id), Order::Desc);
        self.query_repair_views(&query).await
    }
}
