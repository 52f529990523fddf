use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{
    model::{
        entity::{Software, SoftwareView},
        vo::SoftwareFilter,
    },
    repository::SoftwareRepo,
};
use sea_orm::{
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryResult,
};

use super::{contains_ci, joined_text, search_term};
use crate::infrastructure::database::{
    model::{software, workstation},
    store_error, OrmRepo,
};

const WORKSTATION_INVENTORY_NUMBER: &str = "workstation_inventory_number";

fn view_query() -> SelectStatement {
    Query::select()
        .expr(Expr::table_asterisk(software::Entity))
        .expr_as(
            Expr::col((workstation::Entity, workstation::Column::InventoryNumber)),
            Alias::new(WORKSTATION_INVENTORY_NUMBER),
        )
        .from(software::Entity)
        .left_join(
            workstation::Entity,
            Expr::col((workstation::Entity, workstation::Column::Id))
                .equals((software::Entity, software::Column::WorkstationId)),
        )
        .to_owned()
}

fn parse_view(row: &QueryResult) -> anyhow::Result<SoftwareView> {
    Ok(SoftwareView {
        software: software::Model::from_query_result(row, "")?.into(),
        workstation_inventory_number: joined_text(row, WORKSTATION_INVENTORY_NUMBER)?,
    })
}

impl OrmRepo {
    async fn query_software_views(
        &self,
        query: &SelectStatement,
    ) -> anyhow::Result<Vec<SoftwareView>> {
        let rows = self.db.query_all(self.db.backend().build(query)).await?;
        rows.iter().map(parse_view).collect()
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Software> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Software>> {
        Ok(software::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Software::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Software>> {
        Ok(software::Entity::find()
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Software::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl MutableRepository<Software> for OrmRepo {
    async fn insert(&self, entity: &Software) -> anyhow::Result<i32> {
        Ok(software::Entity::insert(software::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &Software) -> anyhow::Result<bool> {
        let result = software::Entity::update_many()
            .set(software::ActiveModel::from(entity))
            .filter(software::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = software::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<Software> for OrmRepo {}

#[async_trait::async_trait]
impl SoftwareRepo for OrmRepo {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<SoftwareView>> {
        let query = view_query()
            .and_where(Expr::col((software::Entity, software::Column::Id)).eq(id))
            .to_owned();
        self.db
            .query_one(self.db.backend().build(&query))
            .await?
            .as_ref()
            .map(parse_view)
            .transpose()
    }

    async fn list_views(&self, filter: &SoftwareFilter) -> anyhow::Result<Vec<SoftwareView>> {
        let mut query = view_query();
        if let Some(workstation_id) = filter.workstation_id {
            query.and_where(
                Expr::col((software::Entity, software::Column::WorkstationId)).eq(workstation_id),
            );
        }
        if let Some(term) = search_term(&filter.search) {
            query.and_where(contains_ci((software::Entity, software::Column::Name), term));
        }
        query
            .order_by((software::Entity, software::Column::InstallDate), Order::Desc)
            .order_by((software::Entity, software::Column::Id), Order::Desc);
        self.query_software_views(&query).await
    }
}
