use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{
    model::{
        entity::{Workstation, WorkstationView},
        vo::{Deletion, WorkstationFilter, WorkstationReferences, WorkstationStatusCount},
    },
    repository::WorkstationRepo,
};
use sea_orm::{
    sea_query::{Alias, Condition, Expr, Order, Query, SelectStatement},
    ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QueryResult,
    QuerySelect,
};

use super::{contains_ci, joined_text, search_term};
use crate::infrastructure::database::{
    model::{department, repair, software, ticket, user, workstation},
    store_error, OrmRepo,
};

const DEPARTMENT_NAME: &str = "department_name";
const RESPONSIBLE_NAME: &str = "responsible_name";
const RESPONSIBLE: &str = "responsible";

fn view_query() -> SelectStatement {
    Query::select()
        .expr(Expr::table_asterisk(workstation::Entity))
        .expr_as(
            Expr::col((department::Entity, department::Column::Name)),
            Alias::new(DEPARTMENT_NAME),
        )
        .expr_as(
            Expr::col((Alias::new(RESPONSIBLE), user::Column::FullName)),
            Alias::new(RESPONSIBLE_NAME),
        )
        .from(workstation::Entity)
        .left_join(
            department::Entity,
            Expr::col((department::Entity, department::Column::Id))
                .equals((workstation::Entity, workstation::Column::DepartmentId)),
        )
        .join_as(
            sea_orm::JoinType::LeftJoin,
            user::Entity,
            Alias::new(RESPONSIBLE),
            Expr::col((Alias::new(RESPONSIBLE), user::Column::Id))
                .equals((workstation::Entity, workstation::Column::ResponsibleId)),
        )
        .to_owned()
}

fn parse_view(row: &QueryResult) -> anyhow::Result<WorkstationView> {
    Ok(WorkstationView {
        workstation: workstation::Model::from_query_result(row, "")?.into(),
        department_name: joined_text(row, DEPARTMENT_NAME)?,
        responsible_name: joined_text(row, RESPONSIBLE_NAME)?,
    })
}

impl OrmRepo {
    async fn query_workstation_views(
        &self,
        query: &SelectStatement,
    ) -> anyhow::Result<Vec<WorkstationView>> {
        let rows = self.db.query_all(self.db.backend().build(query)).await?;
        rows.iter().map(parse_view).collect()
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Workstation> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Workstation>> {
        Ok(workstation::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Workstation::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Workstation>> {
        Ok(workstation::Entity::find()
            .order_by_asc(workstation::Column::InventoryNumber)
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Workstation::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl MutableRepository<Workstation> for OrmRepo {
    async fn insert(&self, entity: &Workstation) -> anyhow::Result<i32> {
        Ok(workstation::Entity::insert(workstation::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &Workstation) -> anyhow::Result<bool> {
        let result = workstation::Entity::update_many()
            .set(workstation::ActiveModel::from(entity))
            .filter(workstation::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    /// Plain delete without the reference check. Fails on the foreign keys
    /// when tickets or repairs still point at the workstation.
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = workstation::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<Workstation> for OrmRepo {}

#[async_trait::async_trait]
impl WorkstationRepo for OrmRepo {
    async fn get_by_inventory_number(
        &self,
        inventory_number: &str,
    ) -> anyhow::Result<Option<Workstation>> {
        Ok(workstation::Entity::find()
            .filter(workstation::Column::InventoryNumber.eq(inventory_number))
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Workstation::from))
    }

    async fn get_view(&self, id: i32) -> anyhow::Result<Option<WorkstationView>> {
        let query = view_query()
            .and_where(Expr::col((workstation::Entity, workstation::Column::Id)).eq(id))
            .to_owned();
        self.db
            .query_one(self.db.backend().build(&query))
            .await?
            .as_ref()
            .map(parse_view)
            .transpose()
    }

    async fn list_views(
        &self,
        filter: &WorkstationFilter,
    ) -> anyhow::Result<Vec<WorkstationView>> {
        let mut query = view_query();
        if let Some(term) = search_term(&filter.search) {
            query.cond_where(
                Condition::any()
                    .add(contains_ci(
                        (workstation::Entity, workstation::Column::InventoryNumber),
                        term,
                    ))
                    .add(contains_ci(
                        (workstation::Entity, workstation::Column::IpAddress),
                        term,
                    ))
                    .add(contains_ci(
                        (workstation::Entity, workstation::Column::MacAddress),
                        term,
                    ))
                    .add(contains_ci(
                        (workstation::Entity, workstation::Column::OsName),
                        term,
                    ))
                    .add(contains_ci(
                        (Alias::new(RESPONSIBLE), user::Column::FullName),
                        term,
                    )),
            );
        }
        query.order_by(
            (workstation::Entity, workstation::Column::InventoryNumber),
            Order::Asc,
        );
        self.query_workstation_views(&query).await
    }

    async fn count_by_status(&self) -> anyhow::Result<Vec<WorkstationStatusCount>> {
        let query = Query::select()
            .column(workstation::Column::Status)
            .expr_as(
                Expr::col(workstation::Column::Id).count(),
                Alias::new("count"),
            )
            .from(workstation::Entity)
            .group_by_col(workstation::Column::Status)
            .order_by(workstation::Column::Status, Order::Asc)
            .to_owned();
        let rows = self.db.query_all(self.db.backend().build(&query)).await?;
        rows.iter()
            .map(|row| -> anyhow::Result<_> {
                Ok(WorkstationStatusCount {
                    status: row.try_get("", "status")?,
                    count: row.try_get("", "count")?,
                })
            })
            .collect()
    }

    async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion> {
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let exists = workstation::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .map_err(store_error)?;
                    if exists.is_none() {
                        return Ok(Deletion::NotFound);
                    }
                    let references = WorkstationReferences {
                        tickets: ticket::Entity::find()
                            .filter(ticket::Column::WorkstationId.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                        repairs: repair::Entity::find()
                            .filter(repair::Column::WorkstationId.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                    };
                    let blocking = references.blocking();
                    if !blocking.is_empty() {
                        return Ok(Deletion::Blocked(blocking));
                    }
                    let removed = software::Entity::delete_many()
                        .filter(software::Column::WorkstationId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(store_error)?;
                    tracing::debug!(
                        "Removed {} software record(s) of workstation {id}",
                        removed.rows_affected
                    );
                    workstation::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(store_error)?;
                    Ok(Deletion::Deleted)
                })
            })
            .await
    }
}
