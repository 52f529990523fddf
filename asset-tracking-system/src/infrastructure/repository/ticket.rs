use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{
    model::{
        entity::{Ticket, TicketView},
        vo::TicketFilter,
    },
    repository::TicketRepo,
};
use sea_orm::{
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QueryResult,
};

use super::joined_text;
use crate::infrastructure::database::{
    model::{ticket, user, workstation},
    store_error, OrmRepo,
};

const REPORTER: &str = "reporter";
const ASSIGNEE: &str = "assignee";
const REPORTER_NAME: &str = "reporter_name";
const ASSIGNEE_NAME: &str = "assignee_name";
const WORKSTATION_INVENTORY_NUMBER: &str = "workstation_inventory_number";

fn view_query() -> SelectStatement {
    Query::select()
        .expr(Expr::table_asterisk(ticket::Entity))
        .expr_as(
            Expr::col((Alias::new(REPORTER), user::Column::FullName)),
            Alias::new(REPORTER_NAME),
        )
        .expr_as(
            Expr::col((Alias::new(ASSIGNEE), user::Column::FullName)),
            Alias::new(ASSIGNEE_NAME),
        )
        .expr_as(
            Expr::col((workstation::Entity, workstation::Column::InventoryNumber)),
            Alias::new(WORKSTATION_INVENTORY_NUMBER),
        )
        .from(ticket::Entity)
        .join_as(
            JoinType::LeftJoin,
            user::Entity,
            Alias::new(REPORTER),
            Expr::col((Alias::new(REPORTER), user::Column::Id))
                .equals((ticket::Entity, ticket::Column::UserId)),
        )
        .join_as(
            JoinType::LeftJoin,
            user::Entity,
            Alias::new(ASSIGNEE),
            Expr::col((Alias::new(ASSIGNEE), user::Column::Id))
                .equals((ticket::Entity, ticket::Column::AssignedTo)),
        )
        .left_join(
            workstation::Entity,
            Expr::col((workstation::Entity, workstation::Column::Id))
                .equals((ticket::Entity, ticket::Column::WorkstationId)),
        )
        .to_owned()
}

fn parse_view(row: &QueryResult) -> anyhow::Result<TicketView> {
    Ok(TicketView {
        ticket: ticket::Model::from_query_result(row, "")?.try_into()?,
        reporter_name: joined_text(row, REPORTER_NAME)?,
        assignee_name: joined_text(row, ASSIGNEE_NAME)?,
        workstation_inventory_number: joined_text(row, WORKSTATION_INVENTORY_NUMBER)?,
    })
}

impl OrmRepo {
    async fn query_ticket_views(&self, query: &SelectStatement) -> anyhow::Result<Vec<TicketView>> {
        let rows = self.db.query_all(self.db.backend().build(query)).await?;
        rows.iter().map(parse_view).collect()
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Ticket> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Ticket>> {
        ticket::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Ticket::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Ticket>> {
        ticket::Entity::find()
            .order_by_desc(ticket::Column::CreatedAt)
            .order_by_desc(ticket::Column::Id)
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Ticket::try_from)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Ticket> for OrmRepo {
    async fn insert(&self, entity: &Ticket) -> anyhow::Result<i32> {
        Ok(ticket::Entity::insert(ticket::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &Ticket) -> anyhow::Result<bool> {
        let result = ticket::Entity::update_many()
            .set(ticket::ActiveModel::from(entity))
            .filter(ticket::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = ticket::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<Ticket> for OrmRepo {}

#[async_trait::async_trait]
impl TicketRepo for OrmRepo {
    async fn get_view(&self, id: i32) -> anyhow::Result<Option<TicketView>> {
        let query = view_query()
            .and_where(Expr::col((ticket::Entity, ticket::Column::Id)).eq(id))
            .to_owned();
        self.db
            .query_one(self.db.backend().build(&query))
            .await?
            .as_ref()
            .map(parse_view)
            .transpose()
    }

    async fn list_views(&self, filter: &TicketFilter) -> anyhow::Result<Vec<TicketView>> {
        let mut query = view_query();
        if let Some(status) = filter.status {
            query.and_where(Expr::col((ticket::Entity, ticket::Column::Status)).eq(status.as_str()));
        }
        if let Some(workstation_id) = filter.workstation_id {
            query.and_where(
                Expr::col((ticket::Entity, ticket::Column::WorkstationId)).eq(workstation_id),
            );
        }
        if let Some(assigned_to) = filter.assigned_to {
            query.and_where(Expr::col((ticket::Entity, ticket::Column::AssignedTo)).eq(assigned_to));
        }
        query
            .order_by((ticket::Entity, ticket::Column::CreatedAt), Order::Desc)
            .order_by((ticket::Entity, ticket::Column::Id), Order::Desc);
        self.query_ticket_views(&query).await
    }
}
