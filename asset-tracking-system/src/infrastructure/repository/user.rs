use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{
    model::{
        entity::{User, UserView},
        vo::{Deletion, UserReferences},
    },
    repository::UserRepo,
};
use sea_orm::{
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
    ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryResult,
    QuerySelect,
};

use super::joined_text;
use crate::infrastructure::database::{
    model::{department, repair, ticket, user, workstation},
    store_error, OrmRepo,
};

const DEPARTMENT_NAME: &str = "department_name";

fn view_query() -> SelectStatement {
    Query::select()
        .expr(Expr::table_asterisk(user::Entity))
        .expr_as(
            Expr::col((department::Entity, department::Column::Name)),
            Alias::new(DEPARTMENT_NAME),
        )
        .from(user::Entity)
        .left_join(
            department::Entity,
            Expr::col((department::Entity, department::Column::Id))
                .equals((user::Entity, user::Column::DepartmentId)),
        )
        .to_owned()
}

fn parse_view(row: &QueryResult) -> anyhow::Result<UserView> {
    let user = User::try_from(user::Model::from_query_result(row, "")?)?;
    Ok(UserView::new(user, joined_text(row, DEPARTMENT_NAME)?))
}

impl OrmRepo {
    async fn query_user_views(&self, query: &SelectStatement) -> anyhow::Result<Vec<UserView>> {
        let rows = self.db.query_all(self.db.backend().build(query)).await?;
        rows.iter().map(parse_view).collect()
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<User> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        user::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        user::Entity::find()
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(User::try_from)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<User> for OrmRepo {
    async fn insert(&self, entity: &User) -> anyhow::Result<i32> {
        Ok(user::Entity::insert(user::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &User) -> anyhow::Result<bool> {
        let result = user::Entity::update_many()
            .set(user::ActiveModel::from(entity))
            .filter(user::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = user::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<User> for OrmRepo {}

#[async_trait::async_trait]
impl UserRepo for OrmRepo {
    async fn get_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn get_view(&self, id: i32) -> anyhow::Result<Option<UserView>> {
        let query = view_query()
            .and_where(Expr::col((user::Entity, user::Column::Id)).eq(id))
            .to_owned();
        self.db
            .query_one(self.db.backend().build(&query))
            .await?
            .as_ref()
            .map(parse_view)
            .transpose()
    }

    async fn list_views(&self) -> anyhow::Result<Vec<UserView>> {
        let query = view_query()
            .order_by((user::Entity, user::Column::Username), Order::Asc)
            .to_owned();
        self.query_user_views(&query).await
    }

    async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion> {
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let exists = user::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .map_err(store_error)?;
                    if exists.is_none() {
                        return Ok(Deletion::NotFound);
                    }
                    let references = UserReferences {
                        responsible_workstations: workstation::Entity::find()
                            .filter(workstation::Column::ResponsibleId.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                        reported_tickets: ticket::Entity::find()
                            .filter(ticket::Column::UserId.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                        assigned_tickets: ticket::Entity::find()
                            .filter(ticket::Column::AssignedTo.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                        repairs: repair::Entity::find()
                            .filter(repair::Column::TechnicianId.eq(id))
                            .count(txn)
                            .await
                            .map_err(store_error)?,
                    };
                    let blocking = references.blocking();
                    if !blocking.is_empty() {
                        return Ok(Deletion::Blocked(blocking));
                    }
                    user::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(store_error)?;
                    Ok(Deletion::Deleted)
                })
            })
            .await
    }
}
