use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use domain_helpdesk::{model::entity::Department, repository::DepartmentRepo};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::infrastructure::database::{model::department, store_error, OrmRepo};

#[async_trait::async_trait]
impl ReadOnlyRepository<Department> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Department>> {
        Ok(department::Entity::find_by_id(id)
            .one(self.db.get_connection())
            .await
            .map_err(store_error)?
            .map(Department::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Department>> {
        Ok(department::Entity::find()
            .order_by_asc(department::Column::Name)
            .all(self.db.get_connection())
            .await
            .map_err(store_error)?
            .into_iter()
            .map(Department::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl MutableRepository<Department> for OrmRepo {
    async fn insert(&self, entity: &Department) -> anyhow::Result<i32> {
        Ok(department::Entity::insert(department::ActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?
            .last_insert_id)
    }

    async fn update(&self, entity: &Department) -> anyhow::Result<bool> {
        let result = department::Entity::update_many()
            .set(department::ActiveModel::from(entity))
            .filter(department::Column::Id.eq(entity.id))
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = department::Entity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

impl DBRepository<Department> for OrmRepo {}

impl DepartmentRepo for OrmRepo {}
