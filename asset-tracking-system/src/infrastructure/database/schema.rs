use domain_helpdesk::{
    model::{
        entity::{Department, User, BOOTSTRAP_ADMIN_ID},
        vo::Role,
    },
    service::CredentialHasher,
};
use sea_orm::{
    sea_query::TableCreateStatement, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    Schema,
};

use super::{model::*, store_error, Database};
use crate::infrastructure::BootstrapConfig;

fn create_stmt<E: EntityTrait>(db: &Database, e: E) -> TableCreateStatement {
    let schema = Schema::new(db.backend());
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

/// Creates missing tables, then seeds the administrator and its department
/// when no user exists yet.
pub async fn bootstrap(
    db: &Database,
    config: &BootstrapConfig,
    hasher: &dyn CredentialHasher,
) -> anyhow::Result<()> {
    let stmts = vec![
        create_stmt(db, department::Entity),
        create_stmt(db, user::Entity),
        create_stmt(db, workstation::Entity),
        create_stmt(db, software::Entity),
        create_stmt(db, ticket::Entity),
        create_stmt(db, repair::Entity),
    ];
    let backend = db.backend();
    for stmt in stmts.iter() {
        db.execute(backend.build(stmt)).await?;
    }
    seed(db, config, hasher).await
}

async fn seed(
    db: &Database,
    config: &BootstrapConfig,
    hasher: &dyn CredentialHasher,
) -> anyhow::Result<()> {
    let conn = db.get_connection();
    if user::Entity::find().count(conn).await.map_err(store_error)? > 0 {
        return Ok(());
    }

    let department_id = match department::Entity::find()
        .filter(department::Column::Name.eq(config.department.as_str()))
        .one(conn)
        .await
        .map_err(store_error)?
    {
        Some(department) => department.id,
        None => {
            let department = Department {
                id: 0,
                name: config.department.clone(),
                description: None,
            };
            department::Entity::insert(department::ActiveModel::from(&department))
                .exec(conn)
                .await
                .map_err(store_error)?
                .last_insert_id
        }
    };

    let admin = User {
        id: 0,
        username: config.admin_username.clone(),
        full_name: config.admin_full_name.clone(),
        password_hash: hasher.hash_password(&config.admin_password)?,
        email: None,
        role: Role::Admin,
        department_id: Some(department_id),
    };
    let id = user::Entity::insert(user::ActiveModel::from(&admin))
        .exec(conn)
        .await
        .map_err(store_error)?
        .last_insert_id;
    if id != BOOTSTRAP_ADMIN_ID {
        tracing::warn!(
            "Bootstrap administrator was stored with id {id}, only id {BOOTSTRAP_ADMIN_ID} is protected from deletion"
        );
    }
    tracing::info!("Created administrator account `{}`", admin.username);
    Ok(())
}
