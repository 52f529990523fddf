//! Persistence gateway over sea-orm. Every statement is built with sea-query
//! or bound through `Statement::from_sql_and_values`; nothing is interpolated.
pub mod model;
mod orm;
pub mod schema;

pub use orm::OrmRepo;

use anyhow::Context;
use domain_helpdesk::exception::HelpdeskException;
use futures::future::BoxFuture;
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    QueryResult, SqlErr, Statement, TransactionTrait,
};

use super::DatabaseConfig;

/// Rows touched by a write, and the generated key where the backend reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub affected: u64,
    /// Always `None` on PostgreSQL, which only returns keys via `RETURNING`.
    pub last_insert_id: Option<u64>,
}

pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options.max_connections(config.max_connections).sqlx_logging(false);
        if config.url.contains(":memory:") {
            // Every pooled connection would otherwise open its own empty database.
            options.max_connections(1).min_connections(1);
        }
        let connection = sea_orm::Database::connect(options)
            .await
            .with_context(|| format!("Could not connect to database {}", config.url))?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn backend(&self) -> DbBackend {
        self.connection.get_database_backend()
    }

    pub async fn query_all(&self, statement: Statement) -> anyhow::Result<Vec<QueryResult>> {
        self.connection.query_all(statement).await.map_err(store_error)
    }

    pub async fn query_one(&self, statement: Statement) -> anyhow::Result<Option<QueryResult>> {
        self.connection.query_one(statement).await.map_err(store_error)
    }

    pub async fn execute(&self, statement: Statement) -> anyhow::Result<ExecOutcome> {
        let backend = self.backend();
        let result = self.connection.execute(statement).await.map_err(store_error)?;
        Ok(ExecOutcome {
            affected: result.rows_affected(),
            last_insert_id: match backend {
                DbBackend::Postgres => None,
                _ => Some(result.last_insert_id()),
            },
        })
    }

    /// Runs `work` in one transaction: committed when it returns `Ok`, rolled
    /// back on `Err`. Statements inside must go through the given transaction.
    pub async fn with_transaction<T, F>(&self, work: F) -> anyhow::Result<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, anyhow::Result<T>> + Send,
    {
        let txn = self.connection.begin().await.map_err(store_error)?;
        match work(&txn).await {
            Ok(value) => {
                txn.commit().await.map_err(store_error)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    tracing::error!("Rollback failed: {rollback}");
                }
                Err(e)
            }
        }
    }
}

/// Maps constraint violations onto the domain taxonomy so the raw store text
/// never reaches a caller.
pub fn store_error(e: DbErr) -> anyhow::Error {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {detail}");
            HelpdeskException::conflict("A record with the same unique value already exists")
                .into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key constraint violated: {detail}");
            HelpdeskException::InvalidField {
                field: "reference",
                reason: "refers to a record that does not exist".to_string(),
            }
            .into()
        }
        _ => anyhow::Error::new(e),
    }
}
