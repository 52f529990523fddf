use domain_helpdesk::{
    model::vo::{DashboardStats, DepartmentCount, NameCount, TicketStatus},
    repository::StatisticsRepo,
};
use sea_orm::{
    sea_query::{Alias, Expr, Order, Query},
    ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::infrastructure::database::{
    model::{department, repair, software, ticket, workstation},
    store_error, OrmRepo,
};

const COUNT: &str = "count";

async fn workstations_by_department(
    txn: &DatabaseTransaction,
) -> anyhow::Result<Vec<DepartmentCount>> {
    let query = Query::select()
        .expr_as(
            Expr::col((department::Entity, department::Column::Name)),
            Alias::new("department"),
        )
        .expr_as(
            Expr::col((workstation::Entity, workstation::Column::Id)).count(),
            Alias::new(COUNT),
        )
        .from(workstation::Entity)
        .left_join(
            department::Entity,
            Expr::col((department::Entity, department::Column::Id))
                .equals((workstation::Entity, workstation::Column::DepartmentId)),
        )
        .group_by_col((department::Entity, department::Column::Id))
        .group_by_col((department::Entity, department::Column::Name))
        .order_by(Alias::new(COUNT), Order::Desc)
        .order_by((department::Entity, department::Column::Name), Order::Asc)
        .to_owned();
    let rows = txn
        .query_all(txn.get_database_backend().build(&query))
        .await
        .map_err(store_error)?;
    rows.iter()
        .map(|row| -> anyhow::Result<_> {
            Ok(DepartmentCount {
                department: row.try_get("", "department")?,
                count: row.try_get("", COUNT)?,
            })
        })
        .collect()
}

async fn software_by_name(txn: &DatabaseTransaction) -> anyhow::Result<Vec<NameCount>> {
    let query = Query::select()
        .column(software::Column::Name)
        .expr_as(Expr::col(software::Column::Id).count(), Alias::new(COUNT))
        .from(software::Entity)
        .group_by_col(software::Column::Name)
        .order_by(Alias::new(COUNT), Order::Desc)
        .order_by(software::Column::Name, Order::Asc)
        .to_owned();
    let rows = txn
        .query_all(txn.get_database_backend().build(&query))
        .await
        .map_err(store_error)?;
    rows.iter()
        .map(|row| -> anyhow::Result<_> {
            Ok(NameCount {
                name: row.try_get("", "name")?,
                count: row.try_get("", COUNT)?,
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl StatisticsRepo for OrmRepo {
    async fn collect(&self) -> anyhow::Result<DashboardStats> {
        let closed: Vec<&'static str> = TicketStatus::ALL
            .iter()
            .filter(|status| !status.is_open())
            .map(TicketStatus::as_str)
            .collect();
        // One snapshot, so totals agree with the breakdowns.
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    Ok(DashboardStats {
                        total_workstations: workstation::Entity::find()
                            .count(txn)
                            .await
                            .map_err(store_error)?
                            .try_into()?,
                        total_software: software::Entity::find()
                            .count(txn)
                            .await
                            .map_err(store_error)?
                            .try_into()?,
                        total_tickets: ticket::Entity::find()
                            .count(txn)
                            .await
                            .map_err(store_error)?
                            .try_into()?,
                        open_tickets: ticket::Entity::find()
                            .filter(ticket::Column::Status.is_not_in(closed))
                            .count(txn)
                            .await
                            .map_err(store_error)?
                            .try_into()?,
                        total_repairs: repair::Entity::find()
                            .count(txn)
                            .await
                            .map_err(store_error)?
                            .try_into()?,
                        workstations_by_department: workstations_by_department(txn).await?,
                        software_by_name: software_by_name(txn).await?,
                    })
                })
            })
            .await
    }
}
