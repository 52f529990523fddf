//! sea-orm implementations of the helpdesk repositories, all on [`OrmRepo`].
//!
//! [`OrmRepo`]: crate::infrastructure::database::OrmRepo
mod department;
mod repair;
mod software;
mod statistics;
mod ticket;
mod user;
mod workstation;

use sea_orm::{
    sea_query::{Expr, Func, IntoColumnRef, SimpleExpr},
    QueryResult,
};

/// Reads a display column pulled in by a left join. `NULL` when the
/// referenced row is absent.
fn joined_text(row: &QueryResult, alias: &str) -> anyhow::Result<Option<String>> {
    Ok(row.try_get::<Option<String>>("", alias)?)
}

/// Case-insensitive substring match.
fn contains_ci<C: IntoColumnRef>(column: C, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", term.to_lowercase()))
}

/// Blank search terms are ignored.
fn search_term(search: &Option<String>) -> Option<&str> {
    search.as_deref().map(str::trim).filter(|term| !term.is_empty())
}
