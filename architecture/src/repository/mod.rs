//! Repository abstractions shared by every domain.
mod mutable_repository;
mod read_only_repository;

#[rustfmt::skip]
pub use {
    mutable_repository::MutableRepository,
    read_only_repository::ReadOnlyRepository,
};

use crate::model::AggregateRoot;

/// A repository backed by a database: readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + AggregateRoot,
{
}
