use asset_architecture::{model::AggregateRoot, repository::ReadOnlyRepository};
use domain_helpdesk::{
    exception::{HelpdeskException, HelpdeskResult},
    model::vo::{BlockingReference, Deletion},
};

/// Fails with `InvalidReference` when `id` is set but resolves to no row.
pub(crate) async fn ensure_reference<T, R>(
    repo: &R,
    field: &'static str,
    entity: &'static str,
    id: Option<i32>,
) -> HelpdeskResult<()>
where
    T: Send + Sync + AggregateRoot,
    R: ReadOnlyRepository<T> + ?Sized,
{
    let Some(id) = id else {
        return Ok(());
    };
    match repo.get_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(HelpdeskException::InvalidReference { field, entity, id }),
    }
}

pub(crate) fn deletion_result(
    deletion: Deletion,
    entity: &'static str,
    id: i32,
) -> HelpdeskResult<()> {
    match deletion {
        Deletion::Deleted => Ok(()),
        Deletion::NotFound => Err(HelpdeskException::not_found(entity, id)),
        Deletion::Blocked(references) => Err(blocked(entity, id, references)),
    }
}

fn blocked(entity: &'static str, id: i32, references: Vec<BlockingReference>) -> HelpdeskException {
    tracing::info!("Refused to delete {entity} {id}: still referenced");
    HelpdeskException::ReferencedBy {
        entity,
        id,
        references,
    }
}
