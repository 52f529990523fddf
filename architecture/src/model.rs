/// Marker for records that are persisted and loaded as a whole through a repository.
pub trait AggregateRoot {}
