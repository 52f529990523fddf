use std::sync::Arc;

use typed_builder::TypedBuilder;

use super::Database;

/// Implements every repository trait of the helpdesk domain on one store.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
}
