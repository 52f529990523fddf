use async_trait::async_trait;

use crate::{
    exception::HelpdeskResult,
    model::{entity::UserView, vo::UserPayload},
};

/// Users as the rest of the application sees them: never with a password.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> HelpdeskResult<Vec<UserView>>;
    async fn get(&self, id: i32) -> HelpdeskResult<UserView>;
    /// Fails with `Conflict` when the username is taken.
    async fn create(&self, payload: UserPayload) -> HelpdeskResult<UserView>;
    async fn update(&self, id: i32, payload: UserPayload) -> HelpdeskResult<UserView>;
    /// The bootstrap administrator and referenced users are never removed.
    async fn delete(&self, id: i32) -> HelpdeskResult<()>;
}
