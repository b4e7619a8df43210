//! Generic read-only repository over any [`BaseEntity`].
//!
//! Callers describe what they want with a [`Specification`]; each backend
//! turns it into a store query through the specification evaluator.

mod in_memory;
#[cfg(feature = "postgres")]
mod postgres;

pub use in_memory::{InMemoryQuery, InMemoryRepository};
#[cfg(feature = "postgres")]
pub use postgres::{SeaOrmEntity, SeaOrmQuery, SeaOrmRepository};

use async_trait::async_trait;

use crate::common::DatabaseResult;
use crate::specification::{BaseEntity, Specification};

/// Read operations available for every entity type.
///
/// Store failures surface as [`DatabaseError`](crate::DatabaseError); nothing
/// is retried here.
#[async_trait]
pub trait GenericRepository<T: BaseEntity>: Send + Sync {
    /// Entity with the given identity, without associations.
    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<T>>;

    /// Every entity of this type, in store order.
    async fn list_all(&self) -> DatabaseResult<Vec<T>>;

    /// First entity matching `spec`, with its includes loaded.
    async fn get_entity_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Option<T>>;

    /// All entities matching `spec`, ordered and paged as it says.
    async fn list_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Vec<T>>;

    /// Number of entities matching the criteria of `spec`.
    ///
    /// Includes, ordering and paging are ignored.
    async fn count_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<u64>;
}
