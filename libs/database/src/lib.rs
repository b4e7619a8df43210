//! Query plumbing for the catalog: specifications, generic repositories and
//! PostgreSQL connectivity.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM-backed repository, connector, health checks
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::{GenericRepository, SeaOrmRepository, Specification};
//!
//! let repo = SeaOrmRepository::<Product>::new(db);
//! let spec = Specification::new(Some(Criteria::eq(ProductField::ProductBrandId, 1)))
//!     .add_include(ProductInclude::ProductBrand)
//!     .apply_order_by(ProductField::Name)
//!     .apply_paging(0, 6);
//!
//! let page = repo.list_with_spec(&spec).await?;
//! let total = repo.count_with_spec(&spec).await?;
//! ```

pub mod common;
pub mod pagination;
pub mod repository;
pub mod specification;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};
pub use pagination::Pagination;
pub use repository::{GenericRepository, InMemoryQuery, InMemoryRepository};
#[cfg(feature = "postgres")]
pub use repository::{SeaOrmEntity, SeaOrmQuery, SeaOrmRepository};
pub use specification::{
    BaseEntity, Criteria, NoInclude, OrderBy, Paging, Queryable, Specification, Value,
};
