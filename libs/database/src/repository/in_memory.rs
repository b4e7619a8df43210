use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::GenericRepository;
use crate::common::DatabaseResult;
use crate::specification::{
    BaseEntity, Criteria, OrderBy, Queryable, Specification, apply_criteria, apply_specification,
};

type IncludeResolver<T> = Arc<dyn Fn(&mut T) + Send + Sync>;

/// Vector-backed repository for development and tests.
///
/// Associations are filled by resolvers registered per include path with
/// [`with_include`](Self::with_include); an include without a resolver is a
/// no-op.
pub struct InMemoryRepository<T: BaseEntity> {
    rows: Arc<RwLock<Vec<T>>>,
    resolvers: Vec<(T::Include, IncludeResolver<T>)>,
}

impl<T: BaseEntity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::from_rows(Vec::new())
    }

    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            resolvers: Vec::new(),
        }
    }

    /// Register how to populate `include` on a materialized row.
    pub fn with_include<F>(mut self, include: T::Include, resolver: F) -> Self
    where
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.resolvers.push((include, Arc::new(resolver)));
        self
    }

    /// Seed a row.
    pub async fn insert(&self, row: T) {
        let mut rows = self.rows.write().await;
        tracing::debug!(entity = T::NAME, id = row.id(), "Seeded in-memory row");
        rows.push(row);
    }

    async fn query(&self) -> InMemoryQuery<T> {
        InMemoryQuery::new(self.rows.read().await.clone())
    }

    fn resolve_includes(&self, query: &InMemoryQuery<T>, rows: &mut [T]) {
        for include in &query.includes {
            let resolver = self
                .resolvers
                .iter()
                .find(|(registered, _)| registered == include)
                .map(|(_, resolver)| resolver);

            if let Some(resolver) = resolver {
                rows.iter_mut().for_each(|row| (**resolver)(row));
            }
        }
    }
}

impl<T: BaseEntity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BaseEntity> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            resolvers: self.resolvers.clone(),
        }
    }
}

impl<T: BaseEntity> fmt::Debug for InMemoryRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("entity", &T::NAME)
            .field(
                "includes",
                &self.resolvers.iter().map(|(i, _)| i).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[async_trait]
impl<T: BaseEntity> GenericRepository<T> for InMemoryRepository<T> {
    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<T>> {
        tracing::debug!(entity = T::NAME, id, "get_by_id");
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn list_all(&self) -> DatabaseResult<Vec<T>> {
        tracing::debug!(entity = T::NAME, "list_all");
        Ok(self.rows.read().await.clone())
    }

    async fn get_entity_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Option<T>> {
        tracing::debug!(entity = T::NAME, ?spec, "get_entity_with_spec");
        let query = apply_specification(self.query().await, spec);

        let mut first: Vec<T> = query.rows.iter().take(1).cloned().collect();
        self.resolve_includes(&query, &mut first);
        Ok(first.pop())
    }

    async fn list_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Vec<T>> {
        tracing::debug!(entity = T::NAME, ?spec, "list_with_spec");
        let query = apply_specification(self.query().await, spec);

        let mut rows = query.rows.clone();
        self.resolve_includes(&query, &mut rows);
        Ok(rows)
    }

    async fn count_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<u64> {
        tracing::debug!(entity = T::NAME, ?spec, "count_with_spec");
        let query = apply_criteria(self.query().await, spec);
        Ok(query.rows.len() as u64)
    }
}

/// Snapshot of the rows being narrowed down by the evaluator.
///
/// Filtering, sorting and windowing happen eagerly on the snapshot; includes
/// are only recorded and resolved once rows are materialized.
#[derive(Debug, Clone)]
pub struct InMemoryQuery<T: BaseEntity> {
    rows: Vec<T>,
    includes: Vec<T::Include>,
}

impl<T: BaseEntity> InMemoryQuery<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            includes: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn includes(&self) -> &[T::Include] {
        &self.includes
    }
}

impl<T: BaseEntity> Queryable<T> for InMemoryQuery<T> {
    fn filter(mut self, criteria: &Criteria<T::Field>) -> Self {
        self.rows
            .retain(|row| criteria.matches(&|field: &T::Field| row.field(*field)));
        self
    }

    fn include(mut self, include: T::Include) -> Self {
        self.includes.push(include);
        self
    }

    fn order_by(mut self, order: OrderBy<T::Field>) -> Self {
        let field = order.field();
        let descending = order.is_descending();

        // stable sort; ties keep identity order so paging is deterministic
        self.rows.sort_by(|a, b| {
            let ordering = a.field(field).sort_cmp(&b.field(field));
            let ordering = if descending {
                ordering.reverse()
            } else {
                ordering
            };
            ordering.then_with(|| a.id().cmp(&b.id()))
        });
        self
    }

    fn skip(mut self, n: u64) -> Self {
        let n = usize::try_from(n).unwrap_or(usize::MAX).min(self.rows.len());
        self.rows.drain(..n);
        self
    }

    fn take(mut self, n: u64) -> Self {
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        self.rows.truncate(n);
        self
    }
}
