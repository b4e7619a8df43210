use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::GenericRepository;
use crate::common::DatabaseResult;
use crate::specification::{
    BaseEntity, Criteria, OrderBy, Queryable, Specification, Value, apply_criteria,
    apply_specification,
};

/// Binds a domain entity to its SeaORM table.
#[async_trait]
pub trait SeaOrmEntity: BaseEntity {
    type Entity: EntityTrait<Model: Sync>;

    /// Column backing a domain field.
    fn column(field: Self::Field) -> <Self::Entity as EntityTrait>::Column;

    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> Self;

    /// Populate `include` on already materialized rows.
    ///
    /// Implementations should batch the lookup (one query per include path,
    /// not per row). Entities without associations keep the default.
    async fn load_include(
        _db: &DatabaseConnection,
        _rows: &mut [Self],
        _include: Self::Include,
    ) -> Result<(), DbErr> {
        Ok(())
    }
}

/// A SeaORM `Select` being composed by the evaluator, plus the include paths
/// to load once rows come back.
#[derive(Debug)]
pub struct SeaOrmQuery<T: SeaOrmEntity> {
    select: Select<T::Entity>,
    includes: Vec<T::Include>,
}

impl<T: SeaOrmEntity> SeaOrmQuery<T> {
    pub fn new() -> Self {
        Self {
            select: T::Entity::find(),
            includes: Vec::new(),
        }
    }

    pub fn includes(&self) -> &[T::Include] {
        &self.includes
    }

    pub fn into_select(self) -> Select<T::Entity> {
        self.select
    }
}

impl<T: SeaOrmEntity> Default for SeaOrmQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeaOrmEntity> Queryable<T> for SeaOrmQuery<T> {
    fn filter(mut self, criteria: &Criteria<T::Field>) -> Self {
        self.select = self.select.filter(condition::<T>(criteria));
        self
    }

    fn include(mut self, include: T::Include) -> Self {
        self.includes.push(include);
        self
    }

    fn order_by(mut self, order: OrderBy<T::Field>) -> Self {
        let direction = if order.is_descending() {
            Order::Desc
        } else {
            Order::Asc
        };
        self.select = self.select.order_by(T::column(order.field()), direction);

        // identity tie-break keeps OFFSET paging stable across requests
        if order.field() != T::ID_FIELD {
            self.select = self.select.order_by(T::column(T::ID_FIELD), Order::Asc);
        }
        self
    }

    fn skip(mut self, n: u64) -> Self {
        self.select = self.select.offset(n);
        self
    }

    fn take(mut self, n: u64) -> Self {
        self.select = self.select.limit(n);
        self
    }
}

fn condition<T: SeaOrmEntity>(criteria: &Criteria<T::Field>) -> Condition {
    match criteria {
        Criteria::Eq(field, value) => Condition::all().add(T::column(*field).eq(db_value(value))),
        Criteria::Contains(field, needle) => {
            let column = Expr::col((T::Entity::default(), T::column(*field)));
            Condition::all().add(Expr::expr(Func::lower(column)).like(like_contains(needle)))
        }
        Criteria::All(clauses) => clauses
            .iter()
            .fold(Condition::all(), |acc, clause| acc.add(condition::<T>(clause))),
    }
}

/// Escape LIKE metacharacters so the needle matches literally.
fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

fn db_value(value: &Value) -> sea_orm::Value {
    match value {
        Value::Int(v) => (*v).into(),
        Value::Float(v) => (*v).into(),
        Value::Text(v) => v.clone().into(),
    }
}

/// [`GenericRepository`] over a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmRepository<T: SeaOrmEntity> {
    db: DatabaseConnection,
    _entity: std::marker::PhantomData<fn() -> T>,
}

impl<T: SeaOrmEntity> SeaOrmRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: std::marker::PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn materialize(&self, query: SeaOrmQuery<T>, first_only: bool) -> DatabaseResult<Vec<T>> {
        let includes = query.includes.clone();
        let select = query.into_select();

        let models: Vec<_> = if first_only {
            select.one(&self.db).await?.into_iter().collect()
        } else {
            select.all(&self.db).await?
        };
        let mut rows: Vec<T> = models.into_iter().map(T::from_model).collect();

        if !rows.is_empty() {
            for include in includes {
                T::load_include(&self.db, &mut rows, include).await?;
            }
        }

        Ok(rows)
    }
}

#[async_trait]
impl<T: SeaOrmEntity> GenericRepository<T> for SeaOrmRepository<T> {
    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<T>> {
        tracing::debug!(entity = T::NAME, id, "get_by_id");
        self.get_entity_with_spec(&Specification::by_id(id)).await
    }

    async fn list_all(&self) -> DatabaseResult<Vec<T>> {
        tracing::debug!(entity = T::NAME, "list_all");
        self.materialize(SeaOrmQuery::new(), false).await
    }

    async fn get_entity_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Option<T>> {
        tracing::debug!(entity = T::NAME, ?spec, "get_entity_with_spec");
        let query = apply_specification(SeaOrmQuery::new(), spec);
        Ok(self.materialize(query, true).await?.pop())
    }

    async fn list_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<Vec<T>> {
        tracing::debug!(entity = T::NAME, ?spec, "list_with_spec");
        let query = apply_specification(SeaOrmQuery::new(), spec);
        self.materialize(query, false).await
    }

    async fn count_with_spec(&self, spec: &Specification<T>) -> DatabaseResult<u64> {
        tracing::debug!(entity = T::NAME, ?spec, "count_with_spec");
        let query = apply_criteria(SeaOrmQuery::new(), spec);
        Ok(query.into_select().count(&self.db).await?)
    }
}
