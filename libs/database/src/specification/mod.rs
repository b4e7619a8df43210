//! Specification pattern: query intent as a value.
//!
//! A [`Specification`] describes one read over an entity type: which rows
//! (criteria), which associations to load with them (includes), in what order,
//! and which window (paging). It carries no store-specific code; the
//! [`evaluator`] replays it onto any [`Queryable`] backend.
//!
//! ```
//! use database::specification::{BaseEntity, Criteria, NoInclude, Specification, Value};
//!
//! #[derive(Debug, Clone)]
//! struct Brand {
//!     id: i32,
//!     name: String,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum BrandField {
//!     Id,
//!     Name,
//! }
//!
//! impl BaseEntity for Brand {
//!     type Field = BrandField;
//!     type Include = NoInclude;
//!     const NAME: &'static str = "brand";
//!     const ID_FIELD: BrandField = BrandField::Id;
//!
//!     fn id(&self) -> i32 {
//!         self.id
//!     }
//!
//!     fn field(&self, field: BrandField) -> Value {
//!         match field {
//!             BrandField::Id => self.id.into(),
//!             BrandField::Name => self.name.clone().into(),
//!         }
//!     }
//! }
//!
//! let spec = Specification::<Brand>::new(Some(Criteria::contains(BrandField::Name, "core")))
//!     .apply_order_by(BrandField::Name)
//!     .apply_paging(0, 10);
//!
//! assert!(spec.is_paging_enabled());
//! ```

mod criteria;
pub mod evaluator;

pub use criteria::{Criteria, Value};
pub use evaluator::{Queryable, apply_criteria, apply_specification};

use std::fmt::Debug;

/// Capability every queryable entity provides: an integer identity and
/// by-name access to its scalar fields.
pub trait BaseEntity: Debug + Clone + Send + Sync + 'static {
    /// Field names usable in criteria and orderings.
    type Field: Debug + Copy + Eq + Send + Sync + 'static;

    /// Association paths that can be eagerly loaded.
    type Include: Debug + Copy + Eq + Send + Sync + 'static;

    /// Entity name used in logs.
    const NAME: &'static str;

    /// The field holding the identity.
    const ID_FIELD: Self::Field;

    fn id(&self) -> i32;

    fn field(&self, field: Self::Field) -> Value;
}

/// Include type for entities without navigable associations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoInclude {}

/// The single active ordering of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy<F> {
    Asc(F),
    Desc(F),
}

impl<F: Copy> OrderBy<F> {
    pub fn field(&self) -> F {
        match self {
            OrderBy::Asc(field) | OrderBy::Desc(field) => *field,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, OrderBy::Desc(_))
    }
}

/// Skip/take window; present only when paging is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: u64,
    pub take: u64,
}

/// Declarative description of one read over `T`.
///
/// Built with the consuming `apply_*`/`add_*` methods, then handed to a
/// repository by reference.
#[derive(Debug, Clone)]
pub struct Specification<T: BaseEntity> {
    criteria: Option<Criteria<T::Field>>,
    includes: Vec<T::Include>,
    order_by: Option<OrderBy<T::Field>>,
    paging: Option<Paging>,
}

impl<T: BaseEntity> Specification<T> {
    /// No includes, no ordering, paging disabled.
    pub fn new(criteria: Option<Criteria<T::Field>>) -> Self {
        Self {
            criteria,
            includes: Vec::new(),
            order_by: None,
            paging: None,
        }
    }

    /// Matches every row.
    pub fn all() -> Self {
        Self::new(None)
    }

    /// Matches the row whose identity is `id`.
    pub fn by_id(id: i32) -> Self {
        Self::new(Some(Criteria::eq(T::ID_FIELD, id)))
    }

    /// Append an association to load with each row. Order is preserved.
    pub fn add_include(mut self, include: T::Include) -> Self {
        self.includes.push(include);
        self
    }

    /// Enable paging with the given window, replacing any previous window.
    pub fn apply_paging(mut self, skip: u64, take: u64) -> Self {
        self.paging = Some(Paging { skip, take });
        self
    }

    /// Order ascending by `field`, replacing any previous ordering.
    pub fn apply_order_by(mut self, field: T::Field) -> Self {
        self.order_by = Some(OrderBy::Asc(field));
        self
    }

    /// Order descending by `field`, replacing any previous ordering.
    pub fn apply_order_by_descending(mut self, field: T::Field) -> Self {
        self.order_by = Some(OrderBy::Desc(field));
        self
    }

    pub fn criteria(&self) -> Option<&Criteria<T::Field>> {
        self.criteria.as_ref()
    }

    pub fn includes(&self) -> &[T::Include] {
        &self.includes
    }

    pub fn order_by(&self) -> Option<OrderBy<T::Field>> {
        self.order_by
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging.is_some()
    }

    /// Same criteria with includes, ordering and paging dropped.
    pub fn criteria_only(&self) -> Self {
        Self::new(self.criteria.clone())
    }
}

impl<T: BaseEntity> Default for Specification<T> {
    fn default() -> Self {
        Self::all()
    }
}
