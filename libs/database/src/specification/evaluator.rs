//! Replays a [`Specification`] onto a store-specific query.
//!
//! Both functions are pure composition: they never execute the query, they
//! only hand the backend one clause at a time in a fixed order.

use super::{BaseEntity, Criteria, OrderBy, Specification};

/// Composable query over entities of type `T` in some store.
///
/// Implemented by each repository backend (SQL via SeaORM, in-memory vectors).
/// Every method returns a new query; nothing runs until the repository
/// materializes it.
pub trait Queryable<T: BaseEntity>: Sized {
    fn filter(self, criteria: &Criteria<T::Field>) -> Self;

    fn include(self, include: T::Include) -> Self;

    fn order_by(self, order: OrderBy<T::Field>) -> Self;

    fn skip(self, n: u64) -> Self;

    fn take(self, n: u64) -> Self;
}

/// Compose `spec` onto `query`.
///
/// Order: criteria, then every include in declaration order, then ordering,
/// then skip followed by take when paging is enabled. Skipping before taking
/// selects rows `skip+1 ..= skip+take` of the ordered result.
pub fn apply_specification<T, Q>(query: Q, spec: &Specification<T>) -> Q
where
    T: BaseEntity,
    Q: Queryable<T>,
{
    let mut query = apply_criteria(query, spec);

    for include in spec.includes() {
        query = query.include(*include);
    }

    if let Some(order) = spec.order_by() {
        query = query.order_by(order);
    }

    if let Some(paging) = spec.paging() {
        query = query.skip(paging.skip).take(paging.take);
    }

    query
}

/// Compose only the criteria of `spec` onto `query`.
///
/// Used for counting: includes, ordering and paging are ignored.
pub fn apply_criteria<T, Q>(query: Q, spec: &Specification<T>) -> Q
where
    T: BaseEntity,
    Q: Queryable<T>,
{
    match spec.criteria() {
        Some(criteria) => query.filter(criteria),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::test_entity::{Gadget, GadgetField, GadgetInclude};

    /// Records every composition step instead of querying anything.
    #[derive(Debug, Default)]
    struct RecordingQuery {
        steps: Vec<String>,
    }

    impl RecordingQuery {
        fn push(mut self, step: String) -> Self {
            self.steps.push(step);
            self
        }
    }

    impl Queryable<Gadget> for RecordingQuery {
        fn filter(self, criteria: &Criteria<GadgetField>) -> Self {
            self.push(format!("filter {:?}", criteria))
        }

        fn include(self, include: GadgetInclude) -> Self {
            self.push(format!("include {:?}", include))
        }

        fn order_by(self, order: OrderBy<GadgetField>) -> Self {
            self.push(format!("order {:?}", order))
        }

        fn skip(self, n: u64) -> Self {
            self.push(format!("skip {}", n))
        }

        fn take(self, n: u64) -> Self {
            self.push(format!("take {}", n))
        }
    }

    #[test]
    fn test_composition_order_is_fixed() {
        let spec = Specification::<Gadget>::new(Some(Criteria::eq(GadgetField::MakerId, 1)))
            .apply_paging(6, 6)
            .apply_order_by_descending(GadgetField::Price)
            .add_include(GadgetInclude::Maker);

        let query = apply_specification(RecordingQuery::default(), &spec);

        assert_eq!(
            query.steps,
            vec![
                "filter Eq(MakerId, Int(1))",
                "include Maker",
                "order Desc(Price)",
                "skip 6",
                "take 6",
            ]
        );
    }

    #[test]
    fn test_empty_specification_composes_nothing() {
        let query = apply_specification(RecordingQuery::default(), &Specification::<Gadget>::all());
        assert!(query.steps.is_empty());
    }

    #[test]
    fn test_paging_disabled_skips_window_steps() {
        let spec = Specification::<Gadget>::all().apply_order_by(GadgetField::Name);

        let query = apply_specification(RecordingQuery::default(), &spec);

        assert_eq!(query.steps, vec!["order Asc(Name)"]);
    }

    #[test]
    fn test_apply_criteria_ignores_includes_ordering_and_paging() {
        let spec = Specification::<Gadget>::new(Some(Criteria::contains(GadgetField::Name, "Hat")))
            .add_include(GadgetInclude::Maker)
            .apply_order_by(GadgetField::Name)
            .apply_paging(0, 10);

        let query = apply_criteria(RecordingQuery::default(), &spec);

        assert_eq!(query.steps, vec!["filter Contains(Name, \"hat\")"]);
    }
}
