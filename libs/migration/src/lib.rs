pub use sea_orm_migration::prelude::*;

mod m20250301_000000_create_catalog;
mod m20250301_000001_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_create_catalog::Migration),
            Box::new(m20250301_000001_seed_catalog::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_apply_schema_before_seed() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "m20250301_000000_create_catalog",
                "m20250301_000001_seed_catalog"
            ]
        );
    }
}
