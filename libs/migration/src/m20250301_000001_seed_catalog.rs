use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO product_brands (id, name)
            VALUES
                (1, 'Angular'),
                (2, 'NetCore'),
                (3, 'VS Code'),
                (4, 'React'),
                (5, 'Typescript'),
                (6, 'Redis')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO product_types (id, name)
            VALUES
                (1, 'Boards'),
                (2, 'Hats'),
                (3, 'Boots'),
                (4, 'Gloves')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (id, name, description, price, picture_url, product_type_id, product_brand_id)
            VALUES
                (1, 'Angular Speedster Board 2000', 'Lorem ipsum dolor sit amet, consectetuer adipiscing elit. Maecenas porttitor congue massa.', 200, 'images/products/sb-ang1.png', 1, 1),
                (2, 'Green Angular Board 3000', 'Nunc viverra imperdiet enim. Fusce est. Vivamus a tellus.', 150, 'images/products/sb-ang2.png', 1, 1),
                (3, 'Core Board Speed Rush 3', 'Suspendisse dui purus, scelerisque at, vulputate vitae, pretium mattis, nunc.', 180, 'images/products/sb-core1.png', 1, 2),
                (4, 'Net Core Super Board', 'Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas.', 300, 'images/products/sb-core2.png', 1, 2),
                (5, 'React Board Super Whizzy Fast', 'Lorem ipsum dolor sit amet, consectetuer adipiscing elit. Maecenas porttitor congue massa.', 250, 'images/products/sb-react1.png', 1, 4),
                (6, 'Typescript Entry Board', 'Aenean nec lorem. In porttitor. Donec laoreet nonummy augue.', 120, 'images/products/sb-ts1.png', 1, 5),
                (7, 'Core Blue Hat', 'Fusce posuere, magna sed pulvinar ultricies, purus lectus malesuada libero.', 10, 'images/products/hat-core1.png', 2, 2),
                (8, 'Green React Woolen Hat', 'Nunc viverra imperdiet enim. Fusce est. Vivamus a tellus.', 8, 'images/products/hat-react1.png', 2, 4),
                (9, 'Purple React Woolen Hat', 'Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas.', 15, 'images/products/hat-react2.png', 2, 4),
                (10, 'Blue Code Gloves', 'Lorem ipsum dolor sit amet, consectetuer adipiscing elit. Maecenas porttitor congue massa.', 18, 'images/products/glove-code1.png', 4, 3),
                (11, 'Green Code Gloves', 'Suspendisse dui purus, scelerisque at, vulputate vitae, pretium mattis, nunc.', 15, 'images/products/glove-code2.png', 4, 3),
                (12, 'Purple React Gloves', 'Aenean nec lorem. In porttitor. Donec laoreet nonummy augue.', 16, 'images/products/glove-react1.png', 4, 4),
                (13, 'Green React Gloves', 'Fusce posuere, magna sed pulvinar ultricies, purus lectus malesuada libero.', 14, 'images/products/glove-react2.png', 4, 4),
                (14, 'Redis Red Boots', 'Nunc viverra imperdiet enim. Fusce est. Vivamus a tellus.', 250, 'images/products/boot-redis1.png', 3, 6),
                (15, 'Core Red Boots', 'Lorem ipsum dolor sit amet, consectetuer adipiscing elit. Maecenas porttitor congue massa.', 189.99, 'images/products/boot-core2.png', 3, 2),
                (16, 'Core Purple Boots', 'Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas.', 199.99, 'images/products/boot-core1.png', 3, 2),
                (17, 'Angular Purple Boots', 'Aenean nec lorem. In porttitor. Donec laoreet nonummy augue.', 150, 'images/products/boot-ang2.png', 3, 1),
                (18, 'Angular Blue Boots', 'Suspendisse dui purus, scelerisque at, vulputate vitae, pretium mattis, nunc.', 180, 'images/products/boot-ang1.png', 3, 1)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        // Explicit ids leave the serial sequences behind
        for table in ["product_brands", "product_types", "products"] {
            db.execute_unprepared(&format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DELETE FROM products WHERE id BETWEEN 1 AND 18")
            .await?;
        db.execute_unprepared("DELETE FROM product_types WHERE id BETWEEN 1 AND 4")
            .await?;
        db.execute_unprepared("DELETE FROM product_brands WHERE id BETWEEN 1 AND 6")
            .await?;

        Ok(())
    }
}
