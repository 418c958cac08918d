//! Demo data seeding command.
//!
//! Inserts a small catalog for local development: two restaurants, a few
//! products, and menu items arranged so the matcher has something to do
//! (one restaurant covers the full catalog, the other only part of it).

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::CliError;

/// Seed the database with demo data.
///
/// Plain inserts; running it twice duplicates restaurants and products, so
/// use it on an empty development database.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Seeding demo data...");
    seed_catalog(&pool).await?;
    tracing::info!("Seeding complete");

    Ok(())
}

async fn seed_catalog(pool: &PgPool) -> Result<(), CliError> {
    let burgers: (i32,) =
        sqlx::query_as("INSERT INTO product_category (name) VALUES ($1) RETURNING id")
            .bind("Burgers")
            .fetch_one(pool)
            .await?;
    let desserts: (i32,) =
        sqlx::query_as("INSERT INTO product_category (name) VALUES ($1) RETURNING id")
            .bind("Desserts")
            .fetch_one(pool)
            .await?;

    let products = [
        ("Classic Burger", burgers.0, Decimal::new(25_000, 2), "burger.jpg"),
        ("Double Burger", burgers.0, Decimal::new(34_000, 2), "burger.jpg"),
        ("Cheesecake", desserts.0, Decimal::new(18_000, 2), "tasty.jpg"),
    ];

    let mut product_ids = Vec::new();
    for (name, category_id, price, image) in products {
        let row: (i32,) = sqlx::query_as(
            r"
            INSERT INTO product (name, category_id, price, image, description)
            VALUES ($1, $2, $3, $4, '')
            RETURNING id
            ",
        )
        .bind(name)
        .bind(category_id)
        .bind(price)
        .bind(image)
        .fetch_one(pool)
        .await?;
        product_ids.push(row.0);
    }

    let full_menu: (i32,) = sqlx::query_as(
        "INSERT INTO restaurant (name, address, contact_phone) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Star Grill")
    .bind("Moscow, Arbat street 1")
    .bind("+74950000001")
    .fetch_one(pool)
    .await?;

    let partial_menu: (i32,) = sqlx::query_as(
        "INSERT INTO restaurant (name, address, contact_phone) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Corner Diner")
    .bind("Moscow, Tverskaya street 7")
    .bind("+74950000002")
    .fetch_one(pool)
    .await?;

    // Star Grill sells everything; Corner Diner only the burgers
    for &product_id in &product_ids {
        sqlx::query("INSERT INTO menu_item (restaurant_id, product_id) VALUES ($1, $2)")
            .bind(full_menu.0)
            .bind(product_id)
            .execute(pool)
            .await?;
    }
    for &product_id in &product_ids[..2] {
        sqlx::query("INSERT INTO menu_item (restaurant_id, product_id) VALUES ($1, $2)")
            .bind(partial_menu.0)
            .bind(product_id)
            .execute(pool)
            .await?;
    }

    Ok(())
}
