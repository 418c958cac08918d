//! Spot repository - the persistent address-to-coordinates cache.

use rust_decimal::Decimal;
use sqlx::PgPool;

use foodcart_core::Coordinates;

use super::RepositoryError;
use crate::geo::SpotStore;

/// Row shape for a cached spot.
#[derive(Debug, sqlx::FromRow)]
struct SpotRow {
    lon: Decimal,
    lat: Decimal,
}

/// Repository backing the spot cache with the `spot` table.
///
/// Entries are insert-only. `spot.address` carries a unique constraint and
/// inserts use `ON CONFLICT DO NOTHING`, so concurrent misses for the same
/// address collapse to a single row with the first writer winning.
pub struct SpotRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SpotRepository<'a> {
    /// Create a new spot repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl SpotStore for SpotRepository<'_> {
    async fn find(&self, address: &str) -> Result<Option<Coordinates>, RepositoryError> {
        let row = sqlx::query_as::<_, SpotRow>(
            r"
            SELECT lon, lat
            FROM spot
            WHERE address = $1
            ",
        )
        .bind(address)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| Coordinates::new(row.lon, row.lat)))
    }

    async fn save(&self, address: &str, coordinates: Coordinates) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO spot (address, lon, lat)
            VALUES ($1, $2, $3)
            ON CONFLICT (address) DO NOTHING
            ",
        )
        .bind(address)
        .bind(coordinates.lon)
        .bind(coordinates.lat)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
