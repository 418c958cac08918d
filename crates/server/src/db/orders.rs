//! Order repository.
//!
//! Intake is validate-then-commit: the route handler validates the whole
//! payload first, and [`OrderRepository::create`] persists the order and all
//! of its lines inside one transaction. Either everything lands or nothing
//! does.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use foodcart_core::{OrderId, OrderStatus, PayMethod, PhoneNumber, ProductId, RestaurantId};

use super::RepositoryError;
use crate::models::{NewOrder, Order, OrderLine, OrderSummary};

/// Row shape for a freshly inserted order.
#[derive(Debug, sqlx::FromRow)]
struct InsertedOrderRow {
    id: OrderId,
    pay_method: PayMethod,
    status: OrderStatus,
    registered_at: DateTime<Utc>,
}

/// Row shape for the unfinished-orders listing.
#[derive(Debug, sqlx::FromRow)]
struct OrderSummaryRow {
    id: OrderId,
    performer_id: Option<RestaurantId>,
    pay_method: PayMethod,
    comment: String,
    status: OrderStatus,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
    total: Decimal,
}

/// Row shape for order lines.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    order_id: OrderId,
    product_id: ProductId,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated order with its lines in a single transaction.
    ///
    /// The order starts in `accepted` status with no performer. Each line
    /// carries the price snapshot taken by the caller at intake time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; the
    /// transaction is rolled back and nothing is persisted.
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, InsertedOrderRow>(
            r"
            INSERT INTO customer_order (first_name, last_name, phone_number, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, pay_method, status, registered_at
            ",
        )
        .bind(&new_order.first_name)
        .bind(&new_order.last_name)
        .bind(new_order.phone_number.as_str())
        .bind(&new_order.address)
        .fetch_one(&mut *tx)
        .await?;

        let mut lines = Vec::with_capacity(new_order.lines.len());
        for line in &new_order.lines {
            sqlx::query(
                r"
                INSERT INTO order_line (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(row.id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;

            lines.push(OrderLine {
                product_id: line.product_id,
                quantity: line.quantity,
                price: Some(line.price),
            });
        }

        tx.commit().await?;

        Ok(Order {
            id: row.id,
            performer: None,
            pay_method: row.pay_method,
            comment: String::new(),
            status: row.status,
            first_name: new_order.first_name,
            last_name: new_order.last_name,
            phone_number: new_order.phone_number,
            address: new_order.address,
            registered_at: row.registered_at,
            called_at: None,
            delivered_at: None,
            lines,
        })
    }

    /// List unfinished orders (any status but `finished`) with their totals
    /// and distinct product-id sets.
    ///
    /// The total is computed in SQL as the sum of `quantity * price` over
    /// the order's lines; lines without a price snapshot contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored phone number no
    /// longer passes validation.
    pub async fn list_unfinished(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r"
            SELECT o.id, o.performer_id, o.pay_method, o.comment, o.status,
                   o.first_name, o.last_name, o.phone_number, o.address,
                   COALESCE((
                       SELECT SUM(l.quantity * l.price)
                       FROM order_line l
                       WHERE l.order_id = o.id
                   ), 0) AS total
            FROM customer_order o
            WHERE o.status <> 'FI'
            ORDER BY o.registered_at, o.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let order_ids: Vec<i32> = rows.iter().map(|row| row.id.as_i32()).collect();
        let line_rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT order_id, product_id
            FROM order_line
            WHERE order_id = ANY($1)
            ",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut products_by_order: HashMap<OrderId, BTreeSet<ProductId>> = HashMap::new();
        for line in line_rows {
            products_by_order
                .entry(line.order_id)
                .or_default()
                .insert(line.product_id);
        }

        rows.into_iter()
            .map(|row| {
                let phone_number = PhoneNumber::parse(&row.phone_number).map_err(|e| {
                    RepositoryError::DataCorruption(format!(
                        "invalid phone number in database: {e}"
                    ))
                })?;

                Ok(OrderSummary {
                    id: row.id,
                    performer: row.performer_id,
                    pay_method: row.pay_method,
                    comment: row.comment,
                    status: row.status,
                    first_name: row.first_name,
                    last_name: row.last_name,
                    phone_number,
                    address: row.address,
                    total: row.total,
                    product_ids: products_by_order.remove(&row.id).unwrap_or_default(),
                })
            })
            .collect()
    }
}
