//! Order intake route handlers.
//!
//! Validate-then-commit: the whole payload is checked first (all field
//! errors collected, product existence verified against the database in one
//! query) and only then persisted, atomically. A payload with any invalid
//! entry creates nothing.

use std::collections::HashMap;

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use foodcart_core::{OrderId, PhoneNumber, ProductId};

use crate::db::{OrderRepository, ProductRepository};
use crate::error::{Result, ValidationErrors};
use crate::models::{NewOrder, NewOrderLine, Order};
use crate::state::AppState;

/// Incoming order payload.
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as field-level validation errors rather than a blanket
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phonenumber: Option<String>,
    pub address: Option<String>,
    pub products: Option<Vec<LinePayload>>,
}

/// One product entry in the payload.
#[derive(Debug, Deserialize)]
pub struct LinePayload {
    pub product: Option<i32>,
    pub quantity: Option<i32>,
}

/// Accepted-order echo returned to the caller.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: PhoneNumber,
    pub address: String,
    pub products: Vec<LineResponse>,
}

/// One accepted line in the response.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub product: ProductId,
    pub quantity: i32,
}

/// Register a new customer order.
#[instrument(skip(state, payload))]
pub async fn register_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderResponse>> {
    // One round-trip for every referenced product; ids missing from the map
    // do not exist and fail validation below.
    let requested = requested_product_ids(&payload);
    let prices = ProductRepository::new(state.pool())
        .prices_for(&requested)
        .await?;

    let new_order = validate_order(payload, &prices).map_err(ValidationErrors::into_error)?;

    let order = OrderRepository::new(state.pool()).create(new_order).await?;
    tracing::info!(order_id = %order.id, lines = order.lines.len(), "order registered");

    Ok(Json(to_response(order)))
}

/// Product ids referenced by the payload, deduplicated.
pub fn requested_product_ids(payload: &OrderPayload) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = payload
        .products
        .iter()
        .flatten()
        .filter_map(|line| line.product.map(ProductId::new))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Validate the payload against the known product prices.
///
/// Collects every field error before rejecting. On success the returned
/// [`NewOrder`] carries each line's price snapshotted from `prices`.
///
/// # Errors
///
/// Returns the collected [`ValidationErrors`] when any field is invalid.
pub fn validate_order(
    payload: OrderPayload,
    prices: &HashMap<ProductId, Decimal>,
) -> std::result::Result<NewOrder, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let first_name = require_text(&mut errors, "firstname", payload.firstname);
    let last_name = require_text(&mut errors, "lastname", payload.lastname);
    let address = require_text(&mut errors, "address", payload.address);

    let phone_number = match payload.phonenumber.as_deref() {
        None => {
            errors.push("phonenumber", "This field is required.");
            None
        }
        Some(raw) => match PhoneNumber::parse(raw) {
            Ok(phone) => Some(phone),
            Err(e) => {
                errors.push("phonenumber", e.to_string());
                None
            }
        },
    };

    let mut lines = Vec::new();
    match payload.products {
        None => errors.push("products", "This field is required."),
        Some(ref entries) if entries.is_empty() => {
            errors.push("products", "This list may not be empty.");
        }
        Some(entries) => {
            for entry in entries {
                let Some(product_id) = entry.product.map(ProductId::new) else {
                    errors.push("products", "Each entry requires a product id.");
                    continue;
                };

                let quantity = entry.quantity.unwrap_or(0);
                if quantity < 1 {
                    errors.push("products", format!("Invalid quantity for product {product_id}."));
                    continue;
                }

                let Some(&price) = prices.get(&product_id) else {
                    errors.push(
                        "products",
                        format!("The product with this id was not found - {product_id}"),
                    );
                    continue;
                };

                lines.push(NewOrderLine {
                    product_id,
                    quantity,
                    price,
                });
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // No errors recorded, so all four fields are Some
    match (first_name, last_name, phone_number, address) {
        (Some(first_name), Some(last_name), Some(phone_number), Some(address)) => Ok(NewOrder {
            first_name,
            last_name,
            phone_number,
            address,
            lines,
        }),
        _ => Err(errors),
    }
}

fn require_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        Some(_) => {
            errors.push(field, "This field may not be blank.");
            None
        }
        None => {
            errors.push(field, "This field is required.");
            None
        }
    }
}

fn to_response(order: Order) -> OrderResponse {
    OrderResponse {
        id: order.id,
        firstname: order.first_name,
        lastname: order.last_name,
        phonenumber: order.phone_number,
        address: order.address,
        products: order
            .lines
            .iter()
            .map(|line| LineResponse {
                product: line.product_id,
                quantity: line.quantity,
            })
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price_map(entries: &[(i32, i64)]) -> HashMap<ProductId, Decimal> {
        entries
            .iter()
            .map(|&(id, cents)| (ProductId::new(id), Decimal::new(cents, 2)))
            .collect()
    }

    fn valid_payload() -> OrderPayload {
        OrderPayload {
            firstname: Some("A".to_string()),
            lastname: Some("B".to_string()),
            phonenumber: Some("+79990001122".to_string()),
            address: Some("X".to_string()),
            products: Some(vec![LinePayload {
                product: Some(1),
                quantity: Some(2),
            }]),
        }
    }

    #[test]
    fn test_valid_payload_snapshots_price() {
        let prices = price_map(&[(1, 10000)]); // Product(id=1, price=100.00)
        let order = validate_order(valid_payload(), &prices).unwrap();

        assert_eq!(order.first_name, "A");
        assert_eq!(order.phone_number.as_str(), "+79990001122");
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.lines[0].price, Decimal::new(10000, 2));
    }

    #[test]
    fn test_unknown_product_rejected() {
        let prices = price_map(&[(1, 10000)]);
        let mut payload = valid_payload();
        payload.products = Some(vec![
            LinePayload {
                product: Some(1),
                quantity: Some(1),
            },
            LinePayload {
                product: Some(9),
                quantity: Some(1),
            },
        ]);

        // One bad id among otherwise-valid entries fails the whole payload
        let errors = validate_order(payload, &prices).unwrap_err();
        assert!(errors.field("products").unwrap()[0].contains("9"));
    }

    #[test]
    fn test_empty_product_list_rejected() {
        let mut payload = valid_payload();
        payload.products = Some(vec![]);
        let errors = validate_order(payload, &HashMap::new()).unwrap_err();
        assert!(errors.field("products").is_some());
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let prices = price_map(&[(1, 10000)]);
        let mut payload = valid_payload();
        payload.products = Some(vec![LinePayload {
            product: Some(1),
            quantity: Some(0),
        }]);
        let errors = validate_order(payload, &prices).unwrap_err();
        assert!(errors.field("products").is_some());
    }

    #[test]
    fn test_collects_multiple_field_errors() {
        let payload = OrderPayload {
            firstname: None,
            lastname: Some("  ".to_string()),
            phonenumber: Some("not-a-phone".to_string()),
            address: None,
            products: None,
        };

        let errors = validate_order(payload, &HashMap::new()).unwrap_err();
        for field in ["firstname", "lastname", "phonenumber", "address", "products"] {
            assert!(errors.field(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_requested_ids_deduplicated() {
        let mut payload = valid_payload();
        payload.products = Some(vec![
            LinePayload {
                product: Some(2),
                quantity: Some(1),
            },
            LinePayload {
                product: Some(1),
                quantity: Some(1),
            },
            LinePayload {
                product: Some(2),
                quantity: Some(3),
            },
        ]);

        assert_eq!(
            requested_product_ids(&payload),
            vec![ProductId::new(1), ProductId::new(2)]
        );
    }
}
