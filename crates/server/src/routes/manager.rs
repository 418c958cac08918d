//! Manager order listing route handlers.
//!
//! The JSON counterpart of the staff order board: every unfinished order
//! with its total, and - for orders nobody has picked up yet - the
//! restaurants able to fulfill it, each with an estimated delivery
//! distance. Distances come through the spot cache, so each distinct
//! address costs at most one external geocoding call.

use std::cmp::Ordering;

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use foodcart_core::{Coordinates, OrderId, OrderStatus, PayMethod, RestaurantId};

use crate::db::{OrderRepository, RestaurantRepository, SpotRepository};
use crate::error::Result;
use crate::geo::{distance_km, resolve_coordinates};
use crate::matcher::match_orders;
use crate::state::AppState;

/// An unfinished order as shown on the manager board.
#[derive(Debug, Serialize)]
pub struct ManagerOrderResponse {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub status: OrderStatus,
    pub pay_method: PayMethod,
    pub comment: String,
    pub total: Decimal,
    /// Assigned restaurant, if any. Orders with a performer carry no
    /// candidate list.
    pub performer: Option<RestaurantId>,
    /// Restaurants able to fulfill the whole order, nearest first.
    pub candidates: Vec<CandidateResponse>,
}

/// A performer candidate with its estimated delivery distance.
#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    pub id: RestaurantId,
    pub name: String,
    /// Kilometers from the restaurant to the delivery address, rounded to
    /// 2 decimal places; -1 when either address cannot be geocoded.
    pub distance_km: f64,
}

/// List unfinished orders with performer candidates and distances.
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ManagerOrderResponse>>> {
    let pool = state.pool();
    let orders = OrderRepository::new(pool).list_unfinished().await?;
    let menus = RestaurantRepository::new(pool)
        .list_with_available_items()
        .await?;

    let spots = SpotRepository::new(pool);
    let geocoder = state.geocoder();

    let mut response = Vec::new();
    for matched in match_orders(orders, &menus) {
        let order = matched.order;

        let mut candidates = Vec::with_capacity(matched.candidates.len());
        if !matched.candidates.is_empty() {
            let order_point = locate(&spots, geocoder, &order.address).await;
            for restaurant in matched.candidates {
                let restaurant_point = locate(&spots, geocoder, &restaurant.address).await;
                candidates.push(CandidateResponse {
                    id: restaurant.id,
                    name: restaurant.name,
                    distance_km: distance_km(restaurant_point, order_point),
                });
            }
            sort_nearest_first(&mut candidates);
        }

        response.push(ManagerOrderResponse {
            id: order.id,
            firstname: order.first_name,
            lastname: order.last_name,
            phonenumber: order.phone_number.into_inner(),
            address: order.address,
            status: order.status,
            pay_method: order.pay_method,
            comment: order.comment,
            total: order.total,
            performer: order.performer,
            candidates,
        });
    }

    Ok(Json(response))
}

/// Resolve an address through the spot cache, degrading any failure to
/// "unknown location" so one broken address never fails the whole listing.
async fn locate(
    spots: &SpotRepository<'_>,
    geocoder: &crate::geo::YandexGeocoder,
    address: &str,
) -> Option<Coordinates> {
    match resolve_coordinates(spots, geocoder, address).await {
        Ok(point) => point,
        Err(e) => {
            tracing::warn!(address, error = %e, "could not resolve address");
            None
        }
    }
}

/// Sort candidates by distance, nearest first, unknown-distance entries
/// last.
fn sort_nearest_first(candidates: &mut [CandidateResponse]) {
    candidates.sort_by(|a, b| {
        sort_key(a.distance_km)
            .partial_cmp(&sort_key(b.distance_km))
            .unwrap_or(Ordering::Equal)
    });
}

/// The sentinel sorts after every real distance. Real distances are never
/// negative, so a sign check suffices.
fn sort_key(distance: f64) -> f64 {
    if distance < 0.0 { f64::INFINITY } else { distance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DISTANCE_UNKNOWN;

    fn candidate(id: i32, distance_km: f64) -> CandidateResponse {
        CandidateResponse {
            id: RestaurantId::new(id),
            name: format!("R{id}"),
            distance_km,
        }
    }

    #[test]
    fn test_sort_nearest_first_sentinels_last() {
        let mut candidates = vec![
            candidate(1, 5.25),
            candidate(2, DISTANCE_UNKNOWN),
            candidate(3, 0.8),
            candidate(4, DISTANCE_UNKNOWN),
            candidate(5, 12.0),
        ];

        sort_nearest_first(&mut candidates);

        let order: Vec<i32> = candidates.iter().map(|c| c.id.as_i32()).collect();
        assert_eq!(&order[..3], &[3, 1, 5]);
        // Both unknown-distance entries land at the end
        assert!(candidates[3].distance_km < 0.0);
        assert!(candidates[4].distance_km < 0.0);
    }

    #[test]
    fn test_zero_distance_sorts_before_unknown() {
        // The sentinel must stay distinguishable from a legitimate zero
        let mut candidates = vec![candidate(1, DISTANCE_UNKNOWN), candidate(2, 0.0)];
        sort_nearest_first(&mut candidates);
        assert_eq!(candidates[0].id, RestaurantId::new(2));
    }
}
