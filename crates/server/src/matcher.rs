//! Restaurant matcher.
//!
//! Determines, for each unfinished order without a performer, which
//! restaurants can fulfill the whole order on their own. The result is a
//! transient pairing of order and candidates; nothing is written back to
//! storage and no performer is ever assigned here - the matcher only
//! proposes.

use foodcart_core::ProductId;
use std::collections::BTreeSet;

use crate::models::{OrderSummary, Restaurant, RestaurantMenu};

/// An order paired with the restaurants able to fulfill it.
#[derive(Debug, Clone)]
pub struct MatchedOrder {
    /// The unfinished order.
    pub order: OrderSummary,
    /// Candidate performers. Empty for orders that already carry a
    /// performer - those are skipped, not recomputed.
    pub candidates: Vec<Restaurant>,
}

/// Restaurants whose available-menu product set covers `product_ids`.
///
/// Subset law: a restaurant qualifies iff every product id in the order
/// appears in its available set. An empty order vacuously matches every
/// restaurant.
#[must_use]
pub fn candidates_for<'m>(
    product_ids: &BTreeSet<ProductId>,
    menus: &'m [RestaurantMenu],
) -> Vec<&'m Restaurant> {
    menus
        .iter()
        .filter(|menu| product_ids.is_subset(&menu.product_ids))
        .map(|menu| &menu.restaurant)
        .collect()
}

/// Attach performer candidates to each unfinished order.
///
/// Orders with a performer already assigned keep their performer untouched
/// and get no candidate list.
#[must_use]
pub fn match_orders(orders: Vec<OrderSummary>, menus: &[RestaurantMenu]) -> Vec<MatchedOrder> {
    orders
        .into_iter()
        .map(|order| {
            let candidates = if order.performer.is_some() {
                Vec::new()
            } else {
                candidates_for(&order.product_ids, menus)
                    .into_iter()
                    .cloned()
                    .collect()
            };
            MatchedOrder { order, candidates }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use foodcart_core::{OrderId, OrderStatus, PayMethod, PhoneNumber, RestaurantId};

    use super::*;

    fn menu(id: i32, name: &str, products: &[i32]) -> RestaurantMenu {
        RestaurantMenu {
            restaurant: Restaurant {
                id: RestaurantId::new(id),
                name: name.to_string(),
                address: format!("{name} street 1"),
                contact_phone: String::new(),
            },
            product_ids: products.iter().map(|&p| ProductId::new(p)).collect(),
        }
    }

    fn order(id: i32, performer: Option<i32>, products: &[i32]) -> OrderSummary {
        OrderSummary {
            id: OrderId::new(id),
            performer: performer.map(RestaurantId::new),
            pay_method: PayMethod::Cash,
            comment: String::new(),
            status: OrderStatus::Accepted,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone_number: PhoneNumber::parse("+79990001122").unwrap(),
            address: "X".to_string(),
            total: Decimal::ZERO,
            product_ids: products.iter().map(|&p| ProductId::new(p)).collect(),
        }
    }

    #[test]
    fn test_subset_law() {
        // R1 sells {1, 2}, R2 sells {1}
        let menus = vec![menu(1, "R1", &[1, 2]), menu(2, "R2", &[1])];

        let needs_both = order(1, None, &[1, 2]);
        let names: Vec<_> = candidates_for(&needs_both.product_ids, &menus)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["R1"]);

        let needs_one = order(2, None, &[1]);
        let names: Vec<_> = candidates_for(&needs_one.product_ids, &menus)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn test_no_candidates_when_any_product_missing() {
        let menus = vec![menu(1, "R1", &[1, 2]), menu(2, "R2", &[1])];
        let needs_unknown = order(1, None, &[1, 3]);
        assert!(candidates_for(&needs_unknown.product_ids, &menus).is_empty());
    }

    #[test]
    fn test_empty_order_matches_everything() {
        // Vacuous subset: an order with no lines is satisfiable by every
        // restaurant with at least one available item
        let menus = vec![menu(1, "R1", &[1]), menu(2, "R2", &[2])];
        let empty = order(1, None, &[]);
        assert_eq!(candidates_for(&empty.product_ids, &menus).len(), 2);
    }

    #[test]
    fn test_skip_law_performer_untouched() {
        let menus = vec![menu(1, "R1", &[1, 2])];
        let assigned = order(1, Some(2), &[1]);
        let unassigned = order(2, None, &[1]);

        let matched = match_orders(vec![assigned, unassigned], &menus);

        // Assigned order: skipped entirely, performer kept, no candidates
        assert_eq!(matched[0].order.performer, Some(RestaurantId::new(2)));
        assert!(matched[0].candidates.is_empty());

        // Unassigned order: candidates computed
        assert_eq!(matched[1].candidates.len(), 1);
        assert_eq!(matched[1].candidates[0].id, RestaurantId::new(1));
    }
}
