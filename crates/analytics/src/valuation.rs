//! Stock valuation.

use stockline_core::saturating_add;
use stockline_inventory::{PriceField, StockItem};

/// Total monetary value of a stock list: Σ quantity × price.
///
/// Quantity reads `quantity`, then `current_stock`, then 0; the price column
/// defaults to 0 when absent. Empty input is worth 0. Totals beyond `f64::MAX`
/// saturate there.
pub fn calculate_stock_value(items: &[StockItem], price_field: PriceField) -> f64 {
    items
        .iter()
        .fold(0.0, |total, item| saturating_add(total, item.value_at(price_field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockline_core::ItemId;

    fn item(id: &str, quantity: f64, cost: f64) -> StockItem {
        StockItem::new(id.parse::<ItemId>().unwrap())
            .with_quantity(quantity)
            .with_price(PriceField::CostPrice, cost)
    }

    #[test]
    fn sums_quantity_times_cost() {
        let items = vec![item("a", 10.0, 2.0), item("b", 5.0, 3.0)];
        assert_eq!(calculate_stock_value(&items, PriceField::CostPrice), 35.0);
    }

    #[test]
    fn empty_list_is_worth_nothing() {
        assert_eq!(calculate_stock_value(&[], PriceField::CostPrice), 0.0);
    }

    #[test]
    fn missing_price_column_counts_as_zero() {
        let items = vec![item("a", 10.0, 2.0)];
        assert_eq!(calculate_stock_value(&items, PriceField::SellingPrice), 0.0);
    }

    #[test]
    fn alternate_quantity_column_is_used() {
        let items = vec![
            StockItem::new("a".parse().unwrap())
                .with_current_stock(4.0)
                .with_price(PriceField::UnitCost, 2.5),
        ];
        assert_eq!(calculate_stock_value(&items, PriceField::UnitCost), 10.0);
    }

    #[test]
    fn extreme_magnitudes_stay_finite() {
        let items = vec![item("a", 1e308, 1.0), item("b", 1e308, 1.0)];
        assert_eq!(calculate_stock_value(&items, PriceField::CostPrice), f64::MAX);

        let items = vec![item("huge", 1e200, 1e200), item("small", 1.0, 1.0)];
        assert_eq!(calculate_stock_value(&items, PriceField::CostPrice), f64::MAX);
    }

    proptest! {
        /// Property: for non-negative inputs the value equals the plain sum of
        /// products and is never negative.
        #[test]
        fn value_is_sum_of_products(
            rows in prop::collection::vec((0.0f64..1e6, 0.0f64..1e4), 0..50)
        ) {
            let items: Vec<StockItem> = rows
                .iter()
                .enumerate()
                .map(|(i, (q, p))| item(&format!("i{i}"), *q, *p))
                .collect();

            let expected: f64 = rows.iter().map(|(q, p)| q * p).sum();
            let value = calculate_stock_value(&items, PriceField::CostPrice);

            prop_assert!(value >= 0.0);
            prop_assert_eq!(value, expected);
        }
    }
}
