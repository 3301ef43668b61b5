//! Profit margin and markup, in percent.

use stockline_core::{finite_or_zero, safe_ratio};
use stockline_inventory::{PriceField, StockItem};

/// `(selling - cost) / selling * 100`; 0 when `selling` is 0.
pub fn calculate_profit_margin(cost: f64, selling: f64) -> f64 {
    finite_or_zero(safe_ratio(selling - cost, selling) * 100.0)
}

/// `(selling - cost) / cost * 100`; 0 when `cost` is 0.
pub fn calculate_markup(cost: f64, selling: f64) -> f64 {
    finite_or_zero(safe_ratio(selling - cost, cost) * 100.0)
}

/// Margin of a single item from its cost and selling columns, if it has a
/// selling price.
pub fn item_margin(item: &StockItem, cost_field: PriceField) -> Option<f64> {
    let selling = item.price(PriceField::SellingPrice);
    (selling > 0.0).then(|| calculate_profit_margin(item.price(cost_field), selling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_and_markup() {
        assert_eq!(calculate_profit_margin(60.0, 100.0), 40.0);
        assert_eq!(calculate_markup(50.0, 75.0), 50.0);
        assert_eq!(calculate_profit_margin(120.0, 100.0), -20.0);
    }

    #[test]
    fn zero_denominators_yield_zero() {
        assert_eq!(calculate_profit_margin(10.0, 0.0), 0.0);
        assert_eq!(calculate_markup(0.0, 10.0), 0.0);
    }

    #[test]
    fn huge_ratios_stay_finite() {
        assert!(calculate_profit_margin(1e307, 1e-10).is_finite());
        assert!(calculate_markup(1e-10, 1e307).is_finite());
    }

    #[test]
    fn item_margin_requires_selling_price() {
        let priced = StockItem::new("p".parse().unwrap())
            .with_price(PriceField::CostPrice, 3.0)
            .with_price(PriceField::SellingPrice, 4.0);
        assert_eq!(item_margin(&priced, PriceField::CostPrice), Some(25.0));

        let unpriced = StockItem::new("u".parse().unwrap()).with_price(PriceField::CostPrice, 3.0);
        assert_eq!(item_margin(&unpriced, PriceField::CostPrice), None);
    }
}
