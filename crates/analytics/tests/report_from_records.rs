use chrono::{TimeZone, Utc};
use serde_json::json;

use stockline_analytics::{
    AgingCategory, AnalyticsConfig, InventoryReport, analyze_stock_aging, calculate_stock_value,
    forecast_demand, identify_slow_moving_items,
};
use stockline_inventory::{PriceField, decode_demand, decode_items};

fn records() -> serde_json::Value {
    json!({
        "items": [
            {
                "_id": { "$oid": "65a1" },
                "sku": "BOLT-M6",
                "quantity": 10,
                "costPrice": "2",
                "sellingPrice": 3,
                "receivedDate": "2024-05-27T00:00:00Z",
                "lastMovementDate": "2024-06-20T00:00:00Z"
            },
            {
                "_id": "65a2",
                "sku": "NUT-M6",
                "currentStock": "5",
                "costPrice": 3,
                "createdAt": "2024-01-01"
            },
            {
                "_id": "65a3",
                "quantity": "lots",
                "costPrice": null,
                "receivedDate": "not a date"
            }
        ]
    })
}

#[test]
fn decoded_records_flow_through_every_operation() {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let items = decode_items(&records()).unwrap();
    assert_eq!(items.len(), 3);

    assert_eq!(calculate_stock_value(&items, PriceField::CostPrice), 35.0);

    let aging = analyze_stock_aging(&items, now);
    let categories: Vec<AgingCategory> = aging.iter().map(|r| r.aging_category).collect();
    assert_eq!(
        categories,
        vec![AgingCategory::Aging, AgingCategory::VeryOld, AgingCategory::Current]
    );

    let slow = identify_slow_moving_items(&items, 90, now);
    let slow_ids: Vec<&str> = slow.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(slow_ids, vec!["65a2"]);

    let report = InventoryReport::build(&items, &AnalyticsConfig::default(), now);
    assert_eq!(report.total_items, 3);
    assert_eq!(report.cost_value, 35.0);
    assert_eq!(report.retail_value, 30.0);
    assert_eq!(report.out_of_stock_items, 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["costValue"], 35.0);
    assert_eq!(json["aging"][3]["category"], "very_old");
}

#[test]
fn demand_series_decodes_and_forecasts() {
    let samples = decode_demand(&json!([
        { "quantity": 12, "timestamp": "2024-06-01T00:00:00Z" },
        { "quantity": "18", "timestamp": "2024-06-02T00:00:00Z" },
        { "quantity": 30, "timestamp": 1717372800000i64 },
    ]))
    .unwrap();
    assert_eq!(forecast_demand(&samples, 2), 24.0);
    assert_eq!(forecast_demand(&samples, 30), 20.0);
}
