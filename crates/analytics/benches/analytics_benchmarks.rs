use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, Duration, TimeZone, Utc};
use stockline_analytics::{
    AnalyticsConfig, InventoryReport, analyze_stock_aging, calculate_stock_value, forecast_demand,
    identify_slow_moving_items,
};
use stockline_core::ItemId;
use stockline_inventory::{DemandSample, PriceField, StockItem};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
}

fn synthetic_items(n: usize) -> Vec<StockItem> {
    (0..n)
        .map(|i| {
            let at = now() - Duration::days((i % 400) as i64);
            StockItem::new(format!("item-{i}").parse::<ItemId>().unwrap())
                .with_quantity((i % 50) as f64)
                .with_price(PriceField::CostPrice, 1.0 + (i % 17) as f64)
                .with_price(PriceField::SellingPrice, 2.0 + (i % 23) as f64)
                .with_reorder_level(5.0)
                .with_received_date(at)
                .with_last_movement_date(at)
        })
        .collect()
}

fn bench_per_item_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_item_operations");

    for n in [100usize, 10_000] {
        let items = synthetic_items(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("stock_value", n), &items, |b, items| {
            b.iter(|| calculate_stock_value(black_box(items), PriceField::CostPrice));
        });

        group.bench_with_input(BenchmarkId::new("aging", n), &items, |b, items| {
            b.iter(|| analyze_stock_aging(black_box(items), now()));
        });

        group.bench_with_input(BenchmarkId::new("slow_movers", n), &items, |b, items| {
            b.iter(|| identify_slow_moving_items(black_box(items), 90, now()));
        });

        group.bench_with_input(BenchmarkId::new("report", n), &items, |b, items| {
            let config = AnalyticsConfig::default();
            b.iter(|| InventoryReport::build(black_box(items), &config, now()));
        });
    }

    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let samples: Vec<DemandSample> = (0..365)
        .map(|d| DemandSample::new((d % 40) as f64, now() - Duration::days(365 - d)))
        .collect();

    c.bench_function("forecast_demand_30_of_365", |b| {
        b.iter(|| forecast_demand(black_box(&samples), 30));
    });
}

criterion_group!(benches, bench_per_item_operations, bench_forecast);
criterion_main!(benches);
