use criterion::{criterion_group, criterion_main, Criterion};
use market_data_extractor::*;
use std::hint::black_box;

fn benchmark_extractors(c: &mut Criterion) {
    // Wide marketdata row, roughly the size of a real board response
    let columns: Vec<String> = (0..60).map(|i| format!("\"COL{}\"", i)).collect();
    let values: Vec<String> = (0..60).map(|i| format!("{}.{}", 90 + i, i)).collect();
    let marketdata = format!(
        r#"{{"marketdata":{{"columns":[{}],"data":[[{}]]}}}}"#,
        columns.join(","),
        values.join(",")
    );

    let history_rows: Vec<String> = (0..100).map(|_| format!("[{}]", values.join(","))).collect();
    let history = format!(
        r#"{{"history":{{"columns":[{}],"data":[{}]}}}}"#,
        columns.join(","),
        history_rows.join(",")
    );

    let crypto = r#"{"retCode":0,"result":{"category":"spot","list":[{"symbol":"WLKNUSDT","bid1Price":"0.006117","ask1Price":"0.006121","lastPrice":"0.006119","volume24h":"7873320.7"}]}}"#;

    c.bench_function("parse_last_trading_day_data", |b| {
        b.iter(|| black_box(parse_last_trading_day_data(black_box(&marketdata))))
    });

    c.bench_function("parse_previous_day_data_100_rows", |b| {
        b.iter(|| black_box(parse_previous_day_data(black_box(&history))))
    });

    c.bench_function("parse_crypto_pair_market_data", |b| {
        b.iter(|| black_box(parse_crypto_pair_market_data(black_box(crypto))))
    });
}

criterion_group!(benches, benchmark_extractors);
criterion_main!(benches);
