// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use tern::check::lookup_path;
use tern::SchemaDocument;

fn path_lookup_benchmark(c: &mut Criterion) {
    let body = json!({
        "bookingid": 42,
        "booking": {
            "firstname": "John",
            "lastname": "Doe",
            "totalprice": 1500,
            "depositpaid": true,
            "bookingdates": {
                "checkin": "2025-01-02",
                "checkout": "2025-01-08"
            }
        }
    });

    c.bench_function("lookup_nested_path", |b| {
        b.iter(|| black_box(lookup_path(&body, "booking.bookingdates.checkin").unwrap()))
    });
}

fn schema_validation_benchmark(c: &mut Criterion) {
    let schema = SchemaDocument::from_value(json!({
        "type": "object",
        "required": ["firstname", "lastname", "totalprice", "depositpaid", "bookingdates"],
        "properties": {
            "firstname": {"type": "string"},
            "lastname": {"type": "string"},
            "totalprice": {"type": "number"},
            "depositpaid": {"type": "boolean"},
            "bookingdates": {
                "type": "object",
                "required": ["checkin", "checkout"]
            }
        }
    }))
    .unwrap();

    let instance = json!({
        "firstname": "John",
        "lastname": "Doe",
        "totalprice": 1500,
        "depositpaid": true,
        "bookingdates": {"checkin": "2025-01-02", "checkout": "2025-01-08"}
    });

    c.bench_function("validate_booking", |b| {
        b.iter(|| black_box(schema.validate(&instance).is_ok()))
    });
}

criterion_group!(benches, path_lookup_benchmark, schema_validation_benchmark);
criterion_main!(benches);
