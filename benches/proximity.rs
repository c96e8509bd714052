use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use dtrip::catalog;
use dtrip::geo::{distance_km, GeoPoint};
use dtrip::rally::Rally;
use dtrip::store::StampStore;

const SEOUL: GeoPoint = GeoPoint {
    lat: 37.5665,
    lng: 126.9780,
};

/// Benchmark: raw haversine over every catalog pairing
fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_catalog_pairs", |b| {
        let places = catalog::places();

        b.iter(|| {
            let mut total = 0.0;
            for a in places {
                for z in places {
                    total += distance_km(black_box(a.location), black_box(z.location));
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: full-catalog status classification, the per-frame work of the
/// map screen
fn bench_status_classification(c: &mut Criterion) {
    c.bench_function("status_full_catalog", |b| {
        let mut store = StampStore::open_in_memory().unwrap();
        store.collect(1);
        store.collect(3);
        let rally = Rally::new(store);

        b.iter(|| {
            for place in catalog::places() {
                black_box(rally.status(black_box(place), Some(SEOUL)));
            }
        });
    });
}

/// Benchmark: collect/remove round trip against an on-disk database
fn bench_collect_roundtrip(c: &mut Criterion) {
    c.bench_function("collect_remove_on_disk", |b| {
        let temp_dir = TempDir::new().unwrap();
        let store = StampStore::open(Some(&temp_dir.path().join("dtrip.db"))).unwrap();
        let mut rally = Rally::new(store);

        b.iter(|| {
            rally.collect(black_box(2));
            rally.remove(black_box(2));
        });
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_status_classification,
    bench_collect_roundtrip,
);

criterion_main!(benches);
