//! # Gangway Filter Benchmarks
//!
//! Performance validation for the origin gate:
//!
//! | Component | Claim | Target |
//! |-----------|-------|--------|
//! | NetworkSet | Linear scan over registered blocks | < 1us at 1k blocks |
//! | MembershipCache | Cached decision is a single map read | < 100ns |
//! | OriginFilter | Cold decision = scan + cache fill | < 1us |

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ipnet::{IpNet, Ipv4Net};

use gangway_filter::{NetworkSet, OriginFilter};

// ============================================================================
// NetworkSet: membership scan scaling
// ============================================================================

fn bench_network_set_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("network-set");
    group.measurement_time(Duration::from_secs(5));

    for blocks in [1usize, 64, 1024] {
        let set = NetworkSet::new();
        for i in 0..blocks {
            let net = Ipv4Net::new(
                Ipv4Addr::new(10, (i / 256) as u8, (i % 256) as u8, 0),
                24,
            )
            .expect("prefix is valid");
            set.insert(IpNet::V4(net));
        }

        // Worst case: the address matches nothing, so every block is scanned.
        let outside: IpAddr = "192.168.0.1".parse().unwrap();
        group.bench_with_input(
            BenchmarkId::new("contains_miss", blocks),
            &outside,
            |b, addr| b.iter(|| black_box(set.contains(black_box(*addr)))),
        );

        // Best case: the first registered block matches.
        let inside: IpAddr = "10.0.0.1".parse().unwrap();
        group.bench_with_input(
            BenchmarkId::new("contains_hit", blocks),
            &inside,
            |b, addr| b.iter(|| black_box(set.contains(black_box(*addr)))),
        );
    }

    group.finish();
}

// ============================================================================
// OriginFilter: cached vs cold decisions
// ============================================================================

fn bench_origin_filter_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("origin-filter");
    group.measurement_time(Duration::from_secs(5));

    let origin: IpAddr = "10.1.2.3".parse().unwrap();

    let filter = OriginFilter::default();
    filter.allow_network("10.0.0.0/8").expect("valid block");
    filter.is_allowed(origin); // warm the cache
    group.bench_function("decision_cached", |b| {
        b.iter(|| black_box(filter.is_allowed(black_box(origin))))
    });

    group.bench_function("decision_cold", |b| {
        b.iter_batched(
            || {
                let filter = OriginFilter::default();
                filter.allow_network("10.0.0.0/8").expect("valid block");
                filter
            },
            |filter| black_box(filter.is_allowed(black_box(origin))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_network_set_contains,
    bench_origin_filter_decisions
);
criterion_main!(benches);
