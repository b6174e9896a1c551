//! Benchmarks for event construction, sharing and downcasting
//!
//! Covers:
//! - Typed constructor cost (structure building plus Arc allocation)
//! - EventRef cloning overhead for shared ownership
//! - Downcast and classify cost for every typed view
//! - Deep copies of payload-carrying events
//!
//! Platform: Cross-platform, CI-safe

use criterion::{Criterion, criterion_group, criterion_main};
use pipevent::test_utils::sample_events;
use pipevent::{ClockTime, Format, QosEvent, SeekEvent, SeekFlags, SeekType};
use std::hint::black_box;

fn bench_typed_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_construction");

    group.bench_function("seek", |b| {
        b.iter(|| {
            let seek = SeekEvent::create(
                black_box(1.0),
                Format::Time,
                SeekFlags::FLUSH | SeekFlags::KEY_UNIT,
                SeekType::Set,
                black_box(1_000_000_000),
                SeekType::None,
                -1,
            );
            black_box(seek)
        })
    });

    group.bench_function("qos", |b| {
        b.iter(|| {
            let qos = QosEvent::create(black_box(0.95), black_box(-500), ClockTime::from_mseconds(40));
            black_box(qos)
        })
    });

    group.finish();
}

fn bench_sharing(c: &mut Criterion) {
    let events = sample_events();

    c.bench_function("event_ref_clone", |b| {
        b.iter(|| {
            for event in &events {
                black_box(event.clone());
            }
        })
    });

    c.bench_function("event_deep_copy", |b| {
        b.iter(|| {
            for event in &events {
                black_box(event.copy());
            }
        })
    });
}

fn bench_downcasting(c: &mut Criterion) {
    let events = sample_events();

    c.bench_function("downcast_seek_hit_and_miss", |b| {
        b.iter(|| {
            for event in &events {
                black_box(event.downcast::<SeekEvent>());
            }
        })
    });

    c.bench_function("classify_all", |b| {
        b.iter(|| {
            for event in &events {
                black_box(event.classify());
            }
        })
    });
}

criterion_group!(benches, bench_typed_construction, bench_sharing, bench_downcasting);
criterion_main!(benches);
