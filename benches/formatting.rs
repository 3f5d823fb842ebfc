// SPDX-License-Identifier: MPL-2.0
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tubegrid::format::{format_duration, format_time_ago, format_views, NumberLocale};

fn formatting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let locale = NumberLocale::english();
    let views = [0u64, 999, 12_345, 999_999, 1_250_000, 3_400_000_000, u64::MAX];
    group.bench_function("format_views", |b| {
        b.iter(|| {
            for count in views {
                black_box(format_views(black_box(count), &locale));
            }
        });
    });

    let durations = [0u64, 59, 65, 3_725, 86_399];
    group.bench_function("format_duration", |b| {
        b.iter(|| {
            for seconds in durations {
                black_box(format_duration(black_box(seconds)));
            }
        });
    });

    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let posted = [
        now - Duration::seconds(30),
        now - Duration::hours(5),
        now - Duration::days(45),
        now - Duration::days(800),
        now + Duration::days(1),
    ];
    group.bench_function("format_time_ago", |b| {
        b.iter(|| {
            for posted_at in posted {
                black_box(format_time_ago(black_box(posted_at), now));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
