//! Criterion benchmarks for section generation.
//! Sizes: rows in {4, 16, 48} with 40 seats per row, on random convex outlines.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use seatmap::geom2::rand::{draw_convex_outline, DrawKey, OutlineCfg};
use seatmap::prelude::*;

fn random_section(rows: usize, seed: u64) -> SectionSpec {
    let cfg = OutlineCfg {
        corners: (4, 12),
        half_width: 900.0,
        half_height: 400.0,
        ..OutlineCfg::default()
    };
    let polygon = (0..)
        .find_map(|index| draw_convex_outline(&cfg, DrawKey { seed, index }))
        .map(|p| p.vertices().iter().map(|&v| CanvasPoint::from(v)).collect())
        .unwrap_or_default();
    SectionSpec {
        id: format!("bench-{seed}"),
        name: "Bench".into(),
        zone: Zone::General,
        prefix: "B".into(),
        polygon,
        rows: (0..rows)
            .map(|i| RowSpec::new(format!("R{i}"), 40))
            .collect(),
        row_order: RowOrder::StageToBack,
        declared_total: None,
        strategy: None,
        color: None,
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let cfg = LayoutCfg::default();
    for &rows in &[4usize, 16, 48] {
        for (name, strategy) in [
            ("scan", Strategy::HorizontalScan),
            ("aligned", Strategy::EdgeAligned { edge: 0 }),
        ] {
            group.bench_with_input(BenchmarkId::new(name, rows), &rows, |b, &rows| {
                b.iter_batched(
                    || {
                        let mut s = random_section(rows, 42);
                        s.strategy = Some(strategy);
                        s
                    },
                    |s| black_box(generate_section(&s, &cfg)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
