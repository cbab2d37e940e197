use criterion::{Criterion, criterion_group, criterion_main};
use polygon_chart::api::{ChartConfig, LayoutCache, PolygonChartLayout};
use polygon_chart::core::{AttributeSet, Viewport};
use polygon_chart::render::NullRenderer;
use polygon_chart::render::Renderer;
use std::hint::black_box;

fn octagon_attributes() -> AttributeSet {
    AttributeSet::from_pairs((0..8).map(|index| (format!("attr{index}"), index as f64 / 7.0)))
}

fn bench_octagon_layout_12_rings(c: &mut Criterion) {
    let config = ChartConfig::new(8, 12);
    let attributes = octagon_attributes();
    let viewport = Viewport::new(1080.0, 1080.0);

    c.bench_function("octagon_layout_12_rings", |b| {
        b.iter(|| {
            let _ = PolygonChartLayout::build(
                black_box(&config),
                black_box(&attributes),
                black_box(viewport),
            )
            .expect("layout should succeed");
        })
    });
}

fn bench_every_arity_layout_and_validate(c: &mut Criterion) {
    let viewport = Viewport::new(640.0, 640.0);
    let inputs: Vec<(ChartConfig, AttributeSet)> = (3u8..=8)
        .map(|arity| {
            let attributes = AttributeSet::from_pairs(
                (0..arity).map(|index| (format!("a{index}"), f64::from(index) * 0.15)),
            );
            (ChartConfig::new(arity, 5), attributes)
        })
        .collect();

    c.bench_function("every_arity_layout_and_validate", |b| {
        b.iter(|| {
            let mut renderer = NullRenderer::default();
            for (config, attributes) in &inputs {
                let frame = PolygonChartLayout::build(config, attributes, viewport)
                    .expect("layout should succeed");
                renderer.render(black_box(&frame)).expect("valid frame");
            }
        })
    });
}

fn bench_cached_layout_lookup(c: &mut Criterion) {
    let config = ChartConfig::new(8, 12);
    let attributes = octagon_attributes();
    let viewport = Viewport::new(1080.0, 1080.0);
    let mut cache = LayoutCache::new();

    c.bench_function("cached_layout_lookup", |b| {
        b.iter(|| {
            let _ = cache
                .get_or_build(black_box(&config), black_box(&attributes), viewport)
                .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_octagon_layout_12_rings,
    bench_every_arity_layout_and_validate,
    bench_cached_layout_lookup
);
criterion_main!(benches);
