use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use gradient_area_rs::api::AreaChartEngine;
use gradient_area_rs::config::RenderConfig;
use gradient_area_rs::core::{
    DataSet, LinearScale, PointScale, Viewport, project_area_geometry,
};
use gradient_area_rs::render::NullRenderer;

fn synthetic_data(count: usize) -> DataSet {
    let categories: Vec<String> = (0..count).map(|index| format!("cat-{index}")).collect();
    let values: Vec<f64> = (0..count)
        .map(|index| {
            let t = index as f64;
            1_000.0 + (t * 0.17).sin() * 250.0 + t * 0.05
        })
        .collect();
    DataSet::from_columns(categories, values).expect("valid data set")
}

fn bench_linear_scale_mapping(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (1_040.0, 40.0)).expect("valid scale");

    c.bench_function("linear_scale_mapping", |b| {
        b.iter(|| {
            let px = scale
                .value_to_pixel(black_box(4_321.123))
                .expect("to pixel");
            black_box(px)
        })
    });
}

fn bench_area_projection_10k(c: &mut Criterion) {
    let data = synthetic_data(10_000);
    let point_scale = PointScale::new(data.categories(), (40.0, 1_880.0)).expect("point scale");
    let value_scale = LinearScale::new((0.0, 2_500.0), (1_040.0, 40.0)).expect("value scale");

    c.bench_function("area_projection_10k_straight", |b| {
        b.iter(|| {
            let geometry =
                project_area_geometry(&data, &point_scale, value_scale, 0.0, false)
                    .expect("project");
            black_box(geometry.line_points.len())
        })
    });

    c.bench_function("area_projection_10k_smooth", |b| {
        b.iter(|| {
            let geometry =
                project_area_geometry(&data, &point_scale, value_scale, 0.0, true)
                    .expect("project");
            black_box(geometry.outline.len())
        })
    });
}

fn bench_full_render_pass_1k(c: &mut Criterion) {
    let data = synthetic_data(1_000);
    let viewport = Viewport::new(1_920, 1_080);

    c.bench_function("full_render_pass_1k", |b| {
        let mut engine = AreaChartEngine::new(NullRenderer::default());
        b.iter(|| {
            engine
                .render(viewport, RenderConfig::default(), data.clone())
                .expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_mapping,
    bench_area_projection_10k,
    bench_full_render_pass_1k
);
criterion_main!(benches);
