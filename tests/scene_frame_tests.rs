use gradient_area_rs::api::AreaChartEngine;
use gradient_area_rs::config::RenderConfig;
use gradient_area_rs::core::{DataSet, PathCommand, Viewport};
use gradient_area_rs::error::ChartError;
use gradient_area_rs::render::{NullRenderer, RenderFrame};

fn data_set(values: &[f64]) -> DataSet {
    let categories = (0..values.len()).map(|index| format!("c{index}")).collect();
    DataSet::from_columns(categories, values.to_vec()).expect("data set")
}

fn last_frame(engine: &AreaChartEngine<NullRenderer>) -> RenderFrame {
    engine
        .renderer()
        .last_frame
        .clone()
        .expect("frame rendered")
}

#[test]
fn non_empty_render_produces_one_area_path_and_one_two_stop_gradient() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    engine
        .render(
            Viewport::new(800, 600),
            RenderConfig::default(),
            data_set(&[10.0, 20.0, 5.0, 40.0]),
        )
        .expect("render");

    let frame = last_frame(&engine);
    assert_eq!(frame.area_paths.len(), 1);
    assert_eq!(frame.gradients.len(), 1);
    assert_eq!(frame.gradients[0].stops.len(), 2);
    assert!((frame.gradients[0].stops[0].color.alpha - 0.7).abs() <= 1e-9);
    assert!((frame.gradients[0].stops[1].color.alpha - 0.3).abs() <= 1e-9);
}

#[test]
fn axis_groups_follow_the_visibility_flags() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let viewport = Viewport::new(800, 600);
    let data = data_set(&[1.0, 2.0, 3.0]);

    engine
        .render(viewport, RenderConfig::default(), data.clone())
        .expect("render");
    let frame = last_frame(&engine);
    assert!(frame.x_axis.is_some());
    assert!(frame.y_axis.is_some());

    let config = RenderConfig::default().with_axis_visibility(false, true);
    engine.render(viewport, config, data.clone()).expect("render");
    let frame = last_frame(&engine);
    assert!(frame.x_axis.is_none());
    assert!(frame.y_axis.is_some());

    let config = RenderConfig::default().with_axis_visibility(true, false);
    engine.render(viewport, config, data).expect("render");
    let frame = last_frame(&engine);
    assert!(frame.x_axis.is_some());
    assert!(frame.y_axis.is_none());
}

#[test]
fn gridline_count_follows_the_height_budget() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let data = data_set(&[1.0, 2.0]);

    // floor(600 / 80) = 7 gridlines with labels to match.
    engine
        .render(Viewport::new(800, 600), RenderConfig::default(), data.clone())
        .expect("render");
    let y_axis = last_frame(&engine).y_axis.expect("y axis");
    assert_eq!(y_axis.grid_lines.len(), 7);
    assert_eq!(y_axis.labels.len(), 7);

    // Squat viewports degrade to a single tick, never zero.
    engine
        .render(Viewport::new(800, 100), RenderConfig::default(), data)
        .expect("render");
    let y_axis = last_frame(&engine).y_axis.expect("y axis");
    assert_eq!(y_axis.grid_lines.len(), 1);
}

#[test]
fn gridlines_are_dashed_and_span_the_plot_width() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    engine
        .render(
            Viewport::new(800, 600),
            RenderConfig::default(),
            data_set(&[1.0, 2.0]),
        )
        .expect("render");

    let y_axis = last_frame(&engine).y_axis.expect("y axis");
    for line in &y_axis.grid_lines {
        assert_eq!(line.dash, Some((3.0, 3.0)));
        assert!((line.x1 - 40.0).abs() <= 1e-9);
        assert!((line.x2 - 760.0).abs() <= 1e-9);
        assert!((line.stroke_width - 0.8).abs() <= 1e-9);
    }
}

#[test]
fn x_axis_carries_labels_only() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    engine
        .render(
            Viewport::new(800, 600),
            RenderConfig::default(),
            data_set(&[1.0, 2.0, 3.0]),
        )
        .expect("render");

    let x_axis = last_frame(&engine).x_axis.expect("x axis");
    assert!(x_axis.grid_lines.is_empty());
    assert_eq!(x_axis.labels.len(), 3);
}

#[test]
fn rendering_twice_with_identical_inputs_yields_identical_frames() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let viewport = Viewport::new(640, 480);
    let config = RenderConfig::default().with_smooth_line(true);
    let data = data_set(&[3.0, 1.0, 4.0, 1.0, 5.0]);

    engine
        .render(viewport, config.clone(), data.clone())
        .expect("first render");
    let first = last_frame(&engine);

    engine.render(viewport, config, data).expect("second render");
    let second = last_frame(&engine);

    assert_eq!(first, second);
}

#[test]
fn empty_dataset_clears_the_scene_without_drawing() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let viewport = Viewport::new(800, 600);

    engine
        .render(viewport, RenderConfig::default(), data_set(&[1.0, 2.0]))
        .expect("render");
    assert!(engine.scene().is_some());

    let empty = DataSet::from_columns(Vec::new(), Vec::new()).expect("empty data set");
    engine
        .render(viewport, RenderConfig::default(), empty)
        .expect("empty render");

    let frame = last_frame(&engine);
    assert!(frame.is_empty());
    assert!(engine.scene().is_none());
}

#[test]
fn constant_series_renders_a_finite_scene() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    engine
        .render(
            Viewport::new(800, 600),
            RenderConfig::default(),
            data_set(&[7.0, 7.0, 7.0]),
        )
        .expect("render");

    let frame = last_frame(&engine);
    assert_eq!(frame.area_paths.len(), 1);
    for command in &frame.area_paths[0].outline {
        if let Some((x, y)) = command.end_point() {
            assert!(x.is_finite());
            assert!(y.is_finite());
        }
    }

    let snapshot = engine.scene().expect("snapshot");
    assert_eq!(snapshot.value_domain.min, 6.0);
    assert_eq!(snapshot.value_domain.max, 8.0);
}

#[test]
fn smooth_line_switches_the_top_edge_interpolation() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let viewport = Viewport::new(800, 600);
    let data = data_set(&[1.0, 5.0, 2.0, 8.0]);

    engine
        .render(viewport, RenderConfig::default(), data.clone())
        .expect("render");
    let straight = last_frame(&engine);
    assert!(
        straight.area_paths[0]
            .outline
            .iter()
            .all(|command| !matches!(command, PathCommand::CurveTo { .. }))
    );

    let config = RenderConfig::default().with_smooth_line(true);
    engine.render(viewport, config, data).expect("render");
    let smooth = last_frame(&engine);
    assert!(
        smooth.area_paths[0]
            .outline
            .iter()
            .any(|command| matches!(command, PathCommand::CurveTo { .. }))
    );
}

#[test]
fn mismatched_columns_fail_fast_at_construction() {
    let result = DataSet::from_columns(vec!["a".to_owned()], vec![1.0, 2.0]);
    assert!(matches!(
        result,
        Err(ChartError::MismatchedDataset {
            categories: 1,
            values: 2
        })
    ));
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let result = engine.render(
        Viewport::new(0, 600),
        RenderConfig::default(),
        data_set(&[1.0]),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn configured_colors_reach_the_scene_with_fallbacks_for_bad_input() {
    let mut engine = AreaChartEngine::new(NullRenderer::default());
    let config = RenderConfig::default()
        .with_series_color("#ff0000")
        .with_gradient_colors("#00ff00", "not-a-color");
    engine
        .render(Viewport::new(800, 600), config, data_set(&[1.0, 2.0]))
        .expect("render");

    let frame = last_frame(&engine);
    let stroke = frame.area_paths[0].stroke_color;
    assert!((stroke.red - 1.0).abs() <= 1e-9);
    assert!((stroke.green - 0.0).abs() <= 1e-9);

    let stops = &frame.gradients[0].stops;
    assert!((stops[0].color.green - 1.0).abs() <= 1e-9);
    // Unparsable end color falls back to the documented white default.
    assert!((stops[1].color.red - 1.0).abs() <= 1e-9);
    assert!((stops[1].color.green - 1.0).abs() <= 1e-9);
    assert!((stops[1].color.blue - 1.0).abs() <= 1e-9);
}
