use gradient_area_rs::RenderConfig;
use gradient_area_rs::api::resolve_value_domain;
use gradient_area_rs::core::DataSet;

fn data_set(values: &[f64]) -> DataSet {
    let categories = (0..values.len()).map(|index| format!("c{index}")).collect();
    DataSet::from_columns(categories, values.to_vec()).expect("data set")
}

#[test]
fn auto_bounds_come_from_the_data() {
    let domain =
        resolve_value_domain(&RenderConfig::default(), &data_set(&[10.0, 20.0, 5.0, 40.0]))
            .expect("domain");

    assert_eq!(domain.min, 5.0);
    assert_eq!(domain.max, 40.0);
    assert!(!domain.expanded_degenerate);
}

#[test]
fn configured_bounds_override_the_data() {
    let config = RenderConfig::default().with_value_range(Some(0.0), Some(100.0));
    let domain = resolve_value_domain(&config, &data_set(&[10.0, 20.0])).expect("domain");

    assert_eq!(domain.min, 0.0);
    assert_eq!(domain.max, 100.0);
}

#[test]
fn each_bound_resolves_independently() {
    let config = RenderConfig::default().with_value_range(Some(0.0), None);
    let domain = resolve_value_domain(&config, &data_set(&[10.0, 20.0, 5.0])).expect("domain");

    assert_eq!(domain.min, 0.0);
    assert_eq!(domain.max, 20.0);
}

#[test]
fn constant_series_widens_by_one_unit_per_side() {
    let domain =
        resolve_value_domain(&RenderConfig::default(), &data_set(&[7.0, 7.0, 7.0])).expect("domain");

    assert_eq!(domain.min, 6.0);
    assert_eq!(domain.max, 8.0);
    assert!(domain.expanded_degenerate);
}

#[test]
fn equal_configured_bounds_also_widen() {
    let config = RenderConfig::default().with_value_range(Some(3.0), Some(3.0));
    let domain = resolve_value_domain(&config, &data_set(&[1.0, 2.0])).expect("domain");

    assert_eq!(domain.min, 2.0);
    assert_eq!(domain.max, 4.0);
    assert!(domain.expanded_degenerate);
}

#[test]
fn auto_bounds_skip_non_finite_samples() {
    let domain = resolve_value_domain(
        &RenderConfig::default(),
        &data_set(&[f64::NAN, 10.0, 30.0, f64::INFINITY]),
    )
    .expect("domain");

    assert_eq!(domain.min, 10.0);
    assert_eq!(domain.max, 30.0);
}

#[test]
fn all_non_finite_values_cannot_auto_resolve() {
    let result = resolve_value_domain(&RenderConfig::default(), &data_set(&[f64::NAN, f64::NAN]));
    assert!(result.is_err());
}
