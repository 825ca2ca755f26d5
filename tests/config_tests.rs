use gradient_area_rs::config::{FormattingModel, FormattingSlice, RenderConfig};
use gradient_area_rs::core::DisplayUnits;

#[test]
fn empty_json_resolves_to_documented_defaults() {
    let config = RenderConfig::from_json_str("{}").expect("parse");

    assert_eq!(config, RenderConfig::default());
    assert_eq!(config.default_color, None);
    assert!(config.show_all_data_points);
    assert_eq!(config.font_size, 12);
    assert!(!config.smooth_line);
    assert!(config.show_markers);
    assert_eq!(config.marker_size, 4);
    assert_eq!(config.min_range, None);
    assert_eq!(config.max_range, None);
    assert_eq!(config.y_axis_display_units, DisplayUnits::Auto);
    assert_eq!(config.y_axis_decimal_places, 2);
    assert!(config.show_y_axis);
    assert!(config.show_x_axis);
    assert_eq!(config.y_axis_font_size, 12);
    assert_eq!(config.x_axis_font_size, 12);
}

#[test]
fn partial_json_keeps_defaults_for_absent_fields() {
    let config = RenderConfig::from_json_str(
        r#"{"smooth_line": true, "min_range": -5.0, "y_axis_display_units": "Millions"}"#,
    )
    .expect("parse");

    assert!(config.smooth_line);
    assert_eq!(config.min_range, Some(-5.0));
    assert_eq!(config.y_axis_display_units, DisplayUnits::Millions);
    assert_eq!(config.y_axis_decimal_places, 2);
    assert!(config.show_y_axis);
}

#[test]
fn config_round_trips_through_json() {
    let config = RenderConfig::default()
        .with_series_color("#123456")
        .with_gradient_colors("#0078d7", "#ffffff")
        .with_value_range(Some(0.0), Some(250.0))
        .with_display_units(DisplayUnits::Thousands)
        .with_decimal_places(1)
        .with_smooth_line(true)
        .with_axis_visibility(false, true);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = RenderConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn reserved_options_round_trip_untouched() {
    let config = RenderConfig::from_json_str(
        r#"{"show_all_data_points": false, "font_size": 20, "marker_size": 9, "y_axis_font_size": 8}"#,
    )
    .expect("parse");

    assert!(!config.show_all_data_points);
    assert_eq!(config.font_size, 20);
    assert_eq!(config.marker_size, 9);
    assert_eq!(config.y_axis_font_size, 8);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = RenderConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn formatting_model_exposes_the_three_property_cards() {
    let model = FormattingModel::from_config(&RenderConfig::default());

    assert_eq!(model.cards.len(), 3);
    assert_eq!(model.cards[0].name, "generalSettings");
    assert_eq!(
        model.cards[0].display_name,
        "Data Point and Gradient Settings"
    );
    assert_eq!(model.cards[1].name, "yAxisSettings");
    assert_eq!(model.cards[1].display_name, "Y Axis");
    assert_eq!(model.cards[2].name, "xAxisSettings");
    assert_eq!(model.cards[2].display_name, "X Axis");

    assert_eq!(model.cards[0].slices.len(), 8);
    assert_eq!(model.cards[1].slices.len(), 6);
    assert_eq!(model.cards[2].slices.len(), 2);
}

#[test]
fn display_units_dropdown_lists_all_five_choices() {
    let model = FormattingModel::from_config(
        &RenderConfig::default().with_display_units(DisplayUnits::Billions),
    );

    let dropdown = model.cards[1]
        .slices
        .iter()
        .find_map(|slice| match slice {
            FormattingSlice::ItemDropdown { name, items, value, .. }
                if name == "yAxisDisplayUnits" =>
            {
                Some((items.clone(), value.clone()))
            }
            _ => None,
        })
        .expect("display units dropdown");

    assert_eq!(
        dropdown.0,
        vec!["Auto", "Thousands", "Millions", "Billions", "Trillions"]
    );
    assert_eq!(dropdown.1, "Billions");
}

#[test]
fn formatting_model_mirrors_configured_values() {
    let config = RenderConfig::default()
        .with_series_color("#ff00ff")
        .with_value_range(Some(10.0), None);
    let model = FormattingModel::from_config(&config);

    let color = model.cards[0]
        .slices
        .iter()
        .find_map(|slice| match slice {
            FormattingSlice::ColorPicker { name, value, .. } if name == "defaultColor" => {
                Some(value.clone())
            }
            _ => None,
        })
        .expect("default color slice");
    assert_eq!(color, Some("#ff00ff".to_owned()));

    let min_range = model.cards[1]
        .slices
        .iter()
        .find_map(|slice| match slice {
            FormattingSlice::NumUpDown { name, value, .. } if name == "minRange" => Some(*value),
            _ => None,
        })
        .expect("min range slice");
    assert_eq!(min_range, Some(10.0));
}

#[test]
fn formatting_model_serializes_for_the_host() {
    let model = FormattingModel::from_config(&RenderConfig::default());
    let json = serde_json::to_string(&model).expect("serialize");

    assert!(json.contains("\"yAxisDisplayUnits\""));
    assert!(json.contains("\"ToggleSwitch\""));
}
