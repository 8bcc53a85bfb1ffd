// File: crates/houdini-core/tests/config.rs
// Purpose: Chart descriptor parsing and scale settings.

use houdini_core::{Axis, ChartConfig, ChartError, ChartKind, ScaleModel, ScaleSettings, XAxisType};
use houdini_core::series::XValue;

const LINE: &str = r##"{
    "chartType": "Line",
    "title": "Visitors",
    "options": { "titleAxis": { "x": "Day", "y": "Count" }, "gridColor": "#eee" },
    "data": {
        "scale": { "auto": true },
        "labels": ["Mon", "Tue", "Wed"],
        "datasets": [
            { "name": "web", "color": "#4472C4", "values": [ {"x": 0, "y": 12}, {"x": 1, "y": 30}, {"x": 2, "y": 18} ] }
        ]
    }
}"##;

#[test]
fn parses_line_descriptor() {
    let cfg = ChartConfig::from_json_str(LINE).expect("valid descriptor");
    assert_eq!(cfg.chart_type, ChartKind::Line);
    assert_eq!(cfg.title.as_deref(), Some("Visitors"));
    assert_eq!(cfg.axis_title(Axis::X), Some("Day"));
    assert_eq!(cfg.axis_title(Axis::Y), Some("Count"));
    assert_eq!(cfg.grid_color(), Some("#eee"));
    assert_eq!(cfg.data.x_type, XAxisType::Category);

    let series = &cfg.data.datasets[0];
    assert_eq!(series.color.as_deref(), Some("#4472C4"));
    assert_eq!(series.values[1].x, XValue::Index(1.0));
    assert_eq!(series.ys(), vec![12.0, 30.0, 18.0]);
}

#[test]
fn chart_type_is_case_insensitive() {
    for raw in ["radar", "RADAR", "Radar"] {
        let json = format!(r#"{{"chartType": "{raw}", "data": {{}}}}"#);
        assert_eq!(ChartConfig::from_json_str(&json).unwrap().chart_type, ChartKind::Radar);
    }
    let err = ChartConfig::from_json_str(r#"{"chartType": "pie", "data": {}}"#).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn date_points_keep_their_labels() {
    let json = r#"{
        "chartType": "line",
        "data": {
            "xType": "date",
            "datasets": [ { "name": "d", "values": [ {"x": "2023 Jan 01", "y": 1} ] } ]
        }
    }"#;
    let cfg = ChartConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.data.x_type, XAxisType::Date);
    assert_eq!(cfg.data.datasets[0].dates(), Some(vec!["2023 Jan 01"]));
    assert!(cfg.options.is_none());
    assert_eq!(cfg.axis_title(Axis::X), None);
}

#[test]
fn manual_scale_requires_both_bounds() {
    let missing_max = ScaleSettings { auto: false, min: Some(0.0), max: None };
    assert!(matches!(missing_max.bounds(), Err(ChartError::MissingScaleBound("max"))));
    assert_eq!(ScaleSettings::fixed(-5.0, 5.0).bounds().unwrap(), (-5.0, 5.0));

    let mut cfg = ChartConfig::from_json_str(LINE).unwrap();
    cfg.data.scale = ScaleSettings { auto: false, min: None, max: Some(10.0) };
    assert!(matches!(ScaleModel::build(&cfg.data), Err(ChartError::MissingScaleBound("min"))));
}

#[test]
fn manual_scale_overrides_data_extent() {
    let mut cfg = ChartConfig::from_json_str(LINE).unwrap();
    cfg.data.scale = ScaleSettings::fixed(0.0, 100.0);
    let model = ScaleModel::build(&cfg.data).unwrap();
    assert_eq!(model.nice.nice_maximum, 100.0);
    assert_eq!(model.nice.nice_minimum, 0.0);
}

#[test]
fn missing_file_is_io_error() {
    let err = ChartConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}
