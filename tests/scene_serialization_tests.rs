use policy_dash::core::{project, Period, PeriodWindow, SeriesInput, SeriesKind, SeriesPoint};
use policy_dash::core::axis;
use policy_dash::render::{build_chart_scene, ChartScene, Color, PlotArea, SceneInputs, SceneStyle};

fn sample_scene() -> ChartScene {
    let start = Period::parse("2020Q1").expect("valid label");
    let points: Vec<SeriesPoint> = (0..10)
        .map(|i| SeriesPoint {
            period: Period::from_index(start.index() + i),
            value: 1.0 + 0.25 * i as f64,
        })
        .collect();
    let inputs = vec![SeriesInput {
        name: "base".to_owned(),
        kind: SeriesKind::Primary,
        points,
    }];
    let frame = project(&inputs, &PeriodWindow::open()).expect("frame");
    let periods: Vec<Period> = (0..10).map(|i| Period::from_index(start.index() + i)).collect();
    let plan = axis::plan(&periods);

    let scene_inputs = SceneInputs {
        frame: &frame,
        axis: &plan,
        shade: None,
        title: "Policy Rate (%)",
        y_label: "%",
        series_colors: &[Color::from_hex("#1f77b4")],
        dashed: false,
    };
    let area = PlotArea {
        left: 40.0,
        top: 24.0,
        right: 360.0,
        bottom: 220.0,
    };
    build_chart_scene(&scene_inputs, area, &SceneStyle::default())
}

#[test]
fn scenes_round_trip_through_json() {
    let scene = sample_scene();
    let encoded = serde_json::to_string(&scene).expect("serializes");
    let decoded: ChartScene = serde_json::from_str(&encoded).expect("deserializes");
    assert_eq!(scene, decoded);
}

#[test]
fn scene_json_is_stable_across_rebuilds() {
    let first = serde_json::to_value(sample_scene()).expect("serializes");
    let second = serde_json::to_value(sample_scene()).expect("serializes");
    assert_eq!(first, second);
}
