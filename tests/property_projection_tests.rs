use policy_dash::core::{
    project, shade_region, Period, PeriodWindow, RangeConfig, SeriesInput, SeriesKind, SeriesPoint,
};
use proptest::prelude::*;

fn series_from(values: &[f64], start_index: i64) -> SeriesInput {
    SeriesInput {
        name: "s".to_owned(),
        kind: SeriesKind::Primary,
        points: values
            .iter()
            .enumerate()
            .map(|(i, &value)| SeriesPoint {
                period: Period::from_index(start_index + i as i64),
                value,
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn projected_points_stay_in_the_unit_square_property(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..60),
        start_year in 1900i64..2100
    ) {
        let start = Period::from_parts(start_year, 1).expect("valid parts");
        let input = series_from(&values, start.index());
        let frame = project(&[input], &PeriodWindow::open()).expect("frame");
        for series in &frame.series {
            for point in &series.points {
                prop_assert!((0.0..=1.0).contains(&point.x), "x = {}", point.x);
                prop_assert!((0.0..=1.0).contains(&point.y), "y = {}", point.y);
            }
        }
        prop_assert!(frame.min_value < frame.max_value);
        prop_assert!(frame.min_index <= frame.max_index);
    }

    #[test]
    fn value_bounds_cover_every_input_value_property(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..60)
    ) {
        let start = Period::parse("2019Q4").expect("valid label");
        let input = series_from(&values, start.index());
        let frame = project(&[input], &PeriodWindow::open()).expect("frame");
        for &value in &values {
            prop_assert!(frame.min_value <= value && value <= frame.max_value);
        }
    }

    #[test]
    fn shade_region_is_ordered_and_clipped_property(
        len in 2usize..60,
        shade_span in 0i64..80
    ) {
        let start = Period::parse("2018Q1").expect("valid label");
        let values: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let input = series_from(&values, start.index());
        let frame = project(&[input], &PeriodWindow::open()).expect("frame");

        let ranges = RangeConfig {
            plot_min: start.label(),
            plot_max: Period::from_index(start.index() + len as i64 - 1).label(),
            actual_max: Period::from_index(start.index() + shade_span).label(),
            ..RangeConfig::default()
        };
        if let Some(region) = shade_region(&ranges, &frame) {
            prop_assert!(region.x0 <= region.x1);
            prop_assert!((0.0..=1.0).contains(&region.x0));
            prop_assert!((0.0..=1.0).contains(&region.x1));
        }
    }

    #[test]
    fn window_filtering_never_widens_bounds_property(
        values in prop::collection::vec(-100.0f64..100.0, 8..40)
    ) {
        let start = Period::parse("2019Q4").expect("valid label");
        let input = series_from(&values, start.index());
        let open = project(&[input.clone()], &PeriodWindow::open()).expect("open frame");
        let window = PeriodWindow {
            min: Some(Period::from_index(start.index() + 2)),
            max: Some(Period::from_index(start.index() + 5)),
        };
        if let Some(narrow) = project(&[input], &window) {
            prop_assert!(narrow.min_index >= open.min_index);
            prop_assert!(narrow.max_index <= open.max_index);
        }
    }
}
