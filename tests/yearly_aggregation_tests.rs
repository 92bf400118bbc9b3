use approx::assert_relative_eq;
use policy_dash::api::{yearly_aggregates, DashboardState};
use policy_dash::core::{augment_with_derived_metrics, Dataset, Period, RangeConfig, Row};

fn quarterly_rows(first: &str, count: usize, rate_step: f64) -> Vec<Row> {
    let start = Period::parse(first).expect("valid label");
    (0..count)
        .map(|i| {
            let period = Period::from_index(start.index() + i as i64);
            Row {
                policy_rate: Some(1.0 + rate_step * i as f64),
                output_gap: Some(-2.0 + 0.25 * i as f64),
                ..Row::new(period.label())
            }
        })
        .collect()
}

fn state_with(name: &str, rate_step: f64) -> DashboardState {
    let mut dataset = Dataset::from_rows(quarterly_rows("2019Q4", 13, rate_step));
    augment_with_derived_metrics(&mut dataset);
    let mut state = DashboardState::new();
    state.add_scenario(name, None, dataset).expect("added");
    state
}

#[test]
fn three_full_years_collapse_to_three_rows() {
    let mut state = state_with("base", 0.1);
    let alt_rows = quarterly_rows("2019Q4", 13, 0.2);
    let mut alt = Dataset::from_rows(alt_rows);
    augment_with_derived_metrics(&mut alt);
    state.add_scenario("alt", None, alt).expect("added");

    let ranges = RangeConfig {
        table_min: "2020Q1".to_owned(),
        table_max: "2022Q4".to_owned(),
        ..RangeConfig::default()
    };
    let aggregates = yearly_aggregates(&state, &ranges);
    assert_eq!(aggregates.len(), 2);

    for years in aggregates.values() {
        let listed: Vec<i64> = years.keys().copied().collect();
        assert_eq!(listed, vec![2020, 2021, 2022]);
        for (year, row) in years {
            assert_eq!(row.period, year.to_string());
        }
    }

    // 2019Q4 sits outside the table window and contributes nothing.
    assert!(!aggregates.get("base").expect("base").contains_key(&2019));
}

#[test]
fn yearly_rows_represent_q4_values() {
    let state = state_with("base", 0.1);
    let ranges = RangeConfig {
        table_min: "2020Q1".to_owned(),
        table_max: "2022Q4".to_owned(),
        ..RangeConfig::default()
    };
    let aggregates = yearly_aggregates(&state, &ranges);
    let years = aggregates.get("base").expect("base");

    // 2019Q4 is row 0, so 2020Q4 is row 5: rate 1.0 + 0.1 * 5.
    let y2020 = years.get(&2020).expect("2020");
    assert_relative_eq!(y2020.policy_rate.expect("rate"), 1.5, epsilon = 1e-12);
    let y2022 = years.get(&2022).expect("2022");
    assert_relative_eq!(y2022.policy_rate.expect("rate"), 2.3, epsilon = 1e-12);
}

#[test]
fn yearly_output_gap_is_the_trailing_four_quarter_average() {
    let state = state_with("base", 0.1);
    let ranges = RangeConfig {
        table_min: "2020Q1".to_owned(),
        table_max: "2022Q4".to_owned(),
        ..RangeConfig::default()
    };
    let aggregates = yearly_aggregates(&state, &ranges);
    let y2020 = aggregates
        .get("base")
        .expect("base")
        .get(&2020)
        .expect("2020");

    // Gap values for 2020Q1..2020Q4 are rows 1..=4: -1.75, -1.5, -1.25, -1.0.
    let expected = (-1.75 + -1.5 + -1.25 + -1.0) / 4.0;
    assert_relative_eq!(y2020.output_gap.expect("gap"), expected, epsilon = 1e-12);
}

#[test]
fn partial_years_fall_back_to_the_last_quarter() {
    let mut dataset = Dataset::from_rows(quarterly_rows("2022Q1", 3, 0.1));
    augment_with_derived_metrics(&mut dataset);
    let mut state = DashboardState::new();
    state.add_scenario("stub", None, dataset).expect("added");

    let aggregates = yearly_aggregates(&state, &RangeConfig::default());
    let y2022 = aggregates
        .get("stub")
        .expect("stub")
        .get(&2022)
        .expect("2022");
    assert_relative_eq!(y2022.policy_rate.expect("rate"), 1.2, epsilon = 1e-12);
}
