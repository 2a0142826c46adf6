use super::*;

#[test]
fn range_defaults_to_seven_days() {
    let mut state = DashboardState::default();
    assert_eq!(state.range, DateRange::Week);
    state.select_range("90d");
    assert_eq!(state.range, DateRange::Quarter);
    state.select_range("forever");
    assert_eq!(state.range, DateRange::Week);
}

#[test]
fn chart_scaling_uses_the_largest_value() {
    let state = DashboardState::default();
    let activity = &state.charts[0];
    assert_eq!(activity.series, vec!["Active".to_owned(), "New".to_owned()]);
    assert_eq!(activity.max_value(), 9800);
    assert_eq!(activity.percent(4900), 50);
}

#[test]
fn empty_chart_does_not_divide_by_zero() {
    let chart = Chart { title: "Empty".to_owned(), series: Vec::new(), points: Vec::new() };
    assert_eq!(chart.max_value(), 1);
    assert_eq!(chart.percent(0), 0);
}

#[test]
fn analytics_fixture_and_stickiness() {
    let analytics = DashboardState::default().analytics;
    assert_eq!(analytics.total_users, 12_543);
    assert_eq!(analytics.countries.len(), 5);
    assert_eq!(analytics.recent_activity[2].kind, FeedKind::Report);
    assert_eq!(analytics.stickiness(), 26);
}
