use super::*;

#[test]
fn mean_matches_arithmetic_average() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
}

#[test]
fn mean_of_empty_is_zero() {
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn median_odd_count_picks_middle() {
    assert_eq!(median(&[1.0, 3.0, 5.0, 7.0, 9.0]), 5.0);
}

#[test]
fn median_even_count_averages_middle_pair() {
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
}

#[test]
fn median_ignores_input_order() {
    assert_eq!(median(&[9.0, 1.0, 7.0, 3.0, 5.0]), 5.0);
    assert_eq!(median(&[5.0, 7.0, 9.0, 3.0, 1.0]), 5.0);
}

#[test]
fn median_of_empty_is_zero() {
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn sample_std_reference_value() {
    let got = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!((got - 1.5811388300841898).abs() < 1e-12);
}

#[test]
fn sample_std_degenerate_inputs_are_zero() {
    assert_eq!(sample_std(&[]), 0.0);
    assert_eq!(sample_std(&[7.0]), 0.0);
}

#[test]
fn sample_std_of_constant_column_is_zero() {
    assert_eq!(sample_std(&[4.0, 4.0, 4.0]), 0.0);
}

#[test]
fn describe_bundles_all_stats() {
    let stats = describe(&[1.0, 2.0, 3.0]);
    assert_eq!(stats.n, 3);
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.median, 2.0);
    assert!((stats.std_dev - 1.0).abs() < 1e-12);
}
