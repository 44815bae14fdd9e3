use gwacalc::scale::{percentage_to_point, FAILING_POINT, GRADE_BANDS};
use rstest::rstest;

#[rstest]
#[case(100.0, 1.0)]
#[case(99.0, 1.0)]
#[case(98.0, 1.0)]
#[case(97.99, 1.25)]
#[case(95.0, 1.25)]
#[case(93.5, 1.5)]
#[case(90.0, 1.75)]
#[case(87.7, 2.0)]
#[case(85.0, 2.0)]
#[case(83.0, 2.25)]
#[case(81.99, 2.5)]
#[case(78.0, 2.75)]
#[case(76.5, 3.0)]
#[case(75.0, 3.0)]
#[case(74.99, 5.0)]
#[case(50.0, 5.0)]
#[case(0.0, 5.0)]
fn test_band_lookup(#[case] pct: f64, #[case] expected: f64) {
    assert_eq!(percentage_to_point(pct), expected, "lookup of {}", pct);
}

#[rstest]
#[case(-0.01)]
#[case(-50.0)]
#[case(100.01)]
#[case(250.0)]
#[case(97.995)] // between [95, 97.99] and [98, 100]
#[case(76.995)]
#[case(74.995)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn test_out_of_table_falls_back_to_failing(#[case] pct: f64) {
    assert_eq!(percentage_to_point(pct), FAILING_POINT);
}

#[test]
fn test_bands_are_ordered_best_first() {
    for pair in GRADE_BANDS.windows(2) {
        assert!(pair[0].low > pair[1].high, "{:?} overlaps {:?}", pair[0], pair[1]);
        assert!(pair[0].point < pair[1].point);
    }
    assert_eq!(GRADE_BANDS[0].high, 100.0);
    assert_eq!(GRADE_BANDS[GRADE_BANDS.len() - 1].low, 0.0);
}
