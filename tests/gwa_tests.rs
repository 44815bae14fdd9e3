use gwacalc::error::GwaError;
use gwacalc::gwa::{calculate_gwa, summarize};
use gwacalc::subject::{ComponentGrades, ComponentWeights, EntryMode, Subject};

#[test]
fn test_gwa_weights_by_units() {
    let subjects = vec![Subject::direct("Math", 3, 1.5), Subject::direct("Physics", 5, 2.0)];
    let gwa = calculate_gwa(&subjects).unwrap();
    // (3 * 1.5 + 5 * 2.0) / 8
    assert!((gwa - 1.8125).abs() < 1e-12);
    assert_eq!(format!("{:.2}", gwa), "1.81");
}

#[test]
fn test_gwa_single_subject_is_its_point() {
    let subjects = vec![Subject::direct("PE", 2, 2.25)];
    assert_eq!(calculate_gwa(&subjects).unwrap(), 2.25);
}

#[test]
fn test_gwa_mixes_weighted_and_direct() {
    let weights = ComponentWeights::new(0.3, 0.3, 0.4).unwrap();
    let calc = Subject::weighted(
        "Calc",
        3,
        weights,
        ComponentGrades {
            prelim: 90.0,
            midterm: 85.0,
            finals: 88.0,
        },
    );
    let subjects = vec![calc, Subject::direct("Art", 1, 1.0)];
    // (2.0 * 3 + 1.0 * 1) / 4
    assert_eq!(calculate_gwa(&subjects).unwrap(), 1.75);
}

#[test]
fn test_gwa_empty_is_error() {
    assert!(matches!(calculate_gwa(&[]), Err(GwaError::EmptySubjectList)));
}

#[test]
fn test_gwa_zero_units_is_error() {
    let subjects = vec![Subject::direct("Audit", 0, 1.0)];
    assert!(matches!(
        calculate_gwa(&subjects),
        Err(GwaError::EmptySubjectList)
    ));
}

#[test]
fn test_summary_keeps_entry_order() {
    let subjects = vec![
        Subject::direct("B", 2, 3.0),
        Subject::direct("A", 1, 1.0),
        Subject::direct("C", 1, 2.0),
    ];
    let summary = summarize(EntryMode::Direct, &subjects).unwrap();

    let names: Vec<&str> = summary.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["B", "A", "C"]);
    assert_eq!(summary.total_units, 4);
    assert_eq!(summary.gwa, 2.25);
    assert!(summary.subjects.iter().all(|s| s.weighted_percentage.is_none()));
}
