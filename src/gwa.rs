use crate::error::{GwaError, GwaResult};
use crate::subject::{EntryMode, Subject};
use serde::Serialize;
use tracing::debug;

/// Units-weighted mean of the subjects' grade points.
///
/// An empty slice (or one whose units add up to zero) has no average and is
/// reported as [`GwaError::EmptySubjectList`].
pub fn calculate_gwa(subjects: &[Subject]) -> GwaResult<f64> {
    let (weighted_points, total_units) =
        subjects.iter().fold((0.0_f64, 0_u64), |(points, units), subject| {
            (
                points + subject.grade_point() * f64::from(subject.units()),
                units + u64::from(subject.units()),
            )
        });

    if total_units == 0 {
        return Err(GwaError::EmptySubjectList);
    }

    let gwa = weighted_points / total_units as f64;
    debug!(
        subjects = subjects.len(),
        total_units, gwa, "computed general weighted average"
    );
    Ok(gwa)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub name: String,
    pub units: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_percentage: Option<f64>,
    pub grade_point: f64,
}

impl From<&Subject> for SubjectResult {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            units: subject.units(),
            weighted_percentage: subject.weighted_percentage(),
            grade_point: subject.grade_point(),
        }
    }
}

/// Everything the end-of-round report shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub mode: EntryMode,
    pub subjects: Vec<SubjectResult>,
    pub total_units: u64,
    pub gwa: f64,
}

pub fn summarize(mode: EntryMode, subjects: &[Subject]) -> GwaResult<RoundSummary> {
    let gwa = calculate_gwa(subjects)?;
    Ok(RoundSummary {
        mode,
        subjects: subjects.iter().map(SubjectResult::from).collect(),
        total_units: subjects.iter().map(|s| u64::from(s.units())).sum(),
        gwa,
    })
}
