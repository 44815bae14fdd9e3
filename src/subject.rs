use crate::error::{GwaError, GwaResult};
use crate::scale::percentage_to_point;
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Allowed drift of a weight triple from exactly 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.001;

/// Prelim/midterm/final weights. Only constructible when they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentWeights {
    prelim: f64,
    midterm: f64,
    #[serde(rename = "final")]
    finals: f64,
}

impl ComponentWeights {
    pub fn new(prelim: f64, midterm: f64, finals: f64) -> GwaResult<Self> {
        let sum = prelim + midterm + finals;
        // NaN fails this comparison too, so it is rejected with the rest.
        if !((sum - 1.0).abs() <= WEIGHT_TOLERANCE) {
            return Err(GwaError::WeightSumMismatch(sum));
        }
        Ok(Self {
            prelim,
            midterm,
            finals,
        })
    }

    fn apply(&self, grades: &ComponentGrades) -> f64 {
        grades.prelim * self.prelim + grades.midterm * self.midterm + grades.finals * self.finals
    }
}

/// Component percentages (0-100, unchecked).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentGrades {
    pub prelim: f64,
    pub midterm: f64,
    #[serde(rename = "final")]
    pub finals: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Grading {
    /// Grade point entered as-is, bypassing the conversion table.
    Direct { point: f64 },
    Weighted {
        weights: ComponentWeights,
        grades: ComponentGrades,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    name: String,
    units: u32,
    #[serde(flatten)]
    grading: Grading,
}

impl Subject {
    pub fn direct(name: impl Into<String>, units: u32, point: f64) -> Self {
        Self {
            name: name.into(),
            units,
            grading: Grading::Direct { point },
        }
    }

    pub fn weighted(
        name: impl Into<String>,
        units: u32,
        weights: ComponentWeights,
        grades: ComponentGrades,
    ) -> Self {
        Self {
            name: name.into(),
            units,
            grading: Grading::Weighted { weights, grades },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn grading(&self) -> &Grading {
        &self.grading
    }

    /// Weighted sum of the component percentages. `None` for direct subjects.
    pub fn weighted_percentage(&self) -> Option<f64> {
        match &self.grading {
            Grading::Direct { .. } => None,
            Grading::Weighted { weights, grades } => Some(weights.apply(grades)),
        }
    }

    pub fn grade_point(&self) -> f64 {
        match &self.grading {
            Grading::Direct { point } => *point,
            Grading::Weighted { weights, grades } => percentage_to_point(weights.apply(grades)),
        }
    }
}

/// Which kind of subject a round collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// Component grades first, then GWA.
    #[strum(serialize = "1", to_string = "weighted")]
    Weighted,
    /// Known grade points straight to GWA.
    #[strum(serialize = "2", to_string = "direct")]
    Direct,
}
