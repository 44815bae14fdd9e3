/// One row of the percentage-to-point conversion table. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub low: f64,
    pub high: f64,
    pub point: f64,
}

impl GradeBand {
    const fn new(low: f64, high: f64, point: f64) -> Self {
        Self { low, high, point }
    }

    pub fn contains(&self, pct: f64) -> bool {
        self.low <= pct && pct <= self.high
    }
}

/// Point assigned to anything that falls outside every band (failed).
pub const FAILING_POINT: f64 = 5.0;

// 1.0 is the best grade. There is no 4.0 band.
pub const GRADE_BANDS: [GradeBand; 10] = [
    GradeBand::new(98.0, 100.0, 1.0),
    GradeBand::new(95.0, 97.99, 1.25),
    GradeBand::new(92.0, 94.99, 1.5),
    GradeBand::new(89.0, 91.99, 1.75),
    GradeBand::new(85.0, 88.99, 2.0),
    GradeBand::new(82.0, 84.99, 2.25),
    GradeBand::new(80.0, 81.99, 2.5),
    GradeBand::new(77.0, 79.99, 2.75),
    GradeBand::new(75.0, 76.99, 3.0),
    GradeBand::new(0.0, 74.99, FAILING_POINT),
];

/// Converts a percentage grade to the point scale.
///
/// Bands are scanned in table order and the first match wins. Values in the
/// hundredth-wide gaps between bands, negatives, values above 100 and NaN all
/// map to [`FAILING_POINT`].
pub fn percentage_to_point(pct: f64) -> f64 {
    GRADE_BANDS
        .iter()
        .find(|band| band.contains(pct))
        .map_or(FAILING_POINT, |band| band.point)
}
