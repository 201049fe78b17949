//! Plain data row types written by output backends.

/// Which macroscopic quantity a sample holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Density,
    VelocityX,
    VelocityY,
}

impl Quantity {
    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Density   => "density",
            Quantity::VelocityX => "ux",
            Quantity::VelocityY => "uy",
        }
    }
}

/// One sampled value at one cell.  Point probes produce one row per
/// quantity; cut probes produce one row per quantity per cell of the cut.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub step:     u64,
    /// Label of the probe that produced the sample.
    pub probe:    String,
    pub x:        usize,
    pub y:        usize,
    pub quantity: Quantity,
    pub value:    f64,
}

/// Whole-grid statistics at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub step:         u64,
    pub total_mass:   f64,
    pub mean_density: f64,
    pub max_speed:    f64,
}
