//! Progress banding derived from the step index.

/// Three-tier colour band of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// Below 33 percent.
    Low,
    /// From 33 up to 66 percent.
    Medium,
    /// 66 percent and above.
    High,
}

impl ProgressBand {
    /// Band for an unrounded progress value in percent.
    #[must_use]
    pub fn for_progress(percent: f64) -> Self {
        if percent < 33.0 {
            ProgressBand::Low
        } else if percent < 66.0 {
            ProgressBand::Medium
        } else {
            ProgressBand::High
        }
    }

    /// Colour name a renderer may map to a style.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            ProgressBand::Low => "red",
            ProgressBand::Medium => "yellow",
            ProgressBand::High => "green",
        }
    }
}
