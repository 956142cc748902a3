// File: crates/heatmap-core/src/bucket.rs
// Summary: Four-way color bucketing of temperature variance.

/// Variance class of a cell. Order matches the legend, coldest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarianceBucket {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl VarianceBucket {
    pub const ALL: [VarianceBucket; 4] = [Self::Cold, Self::Cool, Self::Warm, Self::Hot];

    /// First match wins: `<= -1`, `<= 0`, `< 1`, everything else.
    /// The mixed closed/open bounds are deliberate: 0.0 is Cool and 1.0 is Hot.
    /// NaN fails every comparison and ends up Hot.
    pub fn classify(variance: f64) -> Self {
        if variance <= -1.0 {
            Self::Cold
        } else if variance <= 0.0 {
            Self::Cool
        } else if variance < 1.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// CSS color keyword used for SVG fills and the classic theme.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Cold => "SteelBlue",
            Self::Cool => "LightSteelBlue",
            Self::Warm => "Orange",
            Self::Hot => "Crimson",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Cold => "Variance of -1 or less",
            Self::Cool => "On or Below Average",
            Self::Warm => "Above Average",
            Self::Hot => "Variance of +1 or more",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }
}
