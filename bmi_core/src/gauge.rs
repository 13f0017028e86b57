//! Gauge model for displaying a BMI on a bounded dial.
//!
//! The axis runs from 10 to 40 with four colored bands. Rendering is left
//! to the shell; this module only answers where a value sits.

/// Displayed axis range
pub const GAUGE_RANGE: (f64, f64) = (10.0, 40.0);

/// A colored band on the gauge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub color: &'static str,
}

impl Band {
    /// Bounds are inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Bands in ascending order
pub static BANDS: [Band; 4] = [
    Band {
        low: 0.0,
        high: 18.5,
        color: "#b3c6e7",
    },
    Band {
        low: 18.5,
        high: 24.9,
        color: "#b6e7b3",
    },
    Band {
        low: 25.0,
        high: 29.9,
        color: "#ffe699",
    },
    Band {
        low: 30.0,
        high: 40.0,
        color: "#ffb3b3",
    },
];

/// A value placed on the gauge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub value: f64,
}

impl Gauge {
    /// Gauge for a result; an undefined BMI shows as 0
    pub fn for_bmi(bmi: Option<f64>) -> Self {
        Self {
            value: bmi.unwrap_or(0.0),
        }
    }

    /// First band containing the value, if any
    pub fn band(&self) -> Option<&'static Band> {
        band_for(self.value)
    }

    /// Fraction of the axis covered by the needle, clamped to [0, 1]
    pub fn position(&self) -> f64 {
        let (low, high) = GAUGE_RANGE;
        ((self.value - low) / (high - low)).clamp(0.0, 1.0)
    }
}

/// First band containing `value`, or `None` in the gaps between bands
pub fn band_for(value: f64) -> Option<&'static Band> {
    BANDS.iter().find(|band| band.contains(value))
}
