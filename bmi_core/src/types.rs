//! Core domain types for the BMI calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Unit systems and raw form measurements
//! - BMI results and weight categories
//! - Persisted records and advisory notes

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Types
// ============================================================================

/// Unit system the height and weight were entered in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

impl UnitSystem {
    /// Label shown in the unit selector
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (cm/kg)",
            UnitSystem::Imperial => "Imperial (in/lb)",
        }
    }

    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender selector value
///
/// The serialized names are the labels written to the record file.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[default]
    #[serde(rename = "Prefer not to say")]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Unspecified => "Prefer not to say",
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Height and weight as entered on one form submission
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub height: f64,
    pub weight: f64,
    pub unit_system: UnitSystem,
}

impl Measurement {
    pub fn new(height: f64, weight: f64, unit_system: UnitSystem) -> Self {
        Self {
            height,
            weight,
            unit_system,
        }
    }

    /// Convert to canonical (meters, kilograms)
    pub fn to_metric(&self) -> (f64, f64) {
        crate::units::convert(self.height, self.weight, self.unit_system)
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Weight status category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    Overweight,
    Obese,
    Invalid,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
            Category::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed BMI and its category
///
/// `category` is always `categorize(bmi)`; build it through
/// [`BmiResult::from_bmi`] to keep the two in step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub bmi: Option<f64>,
    pub category: Category,
}

impl BmiResult {
    pub fn from_bmi(bmi: Option<f64>) -> Self {
        Self {
            bmi,
            category: crate::engine::categorize(bmi),
        }
    }

    /// A BMI was computed and is above zero
    ///
    /// Zero weight gives a defined BMI of 0.0, which is still not a usable
    /// result.
    pub fn is_valid(&self) -> bool {
        self.bmi.is_some_and(|bmi| bmi > 0.0)
    }
}

/// Informational note shown next to a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// Under 18
    Minor,
    /// 18 to 65 inclusive
    Adult,
    /// Male with BMI above 25
    MuscularMale,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::Minor => "As you are underaged, BMI should be interpreted with caution.",
            Advisory::Adult => "As an adult, BMI is a useful tool to assess your weight status.",
            Advisory::MuscularMale => "BMI might overestimate body fat for muscular individuals.",
        }
    }

    /// Warnings are rendered more prominently than plain notes
    pub fn is_warning(self) -> bool {
        matches!(self, Advisory::MuscularMale)
    }
}

// ============================================================================
// Persistence Types
// ============================================================================

/// One saved row of the record file
///
/// Field order is the column order on disk: age, gender, height, weight,
/// bmi, category. Height and weight stay in the units they were entered in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub age: u8,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: Category,
}
