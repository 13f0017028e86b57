//! BMI computation and classification.
//!
//! Thresholds:
//! - below 18.5 → Underweight
//! - [18.5, 24.9) → Normal weight
//! - [25, 29.9) → Overweight
//! - everything else → Obese
//!
//! Values in [24.9, 25) and [29.9, 30) match no named range and fall through
//! to Obese. That gap is kept as-is pending a product decision on contiguous
//! bounds; tests pin it.

use crate::{Advisory, BmiResult, Category, Gender, Measurement};

/// Compute BMI rounded to two decimals, or `None` when height is not positive
pub fn compute_bmi(height_m: f64, weight_kg: f64) -> Option<f64> {
    if height_m > 0.0 {
        Some(round2(weight_kg / (height_m * height_m)))
    } else {
        None
    }
}

/// Round half away from zero to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify a BMI value
pub fn categorize(bmi: Option<f64>) -> Category {
    let Some(bmi) = bmi else {
        return Category::Invalid;
    };

    if bmi < 18.5 {
        Category::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        Category::Normal
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obese
    }
}

/// Convert, compute and classify one measurement
pub fn assess(measurement: &Measurement) -> BmiResult {
    let (height_m, weight_kg) = measurement.to_metric();
    let bmi = compute_bmi(height_m, weight_kg);

    match bmi {
        Some(value) => tracing::debug!(
            "Computed BMI {} from {} m / {} kg",
            value,
            height_m,
            weight_kg
        ),
        None => tracing::warn!("Non-positive height {} m, BMI undefined", height_m),
    }

    BmiResult::from_bmi(bmi)
}

/// Notes to show alongside a result, age note first
pub fn advisories(age: u8, gender: Gender, bmi: f64) -> Vec<Advisory> {
    let mut notes = Vec::new();

    if age < 18 {
        notes.push(Advisory::Minor);
    } else if age <= 65 {
        notes.push(Advisory::Adult);
    }

    if gender == Gender::Male && bmi > 25.0 {
        notes.push(Advisory::MuscularMale);
    }

    notes
}
