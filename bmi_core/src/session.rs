//! Event handlers invoked by a UI shell.
//!
//! Each handler runs one user action to completion: submit the form, save
//! the current result, load past results, or clear the store. Missing-store
//! conditions come back as user-facing [`Notice`]s; storage faults
//! propagate as errors.

use crate::engine::{advisories, assess};
use crate::gauge::Gauge;
use crate::store::RecordStore;
use crate::{Advisory, BmiResult, Error, Gender, Measurement, Record, Result};

/// Shown when height or weight give no BMI
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid height and weight to calculate BMI.";
/// Shown when loading or clearing a store that was never written
pub const NO_DATA_MESSAGE: &str = "No data found. Please save data first.";
pub const SAVED_MESSAGE: &str = "Data saved successfully!";
pub const CLEARED_MESSAGE: &str = "Data cleared successfully!";

/// Accepted age range on the form
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 110;

/// Severity of a user-facing message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the shell to display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    fn no_data() -> Self {
        Self::new(NoticeLevel::Error, NO_DATA_MESSAGE)
    }
}

/// Everything collected by one form submission
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormInput {
    pub measurement: Measurement,
    pub age: u8,
    pub gender: Gender,
}

/// A valid result ready for display or saving
#[derive(Clone, Debug, PartialEq)]
pub struct Assessment {
    pub result: BmiResult,
    pub advisories: Vec<Advisory>,
    pub gauge: Gauge,
    pub record: Record,
}

impl Assessment {
    pub fn bmi(&self) -> f64 {
        self.record.bmi
    }
}

/// Outcome of a submit event
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Computed(Assessment),
    Invalid(Notice),
}

/// Outcome of a load event
#[derive(Clone, Debug, PartialEq)]
pub enum Loaded {
    Records(Vec<Record>),
    NoData(Notice),
}

/// Check the form's range constraints
pub fn validate_input(age: u8, height: f64, weight: f64) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::InvalidInput(format!(
            "age must be between {} and {}, got {}",
            MIN_AGE, MAX_AGE, age
        )));
    }
    validate_amount("height", height)?;
    validate_amount("weight", weight)
}

/// A height or weight must be a finite, non-negative number
pub fn validate_amount(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

/// One user's interaction with the calculator over a store
pub struct Session<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compute the result for a submitted form
    ///
    /// Out-of-range input never reaches the engine, so every computed
    /// record satisfies the age and amount constraints.
    pub fn submit(&self, input: &FormInput) -> Submission {
        let measurement = &input.measurement;
        if let Err(e) = validate_input(input.age, measurement.height, measurement.weight) {
            tracing::warn!("Rejected form input: {}", e);
            return Submission::Invalid(Notice::new(NoticeLevel::Warning, e.to_string()));
        }

        let result = assess(measurement);

        let bmi = match result.bmi {
            Some(bmi) if result.is_valid() => bmi,
            _ => {
                return Submission::Invalid(Notice::new(
                    NoticeLevel::Warning,
                    INVALID_INPUT_MESSAGE,
                ))
            }
        };

        let record = Record {
            age: input.age,
            gender: input.gender,
            height: input.measurement.height,
            weight: input.measurement.weight,
            bmi,
            category: result.category,
        };

        Submission::Computed(Assessment {
            result,
            advisories: advisories(input.age, input.gender, bmi),
            gauge: Gauge::for_bmi(result.bmi),
            record,
        })
    }

    /// Persist the record of a computed assessment
    pub fn save(&mut self, assessment: &Assessment) -> Result<Notice> {
        self.store.append(&assessment.record)?;
        Ok(Notice::new(NoticeLevel::Success, SAVED_MESSAGE))
    }

    /// Load all saved records ("Load Data" and "Past Results")
    pub fn load(&self) -> Result<Loaded> {
        match self.store.load_all() {
            Ok(records) => Ok(Loaded::Records(records)),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Load on absent store: {}", e);
                Ok(Loaded::NoData(Notice::no_data()))
            }
            Err(e) => Err(e),
        }
    }

    /// Truncate the store
    pub fn clear(&mut self) -> Result<Notice> {
        match self.store.clear() {
            Ok(()) => Ok(Notice::new(NoticeLevel::Success, CLEARED_MESSAGE)),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Clear on absent store: {}", e);
                Ok(Notice::no_data())
            }
            Err(e) => Err(e),
        }
    }
}
