#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI calculator.
//!
//! This crate provides:
//! - Domain types (measurements, results, categories, records)
//! - Unit conversion and the BMI engine
//! - Gauge model for the result display
//! - Persistence (CSV record store, in-memory store)
//! - Event handlers for a UI shell

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod units;
pub mod engine;
pub mod gauge;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use engine::{advisories, assess, categorize, compute_bmi};
pub use gauge::Gauge;
pub use store::{CsvStore, MemoryStore, RecordStore};
pub use session::{Assessment, FormInput, Loaded, Notice, NoticeLevel, Session, Submission};
pub use units::convert;
