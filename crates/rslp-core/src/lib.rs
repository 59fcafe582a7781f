//! RSLP Core — shared error type and analysis configuration.

pub mod config;
pub mod error;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
