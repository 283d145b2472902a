//! Utility functions shared across layers.
//!
//! - [`calendar_date`] - Strict `YYYY-MM-DD` date parsing and formatting

pub mod calendar_date;
