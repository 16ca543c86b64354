//! Core types for hourly bike rental observations.
//!
//! - `record`: the raw hourly record and its CSV column layout
//! - `category`: ordered enumerations for weekday, season, weather and rider type
//! - `dataset`: immutable dataset handle and CSV loader
//! - `date_range`: inclusive date window used by the summary metrics
//! - `error`: schema and loading errors

pub mod category;
pub mod dataset;
pub mod date_range;
pub mod error;
pub mod record;

pub use dataset::Dataset;
pub use date_range::DateRange;
pub use error::{DatasetError, SchemaError};
pub use record::RawRecord;
