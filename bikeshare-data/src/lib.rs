//! Data processing for hourly bike rental records.
//!
//! This crate turns the raw dataset into the small derived tables the
//! dashboard charts, plus the headline metrics shown on the summary cards.
//! Every function here is pure: it reads records and returns fresh rows.

pub mod dashboard;
pub mod rentals;
pub mod summary;
pub mod views;

pub use dashboard::DashboardViews;
