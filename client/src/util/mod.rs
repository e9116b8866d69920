//! Formatting and metric helpers shared by the view models.

pub mod format;
pub mod metrics;
