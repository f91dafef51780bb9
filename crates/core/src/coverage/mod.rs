//! Business-hour coverage of a single week

pub mod estimator;
pub mod spans;

pub use estimator::WeeklyCoverageEstimator;
pub use spans::{CoverageSpan, CoverageSpans, SpanCursor};
