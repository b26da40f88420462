//! Splits Render Library
//!
//! Read-side projections over a section list: the aligned time table shown
//! next to the video, and the measured-times summary used by exports.
//! Rendering is total; there is no error type in this crate.

pub mod export;
pub mod table;

pub use export::{collect_measured_times, MeasuredSection, MeasuredTimes};
pub use table::TimeTableBuilder;
