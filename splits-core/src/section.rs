//! Time section value type and the open-end sentinel

/// Position on the monotonic time axis, in ticks.
///
/// The unit is owned by the host (video timestamps, milliseconds, frame
/// counts); the model only relies on ordering and subtraction.
pub type Timestamp = i64;

/// Sentinel end value for a section that has not been closed yet.
///
/// An open-ended section contains every timestamp at or after its start.
pub const OPEN_END: Timestamp = i64::MAX;

/// One time section: an interval with an optional name and tag.
///
/// The boundary timestamps are part of the section. `start <= end` is not
/// enforced anywhere: direct endpoint edits are allowed to produce inverted
/// or overlapping sections and the rest of the model treats them as plain
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSection {
    /// Start of the section, in ticks.
    pub start: Timestamp,
    /// End of the section, or [`OPEN_END`] while the section is running.
    #[cfg_attr(feature = "serde", serde(with = "open_end"))]
    pub end: Timestamp,
    /// Display name; empty means unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Free-form tag used for grouping in exports; empty means unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: String,
}

impl TimeSection {
    /// Creates a closed section over `[start, end]`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end,
            name: String::new(),
            tag: String::new(),
        }
    }

    /// Creates an open-ended section starting at `start`.
    pub fn open(start: Timestamp) -> Self {
        Self::new(start, OPEN_END)
    }

    /// Sets the section name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the section tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Returns true while the section has no end point.
    pub fn is_open(&self) -> bool {
        self.end == OPEN_END
    }

    /// Checks whether `timestamp` falls inside the section.
    ///
    /// Both boundary frames belong to the section; an open-ended section
    /// contains everything at or after its start.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Elapsed ticks as of `timestamp`.
    ///
    /// While the section is running (open, or queried before its end) this
    /// grows with the query time; once the query time passes a closed end
    /// the value is frozen at the section's own duration.
    pub fn elapsed_at(&self, timestamp: Timestamp) -> Timestamp {
        timestamp.min(self.end) - self.start
    }
}

/// Serializes the open sentinel as `-1`, matching the container convention.
#[cfg(feature = "serde")]
mod open_end {
    use super::{Timestamp, OPEN_END};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(end: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(if *end == OPEN_END { -1 } else { *end })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let end = i64::deserialize(deserializer)?;
        Ok(if end == -1 { OPEN_END } else { end })
    }
}
