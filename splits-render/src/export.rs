//! Measured-times summary of closed sections

use splits_core::{Column, SectionManager, Timestamp};

/// One closed section in the export, with raw tick values.
///
/// The host applies its own time origin and formatting downstream; this
/// crate only fixes the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasuredSection {
    /// Section name, or its ordinal as text when unnamed.
    pub name: String,
    /// Section tag; may be empty.
    pub tag: String,
    /// Start tick.
    pub start: Timestamp,
    /// End tick.
    pub end: Timestamp,
    /// Duration of this section.
    pub duration: Timestamp,
    /// Running total of closed-section durations up to this one.
    pub cumul: Timestamp,
}

/// Summary of every closed section of a manager.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasuredTimes {
    /// Closed sections, in timeline order.
    pub sections: Vec<MeasuredSection>,
    /// True when any exported section carries a tag.
    pub has_tags: bool,
    /// The manager's visible column selection, for export layouts that
    /// mirror the on-screen table.
    pub visible_columns: Vec<Column>,
}

/// Collects the measured times of all closed sections.
///
/// Open sections have no duration yet and are skipped; the ordinal used
/// for unnamed sections still counts them, so names stay consistent with
/// the on-screen table.
pub fn collect_measured_times(manager: &SectionManager) -> MeasuredTimes {
    let mut sections = Vec::new();
    let mut has_tags = false;
    let mut cumul = 0;

    for (i, section) in manager.sections().iter().enumerate() {
        if section.is_open() {
            continue;
        }

        let duration = section.end - section.start;
        cumul += duration;

        if !section.tag.is_empty() {
            has_tags = true;
        }

        let name = if section.name.is_empty() {
            (i + 1).to_string()
        } else {
            section.name.clone()
        };

        sections.push(MeasuredSection {
            name,
            tag: section.tag.clone(),
            start: section.start,
            end: section.end,
            duration,
            cumul,
        });
    }

    MeasuredTimes {
        sections,
        has_tags,
        visible_columns: manager.visible_columns().columns(),
    }
}
