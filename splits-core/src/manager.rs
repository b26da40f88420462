//! Ordered section list and the positional index query
//!
//! Note on overlap and unclosed sections: the editing commands allow
//! overlapping sections and open-ended sections, and no special treatment
//! is applied to them. The sections are always ordered by their starting
//! point; that ordering is established at insertion and never re-checked
//! by the endpoint mutators.

use crate::{ColumnSet, SectionIndex, TimeSection, Timestamp};

/// Returns the positional index of `timestamp` against an ordered section list.
///
/// Inside a section, the result is that section's ordinal; in case of
/// overlap, the section with the earliest starting point wins. Otherwise
/// the result is the gap before the next section: `Gap(0)` before the
/// first section, `Gap(k)` before section `k`, `Gap(count)` after the
/// last one.
pub fn section_index(sections: &[TimeSection], timestamp: Timestamp) -> SectionIndex {
    let mut gap = 0;
    for (i, section) in sections.iter().enumerate() {
        // Before the start of this section.
        if timestamp < section.start {
            break;
        }

        // Between start and end, boundaries included.
        if timestamp <= section.end {
            return SectionIndex::Inside(i);
        }

        // After that section.
        gap = i + 1;
    }

    SectionIndex::Gap(gap)
}

/// Owner of the ordered section list, plus the lock flag and the visible
/// column selection that persist alongside it.
#[derive(Debug, Clone, Default)]
pub struct SectionManager {
    sections: Vec<TimeSection>,
    locked: bool,
    visible_columns: ColumnSet,
}

impl SectionManager {
    /// Creates an empty manager with all columns visible.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            locked: false,
            visible_columns: ColumnSet::all(),
        }
    }

    /// Inserts a section, keeping the list ordered by ascending start.
    ///
    /// The new section goes before the first existing section whose start
    /// is not less than its own, so on equal starts the newcomer lands
    /// first. Overlapping or contained sections are accepted as-is.
    pub fn insert(&mut self, section: TimeSection) {
        let at = self
            .sections
            .iter()
            .position(|s| s.start >= section.start)
            .unwrap_or(self.sections.len());
        self.sections.insert(at, section);
    }

    /// Removes and returns the section at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> TimeSection {
        self.check_index(index);
        self.sections.remove(index)
    }

    /// Closes (or re-ends) the section at `index` at `timestamp`.
    ///
    /// The start is untouched, so the sort position cannot change.
    /// Panics if `index` is out of range.
    pub fn stop(&mut self, index: usize, timestamp: Timestamp) {
        self.check_index(index);
        self.sections[index].end = timestamp;
    }

    /// Moves the start of the section at `index` to `timestamp`.
    ///
    /// Neither `start <= end` nor the global ordering is re-validated;
    /// dragging a boundary past a neighbor is a supported editing flow and
    /// the resulting overlap or inversion is kept. Panics if `index` is
    /// out of range.
    pub fn move_start(&mut self, index: usize, timestamp: Timestamp) {
        self.check_index(index);
        self.sections[index].start = timestamp;
    }

    /// Moves the end of the section at `index` to `timestamp`.
    ///
    /// Same looseness as [`move_start`](Self::move_start). Panics if
    /// `index` is out of range.
    pub fn move_end(&mut self, index: usize, timestamp: Timestamp) {
        self.check_index(index);
        self.sections[index].end = timestamp;
    }

    /// Renames the section at `index`. Panics if `index` is out of range.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) {
        self.check_index(index);
        self.sections[index].name = name.into();
    }

    /// Re-tags the section at `index`. Panics if `index` is out of range.
    pub fn set_tag(&mut self, index: usize, tag: impl Into<String>) {
        self.check_index(index);
        self.sections[index].tag = tag.into();
    }

    /// Removes every section.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Positional index of `timestamp`; see [`section_index`].
    pub fn index_at(&self, timestamp: Timestamp) -> SectionIndex {
        section_index(&self.sections, timestamp)
    }

    /// Returns true if `index` is the gap before the first section.
    pub fn is_before_first(&self, index: SectionIndex) -> bool {
        index.is_before_first()
    }

    /// Returns true if `index` is the gap after the last section.
    pub fn is_after_last(&self, index: SectionIndex) -> bool {
        index.is_after_last(self.sections.len())
    }

    /// True when the section at `index` starts exactly where its
    /// predecessor ends, i.e. the two were produced by a split.
    pub fn is_split_with_prev(&self, index: usize) -> bool {
        index > 0
            && index < self.sections.len()
            && self.sections[index - 1].end == self.sections[index].start
    }

    /// True when the section at `index` ends exactly where its successor
    /// starts.
    pub fn is_split_with_next(&self, index: usize) -> bool {
        index + 1 < self.sections.len()
            && self.sections[index + 1].start == self.sections[index].end
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true when there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&TimeSection> {
        self.sections.get(index)
    }

    /// The ordered section list.
    pub fn sections(&self) -> &[TimeSection] {
        &self.sections
    }

    /// Whether the single-trigger commands are disabled.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Enables or disables the single-trigger commands.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Columns shown by the table renderer.
    pub fn visible_columns(&self) -> ColumnSet {
        self.visible_columns
    }

    /// Replaces the visible column selection.
    pub fn set_visible_columns(&mut self, columns: ColumnSet) {
        self.visible_columns = columns;
    }

    // Guard shared by the index-taking mutators. Runs before any mutation
    // so a violating call cannot leave partial state behind.
    fn check_index(&self, index: usize) {
        assert!(
            index < self.sections.len(),
            "section index out of range: {} >= {}",
            index,
            self.sections.len()
        );
    }
}
