//! Positional index: inside a section, or in a gap between sections

/// Result of a positional query against the ordered section list.
///
/// `Gap(k)` means the timestamp falls before section `k` without being
/// inside any section; `Gap(0)` is "before the first section" and
/// `Gap(count)` is "after the last section". The raw signed form used by
/// the container and by older hosts encodes `Inside(i)` as `i` and
/// `Gap(k)` as `-(k + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIndex {
    /// Inside the section at this ordinal.
    Inside(usize),
    /// In the gap immediately before the section at this ordinal.
    Gap(usize),
}

impl SectionIndex {
    /// Converts to the signed encoding: `Inside(i)` is `i`, `Gap(k)` is `-(k + 1)`.
    pub fn to_raw(self) -> i64 {
        match self {
            SectionIndex::Inside(i) => i as i64,
            SectionIndex::Gap(k) => -(k as i64 + 1),
        }
    }

    /// Converts back from the signed encoding.
    pub fn from_raw(raw: i64) -> Self {
        if raw >= 0 {
            SectionIndex::Inside(raw as usize)
        } else {
            SectionIndex::Gap((-raw - 1) as usize)
        }
    }

    /// Returns true if inside a section.
    pub fn is_inside(self) -> bool {
        matches!(self, SectionIndex::Inside(_))
    }

    /// Returns true for the gap before the first section.
    pub fn is_before_first(self) -> bool {
        self == SectionIndex::Gap(0)
    }

    /// Returns true for the gap after the last of `count` sections.
    pub fn is_after_last(self, count: usize) -> bool {
        self == SectionIndex::Gap(count)
    }

    /// For a gap, the ordinal of the section immediately before it.
    ///
    /// `None` when inside a section or before the first one.
    pub fn preceding_section(self) -> Option<usize> {
        match self {
            SectionIndex::Gap(k) if k > 0 => Some(k - 1),
            _ => None,
        }
    }

    /// For a gap, the ordinal of the section immediately after it.
    ///
    /// `None` when inside a section or after the last of `count` sections.
    pub fn following_section(self, count: usize) -> Option<usize> {
        match self {
            SectionIndex::Gap(k) if k < count => Some(k),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_encoding() {
        // -1 = before first, -2 = between sections 0 and 1, -(n+1) = after last.
        assert_eq!(SectionIndex::Inside(0).to_raw(), 0);
        assert_eq!(SectionIndex::Inside(3).to_raw(), 3);
        assert_eq!(SectionIndex::Gap(0).to_raw(), -1);
        assert_eq!(SectionIndex::Gap(1).to_raw(), -2);
        assert_eq!(SectionIndex::Gap(4).to_raw(), -5);
    }

    #[test]
    fn test_raw_roundtrip() {
        for raw in -6..6 {
            assert_eq!(SectionIndex::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn test_boundary_gaps() {
        assert!(SectionIndex::Gap(0).is_before_first());
        assert!(!SectionIndex::Gap(1).is_before_first());
        assert!(SectionIndex::Gap(3).is_after_last(3));
        assert!(!SectionIndex::Gap(2).is_after_last(3));
        assert!(!SectionIndex::Inside(0).is_before_first());
        assert!(!SectionIndex::Inside(2).is_after_last(3));
    }

    #[test]
    fn test_gap_neighbors() {
        // Matches the signed algebra: prev = -(raw + 2), next = -(raw + 1).
        let gap = SectionIndex::from_raw(-3);
        assert_eq!(gap.preceding_section(), Some(1));
        assert_eq!(gap.following_section(4), Some(2));

        assert_eq!(SectionIndex::Gap(0).preceding_section(), None);
        assert_eq!(SectionIndex::Gap(4).following_section(4), None);
        assert_eq!(SectionIndex::Inside(1).preceding_section(), None);
        assert_eq!(SectionIndex::Inside(1).following_section(4), None);
    }
}
