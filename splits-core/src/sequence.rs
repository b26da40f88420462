//! Single-trigger combo commands and timestamp-addressed edit commands
//!
//! These are the operations a host binds to keys or context menus. They
//! take the manager and the current timestamp explicitly and resolve what
//! to do from the positional index, so the host carries no state of its
//! own. The combo commands never overwrite existing boundaries: a single
//! trigger cannot know whether the user wants to move an existing point
//! or create new data, so the terse path only ever creates or closes, and
//! precise edits go through the addressed commands instead.

use crate::{SectionIndex, SectionManager, TimeSection, Timestamp};

/// What a combo command did, so hosts can decide about undo capture and
/// marker refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboOutcome {
    /// A new open-ended section was inserted.
    Started,
    /// The open section containing the timestamp was closed.
    Stopped,
    /// The open section was closed and a new one started at the same point.
    Split,
    /// Nothing was mutated.
    NoChange,
}

/// Start/stop combo: close the open section under `timestamp`, or start a
/// new one when past every existing section.
///
/// Inside an already-closed section, or in a gap with a section still
/// ahead in time, this is a no-op: the existing data wins. A locked
/// manager ignores the command entirely.
pub fn start_stop(manager: &mut SectionManager, timestamp: Timestamp) -> ComboOutcome {
    if manager.locked() {
        return ComboOutcome::NoChange;
    }

    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) => {
            if manager.sections()[i].is_open() {
                manager.stop(i, timestamp);
                ComboOutcome::Stopped
            } else {
                // This section already has an ending.
                ComboOutcome::NoChange
            }
        }
        index => {
            if manager.is_after_last(index) {
                manager.insert(TimeSection::open(timestamp));
                ComboOutcome::Started
            } else {
                // There is already another section in the future.
                ComboOutcome::NoChange
            }
        }
    }
}

/// Split combo: close the open section under `timestamp` and start a new
/// open section at the same point, so the two share the boundary.
///
/// A no-op in a gap, on a closed section, or when the manager is locked.
pub fn split(manager: &mut SectionManager, timestamp: Timestamp) -> ComboOutcome {
    if manager.locked() {
        return ComboOutcome::NoChange;
    }

    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) if manager.sections()[i].is_open() => {
            manager.stop(i, timestamp);
            manager.insert(TimeSection::open(timestamp));
            ComboOutcome::Split
        }
        _ => ComboOutcome::NoChange,
    }
}

/// Moves the start of the section containing `timestamp` to `timestamp`.
///
/// Returns false without mutating when the timestamp is in a gap.
pub fn move_current_start(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) => {
            manager.move_start(i, timestamp);
            true
        }
        _ => false,
    }
}

/// Moves the end of the section containing `timestamp` to `timestamp`.
pub fn move_current_end(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) => {
            manager.move_end(i, timestamp);
            true
        }
        _ => false,
    }
}

/// Moves the split boundary behind the current section to `timestamp`.
///
/// Only applies inside a section whose start coincides with the previous
/// section's end; both sides of the boundary move together so the split
/// stays a split. Detaching the two points is done with the plain
/// endpoint moves instead.
pub fn move_previous_split(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) if manager.is_split_with_prev(i) => {
            manager.move_end(i - 1, timestamp);
            manager.move_start(i, timestamp);
            true
        }
        _ => false,
    }
}

/// Moves the split boundary ahead of the current section to `timestamp`.
pub fn move_next_split(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) if manager.is_split_with_next(i) => {
            manager.move_end(i, timestamp);
            manager.move_start(i + 1, timestamp);
            true
        }
        _ => false,
    }
}

/// From a gap, pulls the previous section's end to `timestamp`.
///
/// Returns false inside a section or before the first one.
pub fn move_previous_end(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp).preceding_section() {
        Some(prev) => {
            manager.move_end(prev, timestamp);
            true
        }
        None => false,
    }
}

/// From a gap, pulls the next section's start to `timestamp`.
///
/// Returns false inside a section or after the last one.
pub fn move_next_start(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp).following_section(manager.len()) {
        Some(next) => {
            manager.move_start(next, timestamp);
            true
        }
        None => false,
    }
}

/// Deletes the section containing `timestamp`.
///
/// Returns false without mutating when the timestamp is in a gap.
pub fn remove_at(manager: &mut SectionManager, timestamp: Timestamp) -> bool {
    match manager.index_at(timestamp) {
        SectionIndex::Inside(i) => {
            manager.remove(i);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OPEN_END;

    fn spans(manager: &SectionManager) -> Vec<(Timestamp, Timestamp)> {
        manager.sections().iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_start_stop_open_close_cycle() {
        let mut manager = SectionManager::new();

        assert_eq!(start_stop(&mut manager, 10), ComboOutcome::Started);
        assert_eq!(spans(&manager), vec![(10, OPEN_END)]);

        assert_eq!(start_stop(&mut manager, 20), ComboOutcome::Stopped);
        assert_eq!(spans(&manager), vec![(10, 20)]);

        assert_eq!(start_stop(&mut manager, 30), ComboOutcome::Started);
        assert_eq!(spans(&manager), vec![(10, 20), (30, OPEN_END)]);
    }

    #[test]
    fn test_start_stop_respects_closed_sections() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 20));

        // On the closed section: keep the existing boundary.
        assert_eq!(start_stop(&mut manager, 15), ComboOutcome::NoChange);
        assert_eq!(spans(&manager), vec![(10, 20)]);
    }

    #[test]
    fn test_start_stop_refuses_gap_with_future_section() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(50, 100));

        // Before the first section: a new section here would be ambiguous.
        assert_eq!(start_stop(&mut manager, 10), ComboOutcome::NoChange);
        assert_eq!(manager.len(), 1);

        // After the last: fine.
        assert_eq!(start_stop(&mut manager, 200), ComboOutcome::Started);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_start_stop_locked_is_noop() {
        let mut manager = SectionManager::new();
        manager.set_locked(true);
        assert_eq!(start_stop(&mut manager, 10), ComboOutcome::NoChange);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_split_shares_the_boundary() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::open(10));

        assert_eq!(split(&mut manager, 15), ComboOutcome::Split);
        assert_eq!(spans(&manager), vec![(10, 15), (15, OPEN_END)]);
        assert!(manager.is_split_with_next(0));
    }

    #[test]
    fn test_split_noop_cases() {
        let mut manager = SectionManager::new();
        assert_eq!(split(&mut manager, 10), ComboOutcome::NoChange);

        manager.insert(TimeSection::new(10, 20));
        // Closed section: cannot split through the terse path.
        assert_eq!(split(&mut manager, 15), ComboOutcome::NoChange);
        // Gap.
        assert_eq!(split(&mut manager, 30), ComboOutcome::NoChange);
        assert_eq!(manager.len(), 1);

        manager.set_locked(true);
        manager.insert(TimeSection::open(40));
        assert_eq!(split(&mut manager, 50), ComboOutcome::NoChange);
    }

    #[test]
    fn test_move_current_endpoints() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 30));

        assert!(move_current_start(&mut manager, 15));
        assert_eq!(spans(&manager), vec![(15, 30)]);

        assert!(move_current_end(&mut manager, 25));
        assert_eq!(spans(&manager), vec![(15, 25)]);

        // In a gap: nothing to address.
        assert!(!move_current_start(&mut manager, 5));
        assert!(!move_current_end(&mut manager, 40));
    }

    #[test]
    fn test_move_split_boundaries_move_both_sides() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 20));
        manager.insert(TimeSection::new(20, 30));

        // From inside the second section, the boundary behind it is a split.
        assert!(move_previous_split(&mut manager, 25));
        assert_eq!(spans(&manager), vec![(10, 25), (25, 30)]);

        // From inside the first section, the boundary ahead is the same split.
        assert!(move_next_split(&mut manager, 18));
        assert_eq!(spans(&manager), vec![(10, 18), (18, 30)]);
    }

    #[test]
    fn test_move_split_requires_a_shared_boundary() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 20));
        manager.insert(TimeSection::new(40, 50));

        assert!(!move_previous_split(&mut manager, 45));
        assert!(!move_next_split(&mut manager, 15));
        assert_eq!(spans(&manager), vec![(10, 20), (40, 50)]);
    }

    #[test]
    fn test_move_neighbor_endpoints_from_a_gap() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 20));
        manager.insert(TimeSection::new(40, 50));

        assert!(move_previous_end(&mut manager, 25));
        assert_eq!(spans(&manager), vec![(10, 25), (40, 50)]);

        assert!(move_next_start(&mut manager, 35));
        assert_eq!(spans(&manager), vec![(10, 25), (35, 50)]);

        // Before the first section there is no previous end; after the
        // last there is no next start.
        assert!(!move_previous_end(&mut manager, 5));
        assert!(!move_next_start(&mut manager, 60));
        // Inside a section the gap commands do not apply.
        assert!(!move_previous_end(&mut manager, 15));
    }

    #[test]
    fn test_remove_at() {
        let mut manager = SectionManager::new();
        manager.insert(TimeSection::new(10, 20));
        manager.insert(TimeSection::new(30, 40));

        assert!(remove_at(&mut manager, 35));
        assert_eq!(spans(&manager), vec![(10, 20)]);
        assert!(!remove_at(&mut manager, 35));
        assert_eq!(manager.len(), 1);
    }
}
