//! Aligned-column time table text

use splits_core::{section_index, Column, ColumnSet, SectionIndex, TimeSection, Timestamp};

/// Builds the stopwatch text board for a section list at a query time.
///
/// Duration values are produced by the injected formatter; this module
/// never turns ticks into human text itself, so the host's timecode
/// conventions apply throughout.
pub struct TimeTableBuilder<'a, F> {
    sections: &'a [TimeSection],
    format_duration: F,
}

impl<'a, F> TimeTableBuilder<'a, F>
where
    F: Fn(Timestamp) -> String,
{
    /// Creates a builder over the given sections.
    pub fn new(sections: &'a [TimeSection], format_duration: F) -> Self {
        Self {
            sections,
            format_duration,
        }
    }

    /// Renders the table as of `at`, showing the requested columns.
    ///
    /// Before the first section (or with no sections at all) the output is
    /// the zero duration alone; with a single started section it is that
    /// section's elapsed value alone. Otherwise one row per started
    /// section, each cell right-padded to its column's width, with a `>`
    /// marker on the row containing `at`.
    pub fn build(&self, at: Timestamp, columns: ColumnSet) -> String {
        let index = section_index(self.sections, at);
        if index.is_before_first() {
            // Nothing to list yet.
            return (self.format_duration)(0);
        }

        // Every section already started, with its frozen-or-running
        // elapsed time and the running total. Sections still in the
        // future are omitted entirely.
        let mut rows = Vec::new();
        let mut cumul = 0;
        for (i, section) in self.sections.iter().enumerate() {
            if section.start > at {
                break;
            }
            let elapsed = section.elapsed_at(at);
            cumul += elapsed;
            rows.push((i, elapsed, cumul));
        }

        // Minimal display until there is more than one row to disambiguate.
        if rows.len() == 1 {
            return (self.format_duration)(rows[0].1);
        }

        let any_tag = rows.iter().any(|(i, _, _)| !self.sections[*i].tag.is_empty());

        let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len());
        for (i, elapsed, cumul) in &rows {
            let section = &self.sections[*i];
            let mut cells = Vec::new();
            if columns.contains(Column::Name) {
                cells.push(name_or_ordinal(section, *i));
            }
            if columns.contains(Column::Duration) {
                cells.push((self.format_duration)(*elapsed));
            }
            if columns.contains(Column::Cumul) {
                cells.push((self.format_duration)(*cumul));
            }
            // An all-empty tag column is dropped from the grouping.
            if columns.contains(Column::Tag) && any_tag {
                cells.push(section.tag.clone());
            }
            grid.push(cells);
        }

        let cell_count = grid.first().map_or(0, Vec::len);
        let mut widths = vec![0; cell_count];
        for cells in &grid {
            for (c, cell) in cells.iter().enumerate() {
                widths[c] = widths[c].max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(grid.len());
        for ((i, _, _), cells) in rows.iter().zip(&grid) {
            let marker = if index == SectionIndex::Inside(*i) { '>' } else { ' ' };
            let mut line = String::new();
            line.push(marker);
            for (c, cell) in cells.iter().enumerate() {
                line.push(' ');
                line.push_str(cell);
                for _ in cell.chars().count()..widths[c] {
                    line.push(' ');
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

fn name_or_ordinal(section: &TimeSection, index: usize) -> String {
    if section.name.is_empty() {
        (index + 1).to_string()
    } else {
        section.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(t: Timestamp) -> String {
        t.to_string()
    }

    #[test]
    fn test_before_first_section_is_the_zero_duration() {
        let sections = vec![TimeSection::new(50, 100)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        assert_eq!(builder.build(10, ColumnSet::all()), "0");
    }

    #[test]
    fn test_empty_list_is_the_zero_duration() {
        let builder = TimeTableBuilder::new(&[], ticks);
        assert_eq!(builder.build(123, ColumnSet::all()), "0");
    }

    #[test]
    fn test_single_section_shows_only_the_elapsed_value() {
        let sections = vec![TimeSection::open(10)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        assert_eq!(builder.build(35, ColumnSet::all()), "25");
    }

    #[test]
    fn test_window_before_second_section_starts_stays_minimal() {
        let sections = vec![TimeSection::new(0, 10), TimeSection::new(20, 25)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        // Only the first section has started: minimal display.
        assert_eq!(builder.build(15, ColumnSet::all()), "10");
    }

    #[test]
    fn test_cumulative_sum_and_omitted_future_section() {
        let sections = vec![
            TimeSection::new(0, 10).with_name("A"),
            TimeSection::new(20, 25).with_name("B"),
            TimeSection::new(40, 45).with_name("C"),
        ];
        let builder = TimeTableBuilder::new(&sections, ticks);
        // At t=30: A frozen at 10, B frozen at 5, cumul 15; C not started.
        let text = builder.build(30, ColumnSet::all());
        assert_eq!(text, "  A 10 10\n  B 5  15");
    }

    #[test]
    fn test_marker_on_the_containing_row() {
        let sections = vec![TimeSection::new(0, 10), TimeSection::open(20)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        let text = builder.build(30, ColumnSet::all());
        assert_eq!(text, "  1 10 10\n> 2 10 20");
    }

    #[test]
    fn test_overlap_double_counts_in_the_cumulative() {
        let sections = vec![TimeSection::new(0, 100), TimeSection::new(50, 150)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        let text = builder.build(75, ColumnSet::all());
        // Both sections are running at t=75; the shared span counts twice.
        assert_eq!(text, "> 1 75 75\n  2 25 100");
    }

    #[test]
    fn test_unrequested_columns_are_skipped() {
        let sections = vec![
            TimeSection::new(0, 10).with_name("A"),
            TimeSection::new(20, 25).with_name("B"),
        ];
        let builder = TimeTableBuilder::new(&sections, ticks);

        let mut columns = ColumnSet::empty();
        columns.insert(Column::Duration);
        assert_eq!(builder.build(30, columns), "  10\n  5");

        let mut columns = ColumnSet::empty();
        columns.insert(Column::Name);
        columns.insert(Column::Cumul);
        assert_eq!(builder.build(30, columns), "  A 10\n  B 15");
    }

    #[test]
    fn test_all_empty_tag_column_is_dropped() {
        let sections = vec![TimeSection::new(0, 10), TimeSection::new(20, 25)];
        let builder = TimeTableBuilder::new(&sections, ticks);
        // Tag requested but unused anywhere: no trailing tag column.
        assert_eq!(builder.build(30, ColumnSet::all()), "  1 10 10\n  2 5  15");
    }

    #[test]
    fn test_ragged_tags_align() {
        let sections = vec![
            TimeSection::new(0, 10).with_tag("lap"),
            TimeSection::new(20, 25),
        ];
        let builder = TimeTableBuilder::new(&sections, ticks);
        // The empty tag still participates in the column, padded away at
        // end of line.
        assert_eq!(builder.build(30, ColumnSet::all()), "  1 10 10 lap\n  2 5  15");
    }

    #[test]
    fn test_name_falls_back_to_ordinal() {
        let sections = vec![
            TimeSection::new(0, 10).with_name("warmup"),
            TimeSection::new(20, 25),
        ];
        let builder = TimeTableBuilder::new(&sections, ticks);
        let text = builder.build(30, ColumnSet::all());
        assert_eq!(text, "  warmup 10 10\n  2      5  15");
    }
}
