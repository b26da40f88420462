//! Display columns of the time table and their persisted identifiers

use std::fmt;

/// One column of the rendered time table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Column {
    /// Section name, or its ordinal when unnamed.
    Name,
    /// Elapsed time of the section.
    Duration,
    /// Running total across sections.
    Cumul,
    /// Free-form tag.
    Tag,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Column; 4] = [Column::Name, Column::Duration, Column::Cumul, Column::Tag];

    /// Persisted identifier of this column.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Duration => "Duration",
            Column::Cumul => "Cumul",
            Column::Tag => "Tag",
        }
    }

    /// Parses a persisted identifier; `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Column> {
        match s {
            "Name" => Some(Column::Name),
            "Duration" => Some(Column::Duration),
            "Cumul" => Some(Column::Cumul),
            "Tag" => Some(Column::Tag),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Column::Name => 1 << 0,
            Column::Duration => 1 << 1,
            Column::Cumul => 1 << 2,
            Column::Tag => 1 << 3,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of visible columns.
///
/// Kept as a small bitset so the persisted `;`-delimited list always comes
/// out in display order regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet(u8);

impl ColumnSet {
    /// Empty set.
    pub fn empty() -> Self {
        ColumnSet(0)
    }

    /// Set containing every column.
    pub fn all() -> Self {
        let mut set = ColumnSet::empty();
        for column in Column::ALL {
            set.insert(column);
        }
        set
    }

    /// Adds a column to the set.
    pub fn insert(&mut self, column: Column) {
        self.0 |= column.bit();
    }

    /// Removes a column from the set.
    pub fn remove(&mut self, column: Column) {
        self.0 &= !column.bit();
    }

    /// Adds the column if absent, removes it if present.
    pub fn toggle(&mut self, column: Column) {
        self.0 ^= column.bit();
    }

    /// Checks whether the column is in the set.
    pub fn contains(&self, column: Column) -> bool {
        self.0 & column.bit() != 0
    }

    /// Returns true when no column is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Columns of the set, in display order.
    pub fn columns(&self) -> Vec<Column> {
        Column::ALL.iter().copied().filter(|c| self.contains(*c)).collect()
    }

    /// Persisted form: identifiers joined with `;`, e.g. `"Name;Duration;Cumul"`.
    pub fn to_delimited(&self) -> String {
        self.columns()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parses the persisted `;`-delimited form.
    ///
    /// Unknown identifiers are skipped, not rejected, so files written by a
    /// newer version with extra columns still load.
    pub fn parse_delimited(s: &str) -> Self {
        let mut set = ColumnSet::empty();
        for part in s.split(';') {
            if part.is_empty() {
                continue;
            }
            match Column::parse(part) {
                Some(column) => set.insert(column),
                None => log::debug!("Skipping unknown column identifier: {}", part),
            }
        }
        set
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        ColumnSet::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_roundtrip() {
        let mut set = ColumnSet::empty();
        set.insert(Column::Cumul);
        set.insert(Column::Name);
        assert_eq!(set.to_delimited(), "Name;Cumul");
        assert_eq!(ColumnSet::parse_delimited("Name;Cumul"), set);
    }

    #[test]
    fn test_unknown_identifiers_are_skipped() {
        let set = ColumnSet::parse_delimited("Name;Velocity;Tag");
        assert!(set.contains(Column::Name));
        assert!(set.contains(Column::Tag));
        assert!(!set.contains(Column::Duration));
    }

    #[test]
    fn test_default_is_all_columns() {
        let set = ColumnSet::default();
        for column in Column::ALL {
            assert!(set.contains(column));
        }
        assert_eq!(set.to_delimited(), "Name;Duration;Cumul;Tag");
    }

    #[test]
    fn test_toggle() {
        let mut set = ColumnSet::all();
        set.toggle(Column::Tag);
        assert!(!set.contains(Column::Tag));
        set.toggle(Column::Tag);
        assert!(set.contains(Column::Tag));
    }

    #[test]
    fn test_empty_string_parses_to_empty_set() {
        assert!(ColumnSet::parse_delimited("").is_empty());
    }
}
