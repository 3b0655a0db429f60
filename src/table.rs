// src/table.rs
use std::ops::{Deref, DerefMut};

/// A candidate table: a grid of text cells as handed over by a page
/// collaborator or a delimited-file reader. Row 0 is the header row when the
/// table has one; null cells are represented as empty strings.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Table(pub Vec<Row>);

impl Table {
    /// The header row, if the table has any rows at all.
    pub fn header(&self) -> Option<&Row> {
        self.0.first()
    }

    /// The rows below the header. Empty for header-only tables.
    pub fn data_rows(&self) -> &[Row] {
        self.0.get(1..).unwrap_or(&[])
    }
}

impl Deref for Table {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Table
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Table(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

/// Coerces a cell to a number. Whitespace is trimmed first; anything that does
/// not parse as a float is treated as missing, never as zero.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_numeric_parses_plain_and_padded_values() {
        assert_eq!(coerce_numeric("2"), Some(2.0));
        assert_eq!(coerce_numeric(" 3.5 "), Some(3.5));
        assert_eq!(coerce_numeric("1e3"), Some(1000.0));
    }

    #[test]
    fn coerce_numeric_rejects_missing_and_textual_cells() {
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("   "), None);
        assert_eq!(coerce_numeric("n/a"), None);
    }

    #[test]
    fn data_rows_excludes_the_header() {
        let table = Table::from(vec![vec!["h1", "h2"], vec!["a", "b"]]);
        assert_eq!(table.data_rows().len(), 1);
        assert_eq!(table.header().unwrap().0, vec!["h1", "h2"]);
    }

    #[test]
    fn data_rows_is_empty_for_degenerate_tables() {
        assert!(Table::default().data_rows().is_empty());
        let header_only = Table::from(vec![vec!["h1"]]);
        assert!(header_only.data_rows().is_empty());
    }
}
