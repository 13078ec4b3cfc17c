use std::collections::HashMap;

/// Cells of one data row keyed by normalized header name. Built and dropped per row.
#[derive(Debug, Default)]
pub struct RowValues<'a> {
    cells: HashMap<&'a str, &'a str>
}

impl<'a> RowValues<'a> {
    pub fn new(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            cells: pairs.into_iter().map(|(name, value)| (name, value.trim())).collect()
        }
    }

    /// Trimmed cell for `name`, `None` when the row has no such column.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.cells.get(name).copied()
    }

    /// Trimmed cell for `name`, empty when the row has no such column.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}
