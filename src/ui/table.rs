//! Fixed-width table rendering for listings.

/// A table with fixed column widths and a dashed separator under the header.
///
/// Cells are left-aligned and padded to their column width. Longer cells are
/// not truncated, so they push the following columns to the right.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    widths: Vec<usize>,
    separator_width: usize,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from `(header, width)` pairs.
    pub fn new(columns: &[(&str, usize)], separator_width: usize) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            widths: columns.iter().map(|(_, w)| *w).collect(),
            separator_width,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.iter().map(|s| s.to_string()).collect());
    }

    /// Render header, separator, and rows as individual lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers));
        lines.push("-".repeat(self.separator_width));
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::new();

        for (i, width) in self.widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(&format!("{:<width$}", cell, width = width));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty_has_header_and_separator() {
        let table = Table::new(&[("A", 4), ("B", 2)], 6);
        assert_eq!(table.lines(), vec!["A   B ".to_string(), "------".to_string()]);
    }

    #[test]
    fn table_pads_cells_to_width() {
        let mut table = Table::new(&[("Name", 8), ("ID", 4)], 12);
        table.add_row(vec!["lab", "x1"]);

        assert_eq!(table.lines().len(), 3);
        assert_eq!(table.lines()[2], "lab     x1  ");
    }

    #[test]
    fn table_does_not_truncate_long_cells() {
        let mut table = Table::new(&[("A", 3), ("B", 1)], 4);
        table.add_row(vec!["abcdef", "z"]);

        assert_eq!(table.lines()[2], "abcdefz");
    }

    #[test]
    fn table_zero_width_column_is_unpadded() {
        let table = Table::new(&[("Class Name", 12), ("Class ID", 0)], 20);
        assert_eq!(table.lines()[0], "Class Name  Class ID");
    }
}
