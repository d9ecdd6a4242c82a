//! Box-drawing tables.

use console::measure_text_width;

/// A simple table for formatted output.
///
/// Column widths follow the widest cell, measured in terminal columns.
///
/// ```
/// use pixelbuddy::ui::Table;
///
/// let mut table = Table::new(vec!["Spec", "Value"]);
/// table.add_row(vec!["CPU", "Intel Core i7-9700K"]);
/// assert!(table.render().contains("│ CPU  │ Intel Core i7-9700K │"));
/// ```
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Cells past the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: Vec<S>) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.render_border('┌', '┬', '┐'),
            self.render_row(&self.headers),
            self.render_border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = width - measure_text_width(cell);
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }

        s
    }
}
