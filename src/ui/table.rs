//! Table rendering for formatted output.

use console::measure_text_width;

/// A simple table for formatted output.
///
/// Column widths are measured in visible characters, so styled cells and
/// multi-byte icons line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
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
            footer: None,
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Set a right-aligned footer line spanning the whole table.
    pub fn set_footer(&mut self, footer: &str) {
        self.footer = Some(footer.to_string());
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
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        if let Some(footer) = &self.footer {
            let inner = self.total_width();
            let pad = inner.saturating_sub(measure_text_width(footer));
            output.push('\n');
            output.push_str(&" ".repeat(pad));
            output.push_str(footer);
        }

        output
    }

    fn total_width(&self) -> usize {
        // cell padding + separators + outer borders
        self.column_widths.iter().map(|w| w + 3).sum::<usize>() + 1
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = width.saturating_sub(measure_text_width(cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }

        s
    }
}
