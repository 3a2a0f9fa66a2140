use std::fmt;

use crate::triangle::Pascal;

/// Cells aligned on elastic tab stops.
///
/// Every cell but the last on a line is tab-terminated and takes part in a
/// column. A column's width is the widest of its cells (at least
/// `min_width`) over each contiguous run of lines that reach it. Cells are
/// right-aligned; the unterminated last cell is written as is.
pub struct Columns {
    min_width: usize,
    lines: Vec<(Vec<String>, String)>,
    current: Vec<String>,
}

impl Columns {
    pub fn new(min_width: usize) -> Self {
        Self {
            min_width,
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn cell<T: ToString>(&mut self, text: T) {
        self.current.push(text.to_string());
    }

    pub fn blanks(&mut self, count: usize) {
        self.current.extend(std::iter::repeat(String::new()).take(count));
    }

    pub fn end_line<T: ToString>(&mut self, tail: T) {
        let cells = std::mem::take(&mut self.current);
        self.lines.push((cells, tail.to_string()));
    }

    fn widths(&self) -> Vec<Vec<usize>> {
        let mut widths = self
            .lines
            .iter()
            .map(|(cells, _)| vec![0; cells.len()])
            .collect::<Vec<_>>();

        let columns = self.lines.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
        for column in 0..columns {
            let mut line = 0;
            while line < self.lines.len() {
                if self.lines[line].0.len() <= column {
                    line += 1;
                    continue;
                }

                let start = line;
                let mut width = self.min_width;
                while line < self.lines.len() && self.lines[line].0.len() > column {
                    width = width.max(self.lines[line].0[column].chars().count());
                    line += 1;
                }

                for row in &mut widths[start..line] {
                    row[column] = width;
                }
            }
        }

        widths
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        for ((cells, tail), widths) in self.lines.iter().zip(widths) {
            for (cell, width) in cells.iter().zip(widths) {
                write!(f, "{cell:>width$}")?;
            }
            writeln!(f, "{tail}")?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////

/// Right-aligned triangle, centred by blank columns on either side.
pub struct Text<'a> {
    pascal: &'a Pascal,
    headers: bool,
    width: Option<usize>,
}

impl<'a> Text<'a> {
    /// `width` of `None` sizes columns to fit `pascal.max()` plus one.
    pub fn new(pascal: &'a Pascal, headers: bool, width: Option<usize>) -> Self {
        Self {
            pascal,
            headers,
            width,
        }
    }

    fn columns(&self) -> Columns {
        let depth = self.pascal.depth();
        let width = self
            .width
            .unwrap_or_else(|| self.pascal.max().to_string().len() + 1);

        let mut columns = Columns::new(width);
        for row in self.pascal.rows() {
            if self.headers {
                columns.cell(format!("{}:", row.index));
            }

            let lead = depth - row.index;
            columns.blanks(lead);
            for value in &row.values {
                columns.cell(value);
                columns.blanks(1);
            }
            columns.blanks(2 * depth + 1 - lead);
            columns.end_line("");
        }
        columns
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.columns(), f)
    }
}
