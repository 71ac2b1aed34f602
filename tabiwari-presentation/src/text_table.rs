//! Small column-aligned text tables for terminal output.

use std::fmt::Write;

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

#[derive(Default)]
pub struct TextTableBuilder {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl TextTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &[Alignment]) -> Self {
        self.alignments = alignments.to_vec();
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        if self.alignments.is_empty() {
            self.alignments = vec![Alignment::default(); self.headers.len()];
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self
            .headers
            .iter()
            .map(|header| header.chars().count())
            .collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if idx < col_widths.len() {
                    col_widths[idx] = col_widths[idx].max(cell.chars().count());
                }
            }
        }

        let mut output = String::new();
        self.write_line(&mut output, &self.headers, &col_widths);
        let separator: Vec<String> = col_widths.iter().map(|width| "-".repeat(*width)).collect();
        self.write_line(&mut output, &separator, &col_widths);
        for row in &self.rows {
            self.write_line(&mut output, row, &col_widths);
        }
        output
    }

    fn write_line(&self, output: &mut String, cells: &[String], col_widths: &[usize]) {
        for (idx, width) in col_widths.iter().enumerate() {
            if idx > 0 {
                output.push_str("  ");
            }
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            match self.alignments.get(idx).copied().unwrap_or_default() {
                Alignment::Left => {
                    let _ = write!(output, "{cell}{}", " ".repeat(pad));
                }
                Alignment::Right => {
                    let _ = write!(output, "{}{cell}", " ".repeat(pad));
                }
            }
        }
        while output.ends_with(' ') {
            output.pop();
        }
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_and_trims_trailing_space() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(["Member", "Balance"])
            .row(["Alice", "+1,500"])
            .row(["Bret", "-1,500"])
            .build();

        let expected = "\
Member  Balance
------  -------
Alice    +1,500
Bret     -1,500
";
        assert_eq!(table, expected);
    }

    #[test]
    fn empty_builder_renders_nothing() {
        assert_eq!(TextTableBuilder::new().build(), "");
    }
}
