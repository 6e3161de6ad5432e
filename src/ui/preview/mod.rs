// SPDX-License-Identifier: MPL-2.0
//! Live table preview of the parameter names and training data.
//!
//! The preview is recomputed in full from both text fields on every edit.
//! Cells are trimmed but rows are not checked against the header width.

mod view;

pub use view::view;

/// Header cell shown when either field is blank.
pub const PLACEHOLDER_HEADER: &str = "No data entered";

/// Header cell of the row number column.
pub const INDEX_HEADER: &str = "No";

/// Parsed preview table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    /// Either input is blank.
    #[default]
    Empty,
    Table {
        /// `"No"` followed by the parameter names.
        header: Vec<String>,
        /// Row number (1-based) followed by the row's cells.
        rows: Vec<Vec<String>>,
    },
}

impl Preview {
    /// Builds the preview from the raw text of both fields.
    #[must_use]
    pub fn parse(parameters: &str, training_data: &str) -> Self {
        if parameters.trim().is_empty() || training_data.trim().is_empty() {
            return Preview::Empty;
        }

        let header = std::iter::once(INDEX_HEADER.to_string())
            .chain(split_cells(parameters))
            .collect();

        let rows = training_data
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, line)| {
                std::iter::once((index + 1).to_string())
                    .chain(split_cells(line))
                    .collect()
            })
            .collect();

        Preview::Table { header, rows }
    }

    /// Header cells to render.
    #[must_use]
    pub fn header(&self) -> Vec<&str> {
        match self {
            Preview::Empty => vec![PLACEHOLDER_HEADER],
            Preview::Table { header, .. } => header.iter().map(String::as_str).collect(),
        }
    }

    /// Body rows to render. Empty for the placeholder.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        match self {
            Preview::Empty => &[],
            Preview::Table { rows, .. } => rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Preview::Empty)
    }
}

fn split_cells(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(',').map(|cell| cell.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn parses_header_and_numbered_rows() {
        let preview = Preview::parse("A,B", "1,2\n3,4");
        assert_eq!(preview.header(), ["No", "A", "B"]);
        assert_eq!(
            preview.rows(),
            [strings(&["1", "1", "2"]), strings(&["2", "3", "4"])]
        );
    }

    #[test]
    fn trims_cells_and_skips_blank_lines() {
        let preview = Preview::parse(" Weather ,  Play", "\n sunny , no \n\n  \r\nrain,yes\n");
        assert_eq!(preview.header(), ["No", "Weather", "Play"]);
        assert_eq!(
            preview.rows(),
            [strings(&["1", "sunny", "no"]), strings(&["2", "rain", "yes"])]
        );
    }

    #[test]
    fn ragged_rows_are_kept_as_is() {
        let preview = Preview::parse("A,B,C", "1\n1,2,3,4");
        assert_eq!(preview.rows()[0], strings(&["1", "1"]));
        assert_eq!(preview.rows()[1], strings(&["2", "1", "2", "3", "4"]));
    }

    #[test]
    fn blank_parameters_give_placeholder() {
        let preview = Preview::parse("   ", "1,2");
        assert!(preview.is_empty());
        assert_eq!(preview.header(), [PLACEHOLDER_HEADER]);
        assert!(preview.rows().is_empty());
    }

    #[test]
    fn blank_data_gives_placeholder() {
        assert_eq!(Preview::parse("A,B", "\n \n"), Preview::Empty);
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let preview = Preview::parse("A", "x\r\ny\r\n");
        assert_eq!(preview.rows(), [strings(&["1", "x"]), strings(&["2", "y"])]);
    }
}
