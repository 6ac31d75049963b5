//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell(col: &Column, value: &str) -> String {
        match col.align {
            Align::Left => pad_right(value, col.width),
            Align::Right => pad_left(value, col.width),
        }
    }

    fn render_row(&self, values: &[String]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| Self::cell(col, values.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_row(&headers));
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = if self.separator.is_empty() { "-" } else { self.separator.as_str() };
        out.push_str(&sep.repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }

        out
    }
}
