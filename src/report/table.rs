// src/report/table.rs
use prettytable::format::{FormatBuilder, TableFormat};
use prettytable::{Cell, Row};

/// Plain-text table with left-justified columns, no borders and no index column.
pub struct Table {
    inner: prettytable::Table,
    width: usize,
}

fn borderless() -> TableFormat {
    FormatBuilder::new()
        .column_separator(' ')
        .padding(0, 1)
        .build()
}

fn to_row<S: AsRef<str>>(cells: &[S]) -> Row {
    Row::new(cells.iter().map(|c| Cell::new(c.as_ref())).collect())
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut inner = prettytable::Table::new();
        inner.set_format(borderless());
        inner.set_titles(to_row(&headers));
        Self {
            inner,
            width: headers.len(),
        }
    }

    /// Rows shorter than the header are padded with empty cells.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.width, String::new());
        self.inner.add_row(to_row(&cells));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.inner.to_string().lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
