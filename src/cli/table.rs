/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple padded-column table for read-only listings.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        let total_width = self
            .columns
            .iter()
            .map(|col| col.width + 1)
            .sum::<usize>()
            .max(1);
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.format_cells(self.columns.iter().map(|col| col.header.as_str())));
        lines.push("-".repeat(total_width));
        for row in &self.rows {
            lines.push(self.format_cells(row.iter().map(String::as_str)));
        }
        lines
    }

    pub fn render(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn format_cells<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        self.columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| format!("{:width$} ", truncate(cell, col.width), width = col.width))
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_and_truncated() {
        let mut table = Table::new(vec![TableColumn::new("ID", 4), TableColumn::new("Type", 6)]);
        table.add_row(vec!["1", "travel"]);
        table.add_row(vec!["22", "conveyance"]);
        let lines = table.lines();
        assert_eq!(lines[0], "ID   Type");
        assert_eq!(lines[2], "1    travel");
        assert_eq!(lines[3], "22   conve…");
    }
}
