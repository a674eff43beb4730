/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
        }
    }
}

/// Row data for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Simple table model used for rendering read-only reports.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        let row = TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
        };
        self.rows.push(row);
    }
}

/// Renders [`Table`] instances as padded text columns.
pub struct TableRenderer;

impl TableRenderer {
    /// Header, rule, then one line per row. Column widths fit the widest cell.
    pub fn render(table: &Table, indent: usize) -> Vec<String> {
        let widths: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let pad = " ".repeat(indent);
        let mut lines = Vec::with_capacity(table.rows.len() + 2);

        let headers: Vec<&str> = table.columns.iter().map(|col| col.header.as_str()).collect();
        lines.push(format!("{pad}{}", Self::line(&table.columns, &widths, &headers)));
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push(format!("{pad}{}", "-".repeat(rule_width)));

        for row in &table.rows {
            let cells: Vec<&str> = (0..table.columns.len())
                .map(|idx| row.cells.get(idx).map(String::as_str).unwrap_or(""))
                .collect();
            lines.push(format!("{pad}{}", Self::line(&table.columns, &widths, &cells)));
        }
        lines
    }

    fn line(columns: &[TableColumn], widths: &[usize], cells: &[&str]) -> String {
        let rendered: Vec<String> = columns
            .iter()
            .zip(widths)
            .zip(cells)
            .map(|((column, width), cell)| match column.alignment {
                Alignment::Left => format!("{:<width$}", cell, width = width),
                Alignment::Right => format!("{:>width$}", cell, width = width),
            })
            .collect();
        rendered.join("  ").trim_end().to_string()
    }
}
