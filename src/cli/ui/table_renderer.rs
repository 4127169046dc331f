//! Fixed-width table rendering with ANSI-aware cell measurement.

/// Horizontal alignment of a column's cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Header and layout constraints for one table column.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: &'static str,
    pub alignment: Alignment,
    pub max_width: Option<usize>,
}

impl TableColumn {
    pub fn left(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Left,
            max_width: None,
        }
    }

    pub fn right(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Right,
            max_width: None,
        }
    }

    /// Caps the column's rendered width; longer cells are truncated.
    pub fn capped(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table with a fixed column layout and accumulated rows.
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

const COLUMN_GAP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders the header, a rule, and every row.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header.to_string())
            .collect();

        let mut out = String::new();
        out.push_str(&self.format_line(&headers, &widths));
        out.push('\n');
        out.push_str(&rule(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.format_line(row, &widths));
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(column.header);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                match column.max_width {
                    Some(cap) => width.min(cap),
                    None => width,
                }
            })
            .collect()
    }

    fn format_line(&self, cells: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = cells.get(idx).map(String::as_str).unwrap_or("");
                pad_cell(text, widths[idx], column.alignment)
            })
            .collect();
        rendered.join(COLUMN_GAP).trim_end().to_string()
    }
}

fn rule(widths: &[usize]) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    "─".repeat(total)
}

fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let fill = " ".repeat(width.saturating_sub(visible_width(&fitted)));
    match alignment {
        Alignment::Left => format!("{fitted}{fill}"),
        Alignment::Right => format!("{fill}{fitted}"),
    }
}

/// Counts printable characters, skipping ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if let Some('[') = chars.peek() {
                chars.next();
                for follower in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&follower) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

/// Shortens `text` to `width` visible characters, ending with an ellipsis.
/// Escape sequences are carried through and closed with a reset so a cut
/// does not leak styling into the rest of the line.
fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 1 {
        return String::from("…");
    }

    let target = width - 1;
    let mut out = String::new();
    let mut visible = 0;
    let mut saw_ansi = false;
    let mut chars = text.chars().peekable();
    while visible < target {
        let Some(ch) = chars.next() else { break };
        if ch == '\u{1b}' {
            saw_ansi = true;
            out.push(ch);
            if let Some('[') = chars.peek() {
                if let Some(bracket) = chars.next() {
                    out.push(bracket);
                }
                for follower in chars.by_ref() {
                    out.push(follower);
                    if ('\u{40}'..='\u{7e}').contains(&follower) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(ch);
        visible += 1;
    }

    out.push('…');
    if saw_ansi {
        out.push_str("\u{1b}[0m");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::right("Amount"),
        ]);
        table.push_row(vec!["2024-03-01".into(), "$5.00".into()]);
        table.push_row(vec!["2024-03-02".into(), "$125.00".into()]);
        table
    }

    #[test]
    fn right_aligns_numeric_columns() {
        let rendered = sample_table().render();
        let rows: Vec<&str> = rendered.lines().collect();

        assert_eq!(rows[2], "2024-03-01    $5.00");
        assert_eq!(rows[3], "2024-03-02  $125.00");
    }

    #[test]
    fn rule_spans_all_columns_and_gaps() {
        let rendered = sample_table().render();
        let rule_line = rendered.lines().nth(1).unwrap();

        // widths 10 and 7 plus one two-character gap
        assert_eq!(rule_line.chars().count(), 19);
        assert!(rule_line.chars().all(|ch| ch == '─'));
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut table = Table::new(vec![TableColumn::left("A"), TableColumn::left("B")]);
        table.push_row(vec!["only".into()]);

        let last = table.render().lines().last().unwrap().to_string();
        assert_eq!(last, "only");
    }

    #[test]
    fn caps_and_truncates_long_cells() {
        let mut table = Table::new(vec![TableColumn::left("Note").capped(6)]);
        table.push_row(vec!["a very long note".into()]);

        let last = table.render().lines().last().unwrap().to_string();
        assert_eq!(last, "a ver…");
    }

    #[test]
    fn ansi_codes_do_not_count_toward_width() {
        let painted = "\u{1b}[31mred\u{1b}[0m";
        assert_eq!(visible_width(painted), 3);

        let mut table = Table::new(vec![TableColumn::left("X")]);
        table.push_row(vec![painted.to_string()]);
        let widths = table.column_widths();
        assert_eq!(widths, vec![3]);
    }

    #[test]
    fn truncation_closes_open_styling() {
        let painted = "\u{1b}[31mlong red text\u{1b}[0m";
        let cut = truncate_text(painted, 5);

        assert!(cut.starts_with("\u{1b}[31m"));
        assert!(cut.ends_with("\u{1b}[0m"));
        assert_eq!(visible_width(&cut), 5);
    }
}
