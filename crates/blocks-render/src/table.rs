//! Markdown pipe-table rendering.
//!
//! The first row is always the header row, followed by a `---` separator
//! row. Column count comes from the header row: shorter body rows are padded
//! with empty cells, longer ones are truncated.

/// Render a grid of cell text as a Markdown pipe table.
///
/// Every row, including the last, ends with a newline. An empty grid
/// renders as the empty string.
#[must_use]
pub fn render_table<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };
    let columns = header.len();

    let mut out = String::new();
    push_row(&mut out, header.iter().map(|cell| cell.as_ref()), columns);
    push_row(&mut out, std::iter::repeat_n("---", columns), columns);
    for row in body {
        push_row(&mut out, row.iter().map(|cell| cell.as_ref()), columns);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, columns: usize) {
    let mut cells = cells.map(escape_cell);
    out.push('|');
    for _ in 0..columns {
        out.push(' ');
        if let Some(cell) = cells.next() {
            out.push_str(&cell);
        }
        out.push_str(" |");
    }
    out.push('\n');
}

/// Escape pipes so cell text cannot split the cell.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', r"\|")
}
