use crate::element::{query_tag, text_content, Element};
use crate::text::fit_to_width;

const CELL_SEPARATOR: &str = " | ";

/// Render every `tr` under `root` as one line of text, in document order.
///
/// Rows carrying `hidden_class` are skipped. Each `td` becomes a cell holding
/// its text content. See [`render_rows_with`] for the column widths.
pub fn render_rows(root: &Element, hidden_class: &str, widths: &[usize]) -> Vec<String> {
    render_rows_with(root, hidden_class, widths, text_content)
}

/// Like [`render_rows`], with the text of each `td` produced by `cell_text`.
///
/// Cell `i` is fitted to `widths[i]` columns; cells past the end of `widths`
/// reuse the last width. Trailing padding is trimmed.
pub fn render_rows_with(
    root: &Element,
    hidden_class: &str,
    widths: &[usize],
    cell_text: impl Fn(&Element) -> String,
) -> Vec<String> {
    let rows = query_tag(root, "tr");
    let mut lines = Vec::with_capacity(rows.len());

    for row in rows {
        if row.has_class(hidden_class) {
            log::trace!("skipping hidden row {}", row.id);
            continue;
        }

        let cells: Vec<String> = row
            .content
            .children()
            .iter()
            .filter(|cell| cell.is("td"))
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).or(widths.last()).copied().unwrap_or(0);
                fit_to_width(&cell_text(cell), width)
            })
            .collect();

        lines.push(cells.join(CELL_SEPARATOR).trim_end().to_string());
    }

    lines
}
