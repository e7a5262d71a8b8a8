//! Plain-text grid rendering.

use datagrid_lib::HeaderCell;
use datagrid_lib::TableBody;
use datagrid_lib::pagination::PaginationFooter;
use datagrid_lib::query::Direction;
use unicode_width::UnicodeWidthStr;

const NO_DATA: &str = "No data found";

/// Renders the header, body and footer as aligned text.
pub fn render_grid(headers: &[HeaderCell], body: &TableBody, footer: &PaginationFooter) -> String {
    let titles: Vec<String> = headers.iter().map(header_label).collect();

    let rows: Vec<&[String]> = match body {
        TableBody::Rows(rows) => rows.iter().map(|r| r.cells.as_slice()).collect(),
        TableBody::Loading | TableBody::Empty => Vec::new(),
    };

    let mut widths: Vec<usize> = titles.iter().map(|t| t.width()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = vec![format_line(&titles, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    match body {
        TableBody::Loading => lines.push("Loading...".to_string()),
        TableBody::Empty => lines.push(NO_DATA.to_string()),
        TableBody::Rows(_) => lines.extend(rows.iter().map(|cells| format_line(cells, &widths))),
    }

    lines.push(String::new());
    lines.push(format!("{}  |  {}", footer.summary(), footer.page_label()));
    if let Some(selection) = footer.selection_summary() {
        lines.push(selection);
    }
    lines.join("\n")
}

fn header_label(header: &HeaderCell) -> String {
    match header.sorted {
        Some(Direction::Asc) => format!("{} ^", header.title),
        Some(Direction::Desc) => format!("{} v", header.title),
        None => header.title.clone(),
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Pads to a display width; wide characters count as two columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid_lib::RowView;
    use datagrid_lib::pagination::Pagination;

    fn header(key: &str, title: &str, sorted: Option<Direction>) -> HeaderCell {
        HeaderCell {
            key: key.to_string(),
            title: title.to_string(),
            sortable: true,
            sorted,
            width: None,
        }
    }

    #[test]
    fn test_render_rows() {
        let headers = [header("name", "Name", Some(Direction::Desc)), header("role", "Role", None)];
        let body = TableBody::Rows(vec![RowView {
            id: "1".to_string(),
            selected: false,
            cells: vec!["Budi Santoso".to_string(), "admin".to_string()],
        }]);
        let footer = PaginationFooter::new(&Pagination::new(1, 10, 1), 0, vec![10]);

        let grid = render_grid(&headers, &body, &footer);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "Name v        Role");
        assert_eq!(lines[2], "Budi Santoso  admin");
        assert_eq!(lines[4], "Showing 1 to 1 of 1 results  |  Page 1 of 1");
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_render_empty() {
        let footer = PaginationFooter::new(&Pagination::new(1, 10, 0), 0, vec![10]);
        let grid = render_grid(&[header("name", "Name", None)], &TableBody::Empty, &footer);
        assert!(grid.contains(NO_DATA));
        assert!(grid.contains("Showing 0 to 0 of 0 results"));
    }
}
