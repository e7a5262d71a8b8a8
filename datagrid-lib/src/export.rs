//! CSV export of the displayed rows.

use std::io::Write;

use chrono::NaiveDate;

use crate::column::Column;
use crate::error::ExportError;
use crate::model::Record;

/// Filename used when no module prefix is configured.
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

/// Quotes a CSV field, doubling inner double quotes.
pub fn escape_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Builds CSV text from the visible columns and the given rows.
///
/// Hidden columns are skipped. Every field, header titles included, is
/// quoted. Null and missing values export as empty fields. Rows are joined
/// with `\n` without a trailing newline.
pub fn to_csv<'a>(columns: &[Column], rows: impl IntoIterator<Item = &'a Record>) -> String {
    let visible: Vec<&Column> = columns.iter().filter(|c| !c.hidden).collect();

    let mut lines = Vec::new();
    lines.push(
        visible
            .iter()
            .map(|c| escape_field(&c.title))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in rows {
        lines.push(
            visible
                .iter()
                .map(|c| escape_field(&record.display(&c.key)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Writes CSV text to `writer`.
pub fn write_csv<'a, W: Write>(
    mut writer: W,
    columns: &[Column],
    rows: impl IntoIterator<Item = &'a Record>,
) -> Result<(), ExportError> {
    writer.write_all(to_csv(columns, rows).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Returns the export filename: `export.csv`, or `<prefix>-<YYYY-MM-DD>.csv`.
pub fn export_filename(prefix: Option<&str>, date: NaiveDate) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}-{}.csv", prefix, date.format("%Y-%m-%d")),
        _ => DEFAULT_EXPORT_FILENAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field(r#"He said "hi""#), r#""He said ""hi""""#);
        assert_eq!(escape_field("a,b"), r#""a,b""#);
        assert_eq!(escape_field(""), r#""""#);
    }

    #[test]
    fn test_to_csv_skips_hidden_columns() {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("password", "Password").hidden(),
            Column::new("note", "Note"),
        ];
        let rows = vec![
            Record::new("1").set("name", "Ana").set("password", "x").set("note", r#"He said "hi""#),
            Record::new("2").set("name", "Budi"),
        ];

        assert_eq!(
            to_csv(&columns, &rows),
            "\"Name\",\"Note\"\n\"Ana\",\"He said \"\"hi\"\"\"\n\"Budi\",\"\""
        );
    }

    #[test]
    fn test_to_csv_without_rows() {
        let columns = vec![Column::new("name", "Name")];
        assert_eq!(to_csv(&columns, &[]), "\"Name\"");
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(export_filename(None, date), "export.csv");
        assert_eq!(export_filename(Some(""), date), "export.csv");
        assert_eq!(export_filename(Some("stock-opname"), date), "stock-opname-2026-10-15.csv");
    }
}
