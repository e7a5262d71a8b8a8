//! View models and export.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use super::TableEngine;
use crate::column::FilterKind;
use crate::column::FilterOption;
use crate::error::ExportError;
use crate::error::TableError;
use crate::export;
use crate::pagination::PaginationFooter;
use crate::query::ALL_FILTER_VALUE;
use crate::query::Direction;

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether the header is clickable.
    pub sortable: bool,
    /// Sort indicator when this column is the active sort.
    pub sorted: Option<Direction>,
    /// Preferred width.
    pub width: Option<String>,
}

/// A rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Record id.
    pub id: String,
    /// Whether the row is selected.
    pub selected: bool,
    /// Rendered cells, one per visible column.
    pub cells: Vec<String>,
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// The owner is loading data.
    Loading,
    /// No rows to show ("No data found").
    Empty,
    /// Rows to show.
    Rows(Vec<RowView>),
}

/// One control in the filter dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    /// Column key.
    pub key: String,
    /// Column title.
    pub title: String,
    /// Control kind.
    pub kind: FilterKind,
    /// Select options, starting with `All <Title>`. Empty for other kinds.
    pub choices: Vec<FilterOption>,
    /// Current value, `"all"` when unset.
    pub value: String,
}

impl TableEngine {
    /// Header cells for the visible columns.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        let sort = self.sort();
        self.columns
            .iter()
            .filter(|c| !c.hidden)
            .map(|c| HeaderCell {
                key: c.key.clone(),
                title: c.title.clone(),
                sortable: c.sortable,
                sorted: sort
                    .as_ref()
                    .filter(|s| c.sortable && s.field == c.key)
                    .map(|s| s.direction),
                width: c.width.clone(),
            })
            .collect()
    }

    /// Rows currently on screen, after search, filters, sort and paging
    /// (client-side), or as supplied (server-side).
    pub fn displayed_records(&self) -> Vec<crate::model::Record> {
        self.read()
            .displayed(&self.columns, self.config.server_side_filtering)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The table body.
    pub fn body(&self) -> TableBody {
        let state = self.read();
        if state.loading {
            return TableBody::Loading;
        }

        let rows: Vec<RowView> = state
            .displayed(&self.columns, self.config.server_side_filtering)
            .into_iter()
            .map(|record| RowView {
                id: record.id().to_string(),
                selected: state.selection.is_selected(&record.id().to_string()),
                cells: self
                    .columns
                    .iter()
                    .filter(|c| !c.hidden)
                    .map(|c| c.render_cell(record))
                    .collect(),
            })
            .collect();

        if rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        }
    }

    /// The pagination footer.
    pub fn footer(&self) -> PaginationFooter {
        let selected = self.read().selection.len();
        PaginationFooter::new(
            &self.pagination(),
            selected,
            self.config.page_size_options.clone(),
        )
    }

    /// Controls for the filter dialog, one per filterable column.
    pub fn filter_fields(&self) -> Vec<FilterField> {
        let filters = self.filters();
        self.columns
            .iter()
            .filter_map(|c| {
                let kind = c.filter_type?;
                let choices = match kind {
                    FilterKind::Select => c.filter_choices(),
                    FilterKind::Date | FilterKind::Number => Vec::new(),
                };
                Some(FilterField {
                    key: c.key.clone(),
                    title: c.title.clone(),
                    kind,
                    choices,
                    value: filters.get(&c.key).unwrap_or(ALL_FILTER_VALUE).to_string(),
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    fn ensure_export(&self) -> Result<(), ExportError> {
        if self.config.export_enabled {
            Ok(())
        } else {
            Err(ExportError::Disabled)
        }
    }

    /// CSV of the visible columns over the displayed rows.
    pub fn export_csv(&self) -> Result<String, TableError> {
        self.ensure_export()?;
        let state = self.read();
        let rows = state.displayed(&self.columns, self.config.server_side_filtering);
        Ok(export::to_csv(&self.columns, rows))
    }

    /// Writes the CSV export to `writer`.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<(), TableError> {
        self.ensure_export()?;
        let state = self.read();
        let rows = state.displayed(&self.columns, self.config.server_side_filtering);
        export::write_csv(writer, &self.columns, rows)?;
        Ok(())
    }

    /// Export filename for today.
    pub fn export_filename(&self) -> String {
        export::export_filename(
            self.config.export_prefix.as_deref(),
            chrono::Local::now().date_naive(),
        )
    }

    /// Writes the CSV export into `dir` under [`export_filename`](Self::export_filename)
    /// and returns the file path.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, TableError> {
        self.ensure_export()?;
        let path = dir.join(self.export_filename());
        let file = File::create(&path).map_err(ExportError::from)?;
        self.export_to_writer(BufWriter::new(file))?;
        log::debug!("[table] exported to {}", path.display());
        Ok(path)
    }
}
