use std::fs;
use std::path::Path;

use datagrid_lib::Column;
use datagrid_lib::TableConfig;
use datagrid_lib::list::ResourcePath;
use serde::Deserialize;

use crate::error::CliError;

/// A table definition file.
///
/// ```json
/// {
///   "resource": { "module": "masterdata", "resource": "users" },
///   "columns": [{ "key": "name", "title": "Name", "sortable": true }],
///   "config": { "exportEnabled": true, "debounceMs": 300 }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TableDefinition {
    #[serde(default)]
    pub resource: Option<ResourceDefinition>,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub config: TableConfig,
}

#[derive(Debug, Deserialize)]
pub struct ResourceDefinition {
    pub module: String,
    pub resource: String,
}

impl ResourceDefinition {
    pub fn path(&self) -> ResourcePath {
        ResourcePath::new(&self.module, &self.resource)
    }
}

impl TableDefinition {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = read(path)?;
        serde_json::from_str(&text).map_err(|source| CliError::Definition {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid_lib::column::FilterKind;

    #[test]
    fn test_parse_definition() {
        let json = r#"{
            "resource": { "module": "masterdata", "resource": "users" },
            "columns": [
                { "key": "name", "title": "Name", "sortable": true, "searchable": true },
                { "key": "status", "title": "Status", "filterType": "select",
                  "filterOptions": [{ "value": "active", "label": "Active" }] }
            ],
            "config": { "rowSelection": true, "debounceMs": 150 }
        }"#;

        let def: TableDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.columns.len(), 2);
        assert_eq!(def.columns[1].filter_type, Some(FilterKind::Select));
        assert!(def.config.row_selection);
        assert_eq!(def.config.debounce.as_millis(), 150);
        assert_eq!(
            def.resource.unwrap().path().path(),
            "/api/v1/masterdata/users/"
        );
    }

    #[test]
    fn test_config_is_optional() {
        let def: TableDefinition =
            serde_json::from_str(r#"{ "columns": [{ "key": "name", "title": "Name" }] }"#).unwrap();
        assert_eq!(def.config, TableConfig::default());
        assert!(def.resource.is_none());
    }
}
