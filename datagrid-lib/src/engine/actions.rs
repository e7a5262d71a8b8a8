//! Add/edit/delete, custom row actions and bulk actions.

use std::sync::PoisonError;
use std::sync::RwLock;

use super::TableEngine;
use super::state::EngineState;
use crate::action::RowMenuItem;
use crate::action::row_menu;
use crate::error::ActionError;
use crate::error::SelectionError;
use crate::error::TableError;
use crate::model::Record;

impl TableEngine {
    /// Presses the add button.
    pub fn add(&self) -> Result<(), TableError> {
        if self.config.add_button_text.is_none() {
            return Err(ActionError::NotConfigured("add").into());
        }
        self.handler.on_add();
        Ok(())
    }

    /// Chooses `Edit` for a row.
    pub fn edit_row(&self, id: &str) -> Result<(), TableError> {
        if !self.config.editable {
            return Err(ActionError::NotConfigured("edit").into());
        }
        let record = self.find_record(id)?;
        self.handler.on_edit(&record);
        Ok(())
    }

    /// Chooses `Delete` for a row and waits for the handler.
    ///
    /// On success the row leaves the selection; the owner is expected to
    /// reload the data. On failure nothing changes and the handler's error
    /// is returned.
    pub async fn delete_row(&self, id: &str) -> Result<(), TableError> {
        if !self.config.deletable {
            return Err(ActionError::NotConfigured("delete").into());
        }
        let record = self.find_record(id)?;

        if let Err(e) = self.handler.on_delete(&record).await {
            log::warn!("[table] delete of row {} failed: {}", id, e);
            return Err(e.into());
        }
        self.write().selection.selected.remove(id);
        Ok(())
    }

    /// Returns the action menu for a row.
    pub fn row_menu(&self, id: &str) -> Result<Vec<RowMenuItem>, TableError> {
        let record = self.find_record(id)?;
        Ok(row_menu(
            &record,
            &self.row_actions,
            self.config.editable,
            self.config.deletable,
        ))
    }

    /// Runs a custom row action.
    pub fn run_row_action(&self, id: &str, action_id: &str) -> Result<(), TableError> {
        let record = self.find_record(id)?;
        let action = self
            .row_actions
            .iter()
            .find(|a| a.id == action_id && !a.is_hidden(&record))
            .ok_or_else(|| ActionError::UnknownRowAction(action_id.to_string()))?;
        if action.is_disabled(&record) {
            return Err(ActionError::Disabled(action_id.to_string()).into());
        }
        self.handler.on_row_action(action_id, &record);
        Ok(())
    }

    /// Runs a bulk action over the selected rows and waits for the handler.
    ///
    /// The selection stays in place while the handler runs
    /// ([`pending_bulk_action`](Self::pending_bulk_action) reports it). On
    /// success the selection is cleared and the processed ids returned; on
    /// failure the selection as it was before the call is restored. Only one
    /// bulk action may run at a time.
    ///
    /// Dropping the returned future before it completes releases the
    /// in-flight marker and leaves the selection as it is.
    pub async fn run_bulk_action(&self, action: &str) -> Result<Vec<String>, TableError> {
        if !self.config.row_selection {
            return Err(SelectionError::Disabled.into());
        }
        if self.config.bulk_action(action).is_none() {
            return Err(ActionError::UnknownBulkAction(action.to_string()).into());
        }

        let (ids, previous) = {
            let mut state = self.write();
            if let Some(running) = &state.bulk_in_flight {
                return Err(ActionError::InProgress(running.clone()).into());
            }
            let ids = state.selected_in_order(&self.columns, self.config.server_side_filtering);
            if ids.is_empty() {
                return Err(SelectionError::Empty.into());
            }
            state.bulk_in_flight = Some(action.to_string());
            (ids, state.selection.clone())
        };
        let mut flight = BulkFlight::new(&self.state);

        log::debug!("[table] bulk action {} on {} row(s)", action, ids.len());
        let result = self.handler.on_bulk_action(action, &ids).await;

        let mut state = self.write();
        flight.land(&mut state);
        match result {
            Ok(()) => {
                state.selection.clear();
                Ok(ids)
            }
            Err(e) => {
                log::warn!("[table] bulk action {} failed: {}", action, e);
                state.selection = previous;
                state.reconcile(&self.columns, self.config.server_side_filtering);
                Err(e.into())
            }
        }
    }

    /// The bulk action currently awaiting its handler.
    pub fn pending_bulk_action(&self) -> Option<String> {
        self.read().bulk_in_flight.clone()
    }

    fn find_record(&self, id: &str) -> Result<Record, SelectionError> {
        self.read()
            .record(id)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownRow(id.to_string()))
    }
}

/// Marks a bulk action as in flight until it lands or its future is dropped.
struct BulkFlight<'a> {
    state: &'a RwLock<EngineState>,
    airborne: bool,
}

impl<'a> BulkFlight<'a> {
    fn new(state: &'a RwLock<EngineState>) -> Self {
        Self {
            state,
            airborne: true,
        }
    }

    /// Clears the marker through a lock the caller already holds.
    fn land(&mut self, state: &mut EngineState) {
        state.bulk_in_flight = None;
        self.airborne = false;
    }
}

impl Drop for BulkFlight<'_> {
    fn drop(&mut self) {
        if !self.airborne {
            return;
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(action) = state.bulk_in_flight.take() {
            log::warn!("[table] bulk action {} abandoned before completion", action);
        }
    }
}
