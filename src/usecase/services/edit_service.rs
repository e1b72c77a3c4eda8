use tracing::debug;

use crate::domain::entities::edit::{CellDraft, RowEdit, RowMode};
use crate::domain::entities::record::{Field, Record};

/// Row edit lifecycle: `viewing` -> `row-editing` -> `cell-editing` and back.
/// Holding at most one `RowEdit` keeps a single row editable at a time.
#[derive(Debug, Clone, Default)]
pub struct EditService {
    active: Option<RowEdit>,
}

impl EditService {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&RowEdit> {
        self.active.as_ref()
    }

    pub fn row_mode(&self, row_id: &str) -> RowMode {
        match &self.active {
            Some(edit) if edit.row_id == row_id => RowMode::RowEditing,
            _ => RowMode::Viewing,
        }
    }

    pub fn draft(&self, row_id: &str, field: Field) -> Option<&CellDraft> {
        self.active
            .as_ref()
            .filter(|edit| edit.row_id == row_id)
            .and_then(|edit| edit.cells.get(&field))
    }

    /// Leaves edit mode on every row. Cells still open are committed with
    /// their current draft value. Returns how many fields were written.
    pub fn disable_all(&mut self, records: &mut [Record]) -> usize {
        let Some(edit) = self.active.take() else {
            return 0;
        };
        let mut written = 0;
        for (field, draft) in edit.cells {
            if write_back(records, &edit.row_id, field, draft.value) {
                written += 1;
            }
        }
        debug!(row_id = %edit.row_id, written, "row edit mode disabled");
        written
    }

    pub fn begin_row(&mut self, records: &mut [Record], row_id: &str) -> bool {
        self.disable_all(records);
        if !records.iter().any(|record| record.id == row_id) {
            debug!(row_id, "edit requested for unknown row");
            return false;
        }
        self.active = Some(RowEdit::new(row_id));
        debug!(row_id, "row edit mode enabled");
        true
    }

    /// Opens a cell of the row in edit mode, pre-filled with the field text.
    /// A cell that is already open keeps its draft.
    pub fn begin_cell(&mut self, records: &[Record], row_id: &str, field: Field) -> bool {
        let Some(edit) = self.active.as_mut().filter(|edit| edit.row_id == row_id) else {
            return false;
        };
        if edit.is_cell_editing(field) {
            return false;
        }
        let Some(record) = records.iter().find(|record| record.id == row_id) else {
            return false;
        };
        edit.cells.insert(field, CellDraft::new(record.field(field)));
        true
    }

    pub fn update_cell(&mut self, row_id: &str, field: Field, text: String) -> bool {
        match self.draft_mut(row_id, field) {
            Some(draft) => {
                draft.value = text;
                true
            }
            None => false,
        }
    }

    /// Enter or blur: the cell returns to display and its value is written
    /// into the record. The row stays in `row-editing`.
    pub fn commit_cell(&mut self, records: &mut [Record], row_id: &str, field: Field) -> bool {
        let Some(edit) = self.active.as_mut().filter(|edit| edit.row_id == row_id) else {
            return false;
        };
        let Some(draft) = edit.cells.remove(&field) else {
            return false;
        };
        write_back(records, row_id, field, draft.value)
    }

    /// Escape: restore the text captured when editing began, then commit.
    pub fn cancel_cell(&mut self, records: &mut [Record], row_id: &str, field: Field) -> bool {
        match self.draft_mut(row_id, field) {
            Some(draft) => draft.revert(),
            None => return false,
        }
        self.commit_cell(records, row_id, field)
    }

    /// Drops edit state for rows that no longer exist.
    pub fn forget_missing(&mut self, records: &[Record]) {
        let missing = self
            .active
            .as_ref()
            .is_some_and(|edit| !records.iter().any(|record| record.id == edit.row_id));
        if missing {
            self.active = None;
        }
    }

    fn draft_mut(&mut self, row_id: &str, field: Field) -> Option<&mut CellDraft> {
        self.active
            .as_mut()
            .filter(|edit| edit.row_id == row_id)
            .and_then(|edit| edit.cells.get_mut(&field))
    }
}

fn write_back(records: &mut [Record], row_id: &str, field: Field, value: String) -> bool {
    match records.iter_mut().find(|record| record.id == row_id) {
        Some(record) => {
            record.set_field(field, value);
            true
        }
        None => {
            debug!(row_id, %field, "commit for missing row ignored");
            false
        }
    }
}
