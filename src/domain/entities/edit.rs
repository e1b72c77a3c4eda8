use std::collections::BTreeMap;

use crate::domain::entities::record::Field;

/// Uncommitted text of a cell in `cell-editing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDraft {
    pub original: String,
    pub value: String,
}

impl CellDraft {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.to_string(),
            value: text.to_string(),
        }
    }

    pub fn revert(&mut self) {
        self.value = self.original.clone();
    }
}

/// The single row in `row-editing` and its open cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub row_id: String,
    pub cells: BTreeMap<Field, CellDraft>,
}

impl RowEdit {
    pub fn new(row_id: impl Into<String>) -> Self {
        Self {
            row_id: row_id.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn is_cell_editing(&self, field: Field) -> bool {
        self.cells.contains_key(&field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    RowEditing,
}
