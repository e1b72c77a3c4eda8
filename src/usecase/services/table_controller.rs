use std::collections::BTreeSet;

use tracing::debug;

use crate::config::TableConfig;
use crate::domain::entities::edit::RowMode;
use crate::domain::entities::page::{clamp_page, PageQuery, PageResult, PaginationControls};
use crate::domain::entities::record::{Field, Record};
use crate::usecase::ports::source::SourceError;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::query_service::QueryService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub field: Field,
    pub text: String,
    /// Present while the cell is in `cell-editing`.
    pub draft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub selected: bool,
    pub mode: RowMode,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub pagination: PaginationControls,
    pub select_all: bool,
}

/// Owns the record collection together with search, page, selection and
/// edit state. Every mutating action ends with a refresh (filter with the
/// live search term, paginate, settle the page); `view` derives what is on
/// screen from the last refresh.
pub struct TableController {
    records: Vec<Record>,
    /// Live text of the search box.
    search_term: String,
    /// Term the rows on screen were filtered with at the last refresh.
    rendered_term: String,
    current_page: usize,
    selected: BTreeSet<String>,
    select_all: bool,
    query: QueryService,
    edits: EditService,
}

impl TableController {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
            rendered_term: String::new(),
            current_page: 1,
            selected: BTreeSet::new(),
            select_all: false,
            query: QueryService::new(config.page_size),
            edits: EditService::new(),
        }
    }

    #[cfg(test)]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    #[cfg(test)]
    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected
    }

    #[cfg(test)]
    pub fn editing_row(&self) -> Option<&str> {
        self.edits.active().map(|edit| edit.row_id.as_str())
    }

    pub fn total_pages(&self) -> usize {
        self.current_result().total_pages
    }

    pub fn load(&mut self, records: Vec<Record>) {
        debug!(count = records.len(), "replacing record collection");
        self.records = records;
        self.edits = EditService::new();
        self.refresh();
    }

    /// A failed fetch leaves the table as it was; the loader already logged it.
    pub fn apply_load(&mut self, result: Result<Vec<Record>, SourceError>) {
        if let Ok(records) = result {
            self.load(records);
        }
    }

    /// Tracks the live search box. The rows on screen keep their filter until
    /// the next refresh; the page is not moved.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.edits.disable_all(&mut self.records);
        self.search_term = term.into();
        self.current_page = 1;
        self.refresh();
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.edits.disable_all(&mut self.records);
        let total = self.total_pages();
        self.current_page = clamp_page(page, total);
        self.refresh();
    }

    pub fn toggle_row(&mut self, row_id: &str, checked: bool) {
        if checked {
            self.selected.insert(row_id.to_string());
        } else {
            self.selected.remove(row_id);
        }
    }

    /// Checks or clears every visible row checkbox.
    pub fn set_select_all(&mut self, checked: bool) {
        self.select_all = checked;
        self.selected.clear();
        if checked {
            let visible = self.current_result().rows;
            self.selected.extend(visible.into_iter().map(|record| record.id));
        }
    }

    pub fn delete_selected(&mut self) -> usize {
        self.edits.disable_all(&mut self.records);
        let targets = std::mem::take(&mut self.selected);
        let before = self.records.len();
        self.records.retain(|record| !targets.contains(&record.id));
        self.select_all = false;
        let removed = before - self.records.len();
        debug!(removed, "deleted selected rows");
        self.refresh();
        removed
    }

    pub fn delete_row(&mut self, row_id: &str) -> bool {
        self.edits.disable_all(&mut self.records);
        let before = self.records.len();
        self.records.retain(|record| record.id != row_id);
        let removed = before != self.records.len();
        self.refresh();
        removed
    }

    /// Enters `row-editing` for one visible row after leaving it on every
    /// other row. Rows off the current page are ignored.
    pub fn begin_row_edit(&mut self, row_id: &str) -> bool {
        let visible = self
            .current_result()
            .rows
            .iter()
            .any(|record| record.id == row_id);
        if !visible {
            debug!(row_id, "edit requested for row not on screen");
            return false;
        }
        self.edits.begin_row(&mut self.records, row_id)
    }

    pub fn begin_cell_edit(&mut self, row_id: &str, field: Field) -> bool {
        self.edits.begin_cell(&self.records, row_id, field)
    }

    pub fn update_cell_input(&mut self, row_id: &str, field: Field, text: String) -> bool {
        self.edits.update_cell(row_id, field, text)
    }

    pub fn commit_cell(&mut self, row_id: &str, field: Field) -> bool {
        let written = self.edits.commit_cell(&mut self.records, row_id, field);
        if written {
            self.refresh();
        }
        written
    }

    pub fn cancel_cell(&mut self, row_id: &str, field: Field) -> bool {
        let written = self.edits.cancel_cell(&mut self.records, row_id, field);
        if written {
            self.refresh();
        }
        written
    }

    /// Shared by the Save and Cancel buttons: both keep whatever the cells
    /// currently hold.
    pub fn finish_row_edit(&mut self) {
        self.edits.disable_all(&mut self.records);
        self.refresh();
    }

    pub fn view(&self) -> TableView {
        let result = self.current_result();
        let rows = result
            .rows
            .iter()
            .map(|record| RowView {
                id: record.id.clone(),
                selected: self.selected.contains(&record.id),
                mode: self.edits.row_mode(&record.id),
                cells: Field::EDITABLE
                    .iter()
                    .map(|field| CellView {
                        field: *field,
                        text: record.field(*field).to_string(),
                        draft: self
                            .edits
                            .draft(&record.id, *field)
                            .map(|draft| draft.value.clone()),
                    })
                    .collect(),
            })
            .collect();

        TableView {
            rows,
            current_page: self.current_page,
            total_pages: result.total_pages,
            total_matches: result.total_matches,
            pagination: PaginationControls::build(self.current_page, result.total_pages),
            select_all: self.select_all,
        }
    }

    /// Rows are rebuilt, so their checkboxes come back unchecked. The
    /// select-all flag lives outside the rows and is left alone.
    fn refresh(&mut self) {
        let (page, result) =
            self.query
                .settle_page(&self.records, &self.search_term, self.current_page);
        self.current_page = page;
        self.rendered_term.clone_from(&self.search_term);
        self.selected.clear();
        self.edits.forget_missing(&self.records);
        debug!(
            page,
            total_pages = result.total_pages,
            matches = result.total_matches,
            "table refreshed"
        );
    }

    fn current_result(&self) -> PageResult {
        self.query.query_page(
            &self.records,
            &PageQuery {
                page: self.current_page,
                page_size: self.query.page_size(),
                search: self.rendered_term.clone(),
            },
        )
    }
}
