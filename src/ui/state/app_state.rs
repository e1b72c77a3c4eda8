use dioxus::prelude::{use_signal, Signal};

use crate::config::TableConfig;
use crate::usecase::services::table_controller::TableController;

pub struct AppState {
    pub table: Signal<TableController>,
    /// Text typed in the search box; applied on Search.
    pub search_input: Signal<String>,
}

impl AppState {
    pub fn new(config: &TableConfig) -> Self {
        let config = config.clone();
        Self {
            table: use_signal(move || TableController::new(&config)),
            search_input: use_signal(String::new),
        }
    }
}
