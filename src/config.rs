use crate::{DATA_SOURCE_URL, PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub data_url: String,
    pub page_size: usize,
}

impl TableConfig {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
            page_size: PAGE_SIZE,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        // Staging builds can point at another static file at compile time.
        let data_url = option_env!("ADMIN_UI_DATA_URL").unwrap_or(DATA_SOURCE_URL);
        Self::new(data_url)
    }
}
