use crate::domain::entities::page::{total_pages, PageQuery, PageResult};
use crate::domain::entities::record::Record;

pub struct QueryService {
    page_size: usize,
}

impl QueryService {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter_records<'a>(&self, records: &'a [Record], search: &str) -> Vec<&'a Record> {
        records.iter().filter(|record| record.matches(search)).collect()
    }

    /// Pages are 1-based; a page past the end yields no rows.
    pub fn query_page(&self, records: &[Record], query: &PageQuery) -> PageResult {
        let matches = self.filter_records(records, &query.search);
        let total_matches = matches.len();
        let start = query.page.saturating_sub(1).saturating_mul(query.page_size);
        let rows = matches
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .cloned()
            .collect();

        PageResult {
            rows,
            total_matches,
            total_pages: total_pages(total_matches, query.page_size),
        }
    }

    /// Steps back one page at a time while the requested page is empty but
    /// other pages exist, e.g. after the last row of the last page is deleted.
    pub fn settle_page(&self, records: &[Record], search: &str, page: usize) -> (usize, PageResult) {
        let mut page = page.max(1);
        loop {
            let result = self.query_page(
                records,
                &PageQuery {
                    page,
                    page_size: self.page_size,
                    search: search.to_string(),
                },
            );
            if result.rows.is_empty() && result.total_pages > 0 && page > 1 {
                page -= 1;
                continue;
            }
            return (page, result);
        }
    }
}
