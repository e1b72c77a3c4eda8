use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<Record>,
    pub total_matches: usize,
    pub total_pages: usize,
}

pub fn total_pages(total_matches: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_matches.div_ceil(page_size)
}

/// Clamps a requested page into `[1, total_pages]`. With no pages at all
/// the result is still 1.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1) as i64;
    page.clamp(1, upper) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButtonKind {
    First,
    Previous,
    Number(usize),
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub kind: PageButtonKind,
    pub label: String,
    /// Unclamped target; navigation clamps it.
    pub target: i64,
    pub disabled: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationControls {
    pub buttons: Vec<PageButton>,
}

impl PaginationControls {
    /// Builds First/Previous/1..N/Next/Last. Empty when there is at most one
    /// page, which hides the strip.
    pub fn build(current_page: usize, total_pages: usize) -> Self {
        if total_pages <= 1 {
            return Self::default();
        }

        let on_first = current_page == 1;
        let on_last = current_page == total_pages;
        let current = current_page as i64;

        let mut buttons = Vec::with_capacity(total_pages + 4);
        buttons.push(PageButton {
            kind: PageButtonKind::First,
            label: "First".to_string(),
            target: 1,
            disabled: on_first,
            is_current: false,
        });
        buttons.push(PageButton {
            kind: PageButtonKind::Previous,
            label: "Previous".to_string(),
            target: current - 1,
            disabled: on_first,
            is_current: false,
        });
        for number in 1..=total_pages {
            buttons.push(PageButton {
                kind: PageButtonKind::Number(number),
                label: number.to_string(),
                target: number as i64,
                disabled: false,
                is_current: number == current_page,
            });
        }
        buttons.push(PageButton {
            kind: PageButtonKind::Next,
            label: "Next".to_string(),
            target: current + 1,
            disabled: on_last,
            is_current: false,
        });
        buttons.push(PageButton {
            kind: PageButtonKind::Last,
            label: "Last".to_string(),
            target: total_pages as i64,
            disabled: on_last,
            is_current: false,
        });

        Self { buttons }
    }

    pub fn is_visible(&self) -> bool {
        !self.buttons.is_empty()
    }

    #[cfg(test)]
    pub fn button(&self, kind: PageButtonKind) -> Option<&PageButton> {
        self.buttons.iter().find(|button| button.kind == kind)
    }
}
