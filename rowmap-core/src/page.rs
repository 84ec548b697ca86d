/// Paging request: which page and how many rows per page.
pub trait Pageable {
    /// 1-based page number.
    fn page_number(&self) -> u32;
    /// Rows per page, must be positive.
    fn page_size(&self) -> u32;
    /// Row offset of the first row of the page.
    fn offset(&self) -> u64 {
        (self.page_number().saturating_sub(1) as u64) * self.page_size() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplePageable {
    pub page_number: u32,
    pub page_size: u32,
}

impl Pageable for SimplePageable {
    fn page_number(&self) -> u32 {
        self.page_number
    }
    fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// One page of a result set plus the derived paging arithmetic.
///
/// An out-of-range requested page number is corrected into
/// `1..=total_pages` rather than rejected; an empty result still counts as
/// one (empty) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    page_number: u32,
    limit: u32,
    prev_page: u32,
    next_page: u32,
    total_pages: u32,
    total_rows: u64,
    rows: Vec<T>,
    first_page: bool,
    last_page: bool,
    has_prev_page: bool,
    has_next_page: bool,
}

impl<T> Page<T> {
    pub fn new(total_rows: u64, page_number: u32, limit: u32, rows: Vec<T>) -> Self {
        assert!(limit > 0, "The page size must be positive");
        let total_pages = (total_rows.saturating_sub(1) / limit as u64 + 1) as u32;
        let page_number = page_number.clamp(1, total_pages);
        let first_page = page_number == 1;
        let last_page = page_number == total_pages && page_number != 1;
        let has_prev_page = page_number != 1;
        let has_next_page = page_number != total_pages;
        Self {
            page_number,
            limit,
            prev_page: if has_prev_page { page_number - 1 } else { 1 },
            next_page: if has_next_page { page_number + 1 } else { 1 },
            total_pages,
            total_rows,
            rows,
            first_page,
            last_page,
            has_prev_page,
            has_next_page,
        }
    }

    pub fn from_pageable(pageable: &impl Pageable, total_rows: u64, rows: Vec<T>) -> Self {
        Self::new(total_rows, pageable.page_number(), pageable.page_size(), rows)
    }

    /// Same page with every row transformed.
    pub fn map_rows<R>(self, mapper: impl FnMut(T) -> R) -> Page<R> {
        let mapped = self.rows.into_iter().map(mapper).collect();
        Page::new(self.total_rows, self.page_number, self.limit, mapped)
    }

    /// Same paging data with a replaced row list.
    pub fn with_rows<R>(&self, rows: Vec<R>) -> Page<R> {
        Page::new(self.total_rows, self.page_number, self.limit, rows)
    }

    /// Visit every row, returning the page unchanged.
    pub fn peek(self, mut visitor: impl FnMut(&T)) -> Self {
        for row in &self.rows {
            visitor(row);
        }
        self
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }
    pub fn prev_page(&self) -> u32 {
        self.prev_page
    }
    pub fn next_page(&self) -> u32 {
        self.next_page
    }
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }
    pub fn rows(&self) -> &[T] {
        &self.rows
    }
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
    pub fn is_first_page(&self) -> bool {
        self.first_page
    }
    pub fn is_last_page(&self) -> bool {
        self.last_page
    }
    pub fn has_prev_page(&self) -> bool {
        self.has_prev_page
    }
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }
}
