//! Fixed-size pagination over an item collection.
//!
//! Splits a sequence into 1-based pages of `per_page` items. An empty
//! collection still has one (empty) page, so rendering an empty sitemap
//! stays valid.

use thiserror::Error;

/// Pagination errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginatorError {
    #[error("page {number} is out of range (1..={num_pages})")]
    InvalidPage { number: usize, num_pages: usize },
}

/// Splits an owned item collection into fixed-size pages.
#[derive(Debug)]
pub struct Paginator<T> {
    objects: Vec<T>,
    per_page: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator. A `per_page` below 1 is treated as 1.
    pub fn new(objects: Vec<T>, per_page: usize) -> Self {
        Self {
            objects,
            per_page: per_page.max(1),
        }
    }

    /// Total number of items across all pages.
    pub fn count(&self) -> usize {
        self.objects.len()
    }

    /// Number of items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total number of pages. An empty collection has one empty page.
    pub fn num_pages(&self) -> usize {
        if self.objects.is_empty() {
            1
        } else {
            self.objects.len().div_ceil(self.per_page)
        }
    }

    /// Get page `number` (1-based).
    pub fn page(&self, number: usize) -> Result<Page<'_, T>, PaginatorError> {
        let num_pages = self.num_pages();
        if number == 0 || number > num_pages {
            return Err(PaginatorError::InvalidPage { number, num_pages });
        }
        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(self.objects.len());
        Ok(Page {
            object_list: &self.objects[start..end],
            number,
            num_pages,
        })
    }
}

/// One page of a [`Paginator`].
#[derive(Debug)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub object_list: &'a [T],
    /// 1-based page number.
    pub number: usize,
    num_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}
