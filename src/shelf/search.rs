//! # Searching
//!
//! Every search runs over a disposable copy of the books, sorted ascending by the
//! searched field. The caller's slice is never reordered.
//!
//! The strategy depends on the field:
//!
//! | Field                  | Partial                        | Exact                          |
//! |------------------------|--------------------------------|--------------------------------|
//! | `id`                   | binary search, single book     | same                           |
//! | `inStock`              | linear scan on `"yes"`/other   | same                           |
//! | `name`, `description`  | linear scan, substring         | binary search + neighbors      |
//!
//! Text comparisons ignore case. For the exact text search the copy is sorted by
//! the case-folded value, so the binary search and the sort agree on ordering.

use crate::field::{Field, MatchMode, SortOrder};
use crate::merge_sort::{merge_sort_by, sort_books};
use crate::model::Book;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// An id lookup hit.
    Found(Book),
    /// Every book matching a non-id search, possibly none.
    Matches(Vec<Book>),
    /// An id lookup miss.
    NotFound,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResult::Found(_) => false,
            SearchResult::Matches(books) => books.is_empty(),
            SearchResult::NotFound => true,
        }
    }

    pub fn into_books(self) -> Vec<Book> {
        match self {
            SearchResult::Found(book) => vec![book],
            SearchResult::Matches(books) => books,
            SearchResult::NotFound => Vec::new(),
        }
    }
}

pub fn search(books: &[Book], field: Field, value: &str, mode: MatchMode) -> SearchResult {
    match (field, mode) {
        (Field::Id, _) => search_id(books, value),
        (Field::InStock, _) => {
            let wanted = value.trim().eq_ignore_ascii_case("yes");
            let sorted = sort_books(books.to_vec(), field, SortOrder::Ascending);
            SearchResult::Matches(sorted.into_iter().filter(|b| b.in_stock == wanted).collect())
        }
        (Field::Name | Field::Description, MatchMode::Partial) => {
            let needle = value.to_lowercase();
            let sorted = sort_books(books.to_vec(), field, SortOrder::Ascending);
            SearchResult::Matches(
                sorted
                    .into_iter()
                    .filter(|b| {
                        field
                            .text(b)
                            .is_some_and(|text| text.to_lowercase().contains(&needle))
                    })
                    .collect(),
            )
        }
        (Field::Name | Field::Description, MatchMode::Exact) => search_text_exact(books, field, value),
    }
}

fn search_id(books: &[Book], value: &str) -> SearchResult {
    let Ok(target) = value.trim().parse::<u64>() else {
        return SearchResult::NotFound;
    };

    let sorted = sort_books(books.to_vec(), Field::Id, SortOrder::Ascending);
    match binary_search(&sorted, |book| book.id.cmp(&target)) {
        Some(mid) => SearchResult::Found(sorted[mid].clone()),
        None => SearchResult::NotFound,
    }
}

fn search_text_exact(books: &[Book], field: Field, value: &str) -> SearchResult {
    let fold = |book: &Book| field.text(book).unwrap_or_default().to_lowercase();
    let target = value.to_lowercase();

    let sorted = merge_sort_by(
        books.to_vec(),
        &|a: &Book, b: &Book| fold(a).cmp(&fold(b)),
        SortOrder::Ascending,
    );

    let matches = match binary_search(&sorted, |book| fold(book).cmp(&target)) {
        Some(mid) => neighbors(&sorted, mid, |book| fold(book) == target).to_vec(),
        None => Vec::new(),
    };
    SearchResult::Matches(matches)
}

/// Classic closed-interval binary search. `probe` reports how the element at
/// a position compares to the target. Returns the first position found equal.
pub fn binary_search<T>(sorted: &[T], probe: impl Fn(&T) -> Ordering) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        match probe(&sorted[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// Widens a hit at `mid` to the full run of equal elements around it.
pub fn neighbors<T>(sorted: &[T], mid: usize, is_equal: impl Fn(&T) -> bool) -> &[T] {
    let mut start = mid;
    while start > 0 && is_equal(&sorted[start - 1]) {
        start -= 1;
    }

    let mut end = mid + 1;
    while end < sorted.len() && is_equal(&sorted[end]) {
        end += 1;
    }

    &sorted[start..end]
}
