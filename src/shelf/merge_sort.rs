//! Top-down merge sort.
//!
//! Stable, O(n log n), generic over any comparator. The catalog sorts by a
//! [`Field`]; the searcher also sorts by case-folded text.

use crate::field::{Field, SortOrder};
use crate::model::Book;
use std::cmp::Ordering;

/// Sorts `items` with `compare` in the given order and returns the new sequence.
///
/// The sequence is split at the midpoint with the lower half taking the extra
/// element on odd lengths. Equal elements keep their relative order.
pub fn merge_sort_by<T, F>(items: Vec<T>, compare: &F, order: SortOrder) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let middle = left.len().div_ceil(2);
    let right = left.split_off(middle);

    let left = merge_sort_by(left, compare, order);
    let right = merge_sort_by(right, compare, order);

    merge(left, right, compare, order)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F, order: SortOrder) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => order.keeps_left(compare(l, r)),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Sorts books by one of their fields.
pub fn sort_books(books: Vec<Book>, field: Field, order: SortOrder) -> Vec<Book> {
    merge_sort_by(
        books,
        &|a: &Book, b: &Book| field.value(a).cmp(&field.value(b)),
        order,
    )
}
