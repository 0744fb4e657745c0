//! Field selectors used to parameterize sorting and searching.
//!
//! A [`Field`] names one attribute of a [`Book`] and knows how to read it as a
//! [`FieldValue`], which carries the natural ordering of that attribute's type:
//! numeric for ids, lexicographic for text, `false < true` for the stock flag.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Description,
    InStock,
}

impl Field {
    pub fn value<'a>(&self, book: &'a Book) -> FieldValue<'a> {
        match self {
            Field::Id => FieldValue::Id(book.id),
            Field::Name => FieldValue::Text(&book.name),
            Field::Description => FieldValue::Text(&book.description),
            Field::InStock => FieldValue::Flag(book.in_stock),
        }
    }

    /// Text fields only. Used where comparisons must ignore case.
    pub fn text<'a>(&self, book: &'a Book) -> Option<&'a str> {
        match self {
            Field::Name => Some(&book.name),
            Field::Description => Some(&book.description),
            Field::Id | Field::InStock => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Description => "description",
            Field::InStock => "inStock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "description" => Ok(Field::Description),
            "instock" | "in_stock" | "stock" => Ok(Field::InStock),
            _ => Err(ShelfError::InvalidField(s.to_string())),
        }
    }
}

/// A borrowed attribute value. Values of different fields are never compared
/// with one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Id(u64),
    Text(&'a str),
    Flag(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Whether the merge step takes the left front, given how it compares to
    /// the right front. Ties go left in both directions, which keeps the sort stable.
    pub fn keeps_left(&self, left_vs_right: Ordering) -> bool {
        match self {
            SortOrder::Ascending => left_vs_right != Ordering::Greater,
            SortOrder::Descending => left_vs_right != Ordering::Less,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ShelfError::InvalidOrder(s.to_string())),
        }
    }
}

/// How text fields are matched by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring, linear scan.
    #[default]
    Partial,
    /// Case-insensitive equality, binary search.
    Exact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_names_case_insensitively() {
        assert_eq!("id".parse::<Field>().unwrap(), Field::Id);
        assert_eq!("Name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!(" description ".parse::<Field>().unwrap(), Field::Description);
        assert_eq!("inStock".parse::<Field>().unwrap(), Field::InStock);
        assert_eq!("stock".parse::<Field>().unwrap(), Field::InStock);
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "author".parse::<Field>().unwrap_err();
        assert!(matches!(err, ShelfError::InvalidField(ref f) if f == "author"));
    }

    #[test]
    fn rejects_unknown_order() {
        assert!(matches!(
            "up".parse::<SortOrder>(),
            Err(ShelfError::InvalidOrder(_))
        ));
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn field_values_use_natural_ordering() {
        let a = Book::new(2, "alpha".into(), "x".into(), false);
        let b = Book::new(10, "beta".into(), "x".into(), true);

        assert!(Field::Id.value(&a) < Field::Id.value(&b));
        assert!(Field::Name.value(&a) < Field::Name.value(&b));
        assert!(Field::InStock.value(&a) < Field::InStock.value(&b));
    }

    #[test]
    fn keeps_left_on_ties() {
        assert!(SortOrder::Ascending.keeps_left(Ordering::Equal));
        assert!(SortOrder::Descending.keeps_left(Ordering::Equal));
        assert!(SortOrder::Ascending.keeps_left(Ordering::Less));
        assert!(!SortOrder::Ascending.keeps_left(Ordering::Greater));
        assert!(SortOrder::Descending.keeps_left(Ordering::Greater));
        assert!(!SortOrder::Descending.keeps_left(Ordering::Less));
    }

    #[test]
    fn text_accessor_only_for_text_fields() {
        let book = Book::new(1, "N".into(), "D".into(), true);
        assert_eq!(Field::Name.text(&book), Some("N"));
        assert_eq!(Field::Description.text(&book), Some("D"));
        assert_eq!(Field::Id.text(&book), None);
        assert_eq!(Field::InStock.text(&book), None);
    }
}
