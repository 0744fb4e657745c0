use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The `id` is handed out by the [`Catalog`](crate::catalog::Catalog) and only
/// ever set from outside when loading saved books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl Book {
    pub fn new(id: u64, name: String, description: String, in_stock: bool) -> Self {
        Self {
            id,
            name,
            description,
            in_stock,
        }
    }

    pub fn stock_label(&self) -> &'static str {
        if self.in_stock {
            "yes"
        } else {
            "no"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_stock_flag_as_camel_case() {
        let book = Book::new(3, "Dune".into(), "spice".into(), true);
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["inStock"], true);
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn stock_label_reads_yes_or_no() {
        let mut book = Book::new(1, "A".into(), "B".into(), true);
        assert_eq!(book.stock_label(), "yes");
        book.in_stock = false;
        assert_eq!(book.stock_label(), "no");
    }
}
