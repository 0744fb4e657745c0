use crate::error::{Result, ShelfError};
use crate::model::Book;

pub mod add;
pub mod delete;
pub mod history;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

pub use delete::DeleteCriteria;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub history: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_history(mut self, history: String) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// The three user-supplied attributes of a book, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub name: String,
    pub description: String,
    pub in_stock: bool,
}

impl BookInput {
    /// Validates raw input. Name and description must be non-blank and the
    /// stock answer must be `yes` or `no`.
    pub fn parse(name: &str, description: &str, in_stock: &str) -> Result<Self> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() {
            return Err(ShelfError::Invalid("Book name cannot be empty.".into()));
        }
        if description.is_empty() {
            return Err(ShelfError::Invalid(
                "Book description cannot be empty.".into(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            in_stock: parse_yes_no(in_stock)?,
        })
    }
}

/// Strict yes/no, case-insensitive.
pub fn parse_yes_no(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ShelfError::Invalid("In stock must be 'yes' or 'no'.".into())),
    }
}
