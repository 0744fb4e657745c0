use colored::*;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::Book;
use unicode_width::UnicodeWidthStr;

const MIN_RULE_WIDTH: usize = 34;
const MAX_RULE_WIDTH: usize = 80;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn book_lines(book: &Book) -> [String; 4] {
    [
        format!("ID: {}", book.id),
        format!("Name: {}", book.name),
        format!("Description: {}", book.description),
        format!("In stock: {}", book.stock_label()),
    ]
}

/// Width of the separator rule: the widest line, clamped.
fn rule_width(books: &[Book]) -> usize {
    books
        .iter()
        .flat_map(book_lines)
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH)
}

pub fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let rule = "-".repeat(rule_width(books));
    for book in books {
        let [id, name, description, stock] = book_lines(book);
        println!("{}", id.yellow());
        println!("{}", name.bold());
        println!("{}", description);
        if book.in_stock {
            println!("{}", stock.green());
        } else {
            println!("{}", stock.red());
        }
        println!("{}", rule.dimmed());
    }
}

pub fn print_history(history: &str) {
    println!("History Log:");
    println!("{}", "-".repeat(25).dimmed());
    print!("{}", history);
}
