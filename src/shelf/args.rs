use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version = env!("SHELF_LONG_VERSION"))]
#[command(about = "A small flat-file book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding books.json, history.log and config.json
    #[arg(short, long, global = true, env = "SHELF_HOME")]
    pub dir: Option<PathBuf>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        name: String,
        description: String,
        /// Whether the book is in stock (yes/no)
        in_stock: String,
    },

    /// Replace the name, description and stock flag of a book
    #[command(alias = "u")]
    Update {
        id: String,
        name: String,
        description: String,
        /// Whether the book is in stock (yes/no)
        in_stock: String,
    },

    /// Delete every book matching a criteria
    #[command(alias = "rm")]
    Delete {
        /// One of: id, name, description, stock
        criteria: String,
        /// Id, text to look for, or yes/no for stock
        value: String,
    },

    /// Show all books
    #[command(alias = "ls")]
    List,

    /// Show one book
    #[command(alias = "v")]
    View { id: String },

    /// Sort the catalog (the new order is saved)
    Sort {
        /// One of: id, name, description, inStock
        field: String,
        /// asc or desc
        #[arg(default_value = "asc")]
        order: String,
    },

    /// Search for books
    #[command(alias = "s")]
    Search {
        /// One of: id, name, description, inStock
        field: String,
        value: String,
        /// Match the whole name or description instead of a substring
        #[arg(long)]
        exact: bool,
    },

    /// Show the action history
    History,
}
