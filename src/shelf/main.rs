use clap::Parser;
use directories::ProjectDirs;
use shelf::api::ShelfApi;
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::history::FileHistory;
use shelf::store::fs::JsonFileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_books, print_history, print_messages};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

type AppApi = ShelfApi<JsonFileStore, FileHistory>;

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            description,
            in_stock,
        }) => handle_add(&mut api, &name, &description, &in_stock),
        Some(Commands::Update {
            id,
            name,
            description,
            in_stock,
        }) => handle_update(&mut api, &id, &name, &description, &in_stock),
        Some(Commands::Delete { criteria, value }) => handle_delete(&mut api, &criteria, &value),
        Some(Commands::View { id }) => handle_view(&api, &id),
        Some(Commands::Sort { field, order }) => handle_sort(&mut api, &field, &order),
        Some(Commands::Search {
            field,
            value,
            exact,
        }) => handle_search(&api, &field, &value, exact),
        Some(Commands::History) => handle_history(&api),
        Some(Commands::List) | None => handle_list(&api),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let dirs = ProjectDirs::from("com", "shelf", "shelf").ok_or_else(|| {
            ShelfError::Store("Could not determine the user data directory".to_string())
        })?;
        return Ok(dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn init_api(cli: &Cli) -> Result<AppApi> {
    let dir = data_dir(cli)?;
    let config = ShelfConfig::load(&dir)?;
    tracing::debug!(target: "shelf::cli", dir = %dir.display(), ?config, "Resolved data directory");

    let store = JsonFileStore::new(config.data_path(&dir));
    let history = FileHistory::new(config.history_path(&dir));
    ShelfApi::open(store, history)
}

fn handle_add(api: &mut AppApi, name: &str, description: &str, in_stock: &str) -> Result<()> {
    let result = api.add_book(name, description, in_stock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    api: &mut AppApi,
    id: &str,
    name: &str,
    description: &str,
    in_stock: &str,
) -> Result<()> {
    let result = api.update_book(id, name, description, in_stock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut AppApi, criteria: &str, value: &str) -> Result<()> {
    let result = api.delete_books(criteria, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &AppApi) -> Result<()> {
    let result = api.list_books()?;
    print_books(&result.listed_books);
    Ok(())
}

fn handle_view(api: &AppApi, id: &str) -> Result<()> {
    let result = api.view_book(id)?;
    print_books(&result.listed_books);
    Ok(())
}

fn handle_sort(api: &mut AppApi, field: &str, order: &str) -> Result<()> {
    let result = api.sort_books(field, order)?;
    print_messages(&result.messages);
    print_books(&result.listed_books);
    Ok(())
}

fn handle_search(api: &AppApi, field: &str, value: &str, exact: bool) -> Result<()> {
    let result = api.search_books(field, value, exact)?;
    if result.listed_books.is_empty() {
        print_messages(&result.messages);
    } else {
        print_books(&result.listed_books);
    }
    Ok(())
}

fn handle_history(api: &AppApi) -> Result<()> {
    let result = api.history()?;
    match &result.history {
        Some(history) => print_history(history),
        None => print_messages(&result.messages),
    }
    Ok(())
}
