use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{ConfigAction, ShelfApi, ShelfPaths};
use shelf::commands;
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod menu;
mod print;

use args::{Cli, Commands};
use print::{print_books, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let home = resolve_home()?;
    let loaded = ShelfConfig::load(&home);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(cli.verbose, &config.log_level);
    if let Err(e) = &loaded {
        tracing::warn!(
            home = %home.display(),
            error = %e,
            "ignoring unreadable config, using defaults"
        );
    }

    let data_file = cli.db.clone().unwrap_or_else(|| config.data_path(&home));
    tracing::debug!(home = %home.display(), data_file = %data_file.display(), "resolved paths");
    let paths = ShelfPaths { home, data_file };

    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut api = open_api(&paths)?;
            menu::run(&mut api, &mut io::stdin().lock(), &mut out)
        }
        Commands::Add {
            title,
            author,
            year,
        } => {
            let result = open_api(&paths)?.add_book(&title, &author, &year)?;
            print_messages(&mut out, &result.messages)?;
            Ok(())
        }
        Commands::Delete { id } => {
            let result = open_api(&paths)?.delete_book(&id)?;
            print_messages(&mut out, &result.messages)?;
            Ok(())
        }
        Commands::Search { query } => {
            let result = open_api(&paths)?.search_books(&query)?;
            print_books(&mut out, &result.listed_books)?;
            print_messages(&mut out, &result.messages)?;
            Ok(())
        }
        Commands::List => {
            let result = open_api(&paths)?.list_books()?;
            print_books(&mut out, &result.listed_books)?;
            print_messages(&mut out, &result.messages)?;
            Ok(())
        }
        Commands::Status { id, status } => {
            let result = open_api(&paths)?.change_status(&id, &status)?;
            print_messages(&mut out, &result.messages)?;
            Ok(())
        }
        // Does not load the catalog, so it works even when the catalog file is unreadable.
        Commands::Config { key, value } => handle_config(&mut out, &paths, key, value),
    }
}

fn open_api(paths: &ShelfPaths) -> Result<ShelfApi<FileStore>> {
    ShelfApi::new(FileStore::new(&paths.data_file))
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("SHELF_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// `SHELF_LOG` wins, then `--verbose`, then the configured level.
fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level };
        EnvFilter::new(format!("shelf={}", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn handle_config<W: Write>(
    out: &mut W,
    paths: &ShelfPaths,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            writeln!(out, "{} = {}", key, value)?;
        }
        writeln!(out, "catalog = {}", paths.data_file.display())?;
    }
    print_messages(out, &result.messages)?;
    Ok(())
}
