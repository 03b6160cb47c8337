//! `marksift`: boolean search over bookmark exports.

mod logging;
mod render;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, bail};
use marksift_core::bookmarks::load_bookmarks;
use marksift_core::core::MarkSiftCore;
use marksift_core::types::{AppConfig, Config, QueryText, SavedQueryId, SearchMode};
use marksift_search::{SearchConfig, SearchError, search};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding config.toml and the saved-query database.
    #[arg(long, global = true, default_value = ".marksift")]
    data_dir: PathBuf,

    /// Log filter, e.g. `debug` or `marksift_search=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a bookmark file.
    Search {
        query: String,
        #[command(flatten)]
        options: SearchArgs,
        /// Save the query after running it.
        #[arg(long)]
        save: bool,
    },
    /// Manage saved queries.
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Bookmark file; defaults to `general.bookmarks_path` from config.toml.
    #[arg(long)]
    bookmarks: Option<PathBuf>,
    /// Match terms against `tag:` markers only.
    #[arg(long)]
    tags_only: bool,
    /// Treat every term as a regular expression.
    #[arg(long)]
    regex: bool,
}

#[derive(Subcommand)]
enum SavedCommands {
    /// List saved queries, newest first.
    List,
    /// Remove a saved query.
    Remove { id: SavedQueryId },
    /// Run a saved query with the mode it was saved with.
    Run {
        id: SavedQueryId,
        #[arg(long)]
        bookmarks: Option<PathBuf>,
    },
    /// Remove every saved query.
    Clear,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = AppConfig::path(&cli.data_dir);
    let app_config = AppConfig::load(&config_path)
        .wrap_err_with(|| format!("failed to load {}", config_path.display()))?;
    logging::init_logging(cli.log_level.as_deref(), &app_config.general.log_level);
    for problem in app_config.validate() {
        tracing::warn!(%problem, "invalid config value replaced with default");
    }
    let app_config = app_config.with_defaults_for_invalid();

    match cli.command {
        Commands::Search {
            query,
            options,
            save,
        } => {
            if query.trim().is_empty() {
                return Ok(empty_query());
            }
            let mode = SearchMode {
                tags_only: options.tags_only || app_config.search.tags_only,
                use_regex: options.regex || app_config.search.use_regex,
            };
            let bookmarks = bookmarks_path(options.bookmarks.as_deref(), &app_config)?;
            if !run_search(&query, mode, &bookmarks, &app_config)? {
                return Ok(empty_query());
            }
            if save {
                save_query(&cli.data_dir, &query, mode)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Saved { command } => run_saved(command, &cli.data_dir, &app_config),
    }
}

fn run_saved(command: SavedCommands, data_dir: &Path, app_config: &AppConfig) -> Result<ExitCode> {
    let mut core = open_core(data_dir)?;
    match command {
        SavedCommands::List => {
            let saved = core.saved_queries()?;
            if saved.is_empty() {
                println!("No saved queries.");
            }
            for (id, query) in &saved {
                println!("{}", render::render_saved(*id, query));
            }
        }
        SavedCommands::Remove { id } => {
            core.remove_saved_query(id)?;
            println!("Removed saved query {id}.");
        }
        SavedCommands::Run { id, bookmarks } => {
            let saved = core.saved_query(id)?;
            let bookmarks = bookmarks_path(bookmarks.as_deref(), app_config)?;
            if !run_search(saved.query.as_str(), saved.mode, &bookmarks, app_config)? {
                return Ok(empty_query());
            }
        }
        SavedCommands::Clear => {
            let removed = core.clear_saved_queries()?;
            println!("Removed {removed} saved queries.");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn empty_query() -> ExitCode {
    println!("{}", render::EMPTY_QUERY);
    ExitCode::FAILURE
}

/// Prints the results of `query`. Returns false if the query was empty.
fn run_search(query: &str, mode: SearchMode, bookmarks: &Path, app_config: &AppConfig) -> Result<bool> {
    let documents = load_bookmarks(bookmarks)
        .wrap_err_with(|| format!("failed to load bookmarks from {}", bookmarks.display()))?;

    let config = SearchConfig {
        tags_only: mode.tags_only,
        use_regex_all: mode.use_regex,
        ..SearchConfig::from(&app_config.search)
    };

    let outcome = match search(query, &documents, &config) {
        Ok(outcome) => outcome,
        Err(SearchError::EmptyQuery) => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    println!("{}", render::render_outcome(&outcome));
    Ok(true)
}

fn save_query(data_dir: &Path, query: &str, mode: SearchMode) -> Result<()> {
    let query = QueryText::try_new(query)?;
    let mut core = open_core(data_dir)?;
    match core.save_query(query, mode)? {
        Some(id) => println!("Saved as {id}."),
        None => println!("Query already saved."),
    }
    Ok(())
}

fn open_core(data_dir: &Path) -> Result<MarkSiftCore> {
    let config = Config {
        base_path: data_dir.to_path_buf(),
    };
    MarkSiftCore::open(config)
        .wrap_err_with(|| format!("failed to open data directory {}", data_dir.display()))
}

fn bookmarks_path(cli_path: Option<&Path>, app_config: &AppConfig) -> Result<PathBuf> {
    match cli_path.or(app_config.general.bookmarks_path.as_deref()) {
        Some(path) => Ok(path.to_path_buf()),
        None => bail!("no bookmark file: pass --bookmarks or set general.bookmarks_path in config.toml"),
    }
}
