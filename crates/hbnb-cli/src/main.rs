//! HBNB console
//!
//! Command-line interface over the storage façade

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use hbnb_core::logging_facility::{init, Profile};
use hbnb_core::BackendKind;
use hbnb_store::{Storage, StorageConfig};

mod commands;
mod error;

use error::ConsoleError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StorageChoice {
    File,
    Db,
}

#[derive(Debug, Parser)]
#[command(name = "hbnb")]
#[command(about = "HBNB - console over the storage façade", long_about = None)]
struct Cli {
    /// Backend to use (overrides HBNB_TYPE_STORAGE)
    #[arg(long, value_enum, global = true)]
    storage: Option<StorageChoice>,

    /// JSON document path for the file backend (overrides HBNB_FILE_PATH)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// SQLite database path for the db backend (overrides HBNB_MYSQL_DB)
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log storage operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create an object: create <Class> [key="value" ...]
    Create(commands::console::CreateArgs),
    /// Print an object: show <Class> <id>
    Show(commands::console::TargetArgs),
    /// Delete an object: destroy <Class> <id>
    Destroy(commands::console::TargetArgs),
    /// Print every object, or every object of a class
    All(commands::console::AllArgs),
    /// Count the objects of a class
    Count(commands::console::AllArgs),
    /// Set one attribute: update <Class> <id> <attribute> <value>
    Update(commands::console::UpdateArgs),
    /// Render the HTML list of states
    StatesList,
}

fn storage_config(cli: &Cli) -> Result<StorageConfig, ConsoleError> {
    let mut config = StorageConfig::from_env()?;
    match cli.storage {
        Some(StorageChoice::File) => config.backend = BackendKind::File,
        Some(StorageChoice::Db) => config.backend = BackendKind::Relational,
        None => {}
    }
    if let Some(file) = &cli.file {
        config.file_path = file.clone();
    }
    if let Some(database) = &cli.database {
        config.db.database = database.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<String, ConsoleError> {
    let config = storage_config(&cli)?;
    let mut storage = Storage::open(&config)?;

    let output = storage.request(|s| match cli.command {
        Commands::Create(args) => commands::console::create(s, args),
        Commands::Show(args) => commands::console::show(s, args),
        Commands::Destroy(args) => commands::console::destroy(s, args),
        Commands::All(args) => commands::console::all(s, args),
        Commands::Count(args) => commands::console::count(s, args),
        Commands::Update(args) => commands::console::update(s, args),
        Commands::StatesList => commands::render::states_list(s),
    })?;

    storage.shutdown()?;
    Ok(output)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    if cli.verbose {
        init(Profile::Development);
    }

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(ConsoleError::Storage(e)) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
