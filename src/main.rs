use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use subgrep::{commands, Config};

#[derive(Parser)]
#[command(author, version, about = "Search zip-compressed subtitle files stored in SQLite", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the subtitle database path
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search all subtitle files for a query string
    Search {
        query: String,
        /// Lines of context on each side of a match
        #[arg(short, long)]
        window: Option<usize>,
        /// Match case exactly instead of case-insensitively
        #[arg(long)]
        case_sensitive: bool,
        /// Only scan the first N records
        #[arg(long)]
        limit: Option<i64>,
        /// Save results to a timestamped JSON file
        #[arg(long)]
        save: bool,
    },
    /// Show metadata for one subtitle file
    Info { id: i64 },
    /// Print the full text of one subtitle file
    Show { id: i64 },
    /// List the records in the database
    List {
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Extract subtitle files to a directory as .srt
    Export {
        #[arg(long, default_value = "subtitles")]
        out_dir: PathBuf,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Create a small sample database for local testing
    Seed,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let result = match cli.command {
        Commands::Search {
            query,
            window,
            case_sensitive,
            limit,
            save,
        } => commands::search(&config, &query, window, case_sensitive, limit, save),
        Commands::Info { id } => commands::info(&config, id),
        Commands::Show { id } => commands::show(&config, id),
        Commands::List { limit } => commands::list(&config, limit),
        Commands::Export { out_dir, limit } => commands::export(&config, &out_dir, limit),
        Commands::Seed => commands::seed(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
