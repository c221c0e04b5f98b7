//! Command-line interface for `recordbook`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use recordbook_lib::{SortKey, ViewQuery};

use crate::config::{self, CliOverrides, Config};
use crate::logging;

/// `recordbook` (rb) - Local record book.
#[derive(Parser, Debug)]
#[command(name = "rb")]
#[command(
    author,
    version,
    about = "Local record book: short entries with severity and status",
    long_about = None,
    after_help = "Records live in one JSON file under the storage directory."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Storage directory (overrides config and RECORDBOOK_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a recordbook workspace
    Init(InitArgs),

    /// Create a new record
    Create(CreateArgs),

    /// List records
    List(ListArgs),

    /// Show a record's text
    Show(ShowArgs),

    /// Edit an existing record
    Edit(EditArgs),

    /// Delete a record
    Delete(DeleteArgs),

    /// Render the record table as HTML
    Render(RenderArgs),

    /// Show the effective configuration
    Config,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Reset stored records to an empty list
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Nickname (up to 10 characters)
    #[arg(long, short = 'u', default_value = "")]
    pub user: String,

    /// Priority: Low, Medium or High
    #[arg(long, short = 's', default_value = "")]
    pub severity: String,

    /// Status: Open, InProgress or Done (default Open)
    #[arg(long, default_value = "")]
    pub status: String,

    /// Record text (up to 4000 characters)
    #[arg(long, short = 't', default_value = "")]
    pub text: String,
}

/// Search, filter and sort controls shared by `list` and `render`.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Case-insensitive substring of the nickname
    #[arg(long)]
    pub search: Option<String>,

    /// Match a status or a severity value ("all" for everything)
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort column: user, severity or status
    #[arg(long)]
    pub sort: Option<String>,
}

impl ViewArgs {
    /// Build the view query, falling back to the configured default sort.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortKey` if `--sort` names an unsupported column.
    pub fn to_query(&self, config: &Config) -> recordbook_lib::Result<ViewQuery> {
        let sort = match self.sort.as_deref() {
            Some(key) => Some(key.parse::<SortKey>()?),
            None => config.default_sort_key(),
        };
        Ok(ViewQuery {
            search: self.search.clone().unwrap_or_default(),
            filter: self.filter.clone(),
            sort,
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Record ID
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record ID
    pub id: u64,

    /// New nickname
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// New priority
    #[arg(long, short = 's')]
    pub severity: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// New text
    #[arg(long, short = 't')]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record ID
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit a full HTML page instead of the table body
    #[arg(long)]
    pub page: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = std::env::current_dir()?;
    let overrides = CliOverrides {
        dir: cli.dir.clone(),
    };
    let config = config::load(&root, &overrides)?;

    logging::init_logging(cli.verbose, cli.quiet, config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    tracing::debug!(command = ?cli.command.as_ref().map(Commands::name), "Starting");

    let json = cli.json;
    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&args, &root, &config)?,
        Some(Commands::Create(args)) => commands::create::execute(args, &config, json)?,
        Some(Commands::List(args)) => commands::list::execute(&args, &config, json)?,
        Some(Commands::Show(args)) => commands::show::execute(&args, &config, json)?,
        Some(Commands::Edit(args)) => commands::edit::execute(&args, &config, json)?,
        Some(Commands::Delete(args)) => commands::delete::execute(&args, &config, json)?,
        Some(Commands::Render(args)) => commands::render::execute(&args, &config)?,
        Some(Commands::Config) => commands::config::execute(&config, json)?,
        Some(Commands::Version) => commands::version::execute(json)?,
        None => println!("rb - Local record book. Use --help for usage."),
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Create(_) => "create",
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Render(_) => "render",
            Self::Config => "config",
            Self::Version => "version",
        }
    }
}
