use clap::{Parser, Subcommand};
use page_window::commands::*;
use page_window::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "page-window")]
#[command(about = "Windowed page-number ranges for paged list views")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the pager window for a page
    Range {
        /// Current page (clamped into 1..=total)
        #[arg(short, long, default_value_t = 1)]
        current: usize,
        /// Total number of pages
        #[arg(short, long)]
        total: usize,
        /// Show every page up to this many pages (odd, at least 5)
        #[arg(long)]
        max_buttons: Option<usize>,
        /// Pages shown on each side of the current page
        #[arg(long)]
        side: Option<usize>,
        /// Print the window as JSON
        #[arg(long)]
        json: bool,
    },
    /// Page through a list of items, one per line
    List {
        /// Items file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Page to show (clamped into range)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Items per page
        #[arg(long)]
        per_page: Option<usize>,
        /// Only keep items containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change pager settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,
    /// Write the default settings to the config file
    Init,
    /// Set one setting (max_buttons, side_buttons, items_per_page)
    Set { key: String, value: String },
}

impl From<ConfigCommand> for ConfigAction {
    fn from(command: ConfigCommand) -> Self {
        match command {
            ConfigCommand::Show => ConfigAction::Show,
            ConfigCommand::Init => ConfigAction::Init,
            ConfigCommand::Set { key, value } => ConfigAction::Set { key, value },
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Range {
            current,
            total,
            max_buttons,
            side,
            json,
        } => execute_range(RangeOptions {
            current,
            total,
            max_buttons,
            side_buttons: side,
            json,
        }),
        Commands::List {
            file,
            page,
            per_page,
            search,
            json,
        } => execute_list(ListOptions {
            file,
            page,
            per_page,
            search,
            json,
        }),
        Commands::Config { action } => execute_config(action.into()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
