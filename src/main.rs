use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ezmoney::cli::{
    handle_add, handle_audit, handle_breakdown, handle_category_command, handle_clear,
    handle_delete, handle_list, handle_show, handle_summary, CategoryCommands,
};
use ezmoney::config::{paths::EzMoneyPaths, settings::Settings};
use ezmoney::models::SummaryPeriod;
use ezmoney::services::CategoryService;
use ezmoney::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ezmoney",
    version,
    about = "Track spending by typing it",
    long_about = "EzMoney records transactions from a single line of free text. \
                  Type something like 'lunch 12.5k /Have Fun|': the last amount \
                  becomes the amount, the last /Category| tag picks the category, \
                  and whatever is left is kept as the memo."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, default categories and settings
    Init,

    /// Record a transaction from free text, e.g. `lunch 12.5k /Have Fun|`
    Add {
        /// The entry; several words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
        /// Show what would be recorded without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one transaction
    Show {
        /// Transaction ID (short `txn-` form or full UUID)
        id: String,
    },

    /// Delete one transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID (short `txn-` form or full UUID)
        id: String,
    },

    /// Delete every transaction
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Totals for today, this week, this month, this year and all time
    Summary,

    /// Totals per category for one period
    Breakdown {
        /// today, week, month, year or all
        #[arg(short, long, default_value = "month")]
        period: SummaryPeriod,
    },

    /// List or delete categories
    Categories {
        #[command(subcommand)]
        command: Option<CategoryCommands>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = EzMoneyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    // Categories must exist before anything is extracted
    let seeded = CategoryService::new(&storage, &settings).ensure_seeded()?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("EzMoney is already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized EzMoney at: {}", paths.base_dir().display());
            }
            if seeded {
                println!("Default categories have been created:");
                println!("  - Expense Base (To Live, Have Fun, Family Happiness, Financial Freedom, Community)");
                println!("  - Income Base");
            }
            println!();
            println!("Run 'ezmoney add lunch 12.5k /Have Fun|' to record a transaction.");
        }
        Some(Commands::Add { text, dry_run }) => {
            handle_add(&storage, &settings, &text, dry_run)?;
        }
        Some(Commands::List { limit }) => {
            handle_list(&storage, &settings, limit)?;
        }
        Some(Commands::Show { id }) => {
            handle_show(&storage, &settings, &id)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete(&storage, &settings, &id)?;
        }
        Some(Commands::Clear { yes }) => {
            handle_clear(&storage, &settings, yes)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&storage, &settings)?;
        }
        Some(Commands::Breakdown { period }) => {
            handle_breakdown(&storage, &settings, period)?;
        }
        Some(Commands::Categories { command }) => {
            handle_category_command(&storage, &settings, command)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("EzMoney Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default category: {}", settings.default_category_name);
            println!("  Currency:         {}", settings.currency_code);
            println!("  Date format:      {}", settings.date_format);
        }
        None => {
            println!("EzMoney - free-text expense tracking");
            println!();
            println!("Run 'ezmoney --help' for usage information.");
        }
    }

    Ok(())
}
