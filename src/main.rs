use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use checkbook::cli::{
    handle_add_command, handle_categories_command, handle_init_command,
    handle_reconcile_command, handle_register_command, AddArgs, CategoriesArgs, InitArgs,
    ReconcileArgs,
};
use checkbook::clock::SystemClock;
use checkbook::config::{paths::CheckbookPaths, settings::Settings};
use checkbook::models::Money;
use checkbook::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "checkbook",
    version,
    about = "Personal checkbook register for the terminal",
    long_about = "Checkbook keeps a checking account register in a JSON file. \
                  Record checks and deposits, mark them cleared as the bank \
                  processes them, and reconcile against your bank statement."
)]
struct Cli {
    /// Account file to use
    #[arg(short, long, global = true, env = "CHECKBOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account file
    Init(InitArgs),

    /// Add a transaction
    Add(AddArgs),

    /// Print the register with running balances
    Register,

    /// Print totals per category
    Categories(CategoriesArgs),

    /// Compare the register with a bank statement balance
    Reconcile(ReconcileArgs),

    /// Launch the interactive register
    #[command(alias = "ui")]
    Tui {
        /// Balance shown on the bank statement
        #[arg(short, long, allow_negative_numbers = true)]
        bank_balance: Option<String>,
    },

    /// Show current configuration and paths
    Config {
        /// Remember this account file as the default
        #[arg(long, value_name = "PATH")]
        default_account: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CheckbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    checkbook::logging::init(&paths, &settings);

    let account_file = settings.resolve_account_file(cli.file.as_deref(), &paths);
    let store = JsonFileStore;
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Init(args)) => {
            debug!(command = "init", "dispatch");
            handle_init_command(&store, &account_file, args)?;
        }
        Some(Commands::Add(args)) => {
            debug!(command = "add", "dispatch");
            handle_add_command(&store, &account_file, &clock, args)?;
        }
        Some(Commands::Register) => {
            debug!(command = "register", "dispatch");
            handle_register_command(&store, &account_file)?;
        }
        Some(Commands::Categories(args)) => {
            debug!(command = "categories", "dispatch");
            handle_categories_command(&store, &account_file, &clock, args)?;
        }
        Some(Commands::Reconcile(args)) => {
            debug!(command = "reconcile", "dispatch");
            handle_reconcile_command(&store, &account_file, args)?;
        }
        Some(Commands::Tui { bank_balance }) => {
            debug!(command = "tui", "dispatch");
            let bank_balance = bank_balance.as_deref().map(Money::parse).transpose()?;
            checkbook::tui::run_tui(&store, &account_file, &clock, bank_balance)?;
        }
        Some(Commands::Config { default_account }) => {
            let mut account_file = account_file;
            if let Some(path) = default_account {
                info!(path = %path.display(), "default account changed");
                settings.default_account = Some(path);
                settings.save(&paths)?;
                account_file = settings.resolve_account_file(cli.file.as_deref(), &paths);
            }

            println!("Checkbook Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!("Account file:    {}", account_file.display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!(
                "  Default account: {}",
                settings
                    .default_account
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".into())
            );
            println!("  Log filter: {}", settings.log_filter);
        }
        None => {
            println!("Checkbook - personal checkbook register");
            println!();
            println!("Run 'checkbook --help' for usage information.");
            println!("Run 'checkbook init <balance>' to start a new account.");
            println!("Run 'checkbook tui' to launch the interactive register.");
        }
    }

    Ok(())
}
