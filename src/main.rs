use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::display::format_load_notice;
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::shell::Shell;
use expense_tracker::{ExpenseRepository, ExpenseStore, SystemClock};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based daily expense tracker",
    long_about = "Records dated expenses to a plain text file and reports totals \
                  for today, this week and this month. Run without a command for \
                  the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.txt and settings.json
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths (writes default settings if none exist)
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };

    let settings_exist = paths.settings_file().exists();
    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        eprintln!("Warning: {}; using default settings", e);
        Settings::default()
    });

    init_tracing(&settings);

    let repository = ExpenseRepository::new(paths.expenses_file())
        .with_write_mode(settings.write_mode)
        .with_load_policy(settings.load_policy);
    let (store, outcome) = ExpenseStore::open(repository, SystemClock);
    let mut store = store.with_week_rule(settings.week_rule());
    let notice = format_load_notice(&outcome, settings.write_mode);

    match cli.command {
        None => {
            if let Some(notice) = &notice {
                println!("{}", notice);
            }
            let stdin = io::stdin();
            Shell::new(&mut store, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Expense(cmd)) => {
            if let Some(notice) = notice.filter(|_| !outcome.started_empty()) {
                eprintln!("{}", notice);
            }
            handle_expense_command(&mut store, &outcome, cmd)?;
        }
        Some(Commands::Config) => {
            if !settings_exist {
                settings.save(&paths)?;
                println!(
                    "Wrote default settings to {}",
                    paths.settings_file().display()
                );
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Week start:             {:?}", settings.week_start);
            println!("  Min days in first week: {}", settings.min_days_in_first_week);
            println!("  Write mode:             {:?}", settings.write_mode);
            println!("  Load policy:            {:?}", settings.load_policy);
            println!("  Log level:              {}", settings.log_level);
            println!();
            println!("Expenses loaded: {}", store.len());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so the menu transcript on stdout stays clean
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
