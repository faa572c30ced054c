use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::audit::AuditLogger;
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::export::ExportFormat;
use expense_ledger::logging;
use expense_ledger::models::Money;
use expense_ledger::session::{self, LimitChoice, Prompter, Session, SessionOptions};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal expense ledger",
    long_about = "Records expenses and credits with a date and category, keeps a \
                  running balance, warns when a spending limit is reached, and \
                  exports the ledger to a CSV file."
)]
struct Cli {
    /// Starting balance (skips the prompt)
    #[arg(short, long, value_parser = parse_money, allow_hyphen_values = true)]
    balance: Option<Money>,

    /// Spending limit on net expenses (skips the prompt); use --no-limit
    /// rather than -1 to disable it
    #[arg(short, long, value_parser = parse_limit, allow_hyphen_values = true, conflicts_with = "no_limit")]
    limit: Option<Money>,

    /// Run without a spending limit (skips the prompt)
    #[arg(long)]
    no_limit: bool,

    /// Export destination (defaults to the configured file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log records
    Audit {
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

fn parse_limit(s: &str) -> Result<Money, String> {
    let limit = parse_money(s)?;
    if limit == session::NO_LIMIT_INPUT {
        return Err("use --no-limit to run without a spending limit".into());
    }
    Ok(limit)
}

fn main() -> Result<()> {
    logging::init_tracing();
    let mut cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.take() {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Export file:      {}", settings.export_file.display());
            println!("  Export format:    {}", settings.export_format);
            println!("  Initial capacity: {}", settings.initial_capacity);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        Some(Commands::Audit { count }) => {
            let logger = AuditLogger::new(paths.audit_log());
            if !logger.exists() {
                println!("No audit log at {}", paths.audit_log().display());
                return Ok(());
            }
            let total = logger.entry_count()?;
            for entry in logger.read_recent(count)? {
                println!("{}", entry.format_human_readable());
            }
            println!("({} of {} records)", count.min(total), total);
        }
        None => run_session(cli, &paths, &settings)?,
    }

    Ok(())
}

fn run_session(cli: Cli, paths: &LedgerPaths, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    writeln!(prompter.output(), "Expense Ledger\n")?;

    let limit = match (cli.limit, cli.no_limit) {
        (Some(limit), _) => LimitChoice::Set(limit),
        (None, true) => LimitChoice::Disabled,
        (None, false) => LimitChoice::Prompt,
    };

    let ledger = match session::start_ledger(
        &mut prompter,
        settings.initial_capacity,
        cli.balance,
        limit,
    ) {
        Ok(ledger) => ledger,
        Err(expense_ledger::LedgerError::InputClosed) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let options = SessionOptions {
        export_path: cli.output.unwrap_or_else(|| settings.export_file.clone()),
        export_format: cli.format.unwrap_or(settings.export_format),
        audit_log: settings.audit_enabled.then(|| paths.audit_log()),
    };

    if options.audit_log.is_some() {
        paths.ensure_directories()?;
    }

    let mut session = Session::new(ledger, options);
    session::run(&mut session, &mut prompter)?;

    Ok(())
}
