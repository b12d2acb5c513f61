use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use monthly_budget::audit::AuditLogger;
use monthly_budget::cli::{
    handle_categories_command, handle_config_command, handle_history_command,
    handle_init_command, handle_summary_command, Session, SummaryArgs,
};
use monthly_budget::config::{BudgetPaths, Settings};
use monthly_budget::log::init_logging;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget tracker",
    long_about = "Record this month's expenses by category, then compare them \
                  against your income, savings goal and per-category budgets."
)]
struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Session {
        /// Record changes to this audit log
        #[arg(long, value_name = "PATH")]
        audit_log: Option<PathBuf>,

        /// Record changes to the default audit log
        #[arg(long, conflicts_with = "audit_log")]
        audit: bool,
    },

    /// Summarize expenses given on the command line
    Summary(SummaryArgs),

    /// List expense categories and their budgets
    #[command(alias = "cats")]
    Categories,

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Audit log to read
        #[arg(long, value_name = "PATH")]
        audit_log: Option<PathBuf>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Session {
        audit_log: None,
        audit: false,
    }) {
        Commands::Session { audit_log, audit } => {
            let mut session = Session::new(&settings).with_prompt(io::stdin().is_terminal());
            let log_path = match audit_log {
                Some(path) => Some(path),
                None if audit => Some(paths.audit_log()),
                None => None,
            };
            if let Some(path) = log_path {
                session = session.with_audit_log(AuditLogger::new(path));
            }
            session.run(io::stdin().lock(), &mut out)?;
        }
        Commands::Summary(args) => handle_summary_command(&settings, args, &mut out)?,
        Commands::Categories => handle_categories_command(&settings, &mut out)?,
        Commands::History { count, audit_log } => {
            let logger = AuditLogger::new(audit_log.unwrap_or_else(|| paths.audit_log()));
            handle_history_command(&logger, count, &mut out)?;
        }
        Commands::Init => handle_init_command(&paths, &settings, &mut out)?,
        Commands::Config => handle_config_command(&paths, &settings, &mut out)?,
    }

    Ok(())
}
