//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use zabbixctl::core::models::{
    DEFAULT_LIMIT, DEFAULT_ORDER, DEFAULT_SORT, Severity, TriggerOptions,
};
use zabbixctl::output::OutputMode;

/// zabbixctl - Active Zabbix triggers in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "zabbixctl",
    version,
    about = "Active Zabbix triggers in your terminal",
    long_about = "List the triggers a Zabbix server currently tracks.\n\n\
                  Filter them by state, severity and time, search them with a /pattern,\n\
                  and acknowledge the matches after an explicit confirmation."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/zabbixctl/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show triggers, optionally acknowledging the matches
    #[command(visible_alias = "t")]
    Triggers(TriggersArgs),

    /// Write a config file template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Options of the `triggers` command
#[derive(Args, Debug)]
pub struct TriggersArgs {
    /// Acknowledge all matched triggers
    #[arg(short = 'k', long)]
    pub acknowledge: bool,

    /// Do not ask for confirmation before acknowledging
    #[arg(short = 'f', long = "noconfirm")]
    pub no_confirm: bool,

    /// Minimum severity (0 not classified .. 5 disaster)
    #[arg(
        short = 'x',
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(Severity::MAX_PRIORITY))
    )]
    pub severity: u8,

    /// Only triggers whose last event is not acknowledged
    #[arg(long = "only-nack")]
    pub only_nack: bool,

    /// Only triggers of hosts in maintenance
    #[arg(short, long)]
    pub maintenance: bool,

    /// Only triggers in the problem state
    #[arg(short, long)]
    pub problem: bool,

    /// Only triggers that changed state recently
    #[arg(short, long)]
    pub recent: bool,

    /// Only triggers changed since this date (ignored when --until is given)
    #[arg(short, long, value_name = "DATE", allow_hyphen_values = true)]
    pub since: Option<String>,

    /// Only triggers changed until this date
    #[arg(short, long, value_name = "DATE", allow_hyphen_values = true)]
    pub until: Option<String>,

    /// Comma-separated sort fields
    #[arg(long, default_value = DEFAULT_SORT)]
    pub sort: String,

    /// Sort order (ASC or DESC)
    #[arg(long, default_value = DEFAULT_ORDER)]
    pub order: String,

    /// Maximum number of triggers to fetch
    #[arg(short = 'n', long, default_value = DEFAULT_LIMIT)]
    pub limit: String,

    /// Search pattern, written as /pattern (`*` matches anything)
    #[arg(value_name = "PATTERN")]
    pub pattern: Vec<String>,
}

impl From<TriggersArgs> for TriggerOptions {
    fn from(args: TriggersArgs) -> Self {
        Self {
            acknowledge: args.acknowledge,
            no_confirm: args.no_confirm,
            only_unacknowledged: args.only_nack,
            maintenance_only: args.maintenance,
            problem_only: args.problem,
            recent_only: args.recent,
            min_severity: args.severity,
            since: args.since,
            until: args.until,
            sort: args.sort,
            order: args.order,
            limit: args.limit,
            search: args.pattern,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Triggers(args)) => commands::triggers(&args.into(), config, output_mode),
        Some(Command::Init { force }) => commands::init(config, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("zabbixctl v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("zabbixctl v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'zabbixctl --help' for usage");
                println!("Run 'zabbixctl init' to create a config file");
            }
            Ok(())
        },
    }
}
