use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gymattend
/// CLI application to track gym attendance with SQLite
#[derive(Parser)]
#[command(
    name = "gymattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: track gym check-ins, confirmations and semester stats using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Freeze "today" to a fixed date (YYYY-MM-DD, used by tests)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the store (migrations, integrity checks, pruning, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending store migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,

        #[arg(
            long = "prune",
            help = "Drop presence records outside the current attendance year"
        )]
        prune: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or list members and dependents
    Member {
        /// Id of the member (or dependent) to create
        id: Option<String>,

        #[arg(long = "name", help = "Display name for the new member or dependent")]
        name: Option<String>,

        #[arg(
            long = "dependent-of",
            help = "Create the id as a dependent embedded in this member"
        )]
        dependent_of: Option<String>,

        #[arg(long = "list", help = "List all members with their dependents")]
        list: bool,
    },

    /// Record today's attendance for a member or dependent
    Checkin {
        /// Member id (falls back to default_member from the config)
        member: Option<String>,

        #[arg(long = "dependent", help = "Check in this dependent of the member")]
        dependent: Option<String>,
    },

    /// Confirm check-ins (admin)
    Confirm {
        /// Member id owning the record to confirm
        member: Option<String>,

        #[arg(long = "date", help = "Date of the check-in to confirm (default: today)")]
        date: Option<String>,

        #[arg(long = "dependent", help = "Confirm this dependent's record")]
        dependent: Option<String>,

        #[arg(long = "all", help = "Confirm every pending check-in dated today")]
        all: bool,

        #[arg(
            long = "pending",
            help = "List today's unconfirmed check-ins across all members"
        )]
        pending: bool,
    },

    /// Show semester attendance statistics
    Stats {
        /// Member id (falls back to default_member from the config)
        member: Option<String>,

        #[arg(long = "dependent", help = "Show stats for this dependent")]
        dependent: Option<String>,
    },

    /// Render the attendance calendar for a month
    Calendar {
        /// Member id (falls back to default_member from the config)
        member: Option<String>,

        #[arg(long = "dependent", help = "Render this dependent's calendar")]
        dependent: Option<String>,

        #[arg(long = "month", help = "Month to render (YYYY-MM, default: current)")]
        month: Option<String>,
    },

    /// List presence records
    List {
        /// Member id (falls back to default_member from the config)
        member: Option<String>,

        #[arg(long = "dependent", help = "List this dependent's records")]
        dependent: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        period: Option<String>,
    },

    /// Export presence data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Restrict the export to one member (with dependents)")]
        member: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
