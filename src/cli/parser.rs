use crate::export::ExportFormat;
use crate::models::summary::PaidLeaveScope;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to track overtime, holiday work and paid leave
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A month-calendar attendance tracker: overtime, holiday work and paid leave, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing fields to the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record overtime, holiday work or paid leave for a day
    Set {
        /// Day to edit (YYYY-MM-DD or "today")
        date: String,

        #[arg(
            long = "ot",
            value_name = "DURATION",
            allow_hyphen_values = true,
            help = "Overtime: 90, 1:30, 1h30m, 45m ..."
        )]
        overtime: Option<String>,

        #[arg(
            long = "ot-h",
            value_name = "HOURS",
            allow_hyphen_values = true,
            conflicts_with = "overtime",
            help = "Overtime hours, combined with --ot-m"
        )]
        ot_hours: Option<i64>,

        #[arg(
            long = "ot-m",
            value_name = "MINUTES",
            allow_hyphen_values = true,
            conflicts_with = "overtime",
            help = "Overtime minutes, combined with --ot-h"
        )]
        ot_minutes: Option<i64>,

        #[arg(
            long = "hw",
            value_name = "DURATION",
            allow_hyphen_values = true,
            help = "Work done on a day off: 8h, 7:30, 450 ..."
        )]
        holiday_work: Option<String>,

        #[arg(
            long = "hw-h",
            value_name = "HOURS",
            allow_hyphen_values = true,
            conflicts_with = "holiday_work",
            help = "Holiday work hours, combined with --hw-m"
        )]
        hw_hours: Option<i64>,

        #[arg(
            long = "hw-m",
            value_name = "MINUTES",
            allow_hyphen_values = true,
            conflicts_with = "holiday_work",
            help = "Holiday work minutes, combined with --hw-h"
        )]
        hw_minutes: Option<i64>,

        #[arg(
            long = "paid-leave",
            conflicts_with = "no_paid_leave",
            help = "Mark the day as paid leave"
        )]
        paid_leave: bool,

        #[arg(long = "no-paid-leave", help = "Remove the paid leave mark")]
        no_paid_leave: bool,
    },

    /// Remove everything recorded for a day
    Clear {
        /// Day to clear (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a month calendar with the recorded days
    Show {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "N", conflicts_with = "next", help = "Go back N months")]
        prev: Option<u32>,

        #[arg(long, value_name = "N", help = "Go forward N months")]
        next: Option<u32>,
    },

    /// Print monthly or yearly totals
    Summary {
        #[arg(long, short, value_name = "YYYY-MM", conflicts_with = "year")]
        month: Option<String>,

        #[arg(long, short, value_name = "YYYY")]
        year: Option<i32>,

        #[arg(
            long = "paid-leave-scope",
            value_enum,
            help = "Count paid leave over the month or the whole year"
        )]
        paid_leave_scope: Option<PaidLeaveScope>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recorded days
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

        #[arg(long, short = 'f')]
        force: bool,
    },
}
