use crate::export::ExportFormat;
use crate::models::field::FieldKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for punchclock
/// Terminal client for the attendance-tracking web app
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in/out, autosave attendance edits, and export monthly data from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance server base URL
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Read the month page from a saved HTML file instead of the network
    #[arg(global = true, long = "page-file", hide = true)]
    pub page_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two punchable fields.
#[derive(Clone, Debug, ValueEnum)]
pub enum PunchKind {
    CheckIn,
    CheckOut,
}

impl PunchKind {
    pub fn field_kind(&self) -> FieldKind {
        match self {
            PunchKind::CheckIn => FieldKind::CheckIn,
            PunchKind::CheckOut => FieldKind::CheckOut,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Record a check-in or check-out on the server
    Punch {
        /// Which punch to record
        #[arg(value_enum)]
        kind: PunchKind,

        /// Date of the punch (YYYY-MM-DD, default today)
        #[arg(long = "date", help = "Date to punch (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Save a single attendance field to the server
    Save {
        /// Date of the field (YYYY-MM-DD)
        date: String,

        /// Field name (check_in, check_out, work_hours, ...)
        field: String,

        /// New value
        value: String,
    },

    /// Compute work hours for a check-in/check-out pair (offline)
    Hours {
        /// Check-in time (HH:MM)
        #[arg(long = "in", help = "Check-in time (HH:MM)")]
        start: String,

        /// Check-out time (HH:MM)
        #[arg(long = "out", help = "Check-out time (HH:MM)")]
        end: String,
    },

    /// Show the monthly summary (totals, worked days, average)
    Stats {
        #[arg(long, help = "Month to summarize (YYYY-MM, default current)")]
        month: Option<String>,
    },

    /// Export the month's attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default from config)")]
        file: Option<String>,

        #[arg(long, help = "Month to export (YYYY-MM, default current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive attendance session (edit, punch, shortcuts)
    Session {
        #[arg(long, help = "Month to open (YYYY-MM, default current)")]
        month: Option<String>,
    },
}
