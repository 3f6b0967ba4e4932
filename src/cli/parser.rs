use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to record daily attendance in per-day CSV files
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record, edit, search and export daily attendance kept in CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a shared folder)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Work on another day's file (YYYY-MM-DD, default: today)
    #[arg(global = true, long = "date")]
    pub date: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or unknown fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Record attendance for one student
    Add {
        /// Student ID
        student_id: String,

        /// Student name
        name: String,

        #[arg(long = "dept", short = 'd', help = "Department (optional)")]
        dept: Option<String>,

        #[arg(
            long = "status",
            short = 's',
            help = "Present, Absent or Late (P/A/L); default from config"
        )]
        status: Option<String>,
    },

    /// Show the day's records
    List,

    /// Search the day's records (case-insensitive, on ID/name/department/status)
    Search {
        /// Text to look for
        term: String,
    },

    /// Edit one record; its time is reset to now
    Edit {
        #[arg(long = "row", help = "Row number as shown by `list`")]
        row: usize,

        #[arg(long = "id", help = "New student ID")]
        student_id: Option<String>,

        #[arg(long = "name", help = "New student name")]
        name: Option<String>,

        #[arg(long = "dept", help = "New department (empty string clears it)")]
        dept: Option<String>,

        #[arg(long = "status", help = "New status: Present, Absent or Late")]
        status: Option<String>,
    },

    /// Delete one or more records
    Del {
        #[arg(long = "rows", help = "Rows to delete, e.g. 2 or 1,3,5-7")]
        rows: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the day's records (no --file: rewrite the day file)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the day file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,
    },
}
