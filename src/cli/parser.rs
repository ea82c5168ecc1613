use crate::export::ExportFormat;
use crate::models::{action::Action, activity::Activity};
use clap::{Parser, Subcommand};

/// Command-line interface definition for clocker
#[derive(Parser)]
#[command(
    name = "clocker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your work hours by clocking in and out",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics to stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    // ---------------------------
    // Clock direction
    // ---------------------------
    #[arg(short = 'i', long = "in", group = "direction", help = "Set action as clocking in")]
    pub clock_in: bool,

    #[arg(short = 'o', long = "out", group = "direction", help = "Set action as clocking out")]
    pub clock_out: bool,

    // ---------------------------
    // Activity
    // ---------------------------
    #[arg(short = 'w', long = "work", group = "activity", help = "Set activity as work")]
    pub work: bool,

    #[arg(short = 'l', long = "lunch", group = "activity", help = "Set activity as lunch")]
    pub lunch: bool,

    #[arg(short = 'b', long = "break", group = "activity", help = "Set activity as break")]
    pub break_: bool,

    // ---------------------------
    // Display
    // ---------------------------
    #[arg(short = 'd', long = "display", help = "Display all clock records")]
    pub display: bool,

    #[arg(short = 't', long = "today", help = "Display a summary of today's work")]
    pub today: bool,

    #[arg(short = 'k', long = "week", help = "Display a summary of this week's work")]
    pub week: bool,

    // ---------------------------
    // Removal
    // ---------------------------
    #[arg(
        short = 'r',
        long = "remove",
        num_args = 1..,
        value_name = "POSITION",
        conflicts_with = "clear",
        help = "Remove the records at these positions (as numbered by --display)"
    )]
    pub remove: Option<Vec<usize>>,

    #[arg(long = "clear", help = "Remove all clock records")]
    pub clear: bool,

    #[arg(short = 'y', long = "yes", help = "Do not ask for confirmation before --clear")]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn action(&self) -> Option<Action> {
        if self.clock_in {
            Some(Action::In)
        } else if self.clock_out {
            Some(Action::Out)
        } else {
            None
        }
    }

    pub fn activity(&self) -> Option<Activity> {
        if self.work {
            Some(Activity::Work)
        } else if self.lunch {
            Some(Activity::Lunch)
        } else if self.break_ {
            Some(Activity::Break)
        } else {
            None
        }
    }

    /// True when no flag asks for anything.
    pub fn is_idle(&self) -> bool {
        self.action().is_none()
            && self.activity().is_none()
            && !self.display
            && !self.today
            && !self.week
            && self.remove.is_none()
            && !self.clear
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export all clock records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },
}
