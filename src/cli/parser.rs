use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtriplog
#[derive(Parser)]
#[command(
    name = "rtriplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple vehicle logbook CLI: record trips, fuel costs and service reminders",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second vehicle)
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

    /// Start a trip
    Start {
        /// Start odometer (km); defaults to the end odometer of the last trip
        #[arg(long = "odo")]
        odo: Option<u32>,

        /// Start date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM), default now
        #[arg(long)]
        time: Option<String>,

        /// Free-text note (purpose, destination, ...)
        #[arg(long)]
        note: Option<String>,
    },

    /// Finish the trip in progress
    Finish {
        /// End odometer (km)
        #[arg(long = "odo")]
        odo: u32,

        /// End time (HH:MM), default now
        #[arg(long)]
        time: Option<String>,

        /// Trip date (YYYY-MM-DD), default the start date of the trip
        #[arg(long)]
        date: Option<String>,
    },

    /// Discard the trip in progress without recording it
    Cancel,

    /// Overview: monthly distance, service reminders, trip in progress, recent trips
    Status,

    /// List all trips, most recent first
    List,

    /// Delete a trip by ID
    Del {
        /// Trip id (as shown by `list`)
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show totals and averages over all trips
    Stats {
        #[arg(long, help = "Print the statistics as JSON")]
        json: bool,
    },

    /// Show or change fuel price and average consumption
    Settings {
        /// Fuel price per litre (accepts 1.65 or 1,65)
        #[arg(long = "fuel-price")]
        fuel_price: Option<String>,

        /// Average consumption in L/100km (accepts 6.5 or 6,5)
        #[arg(long = "consumption")]
        consumption: Option<String>,
    },

    /// Manage service reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export trips to a file
    Export {
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Database information
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// List reminders with their progress
    List,

    /// Add a reminder
    Add {
        #[arg(long)]
        name: Option<String>,

        /// Service interval in km
        #[arg(long)]
        interval: Option<u32>,

        /// Odometer reading at the last service
        #[arg(long = "last-service")]
        last_service: Option<u32>,
    },

    /// Change fields of an existing reminder
    Set {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        interval: Option<u32>,

        #[arg(long = "last-service")]
        last_service: Option<u32>,
    },

    /// Delete a reminder
    Del { id: String },
}
