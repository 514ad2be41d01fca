use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "servz",
    bin_name = "servz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inventory of database servers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the OS data directory)
    #[arg(
        long,
        global = true,
        env = "SERVZ_DATA",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Text,
        help_heading = "Options"
    )]
    pub output: OutputMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List servers, optionally searched and filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive search across all fields
        #[arg(short, long)]
        search: Option<String>,

        /// Column filter, repeatable (e.g. --filter standort=berlin)
        #[arg(short, long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
    },

    /// Show every field of one or more servers
    #[command(alias = "v", display_order = 2)]
    View {
        /// Server ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Add a server
    #[command(alias = "n", display_order = 3)]
    Create {
        /// Server name
        server_name: String,

        /// Field assignment, repeatable (e.g. --set dbms=PostgreSQL)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },

    /// Edit fields of an existing server
    #[command(alias = "e", display_order = 4)]
    Update {
        /// Server id
        id: u64,

        /// Field assignment, repeatable (e.g. --set standort=Hamburg)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },

    /// Import servers from YAML files or directories
    #[command(display_order = 10)]
    Import {
        /// Files or directories to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Replace the whole collection instead of merging by id
        #[arg(long, conflicts_with = "merge")]
        replace: bool,

        /// Merge by id, even if the config says replace
        #[arg(long)]
        merge: bool,
    },

    /// Export all servers as a YAML document
    #[command(display_order = 11)]
    Export {
        /// Target file, `-` for stdout (defaults to the configured export file)
        file: Option<String>,
    },

    /// List the known columns
    #[command(display_order = 20)]
    Columns,
}
