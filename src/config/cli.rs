use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "reframe")]
#[command(about = "Rewrite supportive phrases into first-person self-talk")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "reframe.toml")]
    pub config: String,

    /// Override the data directory from config
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rewrite a phrase into first person
    Rewrite {
        text: String,
    },

    /// Build a reframe from a thought, emotions and what you'd tell a friend
    Reframe {
        #[arg(long)]
        thought: String,

        /// Comma-separated emotions, e.g. "sad, tired"
        #[arg(long)]
        emotions: String,

        #[arg(long)]
        response: String,

        /// Save the result to the journal
        #[arg(long)]
        save: bool,
    },

    /// Manage saved reframes
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Daily check-in status
    CheckIn {
        #[command(subcommand)]
        action: CheckInAction,
    },

    /// Show emotions, common thoughts, grounding activities and check-in statements
    Catalog,
}

#[derive(Debug, Clone, Subcommand)]
pub enum JournalAction {
    List,
    Delete {
        id: u64,
    },
    Export {
        /// csv, tsv or json (defaults to journal.export_format)
        #[arg(long)]
        format: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CheckInAction {
    Status,
    Complete,
}
