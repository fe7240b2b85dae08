use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::RECENT_HISTORY_LIMIT;
use crate::enums::settings_action::SettingsAction;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze code given inline, from a file, or from the built-in sample
    Analyze {
        #[clap(short, long, conflicts_with_all = ["file", "sample"])]
        code: Option<String>,
        #[clap(short, long, conflicts_with = "sample")]
        file: Option<PathBuf>,
        #[clap(short, long)]
        sample: bool,
        #[clap(short, long)]
        language: Option<String>,
        /// Save to history even when auto-save is off
        #[clap(long)]
        save: bool,
        /// Export right after the analysis (json, csv or pdf)
        #[clap(short, long)]
        export: Option<String>,
    },
    /// Print the built-in sample code for a language
    Sample {
        language: String,
    },
    History {
        #[clap(short, long, default_value_t = RECENT_HISTORY_LIMIT)]
        limit: usize,
    },
    Dashboard,
    /// Export a saved analysis (the newest when no id is given)
    Export {
        id: Option<u64>,
        #[clap(short, long)]
        format: Option<String>,
    },
    Settings {
        #[clap(subcommand)]
        action: SettingsAction,
    },
    /// Remove all saved analyses
    Clear,
    Validate,
}
