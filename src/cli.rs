use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldops", version, about = "Farm monitoring and yield prediction TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run interactive setup and write a config file
    Init,
    /// Validate config and locale tables
    Check,
    /// Estimate yield for a crop with the current readings
    Predict {
        /// Crop name (Wheat, Corn, Soybeans, Rice, Barley, Oats)
        #[arg(long)]
        crop: String,

        /// Planting date (YYYY-MM-DD)
        #[arg(long)]
        planting_date: String,

        /// Field size in acres
        #[arg(long)]
        field_size: f64,

        /// Seed the practices multiplier for a reproducible estimate
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List recommendations for the current readings
    Recommend {
        /// Evaluate a single rule by id (see `fieldops check`)
        #[arg(long)]
        rule: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Show a year's yields and its change from the previous year
    History {
        /// Year to show (defaults to the most recent)
        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        json: bool,
    },
}
