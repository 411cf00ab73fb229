use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a driverent.toml config file
    Config,
    /// Prints the price of a rental
    Price {
        /// Daily rate, e.g. 49.99
        #[clap(long)]
        rate: String,
        /// Pickup date (YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339)
        #[clap(long)]
        pickup: String,
        /// Dropoff date (YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339)
        #[clap(long)]
        dropoff: String,
    },
    /// Renders confirmation exports for booking records (.toml or .json)
    Render {
        #[clap(required = true)]
        records: Vec<PathBuf>,
        /// Overrides output_dir from driverent.toml
        #[clap(long)]
        out_dir: Option<PathBuf>,
        /// Date stamped into the spreadsheet (YYYY-MM-DD), defaults to today
        #[clap(long)]
        generated_on: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Log debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Commands,
}
