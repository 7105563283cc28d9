//! Command implementations for the floater CLI.
//!
//! Provides subcommands for listing profile dates, fetching and printing a
//! depth profile (optionally through a simulated viewport), inspecting a
//! saved profile offline, and listing floater markers.

use clap::{Args, Subcommand};

pub mod floaters;
pub mod profile;

/// Default profile backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Subcommand)]
pub enum Command {
    /// List the available profile dates for a floater
    Dates {
        /// Floater id
        id: String,

        /// Profile backend base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Fetch a floater's latest (or dated) profile and print it
    Profile {
        /// Floater id
        id: String,

        /// Date key from `dates`; the latest profile when omitted
        #[arg(short, long)]
        date: Option<String>,

        /// Write the normalized levels to this CSV file
        #[arg(long)]
        csv: Option<String>,

        /// Profile backend base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Print a profile response saved as JSON, without contacting the backend
    Inspect {
        /// Path to the JSON response
        file: String,

        /// Write the normalized levels to this CSV file
        #[arg(long)]
        csv: Option<String>,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// List floater markers from a CSV file, grouped by status
    Floaters {
        /// Path to a CSV with columns ID,LATITUDE,LONGITUDE,STATUS
        csv: String,
    },
}

/// Simulated browser viewport. Without it every row is printed.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ViewportArgs {
    /// Viewport width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height in pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// Scroll offset of the list in pixels
    #[arg(long, default_value_t = 0.0)]
    pub scroll: f64,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Dates { id, base_url } => profile::run_dates(&base_url, &id).await,
        Command::Profile {
            id,
            date,
            csv,
            base_url,
            viewport,
        } => {
            profile::run_profile(&base_url, &id, date.as_deref(), csv.as_deref(), viewport).await
        }
        Command::Inspect {
            file,
            csv,
            viewport,
        } => profile::run_inspect(&file, csv.as_deref(), viewport).await,
        Command::Floaters { csv } => floaters::run_floaters(&csv).await,
    }
}
