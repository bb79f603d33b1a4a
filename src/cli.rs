use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ai")]
#[command(about = "AI resume analysis from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against the remote service
    Analyze {
        /// Resume path (PDF/DOCX uploaded as a file; .txt/.md sent as text)
        #[arg(required = true)]
        input: PathBuf,

        /// Job description text file to match against
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Force sending the input as plain text
        #[arg(long)]
        as_text: bool,

        /// Write the raw analysis JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reuse cached results for identical input
        #[arg(long)]
        use_cache: bool,

        /// Use the built-in mock service instead of the network
        #[arg(long)]
        mock: bool,
    },

    /// Probe the analysis service health endpoint
    Health {
        /// Probe the built-in mock service
        #[arg(long)]
        mock: bool,
    },

    /// Show or update the client configuration
    Config {
        /// Set the analysis service base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Print the current configuration
        #[arg(long)]
        show: bool,
    },
}
