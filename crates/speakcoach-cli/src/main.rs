//! speakcoach CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use speakcoach_core::model::{CefrLevel, PracticeTab};

mod commands;
mod lessons;
mod speech;

#[derive(Parser)]
#[command(
    name = "speakcoach",
    version,
    about = "Spoken-language practice coach and progress tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a spoken attempt against a target sentence
    Score {
        /// The sentence being practiced
        #[arg(long)]
        target: String,

        /// Final transcript of the attempt; omit to type it interactively
        #[arg(long)]
        transcript: Option<String>,

        /// Recording duration in milliseconds (required with --transcript)
        #[arg(long)]
        elapsed_ms: Option<u64>,

        /// Practice tab: phrases, situations, free-talk, cefr
        #[arg(long, default_value = "phrases")]
        tab: PracticeTab,

        /// CEFR level (with --tab cefr): a1, a2, b1, b2
        #[arg(long)]
        level: Option<CefrLevel>,

        /// Directory holding the progress history
        #[arg(long, default_value = "./speakcoach-data")]
        data_dir: PathBuf,
    },

    /// Show saved attempts with per-field averages
    History {
        /// Only attempts from this practice tab
        #[arg(long)]
        tab: Option<PracticeTab>,

        /// Only attempts at this CEFR level
        #[arg(long)]
        level: Option<CefrLevel>,

        /// Directory holding the progress history
        #[arg(long, default_value = "./speakcoach-data")]
        data_dir: PathBuf,
    },

    /// Export saved attempts as CSV
    Export {
        /// Only attempts from this practice tab
        #[arg(long)]
        tab: Option<PracticeTab>,

        /// Only attempts at this CEFR level
        #[arg(long)]
        level: Option<CefrLevel>,

        /// Output file (defaults to the fixed export name in the data dir)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory holding the progress history
        #[arg(long, default_value = "./speakcoach-data")]
        data_dir: PathBuf,
    },

    /// Delete ALL saved progress
    Clear {
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,

        /// Directory holding the progress history
        #[arg(long, default_value = "./speakcoach-data")]
        data_dir: PathBuf,
    },

    /// Get coaching feedback on an attempt
    Coach {
        /// The sentence being practiced
        #[arg(long)]
        target: String,

        /// Final transcript of the attempt
        #[arg(long)]
        transcript: Option<String>,

        /// Read the feedback aloud through the speech sink
        #[arg(long)]
        speak: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Send one free-talk message to the coach
    Chat {
        /// The message to send
        message: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List built-in practice sentences
    Prompts {
        /// Practice tab: phrases, situations, free-talk, cefr
        #[arg(long, default_value = "phrases")]
        tab: PracticeTab,

        /// CEFR level (with --tab cefr): a1, a2, b1, b2
        #[arg(long)]
        level: Option<CefrLevel>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("speakcoach=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            target,
            transcript,
            elapsed_ms,
            tab,
            level,
            data_dir,
        } => commands::score::execute(target, transcript, elapsed_ms, tab, level, data_dir).await,
        Commands::History {
            tab,
            level,
            data_dir,
        } => commands::history::execute(tab, level, data_dir),
        Commands::Export {
            tab,
            level,
            output,
            data_dir,
        } => commands::export::execute(tab, level, output, data_dir),
        Commands::Clear { yes, data_dir } => commands::clear::execute(yes, data_dir),
        Commands::Coach {
            target,
            transcript,
            speak,
            config,
        } => commands::coach::execute(target, transcript, speak, config).await,
        Commands::Chat { message, config } => commands::chat::execute(message, config).await,
        Commands::Prompts { tab, level } => commands::prompts::execute(tab, level),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
