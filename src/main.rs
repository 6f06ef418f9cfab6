use std::{
    env, fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use lproof::{report::crossref_report, tui, Document, HighlightMode, Result};

#[derive(Parser)]
#[command(name = "lproof")]
#[command(about = "Cross-reference highlighting for rendered logical proofs")]
struct Cli {
    /// Where to write logs (the terminal belongs to the viewer)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a rendered document and highlight proof lines under the pointer
    View {
        /// Document tree as JSON
        path: PathBuf,
        /// How highlighted lines are marked
        #[arg(long, value_enum, default_value_t = HighlightMode::Inline)]
        strategy: HighlightMode,
    },
    /// Print the lines cited by one proof line as JSON
    Refs {
        /// Document tree as JSON
        path: PathBuf,
        /// Proof position in the document, starting at 1
        #[arg(long, default_value_t = 1)]
        proof: usize,
        /// Line number within that proof
        #[arg(long)]
        line: i64,
    },
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("lproof"))
        .unwrap_or_else(env::temp_dir)
        .join("lproof.log")
}

fn init_tracing(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = fs::File::create(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lproof=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_file.unwrap_or_else(default_log_file))?;

    match cli.command {
        Commands::View { path, strategy } => {
            let document = Document::load(&path)?;
            tui::run(document, strategy).await
        }
        Commands::Refs { path, proof, line } => {
            let document = Document::load(&path)?;
            let report = crossref_report(&document, proof, line)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
