//! tweetstorm CLI
//!
//! ```bash
//! # Split a draft into numbered tweets
//! tweetstorm split draft.md -o thread.md
//!
//! # Fix up readouts after editing a split file by hand
//! tweetstorm refresh thread.md -o thread.md
//!
//! # Show every chunk with its length and budget
//! tweetstorm inspect thread.md --json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tweetstorm::{telemetry, Config, Session};

#[derive(Parser)]
#[command(name = "tweetstorm")]
#[command(about = "Split prose into numbered, length-bounded tweets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a file (or a character range of it) into tweets
    Split {
        /// Input text file
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum characters per tweet, tag included
        #[arg(long)]
        max_len: Option<usize>,

        /// Soft-wrap chunk bodies at this column
        #[arg(long)]
        fill_column: Option<usize>,

        /// First character of the region to split
        #[arg(long, requires = "end")]
        begin: Option<usize>,

        /// One past the last character of the region to split
        #[arg(long, requires = "begin")]
        end: Option<usize>,
    },

    /// Recompute every separator readout in an already split file
    Refresh {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the chunks of a split file
    Inspect {
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            config,
            max_len,
            fill_column,
            begin,
            end,
        } => {
            let mut config = match config {
                Some(path) => Config::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(max_len) = max_len {
                config.max_len = max_len;
            }
            if fill_column.is_some() {
                config.fill_column = fill_column;
            }
            config.validate().context("Invalid configuration")?;

            let text = read_input(&input)?;
            let mut session = Session::new(&text, config.clone())?;

            let start = Instant::now();
            let outcome = match (begin, end) {
                (Some(begin), Some(end)) => session.chunk_region(begin, end, config.max_len),
                _ => session.chunk_whole_document(config.max_len),
            }
            .with_context(|| format!("Failed to split {}", input.display()))?;

            info!(
                chunks = outcome.chunks,
                max_len = config.max_len,
                elapsed_secs = start.elapsed().as_secs_f64(),
                "split complete"
            );
            write_output(output.as_deref(), &session.text())?;
        }

        Commands::Refresh { input, output } => {
            let text = read_input(&input)?;
            let mut session = Session::new(&text, Config::default())?;
            let changed = session.refresh_all()?;

            info!(changed, "readouts refreshed");
            write_output(output.as_deref(), &session.text())?;
        }

        Commands::Inspect { input, json } => {
            let text = read_input(&input)?;
            let session = Session::new(&text, Config::default())?;
            let views = session.chunks();

            if views.is_empty() {
                bail!("No chunks found in {}", input.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                let total = views.len();
                for view in &views {
                    let flag = match (view.over_budget, view.is_in_sync()) {
                        (true, _) => "  OVER BUDGET",
                        (false, false) => "  stale readout",
                        _ => "",
                    };
                    println!(
                        "{:>3}/{} {:>4} / {} chars{}",
                        view.index, total, view.length, view.max_len, flag
                    );
                }
                let over = views.iter().filter(|v| v.over_budget).count();
                println!("\n{} chunks, {} over budget", total, over);
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
