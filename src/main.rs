use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridwalk::{counting::{CountMode, Runner}, grid::{read_field, to_pretty_string}, logger::DevLogger};
use gridwalk_core::{devlog, text, FieldGenerator};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridwalk", version, about = "Count monotonic grid paths, exhaustively and by tabulation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count right/down paths from the top-left to the bottom-right cell
    Count {
        /// Path to a field file ('.' open, 'X' blocked, one row per line). If omitted, reads from stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Choose counting approach
        #[arg(short, long, value_enum, default_value_t=Method::Both)]
        method: Method,

        /// Log the filled tabulation table
        #[arg(long)]
        table: bool,

        /// Log every valid path (small fields only)
        #[arg(long)]
        paths: bool,

        /// Directory for step devlogs; no devlogs are written if omitted
        #[arg(long)]
        devlog_dir: Option<PathBuf>,

        /// Step-by-step mode (pauses after each devlog step). Press Enter to continue.
        #[arg(long)]
        step: bool,

        /// Maximum devlogs to write (0 = unlimited)
        #[arg(long, default_value_t=0)]
        max_logs: usize,

        /// Emit devlogs and the field to console with colors
        #[arg(long)]
        color: bool,

        /// Write a markdown and JSON session summary into this directory
        #[arg(long)]
        session_dir: Option<PathBuf>,

        /// Print the report as JSON
        #[cfg(feature = "serde")]
        #[arg(long)]
        json: bool,
    },
    /// Print a random field
    Generate {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Probability that a cell is blocked
        #[arg(long, default_value_t=0.2)]
        blocked: f64,
        #[arg(long)]
        seed: Option<u64>,
        /// Keep the start and target cells open
        #[arg(long)]
        open_corners: bool,
    },
    /// Run-length encode lowercase text
    Rle { text: String },
    /// Longest substring whose characters each occur at least K times
    Frequent {
        text: String,
        #[arg(short)]
        k: usize,
    },
    /// Reformat a date as YYYY-MM-DD
    Date { text: String },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method { Exhaustive, Tabulation, Both }

fn read_input(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Count { input, method, table, paths, devlog_dir, step, max_logs, color, session_dir, #[cfg(feature = "serde")] json } => {
            let field = read_field(&read_input(&input)?).context("read field")?;
            let mut logger = match devlog_dir {
                Some(dir) => DevLogger::new(dir, color, step, max_logs)?,
                None => DevLogger::silent(),
            };
            let mode = match method {
                Method::Exhaustive => CountMode::ExhaustiveOnly,
                Method::Tabulation => CountMode::TabulationOnly,
                Method::Both => CountMode::Compare,
            };
            let report = Runner::new(mode).with_table(table).with_paths(paths).run(&field, &mut logger)?;

            if let Some(dir) = session_dir {
                let title = input.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "stdin".into());
                let session = report.to_session(&title, &field);
                let md = devlog::write_session_markdown(&dir, &session).with_context(|| format!("writing session to {}", dir.display()))?;
                let js = devlog::write_session_json(&dir, &session).with_context(|| format!("writing session to {}", dir.display()))?;
                log::info!("session written to {} and {}", md.display(), js.display());
            }

            #[cfg(feature = "serde")]
            {
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    return Ok(());
                }
            }

            println!("\n{}", to_pretty_string(&field, None, color));
            for r in &report.results {
                match (&r.paths, &r.error) {
                    (Some(n), _) => println!("{:?}: {} paths ({} µs)", r.strategy, n, r.elapsed_us),
                    (None, Some(e)) => println!("{:?}: skipped ({})", r.strategy, e),
                    (None, None) => {}
                }
            }
        }
        Command::Generate { rows, cols, blocked, seed, open_corners } => {
            let mut generator = FieldGenerator::new(seed);
            let generated = if open_corners { generator.generate_open_corners(rows, cols, blocked) } else { generator.generate(rows, cols, blocked) };
            let field = generated.context("generate field")?;
            print!("{}", field);
        }
        Command::Rle { text } => println!("{}", text::run_length_encode(&text)?),
        Command::Frequent { text, k } => println!("{}", text::longest_frequent_substring(&text, k)),
        Command::Date { text } => println!("{}", text::reformat_date(&text)?),
    }
    Ok(())
}
