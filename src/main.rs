//! CLI entry point for the meeting rater.
//!
//! Imports meeting CSVs into a JSON record store, then reports the
//! usefulness dashboard, individual meetings, or a CSV export.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use meeting_rater::{
    analyzers::analyzer::get_analytics,
    config::Settings,
    dates::RandomRecentDates,
    error::ImportError,
    import::import_batch,
    output::{export_records, render_dashboard, render_record, render_records, to_json},
    parser::{parse_csv_file, parse_json_rows},
    storage::{JsonFileStore, RecordStore},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "meeting_rater")]
#[command(about = "Score meetings for usefulness and summarize them", long_about = None)]
struct Cli {
    /// JSON file holding imported meetings (overrides MEETING_RATER_STORE)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import meetings from a CSV file (or a JSON array of rows)
    Import {
        /// CSV file with a Meeting_Title, Duration_Minutes, ... header
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Remove all stored meetings before importing
        #[arg(long, default_value_t = false)]
        clear_existing: bool,
    },
    /// Show the usefulness dashboard
    Analytics {
        /// Print the dashboard as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List stored meetings
    List,
    /// Show one meeting
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// Remove all stored meetings
    Clear,
    /// Export stored meetings as CSV
    Export {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let settings = Settings::from_env().with_store_override(cli.store);

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("meeting_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let mut store = JsonFileStore::open(&settings.store_path)?;

    match cli.command {
        Commands::Import {
            file,
            clear_existing,
        } => {
            let rows = if file.extension() == Some(OsStr::new("json")) {
                parse_json_rows(&std::fs::read_to_string(&file)?)?
            } else {
                parse_csv_file(&file)?
            };
            info!(file = %file.display(), rows = rows.len(), "Rows parsed");

            let mut dates = RandomRecentDates::from_now();
            match import_batch(&mut store, &rows, clear_existing, &mut dates) {
                Ok(summary) => {
                    for warning in &summary.warnings {
                        warn!("{}", warning);
                    }
                    println!(
                        "Imported {} meetings into {}.",
                        summary.created_count,
                        store.path().display()
                    );
                }
                Err(e @ ImportError::Rejected { .. }) => {
                    for message in e.row_messages() {
                        error!("{}", message);
                    }
                    bail!("{} ({})", e, file.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Analytics { json } => {
            let analytics = get_analytics(&store)?;

            if json {
                println!("{}", to_json(&analytics)?);
            } else {
                print!("{}", render_dashboard(&analytics));
            }
        }
        Commands::List => {
            print!("{}", render_records(&store.records()?));
        }
        Commands::Show { id } => match store.get(id)? {
            Some(record) => print!("{}", render_record(&record)),
            None => bail!("Meeting {id} not found"),
        },
        Commands::Clear => {
            store.clear()?;
            println!("Cleared all meetings from {}.", store.path().display());
        }
        Commands::Export { path } => {
            let records = store.records()?;
            export_records(&path, &records)?;
            println!("Exported {} meetings to {}.", records.len(), path.display());
        }
    }

    Ok(())
}
