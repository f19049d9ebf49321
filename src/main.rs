//! catalog-translate - translate extracted metadata records (JSON lines)
//! into catalog records.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_translate::{config::FailurePolicy, AppConfig, Pipeline, TranslationService};

#[derive(Parser, Debug)]
#[command(name = "catalog-translate", version, about)]
struct Args {
    /// Input file with one extracted record per line (default: stdin)
    #[arg(short, long)]
    infile: Option<PathBuf>,

    /// Output file, appended to (default: stdout)
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Catalog schema version to translate for
    #[arg(long)]
    schema_version: Option<String>,

    /// What to do with records no translator accepts (skip or abort)
    #[arg(long)]
    on_unrecognized: Option<FailurePolicy>,

    /// What to do with records that fail to translate (skip or abort)
    #[arg(long)]
    on_error: Option<FailurePolicy>,
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("catalog_translate={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(schema_version) = args.schema_version {
        config.catalog.schema_version = schema_version;
    }
    if let Some(policy) = args.on_unrecognized {
        config.pipeline.on_unrecognized = policy;
    }
    if let Some(policy) = args.on_error {
        config.pipeline.on_error = policy;
    }

    init_tracing(&config);

    let service = TranslationService::from_config(&config.catalog)?;
    tracing::info!(
        "Starting catalog-translate v{} (catalog schema {})",
        env!("CARGO_PKG_VERSION"),
        service.schema_version()
    );
    let pipeline = Pipeline::new(service, config.pipeline.clone());

    let input: Box<dyn io::BufRead> = match &args.infile {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn io::Write> = match &args.outfile {
        Some(path) => Box::new(BufWriter::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let report = pipeline.run(input, output)?;
    tracing::info!(
        translated = report.translated,
        skipped_unrecognized = report.skipped_unrecognized,
        failed = report.failed,
        "Translation finished"
    );

    Ok(())
}
