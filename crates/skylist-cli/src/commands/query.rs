use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use skylist_core::catalog::CatalogReader;
use skylist_core::output;
use skylist_core::query::{run_query, DistanceMetric, Query};
use tracing::info;

use super::config::load_config;
use crate::summary::print_query_summary;

#[derive(Clone, ValueEnum)]
pub enum MetricArg {
    Planar,
    Spherical,
}

impl From<&MetricArg> for DistanceMetric {
    fn from(arg: &MetricArg) -> Self {
        match arg {
            MetricArg::Planar => DistanceMetric::Planar,
            MetricArg::Spherical => DistanceMetric::Spherical,
        }
    }
}

#[derive(Args)]
pub struct QueryArgs {
    /// Input catalog file (delimited text)
    pub file: PathBuf,

    /// Catalog layout config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Right ascension of the query center, degrees
    #[arg(long, allow_hyphen_values = true)]
    pub ra: f64,

    /// Declination of the query center, degrees
    #[arg(long, allow_hyphen_values = true)]
    pub dec: f64,

    /// Field-of-view width along RA, degrees
    #[arg(long, default_value = "1.0")]
    pub fov_ra: f64,

    /// Field-of-view height along DEC, degrees
    #[arg(long, default_value = "1.0")]
    pub fov_dec: f64,

    /// Number of stars to keep
    #[arg(short = 'n', long, default_value = "100")]
    pub count: usize,

    /// Distance metric for the final ordering
    #[arg(long, value_enum, default_value = "planar")]
    pub metric: MetricArg,

    /// Directory for the result file
    #[arg(long, default_value = "results")]
    pub output: PathBuf,

    /// Print the short-list to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: &QueryArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let query = Query {
        center_ra: args.ra,
        center_dec: args.dec,
        fov_ra: args.fov_ra,
        fov_dec: args.fov_dec,
        count: args.count,
        metric: (&args.metric).into(),
    };

    let reader = CatalogReader::open(&args.file, &config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{msg} {spinner} {pos} rows")?);
    pb.set_message("Scanning catalog");

    let result = run_query(reader.inspect(|_| pb.inc(1)), &config.layout, &query)?;
    pb.finish_with_message("Scan complete");

    print_query_summary(&args.file, &query, &result.stats, result.stars.len());

    if result.stars.is_empty() {
        println!("\nNo qualifying stars; no result file written.");
        return Ok(());
    }

    let rendered = output::render(&result.stars, &config.layout)?;

    if args.stdout {
        print!("{}", rendered);
        return Ok(());
    }

    std::fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output.display()
        )
    })?;
    let path = args.output.join(result_file_name(config.layout.delimiter));
    std::fs::write(&path, &rendered)
        .with_context(|| format!("Failed to write result to {}", path.display()))?;
    info!(rows = result.stars.len(), path = %path.display(), "result written");

    println!("\nResult saved to {}", path.display());
    Ok(())
}

/// Timestamped result file name; extension follows the delimiter.
fn result_file_name(delimiter: char) -> String {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let extension = if delimiter == '\t' { "tsv" } else { "csv" };
    format!("stars_{}.{}", epoch, extension)
}
