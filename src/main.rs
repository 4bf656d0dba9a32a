use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use complaints::{Groups, Loader, Report};

use std::path::PathBuf;

#[derive(Parser)]
/// Summarizes consumer complaint data (in CSV format) by year and product.
///
/// For each product and year, the report gives the number of complaints,
/// the number of companies complained about, and the highest percentage of
/// complaints received by any single company.
#[command(version, about, long_about)]
struct Args {
    /// Path to a CSV file of complaints, with at least the columns
    /// "Date received", "Product" and "Company"
    input: PathBuf,
    /// Path to write the report to (CSV, no header row)
    output: PathBuf,
    /// Path to a product group configuration file (NAME | REGEX per line)
    #[arg(short, long)]
    groups: Option<PathBuf>,
    /// Accept "Date received" values that are not yyyy-mm-dd
    #[arg(long)]
    no_date_check: bool,
    /// Also print the report as a table
    #[arg(short, long)]
    print: bool,
    /// Log progress to stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let groups = match &args.groups {
        Some(path) => Groups::from_file(path)?,
        None => Groups::new(),
    };
    let loader = Loader::new()
        .with_groups(groups)
        .skip_date_check(args.no_date_check);
    let report = Report::from_path(&args.input, &loader)
        .with_context(|| format!("reading {}", args.input.display()))?;
    report
        .write_csv(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    if args.print {
        print!("{report}");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
