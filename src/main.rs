use anyhow::{Context, Result};
use clap::Parser;
use snowminer::catalogue::Catalogue;
use snowminer::driver::{Driver, DriverOptions};
use snowminer::fetch::HttpFetcher;
use snowminer::images::ImageStore;
use snowminer::logging;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Snowminer - snowboard specification scraper")]
struct Args {
    /// Catalogue files (TOML) listing the product URLs to scrape
    configs: Vec<PathBuf>,

    /// Don't download product images
    #[clap(long)]
    no_images: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;

    let fetcher = HttpFetcher::new().context("Failed to build HTTP client")?;
    let options = DriverOptions {
        images: (!args.no_images).then(|| ImageStore::new(".")),
        ..DriverOptions::default()
    };
    let mut driver = Driver::new(&fetcher, options);

    let mut snowboards = Vec::new();
    let mut failed = 0;

    for path in &args.configs {
        let catalogue = Catalogue::load(path)?;
        let run = driver.run(&catalogue)?;

        failed += run.failures.len();
        snowboards.extend(run.snowboards);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &snowboards).context("Failed to write catalogue")?;
    writeln!(out).context("Failed to write catalogue")?;

    tracing::info!(products = snowboards.len(), failed, "done");

    Ok(())
}
