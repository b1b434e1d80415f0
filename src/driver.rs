use crate::catalogue::{Catalogue, ErrorPolicy};
use crate::error::ScrapeError;
use crate::fetch::Fetch;
use crate::images::ImageStore;
use crate::models::Snowboard;
use crate::product;
use anyhow::Result;
use std::thread;
use std::time::Duration;

/// Pause between two product URLs.
pub const PACING_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Where gallery images go; `None` skips image downloads.
    pub images: Option<ImageStore>,
    pub delay: Duration,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            images: None,
            delay: PACING_DELAY,
        }
    }
}

#[derive(Debug)]
pub struct Failure {
    pub url: String,
    pub error: ScrapeError,
}

#[derive(Debug, Default)]
pub struct CatalogueRun {
    pub snowboards: Vec<Snowboard>,
    pub failures: Vec<Failure>,
}

/// Walks catalogues URL by URL, strictly sequentially.
pub struct Driver<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    options: DriverOptions,
    requested: bool,
}

impl<'a, F: Fetch + ?Sized> Driver<'a, F> {
    pub fn new(fetcher: &'a F, options: DriverOptions) -> Self {
        Self {
            fetcher,
            options,
            requested: false,
        }
    }

    /// Scrapes every URL of `catalogue` in group order, then URL order.
    ///
    /// With [`ErrorPolicy::Abort`] the first failing URL ends the run with
    /// an error; with [`ErrorPolicy::Skip`] it is recorded in
    /// [`CatalogueRun::failures`] and the run goes on.
    pub fn run(&mut self, catalogue: &Catalogue) -> Result<CatalogueRun> {
        tracing::info!(
            brand = %catalogue.brand_name,
            season = %catalogue.season,
            vendor = %catalogue.vendor,
            urls = catalogue.url_count(),
            "scraping catalogue"
        );

        let mut run = CatalogueRun::default();

        for group in &catalogue.groups {
            for url in &group.urls {
                self.pace();

                tracing::info!(group = %group.name, url = %url, "scraping product");
                let result = product::scrape_product(
                    self.fetcher,
                    url,
                    catalogue.defaults(group),
                    catalogue.vendor,
                    self.options.images.as_ref(),
                );

                match result {
                    Ok(board) => {
                        tracing::info!(name = %board.name, sizes = board.sizes.len(), "scraped product");
                        run.snowboards.push(board);
                    }
                    Err(error) => match catalogue.on_error {
                        ErrorPolicy::Abort => {
                            return Err(anyhow::Error::new(error).context(format!("Failed to scrape {}", url)));
                        }
                        ErrorPolicy::Skip => {
                            tracing::warn!(url = %url, error = %error, "skipping product");
                            run.failures.push(Failure {
                                url: url.clone(),
                                error,
                            });
                        }
                    },
                }
            }
        }

        tracing::info!(
            scraped = run.snowboards.len(),
            failed = run.failures.len(),
            "catalogue done"
        );

        Ok(run)
    }

    fn pace(&mut self) {
        if self.requested && !self.options.delay.is_zero() {
            thread::sleep(self.options.delay);
        }
        self.requested = true;
    }
}
