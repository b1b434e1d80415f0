use crate::error::ScrapeError;
use crate::fetch::Fetch;
use crate::html;
use crate::images::ImageStore;
use crate::models::Snowboard;
use crate::vendors::Vendor;
use scraper::Html;

/// Completes `board` from a parsed product page.
///
/// Brand, name and season already set by the catalogue are kept; only empty
/// ones are taken from the page (or, for the brand, from the vendor).
pub fn assemble(document: &Html, mut board: Snowboard, vendor: Vendor) -> Result<Snowboard, ScrapeError> {
    if board.brand_name.is_empty() {
        board.brand_name = vendor.default_brand().to_string();
    }

    if board.name.is_empty() {
        if let Some(name) = html::product_name(document)? {
            board.name = name;
        }
    }

    if board.season.is_empty() {
        match html::page_season(document)? {
            Some(season) => board.season = season,
            None => tracing::warn!(name = %board.name, "no season found in page title"),
        }
    }

    let rows = html::spec_rows(document)?;
    board.specs = vendor.extract(&rows);
    board.sizes = vendor.sizes(&rows);

    tracing::debug!(
        name = %board.name,
        rows = rows.len(),
        specs = board.specs.len(),
        "assembled product"
    );

    Ok(board)
}

/// Fetches `url`, assembles the product and, when `images` is given, stores
/// its gallery image.
pub fn scrape_product<F>(
    fetcher: &F,
    url: &str,
    defaults: Snowboard,
    vendor: Vendor,
    images: Option<&ImageStore>,
) -> Result<Snowboard, ScrapeError>
where
    F: Fetch + ?Sized,
{
    let body = fetcher.fetch_page(url)?;
    let document = Html::parse_document(&body);

    if !document.errors.is_empty() {
        tracing::debug!(url, errors = document.errors.len(), "page parsed with recoverable HTML errors");
    }

    let board = assemble(&document, defaults, vendor)?;

    if let Some(store) = images {
        if let Some(src) = html::gallery_image(&document)? {
            if let Some(bytes) = fetcher.fetch_image(&src)? {
                let path = store.save(&board, &src, &bytes)?;
                tracing::info!(path = %path.display(), "saved image");
            }
        }
    }

    Ok(board)
}
