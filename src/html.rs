//! Readers for the parts of a product page the miner cares about.

use crate::error::ScrapeError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

pub const PRODUCT_NAME: &str = "h1.page-title span";
pub const PAGE_TITLE: &str = "title";
pub const SPEC_ROWS: &str = ".product.specification table tbody tr";
pub const GALLERY_IMAGE: &str = ".gallery-placeholder._block-content-loading img";

static SEASON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{4})$").expect("season pattern is valid"));

pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{}: {:?}", css, e)))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of every element matching `css`, concatenated.
fn joined_text(document: &Html, css: &str) -> Result<Option<String>, ScrapeError> {
    let selector = selector(css)?;
    let text = document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect::<String>()
        .trim()
        .to_string();

    Ok(if text.is_empty() { None } else { Some(text) })
}

/// One `<tr>` of the specification table.
///
/// Cells are addressed by 1-based column like CSS `td:nth-child(n)`: a
/// column holding something other than a `<td>`, or past the end of the
/// row, reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    fn from_element(row: ElementRef) -> Self {
        let cells = row
            .children()
            .filter_map(ElementRef::wrap)
            .map(|cell| {
                if cell.value().name() == "td" {
                    element_text(cell)
                } else {
                    String::new()
                }
            })
            .collect();

        Self { cells }
    }

    pub fn cell(&self, column: usize) -> &str {
        column
            .checked_sub(1)
            .and_then(|index| self.cells.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

pub fn spec_rows(document: &Html) -> Result<Vec<Row>, ScrapeError> {
    let selector = selector(SPEC_ROWS)?;
    Ok(document.select(&selector).map(Row::from_element).collect())
}

pub fn product_name(document: &Html) -> Result<Option<String>, ScrapeError> {
    joined_text(document, PRODUCT_NAME)
}

/// Season label `W<start>_<end>` from a page title ending in `YYYY-YYYY`.
pub fn season_from_title(title: &str) -> Option<String> {
    SEASON_TOKEN
        .captures(title.trim())
        .map(|caps| format!("W{}_{}", &caps[1], &caps[2]))
}

pub fn page_season(document: &Html) -> Result<Option<String>, ScrapeError> {
    Ok(joined_text(document, PAGE_TITLE)?.and_then(|title| season_from_title(&title)))
}

/// `src` of the first gallery placeholder image.
pub fn gallery_image(document: &Html) -> Result<Option<String>, ScrapeError> {
    let selector = selector(GALLERY_IMAGE)?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string))
}
