//! Vendor specific layouts of the specification table.
//!
//! Both known layouts share ten columns:
//!
//! | column | content                          | example            |
//! |--------|----------------------------------|--------------------|
//! | 1      | size label                       | `150W`             |
//! | 2      | contact length                   | `106`              |
//! | 3      | sidecut                          | `8`                |
//! | 4      | nose / tail width                | `28.8 / 28.5`      |
//! | 5      | waist width                      | `25`               |
//! | 6      | stance range / setback, inches   | `18.5-23.25 / 1.0"`|
//! | 7      | stance range / setback, metric   | `47 - 59 / 2,5 cm` |
//! | 8      | flex                             | `5`                |
//! | 9      | rider weight, lbs                | `100-200`          |
//! | 10     | rider weight, kg                 | `40 kg`            |
//!
//! They differ only in how column 1 is read.

use crate::html::Row;
use crate::models::Spec;
use crate::parser::{self, PAIR_SEPARATOR, SPACED_RANGE, TIGHT_RANGE};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static SIZE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+W?").expect("size pattern is valid"));

static SURFACE_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9.]+)\ssq\sin\)").expect("surface area pattern is valid"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Column 1 is the size label verbatim.
    #[default]
    Gnu,
    /// Column 1 starts with the size label and may carry trailing text,
    /// including the surface area as `(<n> sq in)`.
    Mervin,
}

impl Vendor {
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Gnu => "gnu",
            Vendor::Mervin => "mervin",
        }
    }

    /// Brand used when the catalogue does not name one.
    pub fn default_brand(&self) -> &'static str {
        match self {
            Vendor::Gnu => "Gnu",
            Vendor::Mervin => "Mervin",
        }
    }

    /// Size label for a column 1 cell, or `None` when the row should be
    /// skipped.
    pub fn size_label(&self, cell: &str) -> Option<String> {
        match self {
            Vendor::Gnu => (!cell.is_empty()).then(|| cell.to_string()),
            Vendor::Mervin => SIZE_TOKEN.find(cell).map(|m| m.as_str().to_string()),
        }
    }

    pub fn parse_row(&self, row: &Row) -> Option<(String, Spec)> {
        let cell = row.cell(1);
        let size = self.size_label(cell)?;

        let mut spec = Spec {
            length: parser::size_length(&size),
            wide: parser::is_wide(&size),
            ..Spec::default()
        };

        if let Vendor::Mervin = self {
            spec.surface_area_in = surface_area(cell);
        }

        fill_measurements(&mut spec, row);

        Some((size, spec))
    }

    /// One spec per size label. Labels are used as found, so two rows
    /// spelling the same size differently stay separate entries.
    pub fn extract(&self, rows: &[Row]) -> BTreeMap<String, Spec> {
        let mut specs = BTreeMap::new();

        for row in rows {
            if let Some((size, spec)) = self.parse_row(row) {
                tracing::debug!(vendor = self.name(), size = %size, "parsed spec row");
                specs.insert(size, spec);
            }
        }

        specs
    }

    /// Size labels reported for the product, in table order.
    ///
    /// The GNU layout lists column 1 of every row verbatim; the Mervin
    /// layout lists each extracted size label once.
    pub fn sizes(&self, rows: &[Row]) -> Vec<String> {
        match self {
            Vendor::Gnu => rows
                .iter()
                .map(|row| row.cell(1))
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect(),
            Vendor::Mervin => {
                let mut sizes = Vec::new();
                for size in rows.iter().filter_map(|row| self.size_label(row.cell(1))) {
                    if !sizes.contains(&size) {
                        sizes.push(size);
                    }
                }
                sizes
            }
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn surface_area(cell: &str) -> Option<f64> {
    SURFACE_AREA
        .captures(cell)
        .and_then(|caps| parser::number(&caps[1]))
}

/// Columns 2 to 10, identical for every vendor.
fn fill_measurements(spec: &mut Spec, row: &Row) {
    spec.contact_length = parser::number(row.cell(2));
    spec.sidecut = parser::number(row.cell(3));

    (spec.nose_width, spec.tail_width) = parser::pair(row.cell(4), PAIR_SEPARATOR, parser::number);

    spec.waist_width = parser::number(row.cell(5));

    let imperial = parser::stance(row.cell(6), TIGHT_RANGE, parser::inches);
    spec.stance_min_in = imperial.min;
    spec.stance_max_in = imperial.max;
    spec.stance_set_back_in = imperial.set_back;

    let metric = parser::stance(row.cell(7), SPACED_RANGE, parser::centimeters);
    spec.stance_min = metric.min;
    spec.stance_max = metric.max;
    spec.stance_set_back = metric.set_back;

    spec.flex = parser::number(row.cell(8));

    (spec.weight_min_lbs, spec.weight_max_lbs) = parser::pair(row.cell(9), TIGHT_RANGE, parser::number);
    (spec.weight_min, spec.weight_max) = parser::metric_weight(row.cell(10));
}
