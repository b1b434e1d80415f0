use crate::models::Snowboard;
use crate::vendors::Vendor;
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// What the driver does when a single product URL fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next URL.
    #[default]
    Skip,
    /// Stop the run at the first failure.
    Abort,
}

/// A catalogue file: one brand and season, grouped product URLs.
///
/// ```toml
/// brandname = "Gnu"
/// season = "W2023_2024"
/// vendor = "gnu"
///
/// [snowboards.men]
/// riders = "MEN"
/// urls = ["https://www.gnu.com/antigravity"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalogue {
    #[serde(rename = "brandname", alias = "BrandName", default)]
    pub brand_name: String,
    #[serde(alias = "Season", default)]
    pub season: String,
    #[serde(alias = "Vendor", default)]
    pub vendor: Vendor,
    #[serde(default)]
    pub on_error: ErrorPolicy,
    #[serde(
        rename = "snowboards",
        alias = "Snowboards",
        default,
        deserialize_with = "ordered_groups"
    )]
    pub groups: Vec<Group>,
}

/// Product URLs sharing a rider category, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub riders: String,
    pub urls: Vec<String>,
}

#[derive(Deserialize)]
struct GroupEntry {
    #[serde(alias = "Riders", default)]
    riders: String,
    #[serde(alias = "Urls", default)]
    urls: Vec<String>,
}

// Keeps groups in document order rather than the order of a hashed map.
fn ordered_groups<'de, D>(deserializer: D) -> Result<Vec<Group>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<Group>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a table of snowboard groups")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::new();
            while let Some((name, entry)) = map.next_entry::<String, GroupEntry>()? {
                groups.push(Group {
                    name,
                    riders: entry.riders,
                    urls: entry.urls,
                });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

impl Catalogue {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse catalogue")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalogue file: {}", path.display()))?;

        Self::from_toml(&text).with_context(|| format!("Invalid catalogue file: {}", path.display()))
    }

    /// Fresh record for one URL of `group`.
    pub fn defaults(&self, group: &Group) -> Snowboard {
        Snowboard::with_defaults(&self.brand_name, &self.season, &group.riders)
    }

    pub fn url_count(&self) -> usize {
        self.groups.iter().map(|g| g.urls.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_file_order() {
        let catalogue = Catalogue::from_toml(
            r#"
            brandname = "Gnu"
            season = "W2023_2024"

            [snowboards.zeta]
            riders = "WOMEN"
            urls = ["https://example.com/z1", "https://example.com/z2"]

            [snowboards.alpha]
            riders = "MEN"
            urls = ["https://example.com/a1"]
            "#,
        )
        .unwrap();

        let names: Vec<_> = catalogue.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(catalogue.groups[0].urls, vec!["https://example.com/z1", "https://example.com/z2"]);
        assert_eq!(catalogue.url_count(), 3);
        assert_eq!(catalogue.vendor, Vendor::Gnu);
        assert_eq!(catalogue.on_error, ErrorPolicy::Skip);
    }

    #[test]
    fn capitalised_keys_are_accepted() {
        let catalogue = Catalogue::from_toml(
            r#"
            BrandName = "Lib Tech"
            Season = "W2022_2023"
            vendor = "mervin"
            on_error = "abort"

            [Snowboards.youth]
            Riders = "YOUTH"
            Urls = ["https://example.com/y"]
            "#,
        )
        .unwrap();

        assert_eq!(catalogue.brand_name, "Lib Tech");
        assert_eq!(catalogue.season, "W2022_2023");
        assert_eq!(catalogue.vendor, Vendor::Mervin);
        assert_eq!(catalogue.on_error, ErrorPolicy::Abort);
        assert_eq!(
            catalogue.groups,
            vec![Group {
                name: "youth".to_string(),
                riders: "YOUTH".to_string(),
                urls: vec!["https://example.com/y".to_string()],
            }]
        );
    }

    #[test]
    fn defaults_carry_catalogue_values() {
        let catalogue = Catalogue::from_toml(
            r#"
            brandname = "Gnu"
            [snowboards.men]
            riders = "MEN"
            urls = []
            "#,
        )
        .unwrap();

        let board = catalogue.defaults(&catalogue.groups[0]);
        assert_eq!(board.brand_name, "Gnu");
        assert_eq!(board.season, "");
        assert_eq!(board.riders, "MEN");
        assert!(board.sizes.is_empty());
    }

    #[test]
    fn unknown_vendor_is_rejected() {
        assert!(Catalogue::from_toml(r#"vendor = "burton""#).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = Catalogue::load(Path::new("/nonexistent/catalogue.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalogue.toml"));
    }
}
