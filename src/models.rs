use serde::Serialize;
use std::collections::BTreeMap;

/// Parsed measurements for one size label of a board.
///
/// Every measurement is optional: a cell that is missing or fails to parse
/// leaves its field at `None`, and `None` fields are left out of the JSON.
/// A parsed `0.0` is kept, so a reported zero setback stays distinct from an
/// unreported one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Spec {
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    pub wide: bool,
    #[serde(rename = "contactLength", skip_serializing_if = "Option::is_none")]
    pub contact_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecut: Option<f64>,
    #[serde(rename = "noseWidth", skip_serializing_if = "Option::is_none")]
    pub nose_width: Option<f64>,
    #[serde(rename = "tailWidth", skip_serializing_if = "Option::is_none")]
    pub tail_width: Option<f64>,
    #[serde(rename = "waistWidth", skip_serializing_if = "Option::is_none")]
    pub waist_width: Option<f64>,
    #[serde(rename = "stanceMin", skip_serializing_if = "Option::is_none")]
    pub stance_min: Option<f64>,
    #[serde(rename = "stanceMax", skip_serializing_if = "Option::is_none")]
    pub stance_max: Option<f64>,
    #[serde(rename = "stanceSetBack", skip_serializing_if = "Option::is_none")]
    pub stance_set_back: Option<f64>,
    #[serde(rename = "stanceMin_in", skip_serializing_if = "Option::is_none")]
    pub stance_min_in: Option<f64>,
    #[serde(rename = "stanceMax_in", skip_serializing_if = "Option::is_none")]
    pub stance_max_in: Option<f64>,
    #[serde(rename = "stanceSetBack_in", skip_serializing_if = "Option::is_none")]
    pub stance_set_back_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,
    #[serde(rename = "weightMin", skip_serializing_if = "Option::is_none")]
    pub weight_min: Option<f64>,
    #[serde(rename = "weightMax", skip_serializing_if = "Option::is_none")]
    pub weight_max: Option<f64>,
    #[serde(rename = "weightMin_lbs", skip_serializing_if = "Option::is_none")]
    pub weight_min_lbs: Option<f64>,
    #[serde(rename = "weightMax_lbs", skip_serializing_if = "Option::is_none")]
    pub weight_max_lbs: Option<f64>,
    #[serde(rename = "surfaceArea_in", skip_serializing_if = "Option::is_none")]
    pub surface_area_in: Option<f64>,
}

/// One product page worth of catalogue data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snowboard {
    #[serde(rename = "brandname")]
    pub brand_name: String,
    pub name: String,
    pub season: String,
    pub riders: String,
    pub sizes: Vec<String>,
    pub specs: BTreeMap<String, Spec>,
}

impl Snowboard {
    /// Record pre-filled from catalogue configuration, before page assembly.
    pub fn with_defaults(brand_name: &str, season: &str, riders: &str) -> Self {
        Self {
            brand_name: brand_name.to_string(),
            season: season.to_string(),
            riders: riders.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_but_zero_setback_is_kept() {
        let spec = Spec {
            length: Some(150.0),
            stance_set_back: Some(0.0),
            ..Spec::default()
        };

        let json = serde_json::to_value(&spec).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["size"], 150.0);
        assert_eq!(object["wide"], false);
        assert_eq!(object["stanceSetBack"], 0.0);
        assert!(!object.contains_key("stanceSetBack_in"));
        assert!(!object.contains_key("flex"));
    }

    #[test]
    fn snowboard_uses_catalogue_field_names() {
        let mut board = Snowboard::with_defaults("Gnu", "W2023_2024", "MEN");
        board.name = "Antigravity".to_string();
        board.sizes.push("150".to_string());
        board.specs.insert("150".to_string(), Spec::default());

        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["brandname"], "Gnu");
        assert_eq!(json["name"], "Antigravity");
        assert_eq!(json["season"], "W2023_2024");
        assert_eq!(json["riders"], "MEN");
        assert_eq!(json["sizes"][0], "150");
        assert!(json["specs"]["150"].is_object());
    }
}
