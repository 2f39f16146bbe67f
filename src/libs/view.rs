use serde::{ Deserialize, Serialize };
use strum::{ Display, EnumString };

/// Gallery layout selected by the view toggle
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    Table,
    #[default]
    Card,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn card_is_default() {
        assert_eq!(ViewMode::default(), ViewMode::Card);
    }

    #[test]
    fn round_trips_through_strings() {
        assert_eq!(ViewMode::from_str("table").unwrap(), ViewMode::Table);
        assert_eq!(ViewMode::Card.to_string(), "card");
        assert_eq!(serde_json::to_string(&ViewMode::Table).unwrap(), "\"table\"");
    }
}
