use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Textual color value. Parsing and formatting are delegated to
/// `csscolorparser`, so anything it accepts is valid here.
pub type Color = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Color,
}

/// A design-token color: a value plus the metadata the token exporters
/// expect. Ramp steps and standalone tokens share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    pub value: Color,
    pub description: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl ColorToken {
    pub fn new(value: impl Into<Color>, description: impl Into<String>) -> Self {
        ColorToken {
            value: value.into(),
            description: description.into(),
            token_type: TokenType::Color,
        }
    }
}

/// Ordered mapping from step key to token. Keys are `i * increment`, so
/// iteration order is the ramp order.
pub type ColorRamp = BTreeMap<u32, ColorToken>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_serializes_with_lowercase_type_field() {
        let token = ColorToken::new("#3366ff", "Step: 0");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["value"], "#3366ff");
        assert_eq!(json["description"], "Step: 0");
        assert_eq!(json["type"], "color");
    }

    #[test]
    fn test_token_roundtrips_through_json() {
        let token = ColorToken::new("#ff000080", "Overlay red");
        let json = serde_json::to_string(&token).unwrap();
        let back: ColorToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_ramp_serializes_as_object_keyed_by_step() {
        let mut ramp = ColorRamp::new();
        ramp.insert(0, ColorToken::new("#ffffff", "Step: 0"));
        ramp.insert(100, ColorToken::new("#000000", "Step: 100"));
        let json = serde_json::to_value(&ramp).unwrap();
        assert_eq!(json["0"]["value"], "#ffffff");
        assert_eq!(json["100"]["type"], "color");
    }
}
