//! Design aggregate: the canvas elements and the brand settings around them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::targeting::TargetingSelection;

pub const BRAND_PRIMARY: &str = "#1B365D";
pub const BRAND_COLORS: [&str; 4] = ["#1B365D", "#4A90C2", "#404040", "#FFFFFF"];
pub const BACKGROUND_PRESETS: [&str; 4] = ["#FFFFFF", "#F8F9FA", "#1B365D", "#4A90C2"];
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const FONT_FAMILIES: [&str; 4] = ["Poppins", "Arial", "Helvetica", "Georgia"];
pub const DEFAULT_FONT_FAMILY: &str = "Poppins";
pub const TAGLINE: &str = "Now you know it's right.™";

/// Percent-of-canvas coordinates, zoom independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Logical (unzoomed) pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    pub content: String,
    pub font_size: u32,
    pub font_family: String,
    pub color: String,
    pub position: Position,
    pub alignment: Alignment,
    pub font_weight: FontWeight,
}

/// Partial edit of a text element. Fields that fail validation are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElementUpdate {
    pub content: Option<String>,
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub position: Option<Position>,
    pub alignment: Option<Alignment>,
    pub font_weight: Option<FontWeight>,
}

impl TextElementUpdate {
    /// Applies the valid fields; returns whether anything changed.
    pub fn apply(self, element: &mut TextElement) -> bool {
        let mut changed = false;
        if let Some(content) = self.content {
            element.content = content;
            changed = true;
        }
        if let Some(size) = self.font_size.filter(|s| *s > 0) {
            element.font_size = size;
            changed = true;
        }
        if let Some(family) = self.font_family.filter(|f| FONT_FAMILIES.contains(&f.as_str())) {
            element.font_family = family;
            changed = true;
        }
        if let Some(color) = self.color.filter(|c| is_hex_color(c)) {
            element.color = color;
            changed = true;
        }
        if let Some(position) = self.position.filter(|p| p.x.is_finite() && p.y.is_finite()) {
            element.position = position;
            changed = true;
        }
        if let Some(alignment) = self.alignment {
            element.alignment = alignment;
            changed = true;
        }
        if let Some(weight) = self.font_weight {
            element.font_weight = weight;
            changed = true;
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub position: Position,
    pub size: Size,
}

/// The single live design of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfig {
    /// Insertion order is z-order and drives default vertical stacking.
    pub text_elements: Vec<TextElement>,
    pub image_elements: Vec<ImageElement>,
    pub background_color: String,
    pub brand_colors: Vec<String>,
    pub targeting: TargetingSelection,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            text_elements: vec![TextElement {
                id: new_element_id(),
                content: TAGLINE.to_string(),
                font_size: 32,
                font_family: DEFAULT_FONT_FAMILY.to_string(),
                color: BRAND_PRIMARY.to_string(),
                position: Position { x: 50.0, y: 40.0 },
                alignment: Alignment::Center,
                font_weight: FontWeight::Bold,
            }],
            image_elements: Vec::new(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            brand_colors: BRAND_COLORS.iter().map(|c| c.to_string()).collect(),
            targeting: TargetingSelection::default(),
        }
    }
}

impl DesignConfig {
    pub fn is_empty(&self) -> bool {
        self.text_elements.is_empty() && self.image_elements.is_empty()
    }

    pub fn text_element_mut(&mut self, id: &str) -> Option<&mut TextElement> {
        self.text_elements.iter_mut().find(|e| e.id == id)
    }

    pub fn image_element_mut(&mut self, id: &str) -> Option<&mut ImageElement> {
        self.image_elements.iter_mut().find(|e| e.id == id)
    }

    /// Removes a text element; returns whether one was found.
    pub fn remove_text_element(&mut self, id: &str) -> bool {
        let before = self.text_elements.len();
        self.text_elements.retain(|e| e.id != id);
        self.text_elements.len() != before
    }

    pub fn remove_image_element(&mut self, id: &str) -> bool {
        let before = self.image_elements.len();
        self.image_elements.retain(|e| e.id != id);
        self.image_elements.len() != before
    }
}

pub fn new_element_id() -> String {
    Uuid::new_v4().to_string()
}

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> TextElement {
        DesignConfig::default().text_elements.remove(0)
    }

    #[test]
    fn test_default_design_has_tagline_element() {
        let design = DesignConfig::default();
        assert_eq!(design.text_elements.len(), 1);
        let tagline = &design.text_elements[0];
        assert_eq!(tagline.content, TAGLINE);
        assert_eq!(tagline.font_size, 32);
        assert_eq!(tagline.font_weight, FontWeight::Bold);
        assert_eq!(tagline.position, Position { x: 50.0, y: 40.0 });
        assert_eq!(design.background_color, "#FFFFFF");
        assert_eq!(design.brand_colors.len(), 4);
    }

    #[test]
    fn test_element_ids_are_unique() {
        assert_ne!(new_element_id(), new_element_id());
    }

    #[test]
    fn test_update_skips_invalid_fields() {
        let mut el = element();
        let update = TextElementUpdate {
            font_size: Some(0),
            color: Some("blue".to_string()),
            font_family: Some("Comic Sans".to_string()),
            alignment: Some(Alignment::Left),
            ..Default::default()
        };
        assert!(update.apply(&mut el));
        assert_eq!(el.font_size, 32);
        assert_eq!(el.color, BRAND_PRIMARY);
        assert_eq!(el.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(el.alignment, Alignment::Left);
    }

    #[test]
    fn test_empty_update_reports_no_change() {
        let mut el = element();
        assert!(!TextElementUpdate::default().apply(&mut el));
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#4A90C2"));
        assert!(!is_hex_color("4A90C2"));
        assert!(!is_hex_color("#4A90C"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_css_weights() {
        assert_eq!(FontWeight::Normal.css_weight(), 400);
        assert_eq!(FontWeight::Semibold.css_weight(), 600);
    }

    #[test]
    fn test_text_element_serializes_camel_case() {
        let json = serde_json::to_value(element()).unwrap();
        assert_eq!(json["fontSize"], 32);
        assert_eq!(json["fontWeight"], "bold");
        assert_eq!(json["alignment"], "center");
    }

    #[test]
    fn test_remove_unknown_element_is_noop() {
        let mut design = DesignConfig::default();
        assert!(!design.remove_text_element("missing"));
        assert_eq!(design.text_elements.len(), 1);
    }
}
