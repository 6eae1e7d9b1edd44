//! Canvas rendering model.
//!
//! Elements are stored in percent-of-canvas coordinates with unzoomed sizes.
//! Rendering maps them to pixels for a given zoom; the stored design is never
//! touched. Every element is anchored at its own centre.
//!
//! Layer order, bottom to top: images, text, empty-state placeholder, watermark.

use serde::{Deserialize, Serialize};

use crate::models::design::{Alignment, DesignConfig, BRAND_PRIMARY, TAGLINE};
use crate::targeting::catalog::persona;

pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Text may span at most this share of the canvas width.
const TEXT_MAX_WIDTH_RATIO: f64 = 0.8;
const WATERMARK_MARGIN: f64 = 16.0;
const WATERMARK_WORDMARK: &str = "accrue";
const WATERMARK_WORDMARK_SIZE: f64 = 20.0;
const WATERMARK_TAGLINE_SIZE: f64 = 10.0;
const PLACEHOLDER_MESSAGE: &str = "Add text and images using the configurator";

// ────────────────────────────────────────────────────────────────────────────
// Zoom
// ────────────────────────────────────────────────────────────────────────────

/// Render scale, clamped to `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zoom(f64);

impl Zoom {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: f64 = 0.8;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - Self::STEP)
    }

    pub fn can_zoom_in(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_zoom_out(self) -> bool {
        self.0 > Self::MIN
    }

    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendered output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Image {
        id: String,
        src: String,
        alt: String,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
    },
    Text {
        id: String,
        content: String,
        center_x: f64,
        center_y: f64,
        font_size: f64,
        font_family: String,
        font_weight: u16,
        color: String,
        alignment: Alignment,
        max_width: f64,
    },
    Placeholder {
        center_x: f64,
        center_y: f64,
        headline: String,
        headline_color: String,
        message: String,
    },
    /// Pinned to the bottom-right corner; offsets are from those edges.
    Watermark {
        right: f64,
        bottom: f64,
        wordmark: String,
        wordmark_size: f64,
        tagline: String,
        tagline_size: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCanvas {
    pub width: f64,
    pub height: f64,
    pub zoom: Zoom,
    pub background_color: String,
    /// Bottom to top.
    pub layers: Vec<Layer>,
}

/// Maps a percent coordinate on an axis of `extent` logical pixels to zoomed pixels.
pub fn to_pixels(percent: f64, extent: f64, zoom: Zoom) -> f64 {
    percent / 100.0 * extent * zoom.value()
}

pub fn render(design: &DesignConfig, zoom: Zoom) -> RenderedCanvas {
    let z = zoom.value();
    let mut layers = Vec::with_capacity(design.image_elements.len() + design.text_elements.len() + 2);

    layers.extend(design.image_elements.iter().map(|image| Layer::Image {
        id: image.id.clone(),
        src: image.src.clone(),
        alt: image.alt.clone(),
        center_x: to_pixels(image.position.x, CANVAS_WIDTH, zoom),
        center_y: to_pixels(image.position.y, CANVAS_HEIGHT, zoom),
        width: f64::from(image.size.width) * z,
        height: f64::from(image.size.height) * z,
    }));

    layers.extend(design.text_elements.iter().map(|text| Layer::Text {
        id: text.id.clone(),
        content: text.content.clone(),
        center_x: to_pixels(text.position.x, CANVAS_WIDTH, zoom),
        center_y: to_pixels(text.position.y, CANVAS_HEIGHT, zoom),
        font_size: f64::from(text.font_size) * z,
        font_family: text.font_family.clone(),
        font_weight: text.font_weight.css_weight(),
        color: text.color.clone(),
        alignment: text.alignment,
        max_width: CANVAS_WIDTH * z * TEXT_MAX_WIDTH_RATIO,
    }));

    if design.is_empty() {
        layers.push(Layer::Placeholder {
            center_x: CANVAS_WIDTH * z / 2.0,
            center_y: CANVAS_HEIGHT * z / 2.0,
            headline: TAGLINE.to_string(),
            headline_color: design
                .brand_colors
                .first()
                .cloned()
                .unwrap_or_else(|| BRAND_PRIMARY.to_string()),
            message: PLACEHOLDER_MESSAGE.to_string(),
        });
    }

    layers.push(Layer::Watermark {
        right: WATERMARK_MARGIN * z,
        bottom: WATERMARK_MARGIN * z,
        wordmark: WATERMARK_WORDMARK.to_string(),
        wordmark_size: WATERMARK_WORDMARK_SIZE * z,
        tagline: TAGLINE.to_string(),
        tagline_size: WATERMARK_TAGLINE_SIZE * z,
    });

    RenderedCanvas {
        width: CANVAS_WIDTH * z,
        height: CANVAS_HEIGHT * z,
        zoom,
        background_color: design.background_color.clone(),
        layers,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview summary
// ────────────────────────────────────────────────────────────────────────────

/// Header and footer facts shown around a preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSummary {
    pub profile: &'static str,
    pub role: &'static str,
    pub persona: &'static str,
    pub industry: String,
    pub canvas: String,
    pub text_elements: usize,
    pub image_elements: usize,
    pub zoom_percent: u32,
}

pub fn summarize(design: &DesignConfig, zoom: Zoom) -> PreviewSummary {
    let targeting = &design.targeting;
    PreviewSummary {
        profile: targeting.profile.label(),
        role: targeting.role.short_label(),
        persona: persona(targeting.profile, targeting.role).name,
        industry: targeting.industry.display_name(),
        canvas: format!("{CANVAS_WIDTH} × {CANVAS_HEIGHT}px"),
        text_elements: design.text_elements.len(),
        image_elements: design.image_elements.len(),
        zoom_percent: zoom.percent(),
    }
}
