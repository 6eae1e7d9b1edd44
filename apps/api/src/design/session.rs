//! The single design session and its update function.
//!
//! All state lives in `DesignSession`; every mutation is an `Action` passed to
//! `update`, which reports what happened as an `Outcome`. Handlers never touch
//! fields directly.

use serde::Serialize;

use crate::content::resolver::{Notice, Resolution};
use crate::design::canvas::Zoom;
use crate::design::snippets::{SelectedSnippets, SnippetCategory};
use crate::models::content::GeneratedContent;
use crate::models::design::{
    is_hex_color, new_element_id, Alignment, DesignConfig, FontWeight, ImageElement, Position,
    TextElement, TextElementUpdate, BRAND_PRIMARY, DEFAULT_FONT_FAMILY,
};
use crate::targeting::{Industry, Profile, Role, TargetingSelection};

/// Font size for text assembled from snippets.
pub const ASSEMBLED_FONT_SIZE: u32 = 24;
/// Vertical placement of assembled text: `BASE + STEP * existing text elements`.
/// There is no collision or bounds handling, so with enough elements new text
/// lands below the visible canvas.
pub const STACK_BASE_Y: f64 = 30.0;
pub const STACK_STEP_Y: f64 = 15.0;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSession {
    pub design: DesignConfig,
    pub generated_content: Option<GeneratedContent>,
    pub selected_snippets: SelectedSnippets,
    /// Custom text typed but not yet committed as a snippet.
    pub custom_text: String,
    pub zoom: Zoom,
    /// True while a generation request is in flight.
    pub generating: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum Action {
    SetProfile(Profile),
    SetIndustry(Industry),
    SetRole(Role),
    BeginGeneration,
    ContentResolved {
        requested_for: TargetingSelection,
        resolution: Resolution,
    },
    ToggleSnippet {
        category: SnippetCategory,
        value: String,
    },
    SetCustomText(String),
    CommitCustomText,
    AddSelectedContent,
    UpdateText {
        id: String,
        update: TextElementUpdate,
    },
    RemoveText(String),
    AddImage(ImageElement),
    ResizeImage {
        id: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    RemoveImage(String),
    SetBackground(String),
    ZoomIn,
    ZoomOut,
    SetZoom(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied,
    /// The action was invalid or changed nothing; state is untouched.
    Ignored,
    TextAdded(TextElement),
    GenerationStarted(TargetingSelection),
    AlreadyGenerating,
    /// Content arrived for a triple that is no longer selected.
    StaleContentDiscarded,
}

impl DesignSession {
    pub fn update(&mut self, action: Action) -> Outcome {
        match action {
            Action::SetProfile(profile) => {
                let next = self.design.targeting.with_profile(profile);
                self.retarget(next)
            }
            Action::SetIndustry(industry) => match self.design.targeting.with_industry(industry) {
                Some(next) => self.retarget(next),
                None => Outcome::Ignored,
            },
            Action::SetRole(role) => {
                let next = self.design.targeting.with_role(role);
                self.retarget(next)
            }
            Action::BeginGeneration => {
                if self.generating {
                    return Outcome::AlreadyGenerating;
                }
                self.generating = true;
                self.notice = None;
                Outcome::GenerationStarted(self.design.targeting.clone())
            }
            Action::ContentResolved {
                requested_for,
                resolution,
            } => {
                self.generating = false;
                if requested_for != self.design.targeting {
                    return Outcome::StaleContentDiscarded;
                }
                self.generated_content = Some(resolution.content);
                self.notice = resolution.notice;
                Outcome::Applied
            }
            Action::ToggleSnippet { category, value } => {
                if value.trim().is_empty() {
                    return Outcome::Ignored;
                }
                self.selected_snippets.toggle(category, value);
                Outcome::Applied
            }
            Action::SetCustomText(text) => {
                self.custom_text = text;
                Outcome::Applied
            }
            Action::CommitCustomText => {
                let trimmed = self.custom_text.trim();
                if trimmed.is_empty() {
                    return Outcome::Ignored;
                }
                let value = trimmed.to_string();
                self.selected_snippets.set(SnippetCategory::Custom, value);
                self.custom_text.clear();
                Outcome::Applied
            }
            Action::AddSelectedContent => match self.add_selected_content_to_design() {
                Some(element) => Outcome::TextAdded(element),
                None => Outcome::Ignored,
            },
            Action::UpdateText { id, update } => match self.design.text_element_mut(&id) {
                Some(element) => applied_if(update.apply(element)),
                None => Outcome::Ignored,
            },
            Action::RemoveText(id) => applied_if(self.design.remove_text_element(&id)),
            Action::AddImage(image) => {
                self.design.image_elements.push(image);
                Outcome::Applied
            }
            Action::ResizeImage { id, width, height } => {
                let Some(image) = self.design.image_element_mut(&id) else {
                    return Outcome::Ignored;
                };
                let mut changed = false;
                if let Some(w) = width.filter(|w| *w > 0) {
                    image.size.width = w;
                    changed = true;
                }
                if let Some(h) = height.filter(|h| *h > 0) {
                    image.size.height = h;
                    changed = true;
                }
                applied_if(changed)
            }
            Action::RemoveImage(id) => applied_if(self.design.remove_image_element(&id)),
            Action::SetBackground(color) => {
                if !is_hex_color(&color) {
                    return Outcome::Ignored;
                }
                self.design.background_color = color;
                Outcome::Applied
            }
            Action::ZoomIn => self.set_zoom(self.zoom.zoom_in()),
            Action::ZoomOut => self.set_zoom(self.zoom.zoom_out()),
            Action::SetZoom(value) => self.set_zoom(Zoom::new(value)),
        }
    }

    /// Merges the picked snippets into one text element and appends it.
    ///
    /// Clears the picks and the custom-text buffer. Returns `None` without
    /// touching anything when no snippet is picked.
    pub fn add_selected_content_to_design(&mut self) -> Option<TextElement> {
        let content = self.selected_snippets.combined_text()?;
        let element = assembled_text_element(content, self.design.text_elements.len());
        self.design.text_elements.push(element.clone());
        self.selected_snippets.clear();
        self.custom_text.clear();
        Some(element)
    }

    /// Applies a new triple; any real change drops generated content and picks.
    fn retarget(&mut self, next: TargetingSelection) -> Outcome {
        debug_assert!(next.is_consistent());
        if next == self.design.targeting {
            return Outcome::Ignored;
        }
        self.design.targeting = next;
        self.generated_content = None;
        self.selected_snippets.clear();
        self.custom_text.clear();
        self.notice = None;
        Outcome::Applied
    }

    fn set_zoom(&mut self, zoom: Zoom) -> Outcome {
        if zoom == self.zoom {
            return Outcome::Ignored;
        }
        self.zoom = zoom;
        Outcome::Applied
    }
}

fn applied_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Applied
    } else {
        Outcome::Ignored
    }
}

/// Text element with the default styling for assembled copy, stacked below
/// `existing` earlier text elements.
pub fn assembled_text_element(content: String, existing: usize) -> TextElement {
    TextElement {
        id: new_element_id(),
        content,
        font_size: ASSEMBLED_FONT_SIZE,
        font_family: DEFAULT_FONT_FAMILY.to_string(),
        color: BRAND_PRIMARY.to_string(),
        position: Position {
            x: 50.0,
            y: STACK_BASE_Y + STACK_STEP_Y * existing as f64,
        },
        alignment: Alignment::Center,
        font_weight: FontWeight::Semibold,
    }
}
