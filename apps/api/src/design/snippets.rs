//! Snippet selection: one optional pick per category, toggled like a radio group.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnippetCategory {
    Headline,
    PainPoint,
    Benefit,
    Cta,
    Custom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSnippets {
    pub headline: Option<String>,
    pub pain_point: Option<String>,
    pub benefit: Option<String>,
    pub cta: Option<String>,
    pub custom: Option<String>,
}

impl SelectedSnippets {
    fn slot_mut(&mut self, category: SnippetCategory) -> &mut Option<String> {
        match category {
            SnippetCategory::Headline => &mut self.headline,
            SnippetCategory::PainPoint => &mut self.pain_point,
            SnippetCategory::Benefit => &mut self.benefit,
            SnippetCategory::Cta => &mut self.cta,
            SnippetCategory::Custom => &mut self.custom,
        }
    }

    /// Picks `value` for `category`, or clears the category if `value` is
    /// already the pick. Other categories are untouched.
    pub fn toggle(&mut self, category: SnippetCategory, value: String) {
        let slot = self.slot_mut(category);
        if slot.as_deref() == Some(value.as_str()) {
            *slot = None;
        } else {
            *slot = Some(value);
        }
    }

    /// Sets a category unconditionally.
    pub fn set(&mut self, category: SnippetCategory, value: String) {
        *self.slot_mut(category) = Some(value);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Non-empty picks in assembly order: headline, pain point, benefit, CTA, custom.
    pub fn in_order(&self) -> impl Iterator<Item = &str> {
        [
            &self.headline,
            &self.pain_point,
            &self.benefit,
            &self.cta,
            &self.custom,
        ]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .filter(|s| !s.is_empty())
    }

    /// All picks joined into one string of sentences. `None` when nothing is picked.
    pub fn combined_text(&self) -> Option<String> {
        let combined = self
            .in_order()
            .map(terminate_sentence)
            .collect::<Vec<_>>()
            .join(" ");
        (!combined.is_empty()).then_some(combined)
    }
}

/// Ensures the snippet ends in `.`, `!` or `?`, appending `.` otherwise.
pub fn terminate_sentence(snippet: &str) -> String {
    if snippet.ends_with(['.', '!', '?']) {
        snippet.to_string()
    } else {
        format!("{snippet}.")
    }
}
