// Targeting Selector: the (profile, industry, role) triple and its static catalogs.

pub mod catalog;
pub mod handlers;

use serde::{Deserialize, Serialize};

pub use catalog::{Industry, Profile, Role};

/// The customer profile the current design is aimed at.
///
/// Invariant: `industry` is a member of `profile.industries()`. The setters keep
/// it that way; see `with_profile` and `with_industry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingSelection {
    pub profile: Profile,
    pub industry: Industry,
    pub role: Role,
}

impl Default for TargetingSelection {
    fn default() -> Self {
        Self {
            profile: Profile::Small,
            industry: Industry::Retail,
            role: Role::Champion,
        }
    }
}

impl TargetingSelection {
    /// Switches profile, resetting the industry to the new catalog's first entry
    /// when the current one is not offered there.
    pub fn with_profile(&self, profile: Profile) -> Self {
        let industry = if profile.permits(&self.industry) {
            self.industry.clone()
        } else {
            profile.default_industry()
        };
        Self {
            profile,
            industry,
            role: self.role,
        }
    }

    /// Returns `None` when the industry is outside the current profile's catalog.
    pub fn with_industry(&self, industry: Industry) -> Option<Self> {
        if !self.profile.permits(&industry) {
            return None;
        }
        Some(Self {
            profile: self.profile,
            industry,
            role: self.role,
        })
    }

    pub fn with_role(&self, role: Role) -> Self {
        Self {
            profile: self.profile,
            industry: self.industry.clone(),
            role,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.profile.permits(&self.industry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_small_retail_champion() {
        let s = TargetingSelection::default();
        assert_eq!(s.profile, Profile::Small);
        assert_eq!(s.industry, Industry::Retail);
        assert_eq!(s.role, Role::Champion);
        assert!(s.is_consistent());
    }

    #[test]
    fn test_profile_switch_keeps_shared_industry() {
        let s = TargetingSelection::default()
            .with_industry(Industry::Healthcare)
            .unwrap();
        let switched = s.with_profile(Profile::Large);
        assert_eq!(switched.industry, Industry::Healthcare);
    }

    #[test]
    fn test_profile_switch_corrects_unavailable_industry() {
        let s = TargetingSelection::default()
            .with_industry(Industry::SalonSpa)
            .unwrap();
        let switched = s.with_profile(Profile::Medium);
        assert_eq!(switched.industry, Industry::Retail);
        assert!(switched.is_consistent());
    }

    #[test]
    fn test_industry_outside_catalog_is_refused() {
        let s = TargetingSelection::default();
        assert!(s.with_industry(Industry::Wholesale).is_none());
        assert!(s.with_industry(Industry::from("bakery")).is_none());
    }

    #[test]
    fn test_selection_wire_format() {
        let s = TargetingSelection::default().with_role(Role::DecisionMaker);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"profile": "small", "industry": "retail", "role": "decision_maker"})
        );
    }
}
