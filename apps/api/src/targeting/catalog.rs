//! Static customer-profile catalogs: business sizes, industries, and role personas.
//!
//! Every lookup here is an exhaustive `match` over closed enums, so a missing
//! profile × role combination is a compile error rather than a silent gap.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Business-size segment used to pick a customer persona.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Small,
    Medium,
    Large,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Small, Profile::Medium, Profile::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Small => "small",
            Profile::Medium => "medium",
            Profile::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::Small => "Small Business (10-25 employees)",
            Profile::Medium => "Medium Business (26-50 employees)",
            Profile::Large => "Large Business (51-100 employees)",
        }
    }

    /// Headcount band quoted to the generation prompt.
    pub fn employee_range(self) -> &'static str {
        match self {
            Profile::Small => "10-25",
            Profile::Medium => "26-50",
            Profile::Large => "51-100",
        }
    }

    /// Ordered list of industries this profile may target.
    pub fn industries(self) -> &'static [Industry] {
        match self {
            Profile::Small => SMALL_INDUSTRIES,
            Profile::Medium => MEDIUM_INDUSTRIES,
            Profile::Large => LARGE_INDUSTRIES,
        }
    }

    pub fn permits(self, industry: &Industry) -> bool {
        self.industries().contains(industry)
    }

    /// First industry of the catalog; used when a profile switch invalidates the current one.
    pub fn default_industry(self) -> Industry {
        self.industries()
            .first()
            .cloned()
            .unwrap_or(Industry::Retail)
    }
}

const SMALL_INDUSTRIES: &[Industry] = &[
    Industry::Retail,
    Industry::Restaurant,
    Industry::Construction,
    Industry::HomeServices,
    Industry::FinancialServices,
    Industry::SalonSpa,
    Industry::Healthcare,
    Industry::AutoRepair,
];

const MEDIUM_INDUSTRIES: &[Industry] = &[
    Industry::Retail,
    Industry::Restaurant,
    Industry::Construction,
    Industry::HomeServices,
    Industry::FinancialServices,
    Industry::Healthcare,
    Industry::Wholesale,
    Industry::Automotive,
    Industry::Franchisees,
];

const LARGE_INDUSTRIES: &[Industry] = &[
    Industry::Retail,
    Industry::Restaurant,
    Industry::Construction,
    Industry::HomeServices,
    Industry::FinancialServices,
    Industry::Healthcare,
    Industry::Wholesale,
    Industry::Automotive,
    Industry::FranchiseOwner,
];

// ────────────────────────────────────────────────────────────────────────────
// Role
// ────────────────────────────────────────────────────────────────────────────

/// The stakeholder persona being targeted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Champion,
    DecisionMaker,
    Influencer,
    User,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Champion,
        Role::DecisionMaker,
        Role::Influencer,
        Role::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Champion => "champion",
            Role::DecisionMaker => "decision_maker",
            Role::Influencer => "influencer",
            Role::User => "user",
        }
    }

    /// Short label shown in previews, independent of profile.
    pub fn short_label(self) -> &'static str {
        match self {
            Role::Champion => "Champion",
            Role::DecisionMaker => "Decision Maker",
            Role::Influencer => "Influencer",
            Role::User => "User",
        }
    }

    /// Role description handed to the text-generation prompt.
    pub fn prompt_description(self) -> &'static str {
        match self {
            Role::Champion => "Champion (Office Manager/HR Manager)",
            Role::DecisionMaker => "Decision Maker (Owner/CEO)",
            Role::Influencer => "Influencer (Bookkeeper/Insurance Broker)",
            Role::User => "User (Employee/Field Worker)",
        }
    }
}

/// Display label and illustrative persona for a profile × role pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub label: &'static str,
    pub name: &'static str,
}

pub fn persona(profile: Profile, role: Role) -> Persona {
    let (label, name) = match (profile, role) {
        (Profile::Small, Role::Champion) => ("Champion (Office Manager)", "Maggie Hall"),
        (Profile::Small, Role::DecisionMaker) => ("Decision Maker (Owner)", "George Hall"),
        (Profile::Small, Role::Influencer) => ("Influencer (Bookkeeper)", "Tyler James"),
        (Profile::Small, Role::User) => ("User (Employee)", "Ben Taylor"),
        (Profile::Medium, Role::Champion) => ("Champion (Office Manager)", "Tanya Boyd"),
        (Profile::Medium, Role::DecisionMaker) => ("Decision Maker (Owner/CEO)", "David Kim"),
        (Profile::Medium, Role::Influencer) => ("Influencer (Insurance Broker)", "Carmen Blake"),
        (Profile::Medium, Role::User) => ("User (Employee)", "Jada Wells"),
        (Profile::Large, Role::Champion) => ("Champion (HR Manager)", "Sara Jordan"),
        (Profile::Large, Role::DecisionMaker) => ("Decision Maker (Owner/CEO)", "Carlos Perez"),
        (Profile::Large, Role::Influencer) => ("Influencer (Insurance Broker)", "Dan Price"),
        (Profile::Large, Role::User) => ("User (Field Tech)", "Myles Grant"),
    };
    Persona { label, name }
}

// ────────────────────────────────────────────────────────────────────────────
// Industry
// ────────────────────────────────────────────────────────────────────────────

/// Target industry. Known industries are closed variants; anything else arriving
/// over the wire is carried as `Other` so the generation contract stays open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    Retail,
    Restaurant,
    Construction,
    HomeServices,
    FinancialServices,
    SalonSpa,
    Healthcare,
    AutoRepair,
    Wholesale,
    Automotive,
    Franchisees,
    FranchiseOwner,
    Other(String),
}

impl Industry {
    pub fn as_str(&self) -> &str {
        match self {
            Industry::Retail => "retail",
            Industry::Restaurant => "restaurant",
            Industry::Construction => "construction",
            Industry::HomeServices => "home_services",
            Industry::FinancialServices => "financial_services",
            Industry::SalonSpa => "salon_spa",
            Industry::Healthcare => "healthcare",
            Industry::AutoRepair => "auto_repair",
            Industry::Wholesale => "wholesale",
            Industry::Automotive => "automotive",
            Industry::Franchisees => "franchisees",
            Industry::FranchiseOwner => "franchise_owner",
            Industry::Other(raw) => raw,
        }
    }

    /// Human-readable name: underscores become spaces.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<String> for Industry {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "retail" => Industry::Retail,
            "restaurant" => Industry::Restaurant,
            "construction" => Industry::Construction,
            "home_services" => Industry::HomeServices,
            "financial_services" => Industry::FinancialServices,
            "salon_spa" => Industry::SalonSpa,
            "healthcare" => Industry::Healthcare,
            "auto_repair" => Industry::AutoRepair,
            "wholesale" => Industry::Wholesale,
            "automotive" => Industry::Automotive,
            "franchisees" => Industry::Franchisees,
            "franchise_owner" => Industry::FranchiseOwner,
            _ => Industry::Other(raw),
        }
    }
}

impl From<&str> for Industry {
    fn from(raw: &str) -> Self {
        Industry::from(raw.to_string())
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        match industry {
            Industry::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog view
// ────────────────────────────────────────────────────────────────────────────

/// Serializable snapshot of one profile's catalog, served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCatalog {
    pub profile: Profile,
    pub label: &'static str,
    pub industries: Vec<Industry>,
    pub roles: Vec<RoleCatalogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleCatalogEntry {
    pub role: Role,
    pub label: &'static str,
    pub persona: &'static str,
}

pub fn catalog() -> Vec<ProfileCatalog> {
    Profile::ALL
        .into_iter()
        .map(|profile| ProfileCatalog {
            profile,
            label: profile.label(),
            industries: profile.industries().to_vec(),
            roles: Role::ALL
                .into_iter()
                .map(|role| {
                    let p = persona(profile, role);
                    RoleCatalogEntry {
                        role,
                        label: p.label,
                        persona: p.name,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_starts_with_retail() {
        for profile in Profile::ALL {
            assert_eq!(profile.default_industry(), Industry::Retail);
        }
    }

    #[test]
    fn test_salon_spa_only_in_small_catalog() {
        assert!(Profile::Small.permits(&Industry::SalonSpa));
        assert!(!Profile::Medium.permits(&Industry::SalonSpa));
        assert!(!Profile::Large.permits(&Industry::SalonSpa));
    }

    #[test]
    fn test_franchise_variants_are_profile_specific() {
        assert!(Profile::Medium.permits(&Industry::Franchisees));
        assert!(!Profile::Large.permits(&Industry::Franchisees));
        assert!(Profile::Large.permits(&Industry::FranchiseOwner));
    }

    #[test]
    fn test_unknown_industry_is_never_permitted() {
        let unknown = Industry::from("space_mining");
        assert_eq!(unknown, Industry::Other("space_mining".to_string()));
        for profile in Profile::ALL {
            assert!(!profile.permits(&unknown));
        }
    }

    #[test]
    fn test_industry_serde_round_trips_through_plain_string() {
        let json = serde_json::to_string(&Industry::HomeServices).unwrap();
        assert_eq!(json, r#""home_services""#);
        let back: Industry = serde_json::from_str(r#""auto_repair""#).unwrap();
        assert_eq!(back, Industry::AutoRepair);
        let other: Industry = serde_json::from_str(r#""bakery""#).unwrap();
        assert_eq!(other.as_str(), "bakery");
    }

    #[test]
    fn test_display_name_replaces_underscores() {
        assert_eq!(Industry::FinancialServices.display_name(), "financial services");
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        let role: Role = serde_json::from_str(r#""decision_maker""#).unwrap();
        assert_eq!(role, Role::DecisionMaker);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_persona_lookup() {
        assert_eq!(persona(Profile::Medium, Role::Influencer).name, "Carmen Blake");
        assert_eq!(persona(Profile::Large, Role::User).label, "User (Field Tech)");
    }

    #[test]
    fn test_catalog_covers_all_profiles_and_roles() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|p| p.roles.len() == 4));
        assert_eq!(catalog[0].industries.len(), 8);
        assert_eq!(catalog[1].industries.len(), 9);
    }
}
