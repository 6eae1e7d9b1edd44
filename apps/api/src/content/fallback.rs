//! Canned marketing copy, used whenever the generation service cannot answer.
//!
//! Content is composed from a profile × role base template and an optional
//! industry modifier. Pure and deterministic: the same triple always yields the
//! same `GeneratedContent`.

use crate::models::content::GeneratedContent;
use crate::targeting::{Industry, Profile, Role, TargetingSelection};

/// Base copy for one profile × role pair.
#[derive(Debug)]
pub struct CannedTemplate {
    pub headlines: [&'static str; 3],
    /// Three or four entries; only the first three are used.
    pub pain_points: &'static [&'static str],
    pub benefits: [&'static str; 3],
    pub ctas: [&'static str; 3],
}

/// Industry-specific tweak: a headline suffix and one extra pain point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryModifier {
    pub suffix: &'static str,
    pub pain_point: &'static str,
}

pub fn industry_modifier(industry: &Industry) -> Option<IndustryModifier> {
    let (suffix, pain_point) = match industry {
        Industry::Retail => (" for retail teams", "Manage seasonal staffing changes"),
        Industry::Restaurant => (
            " for restaurant teams",
            "Handle tip reporting and split shifts",
        ),
        Industry::Construction => (
            " for construction crews",
            "Track time across multiple job sites",
        ),
        Industry::Healthcare => (
            " for healthcare facilities",
            "Manage complex shift schedules",
        ),
        Industry::HomeServices
        | Industry::FinancialServices
        | Industry::SalonSpa
        | Industry::AutoRepair
        | Industry::Wholesale
        | Industry::Automotive
        | Industry::Franchisees
        | Industry::FranchiseOwner
        | Industry::Other(_) => return None,
    };
    Some(IndustryModifier { suffix, pain_point })
}

/// Builds fallback content for a targeting triple.
pub fn resolve_fallback(selection: &TargetingSelection) -> GeneratedContent {
    let base = canned_template(selection.profile, selection.role);
    let modifier = industry_modifier(&selection.industry);
    let suffix = modifier.map(|m| m.suffix).unwrap_or_default();

    let headlines = base
        .headlines
        .iter()
        .map(|h| format!("{h}{suffix}"))
        .collect();

    let pain_points = base
        .pain_points
        .iter()
        .take(3)
        .copied()
        .chain(modifier.map(|m| m.pain_point))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    GeneratedContent {
        headlines,
        pain_points,
        benefits: base.benefits.iter().map(|b| b.to_string()).collect(),
        ctas: base.ctas.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn canned_template(profile: Profile, role: Role) -> &'static CannedTemplate {
    match (profile, role) {
        (Profile::Small, Role::Champion) => &SMALL_CHAMPION,
        (Profile::Small, Role::DecisionMaker) => &SMALL_DECISION_MAKER,
        (Profile::Small, Role::Influencer) => &SMALL_INFLUENCER,
        (Profile::Small, Role::User) => &SMALL_USER,
        (Profile::Medium, Role::Champion) => &MEDIUM_CHAMPION,
        (Profile::Medium, Role::DecisionMaker) => &MEDIUM_DECISION_MAKER,
        (Profile::Medium, Role::Influencer) => &MEDIUM_INFLUENCER,
        (Profile::Medium, Role::User) => &MEDIUM_USER,
        (Profile::Large, Role::Champion) => &LARGE_CHAMPION,
        (Profile::Large, Role::DecisionMaker) => &LARGE_DECISION_MAKER,
        (Profile::Large, Role::Influencer) => &LARGE_INFLUENCER,
        (Profile::Large, Role::User) => &LARGE_USER,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Small business
// ────────────────────────────────────────────────────────────────────────────

static SMALL_CHAMPION: CannedTemplate = CannedTemplate {
    headlines: [
        "Get your time back with automated payroll",
        "Stop managing schedules with spreadsheets",
        "Simple HR tools that actually work",
    ],
    pain_points: &[
        "End manual timesheet calculations forever",
        "Stop chasing down missing punch cards",
        "Eliminate payroll errors and corrections",
        "Manage seasonal staffing changes",
    ],
    benefits: [
        "Set up new employees in under 5 minutes",
        "Automated tax filing and compliance",
        "24/7 support from real HR experts",
    ],
    ctas: ["Start Free Trial", "Get Demo Today", "See How Easy It Is"],
};

static SMALL_DECISION_MAKER: CannedTemplate = CannedTemplate {
    headlines: [
        "Protect your business from costly mistakes",
        "Scale without losing control of costs",
        "Built for the next generation of business",
    ],
    pain_points: &[
        "Avoid expensive compliance penalties",
        "Stop worrying about tax deadlines",
        "Reduce dependency on key employees",
    ],
    benefits: [
        "Guaranteed tax compliance protection",
        "Real-time labor cost visibility",
        "Local support when you need it",
    ],
    ctas: ["Protect My Business", "Schedule Consultation", "Calculate ROI"],
};

static SMALL_INFLUENCER: CannedTemplate = CannedTemplate {
    headlines: [
        "Finally, payroll that syncs with QuickBooks",
        "Clean books without the cleanup",
        "Accounting-friendly HR platform",
    ],
    pain_points: &[
        "Stop fixing manual entry errors",
        "Get detailed audit trails instantly",
        "Eliminate double data entry",
    ],
    benefits: [
        "Perfect QuickBooks integration",
        "Detailed transaction history",
        "One-click report generation",
    ],
    ctas: [
        "See Integration Demo",
        "Try Free for 30 Days",
        "View Sample Reports",
    ],
};

static SMALL_USER: CannedTemplate = CannedTemplate {
    headlines: [
        "Clock in from anywhere with your phone",
        "Check your pay stub instantly",
        "Request time off in seconds",
    ],
    pain_points: &[
        "No more forgotten paper timesheets",
        "Stop waiting for pay stub printouts",
        "End email chains for simple requests",
    ],
    benefits: [
        "Mobile app works offline",
        "Instant notifications for approvals",
        "Simple, intuitive design",
    ],
    ctas: ["Download App", "Get Mobile Access", "Try It Now"],
};

// ────────────────────────────────────────────────────────────────────────────
// Medium business
// ────────────────────────────────────────────────────────────────────────────

static MEDIUM_CHAMPION: CannedTemplate = CannedTemplate {
    headlines: [
        "Standardize HR across all locations",
        "If it requires manual work, it's broken",
        "Multi-location made simple",
    ],
    pain_points: &[
        "End inconsistent processes across sites",
        "Stop being the bottleneck for approvals",
        "Eliminate location-specific workarounds",
    ],
    benefits: [
        "Unified dashboard for all locations",
        "Role-based access controls",
        "Automated workflow routing",
    ],
    ctas: [
        "See Multi-Location Demo",
        "Schedule Implementation",
        "Get Started Today",
    ],
};

static MEDIUM_DECISION_MAKER: CannedTemplate = CannedTemplate {
    headlines: [
        "Scale with confidence and control",
        "Visibility without micromanagement",
        "Infrastructure that grows with you",
    ],
    pain_points: &[
        "Stop getting pulled into HR issues",
        "Reduce operational complexity",
        "Maintain standards across growth",
    ],
    benefits: [
        "Executive dashboard insights",
        "Automated compliance monitoring",
        "Scalable architecture built for growth",
    ],
    ctas: [
        "See Executive Demo",
        "Calculate Growth ROI",
        "Schedule Strategy Call",
    ],
};

static MEDIUM_INFLUENCER: CannedTemplate = CannedTemplate {
    headlines: [
        "Benefits administration that actually works",
        "Real-time deduction tracking",
        "Broker-friendly platform design",
    ],
    pain_points: &[
        "Eliminate benefits enrollment errors",
        "Stop manual deduction calculations",
        "End compliance reporting headaches",
    ],
    benefits: [
        "Automated benefits sync",
        "Real-time eligibility tracking",
        "Broker portal access",
    ],
    ctas: ["Partner With Us", "See Broker Tools", "Schedule Integration"],
};

static MEDIUM_USER: CannedTemplate = CannedTemplate {
    headlines: [
        "Everything HR in one mobile app",
        "Self-service that actually serves",
        "Modern tools for modern workers",
    ],
    pain_points: &[
        "Stop calling HR for simple requests",
        "End confusion about benefits",
        "Get instant access to your info",
    ],
    benefits: [
        "Complete self-service capabilities",
        "Push notifications for updates",
        "Offline access when needed",
    ],
    ctas: [
        "Download Mobile App",
        "Get Self-Service Access",
        "Try All Features",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Large business
// ────────────────────────────────────────────────────────────────────────────

static LARGE_CHAMPION: CannedTemplate = CannedTemplate {
    headlines: [
        "Enterprise HR without enterprise complexity",
        "If managers can't use it, it doesn't work",
        "Scalable systems for growing teams",
    ],
    pain_points: &[
        "Unify processes across departments",
        "Reduce administrative overhead",
        "Maintain compliance at scale",
    ],
    benefits: [
        "Department-level reporting and controls",
        "Automated onboarding workflows",
        "Advanced analytics and insights",
    ],
    ctas: [
        "Schedule Enterprise Demo",
        "See Compliance Features",
        "Talk to HR Specialist",
    ],
};

static LARGE_DECISION_MAKER: CannedTemplate = CannedTemplate {
    headlines: [
        "Infrastructure that protects growth",
        "Systems that work without you",
        "Scale with complete confidence",
    ],
    pain_points: &[
        "Reduce operational risk exposure",
        "Get visibility across all operations",
        "Maintain control during rapid growth",
    ],
    benefits: [
        "Real-time executive dashboards",
        "Automated risk monitoring",
        "Audit-ready documentation",
    ],
    ctas: [
        "See Enterprise ROI",
        "Schedule Executive Brief",
        "Get Risk Assessment",
    ],
};

static LARGE_INFLUENCER: CannedTemplate = CannedTemplate {
    headlines: [
        "Compliance monitoring that prevents problems",
        "Benefits platform built for scale",
        "Keep large teams compliant automatically",
    ],
    pain_points: &[
        "Prevent compliance violations before they happen",
        "Manage complex benefits eligibility",
        "Reduce audit preparation time",
    ],
    benefits: [
        "Automated compliance alerts",
        "Advanced benefits modeling",
        "Complete audit trail management",
    ],
    ctas: [
        "See Compliance Dashboard",
        "Schedule Benefits Review",
        "Get Audit Preparation",
    ],
};

static LARGE_USER: CannedTemplate = CannedTemplate {
    headlines: [
        "Mobile-first for distributed teams",
        "Field-ready HR tools",
        "Everything works from anywhere",
    ],
    pain_points: &[
        "Clock in from any job site",
        "Access info without WiFi",
        "Get approvals without delays",
    ],
    benefits: [
        "GPS-enabled time tracking",
        "Offline mode for remote work",
        "Real-time sync when connected",
    ],
    ctas: [
        "Download Field App",
        "Get Mobile Setup",
        "Try Offline Features",
    ],
};
