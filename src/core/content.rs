//! Static marketing content for the landing page

use crate::core::auth_flow::AuthMode;

pub const BRAND: &str = "GLZ";
pub const HEADLINE: &str = "Visualize your ideas in 3D — fast.";
pub const TAGLINE: &str = "Modern visuals, interactive components and lightning-fast performance. Built for designers and developers.";

pub const PRICING_HEADING: &str = "Simple pricing";
pub const PRICING_SUBCOPY: &str = "Pay monthly or yearly. Upgrade, downgrade, cancel anytime.";
pub const CONTACT_HEADING: &str = "Ready to get started?";
pub const CONTACT_SUBCOPY: &str = "Create an account and build the next big thing.";

/// Scroll targets reachable from the header navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Pricing,
    Contact,
}

impl Section {
    pub const NAV: [Section; 3] = [Section::Features, Section::Pricing, Section::Contact];

    /// DOM id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Realtime 3D",
        description: "Interactive 3D scenes rendered straight to the canvas from Rust and WebAssembly.",
    },
    Feature {
        title: "Design System",
        description: "Modular UI components, accessible and themeable.",
    },
    Feature {
        title: "Fast",
        description: "Server-rendered markup and a compact WASM bundle for a quick first paint.",
    },
];

/// What a pricing card's button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanAction {
    /// Opens the auth modal in the given mode
    OpenAuth(AuthMode),
    /// Scrolls to a section of the page
    ScrollTo(Section),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    /// Billing period suffix, empty for custom quotes
    pub period: &'static str,
    pub perks: &'static [&'static str],
    pub cta: &'static str,
    pub action: PlanAction,
    pub highlighted: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        price: "$9",
        period: "/mo",
        perks: &["3 projects", "Basic support"],
        cta: "Choose",
        action: PlanAction::OpenAuth(AuthMode::Register),
        highlighted: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$29",
        period: "/mo",
        perks: &["Unlimited projects", "Priority support"],
        cta: "Choose",
        action: PlanAction::OpenAuth(AuthMode::Register),
        highlighted: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        perks: &["SLAs & SSO", "Dedicated support"],
        cta: "Contact sales",
        action: PlanAction::ScrollTo(Section::Contact),
        highlighted: false,
    },
];

/// Footer line for the given calendar year
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND} — Built with WebGL & Rust")
}

/// Current local calendar year
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids() {
        assert_eq!(Section::Features.id(), "features");
        assert_eq!(Section::Pricing.id(), "pricing");
        assert_eq!(Section::Contact.id(), "contact");
    }

    #[test]
    fn test_section_copy() {
        assert_eq!(PRICING_HEADING, "Simple pricing");
        assert!(PRICING_SUBCOPY.starts_with("Pay monthly or yearly."));
        assert_eq!(CONTACT_HEADING, "Ready to get started?");
        assert_eq!(CONTACT_SUBCOPY, "Create an account and build the next big thing.");
    }

    #[test]
    fn test_section_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Section::NAV.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::NAV.len());
    }

    #[test]
    fn test_single_highlighted_plan() {
        let highlighted: Vec<_> = PRICING_PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Pro");
    }

    #[test]
    fn test_enterprise_scrolls_to_contact() {
        let enterprise = PRICING_PLANS
            .iter()
            .find(|p| p.name == "Enterprise")
            .unwrap();
        assert_eq!(enterprise.action, PlanAction::ScrollTo(Section::Contact));
        assert!(enterprise.period.is_empty());
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 GLZ — Built with WebGL & Rust");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
