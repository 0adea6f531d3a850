//! Subscription Plan Value Object
//!
//! The fixed plan catalog offered on the sign-up page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Codes accepted by the sign-up form's plan selector.
/// Must stay in sync with [`Plan`].
pub const PLAN_CODES: &[&str] = &["free", "basic", "pro", "enterprise"];

/// Subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Basic,
    Pro,
    Enterprise,
}

/// Error returned for a plan code outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown plan: {0}")]
pub struct UnknownPlan(pub String);

impl Plan {
    /// Wire code of the plan
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Plan::*;
        match self {
            Free => "free",
            Basic => "basic",
            Pro => "pro",
            Enterprise => "enterprise",
        }
    }

    /// Marketing caption shown by the plan selector
    #[inline]
    pub const fn label(&self) -> &'static str {
        use Plan::*;
        match self {
            Free => "Free",
            Basic => "Basic - $29/mo",
            Pro => "Pro - $99/mo",
            Enterprise => "Enterprise - Custom",
        }
    }
}

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        use Plan::*;
        match code {
            "free" => Ok(Free),
            "basic" => Ok(Basic),
            "pro" => Ok(Pro),
            "enterprise" => Ok(Enterprise),
            _ => Err(UnknownPlan(code.to_string())),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_str() {
        assert_eq!("free".parse(), Ok(Plan::Free));
        assert_eq!("basic".parse(), Ok(Plan::Basic));
        assert_eq!("pro".parse(), Ok(Plan::Pro));
        assert_eq!("enterprise".parse(), Ok(Plan::Enterprise));
    }

    #[test]
    fn test_plan_from_str_unknown() {
        let err = "platinum".parse::<Plan>().unwrap_err();
        assert_eq!(err, UnknownPlan("platinum".to_string()));
        // codes are case sensitive, like the select control's values
        assert!("Free".parse::<Plan>().is_err());
    }

    #[test]
    fn test_plan_display() {
        assert_eq!(Plan::Free.to_string(), "free");
        assert_eq!(Plan::Enterprise.to_string(), "enterprise");
    }

    #[test]
    fn test_plan_labels() {
        assert_eq!(Plan::Free.label(), "Free");
        assert_eq!(Plan::Basic.label(), "Basic - $29/mo");
        assert_eq!(Plan::Pro.label(), "Pro - $99/mo");
        assert_eq!(Plan::Enterprise.label(), "Enterprise - Custom");
    }

    #[test]
    fn test_plan_codes_catalog_in_sync() {
        for code in PLAN_CODES {
            let plan: Plan = code.parse().unwrap();
            assert_eq!(&plan.code(), code);
        }
    }

    #[test]
    fn test_plan_serde() {
        assert_eq!(serde_json::to_string(&Plan::Pro).unwrap(), "\"pro\"");
        let plan: Plan = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(plan, Plan::Enterprise);
    }
}
