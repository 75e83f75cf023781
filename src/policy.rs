//! Per-user feature policy.
//!
//! The Graphing calculator can be switched off for a user (e.g. on managed
//! school devices). Policy is read through [`PolicyProvider`] so the lookup can
//! come from the platform or, as in [`ConfigPolicy`], from the settings file.

use crate::config::PolicyConfig;

/// Policy area holding the Graphing switch.
pub const GRAPHING_POLICY_AREA: &str = "Education";

/// Policy name of the Graphing switch.
pub const GRAPHING_POLICY_NAME: &str = "AllowGraphingCalculator";

/// Source of boolean policies for a user.
pub trait PolicyProvider {
    /// Value of policy `area/name` for `user_id`.
    ///
    /// Returns `None` when the user cannot be resolved.
    fn policy_for_user(&self, user_id: &str, area: &str, name: &str) -> Option<bool>;
}

/// Policy taken from the `[policy]` section of the settings file.
///
/// Only users listed in `known_users` resolve; every resolved user gets the
/// configured Graphing value. Unknown policies read as allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPolicy {
    known_users: Vec<String>,
    allow_graphing_calculator: bool,
}

impl ConfigPolicy {
    /// Creates a policy from the settings section.
    #[must_use]
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            known_users: config.known_users.clone(),
            allow_graphing_calculator: config.allow_graphing_calculator,
        }
    }
}

impl PolicyProvider for ConfigPolicy {
    fn policy_for_user(&self, user_id: &str, area: &str, name: &str) -> Option<bool> {
        if !self.known_users.iter().any(|u| u == user_id) {
            return None;
        }

        if area == GRAPHING_POLICY_AREA && name == GRAPHING_POLICY_NAME {
            Some(self.allow_graphing_calculator)
        } else {
            Some(true)
        }
    }
}

/// Policy that resolves no user, leaving every feature at its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPolicy;

impl PolicyProvider for NoPolicy {
    fn policy_for_user(&self, _user_id: &str, _area: &str, _name: &str) -> Option<bool> {
        None
    }
}
