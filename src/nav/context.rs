//! Explicit navigation state owned by the application shell.

use crate::policy::{PolicyProvider, GRAPHING_POLICY_AREA, GRAPHING_POLICY_NAME};
use tracing::debug;

/// Current user and the Graphing enablement derived from policy.
///
/// Nothing is evaluated lazily: the shell sets the user, calls
/// [`NavContext::evaluate_policy`] once, and passes the context to queries that
/// depend on it. A fresh context has no user and reports Graphing enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavContext {
    current_user: Option<String>,
    graphing_enabled: bool,
}

impl NavContext {
    /// Creates a context with no user and Graphing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_user: None,
            graphing_enabled: true,
        }
    }

    /// Creates a context for `user_id` and evaluates the Graphing policy for it.
    #[must_use]
    pub fn for_user(user_id: Option<&str>, policy: &dyn PolicyProvider) -> Self {
        let mut context = Self::new();
        if let Some(id) = user_id {
            context.set_current_user(id);
        }
        context.evaluate_policy(policy);
        context
    }

    /// Sets the user whose policy applies. Takes effect on the next
    /// [`NavContext::evaluate_policy`].
    pub fn set_current_user(&mut self, user_id: impl Into<String>) {
        self.current_user = Some(user_id.into());
    }

    /// The user set with [`NavContext::set_current_user`].
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Looks up the Graphing policy for the current user and stores the result.
    ///
    /// With no user, or a user the provider cannot resolve, Graphing is enabled.
    pub fn evaluate_policy(&mut self, policy: &dyn PolicyProvider) -> bool {
        self.graphing_enabled = self
            .current_user
            .as_deref()
            .and_then(|user| {
                policy.policy_for_user(user, GRAPHING_POLICY_AREA, GRAPHING_POLICY_NAME)
            })
            .unwrap_or(true);

        debug!(
            "Graphing policy for user {:?}: {}",
            self.current_user, self.graphing_enabled
        );
        self.graphing_enabled
    }

    /// Overrides the stored Graphing flag.
    pub fn set_graphing_enabled(&mut self, enabled: bool) {
        self.graphing_enabled = enabled;
    }

    /// Whether the Graphing mode may be selected.
    #[must_use]
    pub fn is_graphing_enabled(&self) -> bool {
        self.graphing_enabled
    }

    /// Drops the user and restores the default (enabled) state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}
