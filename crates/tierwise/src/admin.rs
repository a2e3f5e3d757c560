//! Admin workflow: passcode gate, validated saves and resets.
//!
//! A draft configuration only reaches the store after it passes
//! whole-config validation and has been normalized (both rule arrays sorted
//! by their minimum bound).

use thiserror::Error;
use tierwise_config::{get_current_config, ConfigError, ConfigSource, ConfigStore};
use tierwise_core::{
    normalize_for_persistence, validate_whole_config, PricingConfig, RuleViolation,
};
use tracing::{info, warn};

/// Environment variable holding the shared admin passcode.
pub const PASSCODE_ENV: &str = "ADMIN_PASSCODE";

/// Admin workflow error
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("ADMIN_PASSCODE is not configured.")]
    PasscodeNotConfigured,

    #[error("Incorrect passcode.")]
    IncorrectPasscode,

    #[error("{}", join_violations(.0))]
    Invalid(Vec<RuleViolation>),

    #[error(transparent)]
    Store(#[from] ConfigError),
}

fn join_violations(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks admin passcodes against a single shared secret.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    secret: Option<String>,
}

impl AdminGate {
    /// Creates a gate for `secret`. An empty secret counts as unconfigured.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            secret: (!secret.is_empty()).then_some(secret),
        }
    }

    /// Creates a gate from the [`PASSCODE_ENV`] environment variable.
    pub fn from_env() -> Self {
        std::env::var(PASSCODE_ENV)
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Returns whether a secret is configured.
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Verifies `passcode`, opening an admin session on success.
    ///
    /// # Example
    ///
    /// ```
    /// use tierwise::admin::{AdminError, AdminGate};
    ///
    /// let gate = AdminGate::new("s3cret");
    /// assert!(gate.verify("s3cret").is_ok());
    /// assert!(matches!(gate.verify("guess"), Err(AdminError::IncorrectPasscode)));
    /// ```
    pub fn verify(&self, passcode: &str) -> Result<AdminSession, AdminError> {
        let secret = self
            .secret
            .as_deref()
            .ok_or(AdminError::PasscodeNotConfigured)?;
        if passcode != secret {
            warn!(event = "admin_unlock_rejected");
            return Err(AdminError::IncorrectPasscode);
        }
        Ok(AdminSession { _unlocked: () })
    }
}

/// An unlocked admin session.
///
/// Only obtainable through [`AdminGate::verify`].
#[derive(Debug)]
pub struct AdminSession {
    _unlocked: (),
}

impl AdminSession {
    /// Returns the configuration to edit, or the defaults if retrieval fails.
    pub fn load(&self, source: &dyn ConfigSource) -> PricingConfig {
        get_current_config(source)
    }

    /// Validates, normalizes and persists `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Invalid`] with every violation when the draft
    /// fails validation; nothing is written in that case. Store failures are
    /// returned as [`AdminError::Store`].
    pub fn save_settings(
        &self,
        store: &dyn ConfigStore,
        draft: &PricingConfig,
    ) -> Result<PricingConfig, AdminError> {
        let violations = validate_whole_config(draft);
        if !violations.is_empty() {
            return Err(AdminError::Invalid(violations));
        }

        let normalized = normalize_for_persistence(draft);
        let saved = store.save(&normalized)?;
        info!(
            event = "settings_saved",
            renewal_rules = saved.renewal_rules.len(),
            list_price = saved.net_new_list_price,
        );
        Ok(saved)
    }

    /// Persists the default configuration.
    pub fn reset_to_defaults(&self, store: &dyn ConfigStore) -> Result<PricingConfig, AdminError> {
        let saved = store.save(&PricingConfig::default())?;
        info!(event = "defaults_restored");
        Ok(saved)
    }
}
