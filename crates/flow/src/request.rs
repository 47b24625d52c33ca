//! The explicit configuration value a consent flow runs from.

use agreementkit_core::{Agreement, ConfigurationError};
use serde::{Deserialize, Serialize};

/// What happens to the cancel callback when the user accepts the primary
/// agreement and then declines the secondary confirmation.
///
/// The delegate hook and the returned outcome are the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryDeclinePolicy {
    /// Fire `on_cancel`, exactly as a primary decline would.
    #[default]
    PropagateCancel,
    /// Fire nothing but the delegate hook.
    Silent,
}

/// The agreements for one consent interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRequest {
    pub primary: Agreement,
    pub secondary: Option<Agreement>,
    pub secondary_decline: SecondaryDeclinePolicy,
}

impl ConsentRequest {
    pub fn new(primary: Agreement) -> Self {
        Self {
            primary,
            secondary: None,
            secondary_decline: SecondaryDeclinePolicy::default(),
        }
    }

    pub fn with_secondary(mut self, secondary: Agreement) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_secondary_decline(mut self, policy: SecondaryDeclinePolicy) -> Self {
        self.secondary_decline = policy;
        self
    }

    /// True when accepting the primary leads to a second prompt.
    pub fn requires_secondary_confirmation(&self) -> bool {
        self.primary.requires_secondary_confirmation()
    }

    /// A primary agreement that demands confirmation must come with one.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.requires_secondary_confirmation() && self.secondary.is_none() {
            return Err(ConfigurationError::MissingSecondaryAgreement);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agreementkit_core::Style;

    fn primary(affirmative: bool) -> Agreement {
        Agreement::with_message("Terms", "Read me", Style::Alert)
            .unwrap()
            .requiring_secondary_confirmation(affirmative)
    }

    #[test]
    fn default_policy_propagates_cancel() {
        assert_eq!(SecondaryDeclinePolicy::default(), SecondaryDeclinePolicy::PropagateCancel);
        let req = ConsentRequest::new(primary(false));
        assert_eq!(req.secondary_decline, SecondaryDeclinePolicy::PropagateCancel);
    }

    #[test]
    fn missing_secondary_rejected() {
        let req = ConsentRequest::new(primary(true));
        assert_eq!(req.validate(), Err(ConfigurationError::MissingSecondaryAgreement));
    }

    #[test]
    fn unused_secondary_is_allowed() {
        let secondary = Agreement::with_message("Sure?", "Really", Style::Alert).unwrap();
        let req = ConsentRequest::new(primary(false)).with_secondary(secondary);
        assert!(req.validate().is_ok());
        assert!(!req.requires_secondary_confirmation());
    }

    #[test]
    fn policy_serialization() {
        let json = serde_json::to_string(&SecondaryDeclinePolicy::Silent).unwrap();
        assert_eq!(json, "\"silent\"");
    }
}
