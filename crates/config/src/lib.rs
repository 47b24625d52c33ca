//! Configuration loading and validation for AgreementKit consent flows.
//!
//! A consent flow can be described in TOML instead of code. The file is
//! chosen by the host; there are no environment overrides and no default
//! location.
//!
//! ```toml
//! secondary_decline = "propagate_cancel"
//!
//! [primary]
//! title = "Terms & Conditions"
//! style = "multipart"
//! navigation = "top"
//! requires_secondary_confirmation = true
//!
//! [[primary.sections]]
//! type = "link"
//! label = "A. Website"
//! target = "https://www.example.com/"
//!
//! [secondary]
//! title = "Are you sure you're sure?"
//! message = "Please confirm once more."
//! ```

use agreementkit_core::agreement::{DEFAULT_CANCEL_LABEL, DEFAULT_CONTINUE_LABEL};
use agreementkit_core::{Agreement, ConfigurationError, NavigationPosition, Section, Style};
use agreementkit_flow::{ConsentRequest, SecondaryDeclinePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure for one consent flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentConfig {
    /// Whether declining the confirmation also fires the cancel callback
    #[serde(default)]
    pub secondary_decline: SecondaryDeclinePolicy,

    /// The agreement shown first
    pub primary: AgreementConfig,

    /// The confirmation shown after the primary is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<AgreementConfig>,
}

/// Which surface an agreement is shown on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    #[default]
    Alert,
    Textbox,
    Multipart,
}

/// One agreement as written in TOML. Use `message` or `sections`, not both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementConfig {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub style: StyleKind,

    /// Ignored for alerts
    #[serde(default)]
    pub navigation: NavigationPosition,

    #[serde(default = "default_continue_label")]
    pub continue_label: String,

    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,

    #[serde(default)]
    pub requires_secondary_confirmation: bool,

    /// Explicit body. `Some(vec![])` is an agreement with no sections,
    /// `None` falls back to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

fn default_continue_label() -> String {
    DEFAULT_CONTINUE_LABEL.into()
}
fn default_cancel_label() -> String {
    DEFAULT_CANCEL_LABEL.into()
}

impl AgreementConfig {
    pub fn style(&self) -> Style {
        match self.style {
            StyleKind::Alert => Style::Alert,
            StyleKind::Textbox => Style::Textbox(self.navigation),
            StyleKind::Multipart => Style::Multipart(self.navigation),
        }
    }

    fn validate(&self, role: &str) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{role} agreement title cannot be empty"
            )));
        }

        if self.message.is_some() && self.sections.is_some() {
            return Err(ConfigError::ValidationError(format!(
                "{role} agreement sets both message and sections"
            )));
        }

        for section in self.sections.iter().flatten() {
            if let Section::Link { label, target: None } = section {
                tracing::warn!(role, label = %label, "Link section has no target; selecting it will fail");
            }
        }

        Ok(())
    }

    /// Validate and build the immutable agreement.
    pub fn to_agreement(&self) -> Result<Agreement, ConfigError> {
        self.validate("agreement")?;
        self.build()
    }

    fn build(&self) -> Result<Agreement, ConfigError> {
        let mut builder = Agreement::builder(self.title.clone())
            .style(self.style())
            .continue_label(self.continue_label.clone())
            .cancel_label(self.cancel_label.clone())
            .requires_secondary_confirmation(self.requires_secondary_confirmation);

        builder = match (&self.message, &self.sections) {
            (Some(message), _) => builder.message(message.clone()),
            (None, Some(sections)) => builder.sections(sections.clone()),
            (None, None) => builder,
        };

        Ok(builder.build()?)
    }
}

impl From<&Agreement> for AgreementConfig {
    fn from(agreement: &Agreement) -> Self {
        let (style, navigation) = match agreement.style() {
            Style::Alert => (StyleKind::Alert, NavigationPosition::default()),
            Style::Textbox(position) => (StyleKind::Textbox, position),
            Style::Multipart(position) => (StyleKind::Multipart, position),
        };
        let sections = match agreement.message() {
            Some(_) => None,
            None => Some(agreement.sections().to_vec()),
        };
        Self {
            title: agreement.title().to_string(),
            message: agreement.message().map(String::from),
            style,
            navigation,
            continue_label: agreement.continue_label().to_string(),
            cancel_label: agreement.cancel_label().to_string(),
            requires_secondary_confirmation: agreement.requires_secondary_confirmation(),
            sections,
        }
    }
}

impl ConsentConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::InvalidToml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), title = %config.primary.title, "Loaded consent configuration");
        Ok(config)
    }

    /// Describe an existing request as configuration.
    pub fn from_request(request: &ConsentRequest) -> Self {
        Self {
            secondary_decline: request.secondary_decline,
            primary: AgreementConfig::from(&request.primary),
            secondary: request.secondary.as_ref().map(AgreementConfig::from),
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.primary.validate("primary")?;
        if let Some(secondary) = &self.secondary {
            secondary.validate("secondary")?;
        }

        if self.primary.requires_secondary_confirmation && self.secondary.is_none() {
            return Err(ConfigError::ValidationError(
                "primary requires secondary confirmation but [secondary] is missing".into(),
            ));
        }

        Ok(())
    }

    /// Build the request a `ConsentFlow` runs from.
    pub fn into_request(self) -> Result<ConsentRequest, ConfigError> {
        self.validate()?;
        let mut request =
            ConsentRequest::new(self.primary.build()?).with_secondary_decline(self.secondary_decline);
        if let Some(secondary) = &self.secondary {
            request = request.with_secondary(secondary.build()?);
        }
        request.validate()?;
        Ok(request)
    }

    /// Pretty-printed TOML for this configuration.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Failed to parse consent configuration: {0}")]
    InvalidToml(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    #[error("Invalid agreement: {0}")]
    Agreement(#[from] ConfigurationError),
}
