//! Agreement data model — the immutable description of one consent prompt.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_CONTINUE_LABEL: &str = "Agree";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Where a full-page surface places its continue/cancel buttons.
///
/// - `Top`: in the navigation bar
/// - `Bottom`: in the toolbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPosition {
    Top,
    #[default]
    Bottom,
}

/// Controls which surface the agreement is presented on.
///
/// - `Alert`: simple alert, designed for 1-2 lines
/// - `Textbox`: a full page form with the body in a text view
/// - `Multipart`: a form with sections (text, links, calls to action)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "navigation", rename_all = "snake_case")]
pub enum Style {
    #[default]
    Alert,
    Textbox(NavigationPosition),
    Multipart(NavigationPosition),
}

impl Style {
    /// Button placement for this style. Alerts have no navigation, so `Bottom`.
    pub fn navigation_position(&self) -> NavigationPosition {
        match self {
            Style::Alert => NavigationPosition::Bottom,
            Style::Textbox(position) | Style::Multipart(position) => *position,
        }
    }
}

/// One content block of an agreement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Static text block.
    Text {
        headline: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    /// Opens a browser on the target.
    Link {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Url>,
    },
    /// Opens an email draft prefilled with the agreement.
    CallToAction { label: String },
}

/// How a section row is drawn in the multipart table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    /// Tinted, single line, disclosure indicator, selectable.
    Inline,
    /// Tinted, centered, single line, selectable.
    Centered,
    /// Plain multi-line text, not selectable.
    Text,
}

impl Section {
    pub fn text(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Section::Text {
            headline: headline.into(),
            body: Some(body.into()),
        }
    }

    pub fn link(label: impl Into<String>, target: Option<Url>) -> Self {
        Section::Link {
            label: label.into(),
            target,
        }
    }

    pub fn call_to_action(label: impl Into<String>) -> Self {
        Section::CallToAction {
            label: label.into(),
        }
    }

    /// Headline or label shown for this row.
    pub fn label(&self) -> &str {
        match self {
            Section::Text { headline, .. } => headline,
            Section::Link { label, .. } | Section::CallToAction { label } => label,
        }
    }

    pub fn row_style(&self) -> RowStyle {
        match self {
            Section::Text { .. } => RowStyle::Text,
            Section::Link { .. } => RowStyle::Inline,
            Section::CallToAction { .. } => RowStyle::Centered,
        }
    }

    /// Whether selecting the row triggers a side action.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Section::Text { .. })
    }
}

/// An immutable, fully specified consent prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agreement {
    title: String,
    message: Option<String>,
    sections: Vec<Section>,
    style: Style,
    continue_label: String,
    cancel_label: String,
    requires_secondary_confirmation: bool,
}

impl Agreement {
    /// An agreement whose body is a single message.
    pub fn with_message(
        title: impl Into<String>,
        message: impl Into<String>,
        style: Style,
    ) -> Result<Self, ConfigurationError> {
        Self::builder(title).message(message).style(style).build()
    }

    /// An agreement whose body is an ordered list of sections.
    pub fn with_sections(
        title: impl Into<String>,
        sections: Vec<Section>,
        style: Style,
    ) -> Result<Self, ConfigurationError> {
        Self::builder(title).sections(sections).style(style).build()
    }

    pub fn builder(title: impl Into<String>) -> AgreementBuilder {
        AgreementBuilder::new(title)
    }

    /// Same agreement with different button labels.
    pub fn with_labels(mut self, continue_label: impl Into<String>, cancel_label: impl Into<String>) -> Self {
        self.continue_label = continue_label.into();
        self.cancel_label = cancel_label.into();
        self
    }

    /// Same agreement, flagged (or not) as needing a second confirmation.
    pub fn requiring_secondary_confirmation(mut self, required: bool) -> Self {
        self.requires_secondary_confirmation = required;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The plain message, when built from one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Body content. A plain message shows up as one untitled text section.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn navigation_position(&self) -> NavigationPosition {
        self.style.navigation_position()
    }

    pub fn continue_label(&self) -> &str {
        &self.continue_label
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    pub fn requires_secondary_confirmation(&self) -> bool {
        self.requires_secondary_confirmation
    }
}

#[derive(Debug, Clone)]
enum Content {
    Message(Option<String>),
    Sections(Vec<Section>),
}

/// Builder for [`Agreement`]. Labels default to "Agree" / "Cancel".
#[derive(Debug, Clone)]
pub struct AgreementBuilder {
    title: String,
    content: Content,
    style: Style,
    continue_label: Option<String>,
    cancel_label: Option<String>,
    requires_secondary_confirmation: bool,
}

impl AgreementBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Content::Message(None),
            style: Style::default(),
            continue_label: None,
            cancel_label: None,
            requires_secondary_confirmation: false,
        }
    }

    /// Use a plain message as the body. Replaces any sections.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.content = Content::Message(Some(message.into()));
        self
    }

    /// Use explicit sections as the body. Replaces any message.
    pub fn sections(mut self, sections: Vec<Section>) -> Self {
        self.content = Content::Sections(sections);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn continue_label(mut self, label: impl Into<String>) -> Self {
        self.continue_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    pub fn requires_secondary_confirmation(mut self, required: bool) -> Self {
        self.requires_secondary_confirmation = required;
        self
    }

    pub fn build(self) -> Result<Agreement, ConfigurationError> {
        if self.title.trim().is_empty() {
            return Err(ConfigurationError::MissingTitle);
        }

        let (message, sections) = match self.content {
            Content::Message(message) => {
                let implicit = Section::Text {
                    headline: String::new(),
                    body: message.clone(),
                };
                (message, vec![implicit])
            }
            Content::Sections(sections) => (None, sections),
        };

        Ok(Agreement {
            title: self.title,
            message,
            sections,
            style: self.style,
            continue_label: self
                .continue_label
                .unwrap_or_else(|| DEFAULT_CONTINUE_LABEL.into()),
            cancel_label: self
                .cancel_label
                .unwrap_or_else(|| DEFAULT_CANCEL_LABEL.into()),
            requires_secondary_confirmation: self.requires_secondary_confirmation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::text("Section 1", "First"),
            Section::text("Section 2", "Second"),
            Section::text("Section 3", "Third"),
            Section::link("A. Website", Url::parse("https://example.com/").ok()),
        ]
    }

    #[test]
    fn message_becomes_single_text_section() {
        let a = Agreement::with_message("Terms", "Read me", Style::Alert).unwrap();
        assert_eq!(a.message(), Some("Read me"));
        assert_eq!(a.sections().len(), 1);
        assert!(matches!(
            &a.sections()[0],
            Section::Text { headline, body: Some(b) } if headline.is_empty() && b == "Read me"
        ));
    }

    #[test]
    fn default_labels() {
        let a = Agreement::with_message("Terms", "Read me", Style::Alert).unwrap();
        assert_eq!(a.continue_label(), "Agree");
        assert_eq!(a.cancel_label(), "Cancel");
        assert!(!a.requires_secondary_confirmation());
    }

    #[test]
    fn content_is_preserved_under_every_style() {
        let styles = [
            Style::Alert,
            Style::Textbox(NavigationPosition::Top),
            Style::Multipart(NavigationPosition::Bottom),
        ];
        for style in styles {
            let a = Agreement::with_sections("Terms", sample_sections(), style).unwrap();
            assert_eq!(a.sections(), sample_sections().as_slice());
            assert_eq!(a.style(), style);
            assert!(a.message().is_none());
        }
    }

    #[test]
    fn blank_title_rejected() {
        let err = Agreement::with_message("  ", "body", Style::Alert).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingTitle);
    }

    #[test]
    fn navigation_position_derives_from_style() {
        assert_eq!(Style::Alert.navigation_position(), NavigationPosition::Bottom);
        assert_eq!(
            Style::Textbox(NavigationPosition::Top).navigation_position(),
            NavigationPosition::Top
        );
        assert_eq!(
            Style::Multipart(NavigationPosition::Bottom).navigation_position(),
            NavigationPosition::Bottom
        );
    }

    #[test]
    fn builder_last_content_wins() {
        let a = Agreement::builder("Terms")
            .message("ignored")
            .sections(vec![Section::call_to_action("Send via Email")])
            .continue_label("I'm Sure")
            .cancel_label("Nope!")
            .requires_secondary_confirmation(true)
            .build()
            .unwrap();
        assert!(a.message().is_none());
        assert_eq!(a.sections().len(), 1);
        assert_eq!(a.continue_label(), "I'm Sure");
        assert_eq!(a.cancel_label(), "Nope!");
        assert!(a.requires_secondary_confirmation());
    }

    #[test]
    fn chained_modifiers_return_new_value() {
        let a = Agreement::with_message("Terms", "Read me", Style::Alert)
            .unwrap()
            .with_labels("Yes", "No")
            .requiring_secondary_confirmation(true);
        assert_eq!(a.continue_label(), "Yes");
        assert_eq!(a.cancel_label(), "No");
        assert!(a.requires_secondary_confirmation());
    }

    #[test]
    fn row_styles() {
        assert_eq!(Section::text("h", "b").row_style(), RowStyle::Text);
        assert_eq!(Section::link("l", None).row_style(), RowStyle::Inline);
        assert_eq!(Section::call_to_action("c").row_style(), RowStyle::Centered);
        assert!(!Section::text("h", "b").is_actionable());
        assert!(Section::call_to_action("c").is_actionable());
    }

    #[test]
    fn section_serialization_is_tagged() {
        let json = serde_json::to_string(&Section::call_to_action("Send via Email")).unwrap();
        assert!(json.contains("\"type\":\"call_to_action\""));
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label(), "Send via Email");
    }

    #[test]
    fn style_serialization() {
        let json = serde_json::to_string(&Style::Textbox(NavigationPosition::Top)).unwrap();
        assert_eq!(json, r#"{"kind":"textbox","navigation":"top"}"#);
        let alert: Style = serde_json::from_str(r#"{"kind":"alert"}"#).unwrap();
        assert_eq!(alert, Style::Alert);
    }
}
