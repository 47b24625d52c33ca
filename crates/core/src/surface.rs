//! Surface descriptions — what a presenter is asked to render.
//!
//! A [`Surface`] is a passive, owned snapshot of one agreement stage. The
//! presenter draws it, handles row selection locally through
//! [`Surface::activate`], and reports exactly one [`UserChoice`](crate::outcome::UserChoice).

use crate::agreement::{Agreement, NavigationPosition, Section, Style};
use crate::error::ConfigurationError;
use crate::outcome::Stage;
use serde::{Deserialize, Serialize};
use url::Url;

/// Which kind of view renders the agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Alert,
    Textbox,
    Multipart,
}

impl From<Style> for SurfaceKind {
    fn from(style: Style) -> Self {
        match style {
            Style::Alert => SurfaceKind::Alert,
            Style::Textbox(_) => SurfaceKind::Textbox,
            Style::Multipart(_) => SurfaceKind::Multipart,
        }
    }
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceKind::Alert => f.write_str("alert"),
            SurfaceKind::Textbox => f.write_str("textbox"),
            SurfaceKind::Multipart => f.write_str("multipart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    Continue,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarItem {
    Button(ButtonRole),
    FlexibleSpace,
}

/// Where the continue and cancel buttons go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum ButtonLayout {
    /// Alert actions in display order; the first is the default action.
    AlertActions { actions: Vec<ButtonRole> },
    NavigationBar { leading: ButtonRole, trailing: ButtonRole },
    Toolbar { items: Vec<ToolbarItem> },
}

impl ButtonLayout {
    pub fn for_style(style: Style) -> Self {
        match (style, style.navigation_position()) {
            (Style::Alert, _) => ButtonLayout::AlertActions {
                actions: vec![ButtonRole::Continue, ButtonRole::Cancel],
            },
            (_, NavigationPosition::Top) => ButtonLayout::NavigationBar {
                leading: ButtonRole::Cancel,
                trailing: ButtonRole::Continue,
            },
            (_, NavigationPosition::Bottom) => ButtonLayout::Toolbar {
                items: vec![
                    ToolbarItem::Button(ButtonRole::Cancel),
                    ToolbarItem::FlexibleSpace,
                    ToolbarItem::Button(ButtonRole::Continue),
                ],
            },
        }
    }
}

/// An email draft opened by a call-to-action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Display-only action produced by selecting a multipart row.
/// Handled by the presenter; never advances the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SideAction {
    OpenUrl { url: Url },
    ComposeEmail { draft: MailDraft },
}

/// Render request for one agreement stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub stage: Stage,
    pub kind: SurfaceKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub sections: Vec<Section>,
    pub continue_label: String,
    pub cancel_label: String,
    pub navigation: NavigationPosition,
    pub buttons: ButtonLayout,
}

impl Surface {
    pub fn for_agreement(agreement: &Agreement, stage: Stage) -> Self {
        Self {
            stage,
            kind: agreement.style().into(),
            title: agreement.title().to_string(),
            message: agreement.message().map(String::from),
            sections: agreement.sections().to_vec(),
            continue_label: agreement.continue_label().to_string(),
            cancel_label: agreement.cancel_label().to_string(),
            navigation: agreement.navigation_position(),
            buttons: ButtonLayout::for_style(agreement.style()),
        }
    }

    pub fn label_for(&self, role: ButtonRole) -> &str {
        match role {
            ButtonRole::Continue => &self.continue_label,
            ButtonRole::Cancel => &self.cancel_label,
        }
    }

    /// Resolve the side action for selecting the row at `index`.
    ///
    /// Text rows yield `None`. A link without a target is a configuration
    /// error and is surfaced immediately.
    pub fn activate(&self, index: usize) -> Result<Option<SideAction>, ConfigurationError> {
        let section = self
            .sections
            .get(index)
            .ok_or(ConfigurationError::UnknownSection {
                index,
                count: self.sections.len(),
            })?;

        match section {
            Section::Text { .. } => Ok(None),
            Section::Link { label, target } => match target {
                Some(url) => Ok(Some(SideAction::OpenUrl { url: url.clone() })),
                None => Err(ConfigurationError::LinkWithoutTarget {
                    label: label.clone(),
                }),
            },
            Section::CallToAction { .. } => Ok(Some(SideAction::ComposeEmail {
                draft: MailDraft {
                    subject: self.title.clone(),
                    body: self.message.clone(),
                },
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multipart() -> Agreement {
        Agreement::with_sections(
            "Terms & Conditions",
            vec![
                Section::text("Section 1", "Lorem ipsum"),
                Section::link("A. Website", Url::parse("https://www.example.com/").ok()),
                Section::link("B. Broken", None),
                Section::call_to_action("Send via Email"),
            ],
            Style::Multipart(NavigationPosition::Top),
        )
        .unwrap()
    }

    #[test]
    fn alert_surface_layout() {
        let a = Agreement::with_message("Terms", "Read me", Style::Alert).unwrap();
        let s = Surface::for_agreement(&a, Stage::Primary);
        assert_eq!(s.kind, SurfaceKind::Alert);
        assert_eq!(s.navigation, NavigationPosition::Bottom);
        assert_eq!(
            s.buttons,
            ButtonLayout::AlertActions {
                actions: vec![ButtonRole::Continue, ButtonRole::Cancel]
            }
        );
        assert_eq!(s.label_for(ButtonRole::Continue), "Agree");
    }

    #[test]
    fn top_navigation_uses_navigation_bar() {
        let s = Surface::for_agreement(&multipart(), Stage::Primary);
        assert_eq!(
            s.buttons,
            ButtonLayout::NavigationBar {
                leading: ButtonRole::Cancel,
                trailing: ButtonRole::Continue
            }
        );
    }

    #[test]
    fn bottom_navigation_uses_toolbar() {
        let a = Agreement::with_message("Terms", "Long text", Style::Textbox(NavigationPosition::Bottom))
            .unwrap();
        let s = Surface::for_agreement(&a, Stage::Secondary);
        assert_eq!(s.stage, Stage::Secondary);
        match s.buttons {
            ButtonLayout::Toolbar { items } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[1], ToolbarItem::FlexibleSpace);
            }
            other => panic!("Expected toolbar, got {other:?}"),
        }
    }

    #[test]
    fn activating_text_does_nothing() {
        let s = Surface::for_agreement(&multipart(), Stage::Primary);
        assert_eq!(s.activate(0).unwrap(), None);
    }

    #[test]
    fn activating_link_opens_url() {
        let s = Surface::for_agreement(&multipart(), Stage::Primary);
        match s.activate(1).unwrap() {
            Some(SideAction::OpenUrl { url }) => assert_eq!(url.as_str(), "https://www.example.com/"),
            other => panic!("Expected OpenUrl, got {other:?}"),
        }
    }

    #[test]
    fn link_without_target_fails_fast() {
        let s = Surface::for_agreement(&multipart(), Stage::Primary);
        let err = s.activate(2).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::LinkWithoutTarget {
                label: "B. Broken".into()
            }
        );
    }

    #[test]
    fn call_to_action_composes_email() {
        let a = Agreement::with_message("Terms", "Body text", Style::Multipart(NavigationPosition::Bottom))
            .unwrap();
        let mut s = Surface::for_agreement(&a, Stage::Primary);
        s.sections.push(Section::call_to_action("Send via Email"));
        match s.activate(1).unwrap() {
            Some(SideAction::ComposeEmail { draft }) => {
                assert_eq!(draft.subject, "Terms");
                assert_eq!(draft.body.as_deref(), Some("Body text"));
            }
            other => panic!("Expected ComposeEmail, got {other:?}"),
        }
    }

    #[test]
    fn unknown_section_index() {
        let s = Surface::for_agreement(&multipart(), Stage::Primary);
        assert_eq!(
            s.activate(9).unwrap_err(),
            ConfigurationError::UnknownSection { index: 9, count: 4 }
        );
    }
}
