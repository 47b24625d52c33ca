//! Outcome and state types for a single consent interaction.

use serde::{Deserialize, Serialize};

/// The terminal result of one consent flow.
///
/// Transient: it is returned to the caller and dispatched to subscribers,
/// then dropped. Nothing here is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentOutcome {
    /// Primary agreement accepted, no confirmation required.
    Accepted,
    /// Primary agreement declined.
    Declined,
    /// Primary accepted and the secondary confirmation accepted.
    AffirmativeAccepted,
    /// Primary accepted but the secondary confirmation declined.
    AffirmativeDeclined,
}

impl ConsentOutcome {
    /// Did the user end up consenting?
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted | Self::AffirmativeAccepted)
    }

    /// The stage on which the flow was resolved.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Accepted | Self::Declined => Stage::Primary,
            Self::AffirmativeAccepted | Self::AffirmativeDeclined => Stage::Secondary,
        }
    }
}

impl std::fmt::Display for ConsentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::AffirmativeAccepted => "affirmatively accepted",
            Self::AffirmativeDeclined => "affirmatively declined",
        };
        f.write_str(s)
    }
}

/// The single terminal action a surface reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserChoice {
    Continue,
    Cancel,
}

/// Which agreement of the flow a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Primary,
    Secondary,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// Where a consent flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome", rename_all = "snake_case")]
pub enum FlowState {
    Idle,
    PresentingPrimary,
    PresentingSecondary,
    Resolved(ConsentOutcome),
}

impl FlowState {
    /// The stage being shown, if a surface is up.
    pub fn presenting(&self) -> Option<Stage> {
        match self {
            Self::PresentingPrimary => Some(Stage::Primary),
            Self::PresentingSecondary => Some(Stage::Secondary),
            Self::Idle | Self::Resolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}
