//! Consent flow state machine.
//!
//! ```text
//!            start                Continue (no confirmation)
//!   Idle ──────────▶ Primary ─────────────────────────────▶ Resolved(Accepted)
//!                      │  │ Cancel
//!                      │  └───────────────────────────────▶ Resolved(Declined)
//!                      │ Continue (confirmation required)
//!                      ▼
//!                   Secondary ── Continue ────────────────▶ Resolved(AffirmativeAccepted)
//!                      └──────── Cancel ──────────────────▶ Resolved(AffirmativeDeclined)
//! ```
//!
//! The machine is synchronous: each user event is one call to
//! [`ConsentFlow::respond`]. The async driver in [`crate::driver`] wires it
//! to a [`Presenter`](agreementkit_core::Presenter).

use crate::request::ConsentRequest;
use agreementkit_core::{
    ConfigurationError, ConsentError, ConsentEvent, ConsentOutcome, EventBus, FlowState,
    Result, SideAction, Stage, Surface, UserChoice,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show this surface and report the user's choice.
    Present(Surface),
    /// The flow is over.
    Resolved(ConsentOutcome),
}

/// Runs exactly one consent interaction to a single terminal outcome.
///
/// Not reentrant: `start` is accepted once, and once resolved every
/// further input is rejected without side effects.
pub struct ConsentFlow {
    id: Uuid,
    request: ConsentRequest,
    state: FlowState,
    current: Option<Surface>,
    events: Option<Arc<EventBus>>,
}

impl ConsentFlow {
    /// Create a flow in `Idle`. Misconfiguration fails here, before any UI.
    pub fn new(request: ConsentRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            request,
            state: FlowState::Idle,
            current: None,
            events: None,
        })
    }

    /// Publish state changes to an event bus.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn request(&self) -> &ConsentRequest {
        &self.request
    }

    /// The surface currently shown, if any.
    pub fn current_surface(&self) -> Option<&Surface> {
        self.current.as_ref()
    }

    /// `Idle → PresentingPrimary`. Returns the primary surface to show.
    pub fn start(&mut self) -> Result<Surface> {
        if self.state != FlowState::Idle {
            warn!(flow_id = %self.id, state = ?self.state, "Rejected start on a running flow");
            return Err(ConsentError::AlreadyStarted);
        }

        info!(
            flow_id = %self.id,
            title = %self.request.primary.title(),
            affirmative = self.request.requires_secondary_confirmation(),
            "Consent flow started"
        );
        self.publish(ConsentEvent::FlowStarted {
            flow_id: self.id,
            title: self.request.primary.title().to_string(),
            affirmative: self.request.requires_secondary_confirmation(),
        });

        let surface = Surface::for_agreement(&self.request.primary, Stage::Primary);
        Ok(self.show(FlowState::PresentingPrimary, surface))
    }

    /// Feed the user's choice on the current surface into the machine.
    pub fn respond(&mut self, choice: UserChoice) -> Result<Step> {
        match (self.state, choice) {
            (FlowState::Idle, _) => Err(ConsentError::NotStarted),
            (FlowState::Resolved(outcome), _) => {
                warn!(flow_id = %self.id, %outcome, ?choice, "Ignoring input on a resolved flow");
                Err(ConsentError::AlreadyResolved(outcome))
            }
            (FlowState::PresentingPrimary, UserChoice::Cancel) => {
                Ok(self.resolve(ConsentOutcome::Declined))
            }
            (FlowState::PresentingPrimary, UserChoice::Continue) => {
                if !self.request.requires_secondary_confirmation() {
                    return Ok(self.resolve(ConsentOutcome::Accepted));
                }
                // `new` rejects requests that need a secondary but lack one.
                let secondary = self
                    .request
                    .secondary
                    .as_ref()
                    .ok_or(ConfigurationError::MissingSecondaryAgreement)?;
                let surface = Surface::for_agreement(secondary, Stage::Secondary);
                Ok(Step::Present(self.show(FlowState::PresentingSecondary, surface)))
            }
            (FlowState::PresentingSecondary, UserChoice::Continue) => {
                Ok(self.resolve(ConsentOutcome::AffirmativeAccepted))
            }
            (FlowState::PresentingSecondary, UserChoice::Cancel) => {
                Ok(self.resolve(ConsentOutcome::AffirmativeDeclined))
            }
        }
    }

    /// Resolve the side action for a row on the current surface.
    ///
    /// Display-only: the state never changes.
    pub fn activate_section(&self, index: usize) -> Result<Option<SideAction>> {
        let (stage, surface) = match (self.state.presenting(), self.current.as_ref()) {
            (Some(stage), Some(surface)) => (stage, surface),
            _ => return Err(ConsentError::NotPresenting),
        };

        let action = surface.activate(index)?;
        if let Some(action) = &action {
            debug!(flow_id = %self.id, %stage, index, ?action, "Side action requested");
            self.publish(ConsentEvent::SideActionRequested {
                flow_id: self.id,
                stage,
                action: action.clone(),
            });
        }
        Ok(action)
    }

    // ── Internal ───────────────────────────────────────────────────

    fn show(&mut self, state: FlowState, surface: Surface) -> Surface {
        self.state = state;
        debug!(flow_id = %self.id, stage = %surface.stage, surface = %surface.kind, "Presenting surface");
        self.publish(ConsentEvent::SurfacePresented {
            flow_id: self.id,
            stage: surface.stage,
            kind: surface.kind,
        });
        self.current = Some(surface.clone());
        surface
    }

    fn resolve(&mut self, outcome: ConsentOutcome) -> Step {
        self.state = FlowState::Resolved(outcome);
        self.current = None;
        info!(flow_id = %self.id, %outcome, "Consent flow resolved");
        self.publish(ConsentEvent::FlowResolved {
            flow_id: self.id,
            outcome,
        });
        Step::Resolved(outcome)
    }

    fn publish(&self, event: ConsentEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

impl std::fmt::Debug for ConsentFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentFlow")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("primary", &self.request.primary.title())
            .finish()
    }
}
