//! Consent event system — decoupled observation of running flows.
//!
//! Events are published as a flow moves through its states. They live only
//! in the broadcast buffer; nothing is recorded or stored.

use crate::outcome::{ConsentOutcome, Stage};
use crate::surface::{SideAction, SurfaceKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// All consent flow events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ConsentEvent {
    /// A flow left `Idle`
    FlowStarted {
        flow_id: Uuid,
        title: String,
        affirmative: bool,
    },

    /// A surface was handed to the presenter
    SurfacePresented {
        flow_id: Uuid,
        stage: Stage,
        kind: SurfaceKind,
    },

    /// A multipart row produced a side action
    SideActionRequested {
        flow_id: Uuid,
        stage: Stage,
        action: SideAction,
    },

    /// The flow reached its terminal outcome
    FlowResolved {
        flow_id: Uuid,
        outcome: ConsentOutcome,
    },
}

impl ConsentEvent {
    pub fn flow_id(&self) -> Uuid {
        match self {
            ConsentEvent::FlowStarted { flow_id, .. }
            | ConsentEvent::SurfacePresented { flow_id, .. }
            | ConsentEvent::SideActionRequested { flow_id, .. }
            | ConsentEvent::FlowResolved { flow_id, .. } => *flow_id,
        }
    }
}

/// A broadcast-based event bus for consent events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<ConsentEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity. A capacity of zero
    /// is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: ConsentEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ConsentEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
