//! Outcome dispatch — one result, fanned out once.
//!
//! Completion callbacks and delegate hooks are both subscribers of the
//! single [`ConsentOutcome`]. [`ConsentDispatcher::dispatch`] consumes the
//! dispatcher, so a flow cannot notify twice.

use crate::request::SecondaryDeclinePolicy;
use agreementkit_core::{ConsentDelegate, ConsentOutcome};
use std::sync::Arc;
use tracing::debug;

type Callback = Box<dyn FnOnce() + Send>;

/// The pair of zero-argument completion callbacks.
#[derive(Default)]
pub struct Callbacks {
    on_continue: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl Callbacks {
    pub fn new(
        on_continue: impl FnOnce() + Send + 'static,
        on_cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            on_continue: Some(Box::new(on_continue)),
            on_cancel: Some(Box::new(on_cancel)),
        }
    }

    /// Only act on consent; declining does nothing.
    pub fn continue_only(on_continue: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_continue: Some(Box::new(on_continue)),
            on_cancel: None,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_continue", &self.on_continue.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// Delivers a flow's outcome to its callbacks and delegates.
#[derive(Default)]
pub struct ConsentDispatcher {
    callbacks: Callbacks,
    delegates: Vec<Arc<dyn ConsentDelegate>>,
}

impl ConsentDispatcher {
    pub fn new(callbacks: Callbacks) -> Self {
        Self {
            callbacks,
            delegates: Vec::new(),
        }
    }

    /// Attach a delegate. Each attached delegate gets one hook call.
    pub fn with_delegate(mut self, delegate: Arc<dyn ConsentDelegate>) -> Self {
        self.delegates.push(delegate);
        self
    }

    /// Fire the matching callback, then every delegate.
    pub fn dispatch(self, outcome: ConsentOutcome, policy: SecondaryDeclinePolicy) {
        let Callbacks {
            on_continue,
            on_cancel,
        } = self.callbacks;

        let callback = match outcome {
            ConsentOutcome::Accepted | ConsentOutcome::AffirmativeAccepted => on_continue,
            ConsentOutcome::Declined => on_cancel,
            ConsentOutcome::AffirmativeDeclined => match policy {
                SecondaryDeclinePolicy::PropagateCancel => on_cancel,
                SecondaryDeclinePolicy::Silent => None,
            },
        };

        debug!(
            %outcome,
            callback = callback.is_some(),
            delegates = self.delegates.len(),
            "Dispatching consent outcome"
        );

        if let Some(callback) = callback {
            callback();
        }
        for delegate in &self.delegates {
            delegate.notify(&outcome);
        }
    }
}

impl std::fmt::Debug for ConsentDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentDispatcher")
            .field("callbacks", &self.callbacks)
            .field("delegates", &self.delegates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (Callbacks, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let continued = Arc::new(AtomicUsize::new(0));
        let cancelled = Arc::new(AtomicUsize::new(0));
        let (c, x) = (continued.clone(), cancelled.clone());
        let callbacks = Callbacks::new(
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                x.fetch_add(1, Ordering::SeqCst);
            },
        );
        (callbacks, continued, cancelled)
    }

    #[derive(Default)]
    struct HookLog(Mutex<Vec<ConsentOutcome>>);

    impl ConsentDelegate for HookLog {
        fn notify(&self, outcome: &ConsentOutcome) {
            self.0.lock().unwrap().push(*outcome);
        }
    }

    #[test]
    fn accepted_fires_continue() {
        let (callbacks, continued, cancelled) = counting();
        ConsentDispatcher::new(callbacks)
            .dispatch(ConsentOutcome::Accepted, SecondaryDeclinePolicy::default());
        assert_eq!(continued.load(Ordering::SeqCst), 1);
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn declined_fires_cancel() {
        let (callbacks, continued, cancelled) = counting();
        ConsentDispatcher::new(callbacks)
            .dispatch(ConsentOutcome::Declined, SecondaryDeclinePolicy::Silent);
        assert_eq!(continued.load(Ordering::SeqCst), 0);
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn secondary_decline_respects_policy() {
        let (callbacks, _, cancelled) = counting();
        ConsentDispatcher::new(callbacks).dispatch(
            ConsentOutcome::AffirmativeDeclined,
            SecondaryDeclinePolicy::PropagateCancel,
        );
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);

        let (callbacks, continued, cancelled) = counting();
        ConsentDispatcher::new(callbacks)
            .dispatch(ConsentOutcome::AffirmativeDeclined, SecondaryDeclinePolicy::Silent);
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
        assert_eq!(continued.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn every_delegate_notified_once() {
        let a = Arc::new(HookLog::default());
        let b = Arc::new(HookLog::default());
        ConsentDispatcher::new(Callbacks::none())
            .with_delegate(a.clone())
            .with_delegate(b.clone())
            .dispatch(ConsentOutcome::AffirmativeAccepted, SecondaryDeclinePolicy::default());
        assert_eq!(*a.0.lock().unwrap(), vec![ConsentOutcome::AffirmativeAccepted]);
        assert_eq!(*b.0.lock().unwrap(), vec![ConsentOutcome::AffirmativeAccepted]);
    }

    #[test]
    fn continue_only_ignores_decline() {
        let continued = Arc::new(AtomicUsize::new(0));
        let c = continued.clone();
        ConsentDispatcher::new(Callbacks::continue_only(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }))
        .dispatch(ConsentOutcome::Declined, SecondaryDeclinePolicy::default());
        assert_eq!(continued.load(Ordering::SeqCst), 0);
    }
}
