//! Delegate notifications for consent outcomes.

use crate::outcome::ConsentOutcome;

/// Observer of a consent flow's result.
///
/// Every hook defaults to a no-op so implementors override only what they
/// care about. The flow calls [`ConsentDelegate::notify`] once per
/// invocation, which routes the outcome to exactly one hook.
pub trait ConsentDelegate: Send + Sync {
    fn on_primary_accepted(&self) {}

    fn on_primary_declined(&self) {}

    fn on_secondary_accepted(&self) {}

    fn on_secondary_declined(&self) {}

    fn notify(&self, outcome: &ConsentOutcome) {
        match outcome {
            ConsentOutcome::Accepted => self.on_primary_accepted(),
            ConsentOutcome::Declined => self.on_primary_declined(),
            ConsentOutcome::AffirmativeAccepted => self.on_secondary_accepted(),
            ConsentOutcome::AffirmativeDeclined => self.on_secondary_declined(),
        }
    }
}
