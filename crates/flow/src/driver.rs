//! Async driver — runs a [`ConsentFlow`] against a [`Presenter`].

use crate::controller::{ConsentFlow, Step};
use crate::dispatch::{Callbacks, ConsentDispatcher};
use crate::request::ConsentRequest;
use agreementkit_core::{ConsentOutcome, Presenter, Result};
use tracing::debug;

impl ConsentFlow {
    /// Drive the flow to completion and dispatch its outcome once.
    ///
    /// Each surface is awaited in turn, so the secondary surface is only
    /// requested after the primary one was dismissed, and dispatch only
    /// runs after the last surface was dismissed. On error nothing is
    /// dispatched.
    pub async fn run<P>(mut self, presenter: &P, dispatcher: ConsentDispatcher) -> Result<ConsentOutcome>
    where
        P: Presenter + ?Sized,
    {
        let mut surface = self.start()?;

        let outcome = loop {
            let choice = presenter.present(&surface).await;
            debug!(
                flow_id = %self.id(),
                presenter = presenter.name(),
                stage = %surface.stage,
                ?choice,
                "Surface dismissed"
            );
            match self.respond(choice)? {
                Step::Present(next) => surface = next,
                Step::Resolved(outcome) => break outcome,
            }
        };

        dispatcher.dispatch(outcome, self.request().secondary_decline);
        Ok(outcome)
    }
}

/// Ask for consent in one call.
///
/// Builds the flow (failing fast on misconfiguration), presents it, and
/// fires the matching callback.
pub async fn require_consent<P>(
    request: ConsentRequest,
    presenter: &P,
    callbacks: Callbacks,
) -> Result<ConsentOutcome>
where
    P: Presenter + ?Sized,
{
    ConsentFlow::new(request)?
        .run(presenter, ConsentDispatcher::new(callbacks))
        .await
}
