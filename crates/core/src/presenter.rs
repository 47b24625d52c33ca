//! Presenter trait — the render port between the flow and a UI toolkit.
//!
//! The consent flow never draws anything itself. A host implements
//! `Presenter` for its toolkit (native dialogs, a terminal, a web view)
//! and the flow hands it one [`Surface`] per stage.

use crate::outcome::UserChoice;
use crate::surface::Surface;
use async_trait::async_trait;

/// The core Presenter trait.
///
/// `present` must resolve only after the surface has been dismissed, so
/// that the flow's continuation never races with UI teardown. Row
/// selection on multipart surfaces is handled inside the presenter via
/// [`Surface::activate`] and does not resolve the call.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Human-readable presenter name (e.g., "alert", "terminal", "scripted").
    fn name(&self) -> &str;

    /// Show the surface and wait for the user's terminal choice.
    async fn present(&self, surface: &Surface) -> UserChoice;
}
