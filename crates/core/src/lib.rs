//! # AgreementKit Core
//!
//! Domain types, traits, and error definitions for AgreementKit consent
//! flows. This crate has **no UI toolkit dependency** — it describes what
//! an agreement says and what a presenter must show, and leaves drawing
//! to the host.
//!
//! ## Design Philosophy
//!
//! Rendering is a trait here ([`Presenter`]); implementations live with the
//! host application. This enables:
//! - Driving the same flow from native dialogs, a terminal, or a web view
//! - Easy testing with scripted presenters
//! - A state machine that never touches a UI object

pub mod agreement;
pub mod delegate;
pub mod error;
pub mod event;
pub mod outcome;
pub mod presenter;
pub mod presets;
pub mod surface;

// Re-export key types at crate root for ergonomics
pub use agreement::{Agreement, AgreementBuilder, NavigationPosition, RowStyle, Section, Style};
pub use delegate::ConsentDelegate;
pub use error::{ConfigurationError, ConsentError, Result};
pub use event::{ConsentEvent, EventBus};
pub use outcome::{ConsentOutcome, FlowState, Stage, UserChoice};
pub use presenter::Presenter;
pub use surface::{ButtonLayout, ButtonRole, MailDraft, SideAction, Surface, SurfaceKind, ToolbarItem};
pub use url::Url;
