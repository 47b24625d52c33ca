//! Consent flow — presents a primary agreement, an optional affirmative
//! confirmation, and resolves to exactly one [`ConsentOutcome`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ ConsentRequest │───▶│ ConsentFlow  │◀──▶│  Presenter  │
//! │ (agreements)   │    │ (state mach.)│    │ (host UI)   │
//! └────────────────┘    └──────────────┘    └─────────────┘
//!                              │
//!                     ┌────────┴────────┐
//!                     │ ConsentOutcome  │──▶ Callbacks
//!                     │ (single result) │──▶ Delegates
//!                     └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use agreementkit_core::{Agreement, Style};
//! use agreementkit_flow::{Callbacks, ConsentRequest, ScriptedPresenter, require_consent};
//! use agreementkit_core::UserChoice;
//!
//! # async fn demo() -> agreementkit_core::Result<()> {
//! let terms = Agreement::with_message("Terms", "Read me", Style::Alert)?;
//! let presenter = ScriptedPresenter::new([UserChoice::Continue]);
//! let outcome = require_consent(
//!     ConsentRequest::new(terms),
//!     &presenter,
//!     Callbacks::continue_only(|| println!("proceeding")),
//! )
//! .await?;
//! assert!(outcome.is_accepted());
//! # Ok(())
//! # }
//! ```

mod controller;
mod dispatch;
mod driver;
mod request;
mod scripted;

pub use controller::{ConsentFlow, Step};
pub use dispatch::{Callbacks, ConsentDispatcher};
pub use driver::require_consent;
pub use request::{ConsentRequest, SecondaryDeclinePolicy};
pub use scripted::ScriptedPresenter;
