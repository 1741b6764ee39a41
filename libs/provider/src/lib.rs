//! Content card retrieval and UI event dispatch.
//!
//! This crate bridges an asynchronous messaging backend and a rendering
//! layer: it fetches propositions for a named surface, parses them into typed
//! templates, and publishes each result wholesale into an observable snapshot
//! cell. It also routes display/interact/dismiss events from rendered cards
//! through an application callback before falling back to default handling.
pub mod events;
pub mod provider;
pub mod service;
pub mod types;

pub use acc_templates::{AepUiTemplate, AepUiTemplateType, SmallImageTemplate};
pub use events::{
    AepUiEventObserver, ContentCardCallback, ContentCardEventObserver, UiAction, UiEvent,
};
pub use provider::ContentCardProvider;
pub use service::MessagingService;
pub use types::{Proposition, PropositionItem, Surface};
