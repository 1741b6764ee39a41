//! UI events emitted by rendered cards and their dispatch to the host.

use std::sync::Arc;

use acc_templates::AepUiTemplate;
use tracing::debug;

/// User interaction reported by a rendered card.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// A tap on the card body or one of its buttons.
    Click {
        id: Option<String>,
        action_url: Option<String>,
    },
}

/// Lifecycle and interaction events emitted by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The card became visible. No default behavior; host hook point.
    Display(AepUiTemplate),
    /// The user interacted with the card.
    Interact {
        template: AepUiTemplate,
        action: UiAction,
    },
    /// The card was dismissed.
    Dismiss(AepUiTemplate),
}

/// Application interception point for card interactions.
pub trait ContentCardCallback: Send + Sync {
    /// Returns `true` when the click was fully handled and default handling
    /// must be suppressed.
    fn on_card_click(&self, template: &AepUiTemplate) -> bool;

    fn on_card_dismiss(&self, template: &AepUiTemplate);
}

/// Receives UI events from rendered cards.
pub trait AepUiEventObserver: Send + Sync {
    fn on_event(&self, event: &UiEvent);
}

/// One link in the interaction dispatch chain; `true` stops dispatch.
trait InteractionHandler: Send + Sync {
    fn handle(&self, template: &AepUiTemplate, action: &UiAction) -> bool;
}

/// Asks the registered application callback.
struct CallbackHandler {
    callback: Arc<dyn ContentCardCallback>,
}

impl InteractionHandler for CallbackHandler {
    fn handle(&self, template: &AepUiTemplate, _action: &UiAction) -> bool {
        self.callback.on_card_click(template)
    }
}

/// Per-variant default handling once the host has declined.
struct DefaultInteractionHandler;

impl InteractionHandler for DefaultInteractionHandler {
    fn handle(&self, template: &AepUiTemplate, action: &UiAction) -> bool {
        match template {
            AepUiTemplate::SmallImage(small_image) => {
                let UiAction::Click { id, action_url } = action;
                debug!(
                    template = %small_image.id,
                    button = id.as_deref().unwrap_or_default(),
                    action_url = action_url.as_deref().unwrap_or_default(),
                    "small image card clicked"
                );
                true
            }
        }
    }
}

/// Routes card events to the application callback first, falling back to
/// default handling when the callback declines or is absent.
pub struct ContentCardEventObserver {
    callback: Option<Arc<dyn ContentCardCallback>>,
    interaction_chain: Vec<Box<dyn InteractionHandler>>,
}

impl ContentCardEventObserver {
    pub fn new(callback: Option<Arc<dyn ContentCardCallback>>) -> Self {
        let mut interaction_chain: Vec<Box<dyn InteractionHandler>> = Vec::new();
        if let Some(callback) = callback.clone() {
            interaction_chain.push(Box::new(CallbackHandler { callback }));
        }
        interaction_chain.push(Box::new(DefaultInteractionHandler));
        Self {
            callback,
            interaction_chain,
        }
    }
}

impl AepUiEventObserver for ContentCardEventObserver {
    fn on_event(&self, event: &UiEvent) {
        match event {
            UiEvent::Display(_) => {}
            UiEvent::Interact { template, action } => {
                for handler in &self.interaction_chain {
                    if handler.handle(template, action) {
                        break;
                    }
                }
            }
            UiEvent::Dismiss(template) => {
                if let Some(callback) = &self.callback {
                    callback.on_card_dismiss(template);
                }
            }
        }
    }
}
