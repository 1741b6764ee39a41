//! Shared fixtures and scripted collaborators for content card tests.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use acc_provider::{MessagingService, Proposition, PropositionItem, Surface};
use acc_templates::RawContentMap;
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// Converts a `json!` object literal into a raw content map.
pub fn content_map(value: Value) -> RawContentMap {
    match value {
        Value::Object(map) => map,
        other => panic!("content fixture must be a JSON object, got {other}"),
    }
}

/// Fully-populated small image card payload.
pub fn small_image_content() -> RawContentMap {
    content_map(json!({
        "title": {
            "content": "Game day",
            "color": { "light": "#FFFFFF", "dark": "#1A1A1A" },
            "font": { "name": "Helvetica", "size": 18, "weight": "bold", "style": ["italic"] }
        },
        "body": { "content": "Tickets on sale now" },
        "image": {
            "url": "https://cdn.example.com/card.png",
            "darkUrl": "https://cdn.example.com/card-dark.png",
            "alt": "stadium"
        },
        "actionUrl": "https://example.com/tickets",
        "buttons": [
            {
                "interactionId": "buy",
                "actionUrl": "https://example.com/buy",
                "text": { "content": "Buy" }
            }
        ],
        "dismissButton": { "style": "simple" }
    }))
}

/// Payload carrying only the required title.
pub fn minimal_content() -> RawContentMap {
    content_map(json!({ "title": { "content": "Hello" } }))
}

/// Payload with no title; parsing must drop it.
pub fn titleless_content() -> RawContentMap {
    content_map(json!({ "body": { "content": "no title here" } }))
}

/// Wraps a content payload in a single-item proposition.
pub fn proposition(item_id: &str, content: RawContentMap) -> Proposition {
    Proposition::with_id(
        format!("prop-{item_id}"),
        vec![PropositionItem::new(item_id, content)],
    )
}

enum ScriptedOutcome {
    Respond(HashMap<Surface, Vec<Proposition>>),
    Fail(String),
}

struct ScriptedResponse {
    delay: Option<Duration>,
    outcome: ScriptedOutcome,
}

/// Messaging service stub replaying queued responses in order.
///
/// Each queued response may carry a delay so tests can interleave concurrent
/// fetches deterministically.
#[derive(Default)]
pub struct ScriptedMessagingService {
    responses: Mutex<VecDeque<ScriptedResponse>>,
}

impl ScriptedMessagingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_response(&self, surface: Surface, propositions: Vec<Proposition>) {
        self.push(
            None,
            ScriptedOutcome::Respond(HashMap::from([(surface, propositions)])),
        )
        .await;
    }

    pub async fn push_delayed_response(
        &self,
        delay: Duration,
        surface: Surface,
        propositions: Vec<Proposition>,
    ) {
        self.push(
            Some(delay),
            ScriptedOutcome::Respond(HashMap::from([(surface, propositions)])),
        )
        .await;
    }

    /// Queues a response spanning several surfaces at once.
    pub async fn push_keyed_response(&self, by_surface: HashMap<Surface, Vec<Proposition>>) {
        self.push(None, ScriptedOutcome::Respond(by_surface)).await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.push(None, ScriptedOutcome::Fail(message.into())).await;
    }

    async fn push(&self, delay: Option<Duration>, outcome: ScriptedOutcome) {
        self.responses
            .lock()
            .await
            .push_back(ScriptedResponse { delay, outcome });
    }
}

#[async_trait]
impl MessagingService for ScriptedMessagingService {
    async fn propositions_for_surfaces(
        &self,
        surfaces: &[Surface],
    ) -> Result<HashMap<Surface, Vec<Proposition>>> {
        let next = self.responses.lock().await.pop_front();
        let Some(response) = next else {
            bail!("no scripted response left for surfaces {surfaces:?}");
        };
        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        match response.outcome {
            ScriptedOutcome::Respond(by_surface) => Ok(by_surface),
            ScriptedOutcome::Fail(message) => Err(anyhow!(message)),
        }
    }
}
