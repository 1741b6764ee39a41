//! Per-surface content provider publishing template snapshots.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use acc_templates::{AepUiTemplate, SmallImageTemplate};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::service::MessagingService;
use crate::types::{Proposition, Surface};

/// Bridges proposition fetches and typed template publication for one surface.
///
/// Each fetch replaces the published list wholesale in a single-writer watch
/// cell, so subscribers always observe the latest complete snapshot and never
/// an intermediate state. Concurrent fetches are resolved newest-wins: a
/// fetch that finishes after a later one has been issued discards its result.
///
/// The provider is a cheap handle; clones share the same cell.
#[derive(Clone)]
pub struct ContentCardProvider {
    inner: Arc<Inner>,
}

struct Inner {
    surface: Surface,
    messaging: Arc<dyn MessagingService>,
    templates: watch::Sender<Vec<AepUiTemplate>>,
    fetch_seq: AtomicU64,
}

impl ContentCardProvider {
    pub fn new(surface: Surface, messaging: Arc<dyn MessagingService>) -> Self {
        let (templates, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                surface,
                messaging,
                templates,
                fetch_seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.inner.surface
    }

    /// Subscribes to published snapshots without issuing a fetch.
    pub fn content(&self) -> watch::Receiver<Vec<AepUiTemplate>> {
        self.inner.templates.subscribe()
    }

    /// Issues one fetch for this provider's surface and returns the snapshot
    /// receiver immediately; the parsed result is published once the backend
    /// responds.
    pub fn fetch_content(&self) -> watch::Receiver<Vec<AepUiTemplate>> {
        let seq = self.inner.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.run_fetch(seq).await;
        });
        self.inner.templates.subscribe()
    }

    /// Re-runs the full fetch-and-publish cycle, replacing the current
    /// snapshot with fresh backend state.
    pub fn refresh_content(&self) -> watch::Receiver<Vec<AepUiTemplate>> {
        self.fetch_content()
    }
}

impl Inner {
    async fn run_fetch(&self, seq: u64) {
        let surfaces = [self.surface.clone()];
        let templates = match self.messaging.propositions_for_surfaces(&surfaces).await {
            Ok(by_surface) => {
                let propositions: Vec<Proposition> = by_surface.into_values().flatten().collect();
                parse_templates(&propositions)
            }
            Err(error) => {
                warn!(
                    surface = %self.surface,
                    %error,
                    "proposition fetch failed, publishing empty list"
                );
                Vec::new()
            }
        };
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(surface = %self.surface, seq, "fetch superseded by a newer one, discarding result");
            return;
        }
        self.templates.send_replace(templates);
    }
}

/// Parses each proposition's first item into a template, dropping
/// propositions that do not carry a renderable card.
fn parse_templates(propositions: &[Proposition]) -> Vec<AepUiTemplate> {
    let mut templates = Vec::new();
    for proposition in propositions {
        let Some(item) = proposition.first_item() else {
            debug!(proposition = %proposition.unique_id, "proposition carries no items, skipping");
            continue;
        };
        match SmallImageTemplate::from_content(item.item_id.clone(), &item.content) {
            Some(template) => templates.push(template.into()),
            None => debug!(
                proposition = %proposition.unique_id,
                item = %item.item_id,
                "proposition content is not a renderable card, skipping"
            ),
        }
    }
    templates
}
