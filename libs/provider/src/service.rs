use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Proposition, Surface};

/// Messaging backend serving propositions for display surfaces.
///
/// The response is keyed by surface: callers usually request a single surface,
/// but the shape allows a backend to satisfy multi-surface fetches in one
/// round trip.
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn propositions_for_surfaces(
        &self,
        surfaces: &[Surface],
    ) -> Result<HashMap<Surface, Vec<Proposition>>>;
}
