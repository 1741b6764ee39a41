//! Surfaces and the propositions delivered for them.

use std::fmt;

use acc_templates::RawContentMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named placement content cards are requested for.
///
/// ```
/// use acc_provider::Surface;
///
/// let surface = Surface::new("homepage");
/// assert_eq!(surface.as_str(), "homepage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Surface(String);

impl Surface {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One schema-typed item inside a proposition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropositionItem {
    pub item_id: String,
    /// Untyped content payload; its shape depends on the item's schema.
    #[serde(default)]
    pub content: RawContentMap,
}

impl PropositionItem {
    pub fn new(item_id: impl Into<String>, content: RawContentMap) -> Self {
        Self {
            item_id: item_id.into(),
            content,
        }
    }
}

/// Server-delivered content payload targeted at a surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proposition {
    pub unique_id: String,
    #[serde(default)]
    pub items: Vec<PropositionItem>,
}

impl Proposition {
    /// Creates a proposition with a generated unique id.
    pub fn new(items: Vec<PropositionItem>) -> Self {
        Self {
            unique_id: Uuid::new_v4().to_string(),
            items,
        }
    }

    pub fn with_id(unique_id: impl Into<String>, items: Vec<PropositionItem>) -> Self {
        Self {
            unique_id: unique_id.into(),
            items,
        }
    }

    /// Only the first item of a proposition is rendered.
    pub fn first_item(&self) -> Option<&PropositionItem> {
        self.items.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn surface_serializes_as_a_bare_string() {
        let surface = Surface::new("homepage");
        assert_eq!(serde_json::to_value(&surface).unwrap(), json!("homepage"));
    }

    #[test]
    fn first_item_is_none_for_an_empty_proposition() {
        let proposition = Proposition::new(Vec::new());
        assert!(proposition.first_item().is_none());
        assert!(!proposition.unique_id.is_empty());
    }

    #[test]
    fn first_item_picks_the_leading_item() {
        let proposition = Proposition::with_id(
            "prop-1",
            vec![
                PropositionItem::new("item-1", RawContentMap::new()),
                PropositionItem::new("item-2", RawContentMap::new()),
            ],
        );
        assert_eq!(proposition.first_item().unwrap().item_id, "item-1");
    }
}
