//! Template union and the two parsing entry points.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::schema::{ButtonSchema, DismissButtonSchema, ImageSchema, RawContentMap, SmallImageSchema, TextSchema};
use crate::uimodels::{AepButton, AepDismissButton, AepImage, AepText};

/// Discriminant identifying a template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AepUiTemplateType {
    SmallImage,
}

impl AepUiTemplateType {
    pub fn as_str(self) -> &'static str {
        match self {
            AepUiTemplateType::SmallImage => "small_image",
        }
    }
}

/// A renderable content card template.
///
/// Variants form a closed union keyed by [`AepUiTemplateType`], so rendering
/// and event handling can match exhaustively as variants are added.
#[derive(Debug, Clone, PartialEq)]
pub enum AepUiTemplate {
    SmallImage(SmallImageTemplate),
}

impl AepUiTemplate {
    pub fn template_type(&self) -> AepUiTemplateType {
        match self {
            AepUiTemplate::SmallImage(_) => AepUiTemplateType::SmallImage,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            AepUiTemplate::SmallImage(template) => &template.id,
        }
    }

    pub fn as_small_image(&self) -> Option<&SmallImageTemplate> {
        match self {
            AepUiTemplate::SmallImage(template) => Some(template),
        }
    }
}

impl From<SmallImageTemplate> for AepUiTemplate {
    fn from(template: SmallImageTemplate) -> Self {
        AepUiTemplate::SmallImage(template)
    }
}

/// Small image card: a title plus optional body, image, action, buttons and
/// dismiss affordance.
///
/// Instances are immutable; each proposition fetch builds a fresh set and the
/// previous one is discarded wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmallImageTemplate {
    pub id: String,
    pub title: AepText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<AepText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AepImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<AepButton>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_btn: Option<AepDismissButton>,
}

impl SmallImageTemplate {
    /// Permissive parse of an untyped content payload.
    ///
    /// Returns `None` when the payload carries no usable title. Optional
    /// sections are populated independently: a malformed button is dropped
    /// from the list while valid siblings keep their wire order, and any
    /// other malformed optional section comes out absent.
    pub fn from_content(id: impl Into<String>, content: &RawContentMap) -> Option<Self> {
        let schema = SmallImageSchema::from_map(content);
        let title = schema.title.and_then(TextSchema::build)?;
        Some(Self {
            id: id.into(),
            title,
            body: schema.body.and_then(TextSchema::build),
            image: schema.image.map(ImageSchema::build),
            action_url: schema.action_url,
            buttons: schema
                .buttons
                .map(|buttons| buttons.into_iter().filter_map(ButtonSchema::build).collect()),
            dismiss_btn: schema.dismiss_button.map(DismissButtonSchema::build),
        })
    }

    /// Strict parse of a self-describing JSON document.
    ///
    /// Unknown fields are ignored. Unlike [`Self::from_content`], a document
    /// that fails to decode is a genuine integration bug, so the failure is
    /// surfaced as an error instead of a silent absence.
    pub fn from_json_str(document: &str) -> Result<Self, TemplateError> {
        serde_json::from_str(document).map_err(TemplateError::ConstructionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn content(value: Value) -> RawContentMap {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn minimal_payload_parses_with_all_optionals_absent() {
        let payload = content(json!({ "title": { "content": "Hello" } }));
        let template = SmallImageTemplate::from_content("card-1", &payload).unwrap();
        assert_eq!(template.id, "card-1");
        assert_eq!(template.title.content, "Hello");
        assert!(template.body.is_none());
        assert!(template.image.is_none());
        assert!(template.action_url.is_none());
        assert!(template.buttons.is_none());
        assert!(template.dismiss_btn.is_none());
    }

    #[test]
    fn missing_title_yields_no_template() {
        let payload = content(json!({ "body": { "content": "no title here" } }));
        assert!(SmallImageTemplate::from_content("card-1", &payload).is_none());
    }

    #[test]
    fn title_without_content_yields_no_template() {
        let payload = content(json!({ "title": { "align": "center" } }));
        assert!(SmallImageTemplate::from_content("card-1", &payload).is_none());
    }

    #[test]
    fn malformed_button_is_dropped_and_order_is_preserved() {
        let payload = content(json!({
            "title": { "content": "Sale" },
            "buttons": [
                { "interactionId": "first", "actionUrl": "https://example.com/1", "text": { "content": "One" } },
                { "interactionId": "broken", "text": { "content": "No URL" } },
                { "interactionId": "second", "actionUrl": "https://example.com/2", "text": { "content": "Two" } }
            ]
        }));
        let template = SmallImageTemplate::from_content("card-1", &payload).unwrap();
        let ids: Vec<&str> = template
            .buttons
            .as_deref()
            .unwrap()
            .iter()
            .map(|button| button.id.as_str())
            .collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn malformed_optional_section_does_not_abort_the_template() {
        let payload = content(json!({
            "title": { "content": "Sale" },
            "body": "not a map",
            "image": 7,
            "dismissButton": []
        }));
        let template = SmallImageTemplate::from_content("card-1", &payload).unwrap();
        assert!(template.body.is_none());
        assert!(template.image.is_none());
        assert!(template.dismiss_btn.is_none());
    }

    #[test]
    fn full_payload_round_trips_through_the_serialized_form() {
        let payload = content(json!({
            "title": {
                "content": "Game day",
                "color": { "light": "#FFFFFF", "dark": "#1A1A1A" },
                "align": "left",
                "font": { "name": "Helvetica", "size": 18, "weight": "bold", "style": ["italic"] }
            },
            "body": { "content": "Tickets on sale now" },
            "image": { "url": "https://cdn.example.com/card.png", "darkUrl": "https://cdn.example.com/card-dark.png", "alt": "stadium" },
            "actionUrl": "https://example.com/tickets",
            "buttons": [
                {
                    "interactionId": "buy",
                    "actionUrl": "https://example.com/buy",
                    "text": { "content": "Buy" },
                    "borderWidth": 1.5,
                    "borderColor": { "light": "#CCCCCC" }
                }
            ],
            "dismissButton": { "style": "simple" }
        }));
        let template = SmallImageTemplate::from_content("card-1", &payload).unwrap();

        let document = serde_json::to_string(&template).unwrap();
        let reparsed = SmallImageTemplate::from_json_str(&document).unwrap();
        assert_eq!(reparsed, template);
    }

    #[test]
    fn serialized_form_ignores_unknown_fields() {
        let template = SmallImageTemplate::from_json_str(
            r#"{ "id": "card-1", "title": { "content": "Hello" }, "futureField": true }"#,
        )
        .unwrap();
        assert_eq!(template.title.content, "Hello");
    }

    #[test]
    fn malformed_document_is_a_construction_error() {
        let error = SmallImageTemplate::from_json_str("{ not json").unwrap_err();
        assert!(matches!(error, TemplateError::ConstructionFailed(_)));
        assert!(error.to_string().contains("failed to construct a UI template"));
    }

    #[test]
    fn document_missing_required_fields_is_a_construction_error() {
        let error =
            SmallImageTemplate::from_json_str(r#"{ "id": "card-1" }"#).unwrap_err();
        assert!(matches!(error, TemplateError::ConstructionFailed(_)));
    }

    #[test]
    fn template_union_reports_its_variant() {
        let payload = content(json!({ "title": { "content": "Hello" } }));
        let template: AepUiTemplate = SmallImageTemplate::from_content("card-1", &payload)
            .unwrap()
            .into();
        assert_eq!(template.template_type(), AepUiTemplateType::SmallImage);
        assert_eq!(template.template_type().as_str(), "small_image");
        assert_eq!(template.id(), "card-1");
        assert!(template.as_small_image().is_some());
    }
}
