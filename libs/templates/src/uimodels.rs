//! Immutable value objects describing the visual elements of a content card.
//!
//! Serialized field names follow the wire shape (camelCase), so these structs
//! double as the strict serialized form of a template.

use serde::{Deserialize, Serialize};

/// Text element: the copy itself plus optional display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AepText {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<AepColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<AepFont>,
}

/// Font settings for a text element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AepFont {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<String>>,
}

/// Light/dark color pair.
///
/// The light-mode value is mandatory: a color without it does not exist at
/// all rather than existing half-populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AepColor {
    pub light_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_color: Option<String>,
}

/// Image element. Every field is optional; which ones are meaningful depends
/// on whether the image is remote (`url`), bundled, or an icon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AepImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_bundle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<AepColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Interactive card button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AepButton {
    pub id: String,
    pub text: AepText,
    pub action_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<AepColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<AepColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<AepImage>,
}

/// Dismiss affordance for a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AepDismissButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}
