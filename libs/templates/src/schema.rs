//! Permissive wire schema for content card payloads.
//!
//! Card content arrives as an untyped nested map. Deserializing that map into
//! the schema structs here is a single pass that can never fail: unrecognized
//! keys are ignored and a missing, `null`, or mistyped field comes out as
//! absent. The `build` conversions then enforce the required-field rules while
//! assembling the typed models, so every coercion and drop decision is
//! auditable in this one module.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::uimodels::{AepButton, AepColor, AepDismissButton, AepFont, AepImage, AepText};

/// Untyped content payload as delivered by the messaging service.
pub type RawContentMap = Map<String, Value>;

/// Reads a field as `Some(T)` when the value has the expected shape and as
/// `None` otherwise. Type mismatches are indistinguishable from absence.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Nested-object field; any non-object value reads as absent.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Integer field tolerating both integer and floating wire forms.
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().map(|float| float as i64))
        .map(|whole| whole as i32))
}

/// Sequence field keeping only entries of the expected shape, in wire order.
/// A non-sequence value reads as absent.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    ))
}

/// Wire form of a text element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextSchema {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub color: Option<ColorSchema>,
    #[serde(default, deserialize_with = "lenient")]
    pub align: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub font: Option<FontSchema>,
}

impl TextSchema {
    /// Text requires its content string; display settings are optional.
    pub fn build(self) -> Option<AepText> {
        let content = self.content?;
        Some(AepText {
            content,
            color: self.color.and_then(ColorSchema::build),
            align: self.align,
            font: self.font.map(FontSchema::build),
        })
    }
}

/// Wire form of font settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontSchema {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub size: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub style: Option<Vec<String>>,
}

impl FontSchema {
    pub fn build(self) -> AepFont {
        AepFont {
            name: self.name,
            size: self.size,
            weight: self.weight,
            style: self.style,
        }
    }
}

/// Wire form of a light/dark color pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorSchema {
    #[serde(default, deserialize_with = "lenient")]
    pub light: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dark: Option<String>,
}

impl ColorSchema {
    /// A color only exists when the light-mode value is present.
    pub fn build(self) -> Option<AepColor> {
        let light_color = self.light?;
        Some(AepColor {
            light_color,
            dark_color: self.dark,
        })
    }
}

/// Wire form of an image element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSchema {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dark_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bundle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dark_bundle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_size: Option<f32>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub icon_color: Option<ColorSchema>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub placeholder: Option<String>,
}

impl ImageSchema {
    /// Images have no required fields and are always constructible.
    pub fn build(self) -> AepImage {
        AepImage {
            url: self.url,
            dark_url: self.dark_url,
            bundle: self.bundle,
            dark_bundle: self.dark_bundle,
            icon: self.icon,
            icon_size: self.icon_size,
            icon_color: self.icon_color.and_then(ColorSchema::build),
            alt: self.alt,
            placeholder: self.placeholder,
        }
    }
}

/// Wire form of a card button.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSchema {
    #[serde(default, deserialize_with = "lenient_map")]
    pub text: Option<TextSchema>,
    #[serde(default, deserialize_with = "lenient")]
    pub action_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub interaction_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub border_width: Option<f32>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub border_color: Option<ColorSchema>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub background_color: Option<ColorSchema>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub background_image: Option<ImageSchema>,
}

impl ButtonSchema {
    /// A button requires text, an action URL, and an interaction id. The
    /// required fields are checked before any optional styling is assembled.
    pub fn build(self) -> Option<AepButton> {
        let text = self.text.and_then(TextSchema::build)?;
        let action_url = self.action_url?;
        let id = self.interaction_id?;
        Some(AepButton {
            id,
            text,
            action_url,
            border_width: self.border_width,
            border_color: self.border_color.and_then(ColorSchema::build),
            background_color: self.background_color.and_then(ColorSchema::build),
            background_image: self.background_image.map(ImageSchema::build),
        })
    }
}

/// Wire form of the dismiss button.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DismissButtonSchema {
    #[serde(default, deserialize_with = "lenient")]
    pub style: Option<String>,
}

impl DismissButtonSchema {
    pub fn build(self) -> AepDismissButton {
        AepDismissButton { style: self.style }
    }
}

/// Wire form of a small image card payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallImageSchema {
    #[serde(default, deserialize_with = "lenient_map")]
    pub title: Option<TextSchema>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub body: Option<TextSchema>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub image: Option<ImageSchema>,
    #[serde(default, deserialize_with = "lenient")]
    pub action_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub buttons: Option<Vec<ButtonSchema>>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub dismiss_button: Option<DismissButtonSchema>,
}

impl SmallImageSchema {
    /// Reads the wire schema out of an untyped content map. Never fails.
    pub fn from_map(content: &RawContentMap) -> Self {
        serde_json::from_value(Value::Object(content.clone())).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_requires_light_value() {
        let schema: ColorSchema = serde_json::from_value(json!({ "dark": "#000000" })).unwrap();
        assert!(schema.build().is_none());
    }

    #[test]
    fn color_dark_value_is_optional() {
        let schema: ColorSchema = serde_json::from_value(json!({ "light": "#FFFFFF" })).unwrap();
        let color = schema.build().unwrap();
        assert_eq!(color.light_color, "#FFFFFF");
        assert!(color.dark_color.is_none());
    }

    #[test]
    fn text_requires_content() {
        let schema: TextSchema =
            serde_json::from_value(json!({ "align": "left", "color": { "light": "#FFF" } }))
                .unwrap();
        assert!(schema.build().is_none());
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let schema: TextSchema = serde_json::from_value(json!({
            "content": 42,
            "align": ["left"],
            "font": "bold",
            "color": ["#FFFFFF"]
        }))
        .unwrap();
        assert!(schema.content.is_none());
        assert!(schema.align.is_none());
        assert!(schema.font.is_none());
        assert!(schema.color.is_none());
        assert!(schema.build().is_none());
    }

    #[test]
    fn font_size_coerces_floating_wire_values() {
        let schema: FontSchema =
            serde_json::from_value(json!({ "size": 15.0, "weight": "bold" })).unwrap();
        let font = schema.build();
        assert_eq!(font.size, Some(15));
        assert_eq!(font.weight.as_deref(), Some("bold"));
    }

    #[test]
    fn font_style_keeps_only_strings() {
        let schema: FontSchema =
            serde_json::from_value(json!({ "style": ["italic", 7, "underline"] })).unwrap();
        let font = schema.build();
        assert_eq!(
            font.style,
            Some(vec!["italic".to_string(), "underline".to_string()])
        );
    }

    #[test]
    fn image_is_always_constructible() {
        let schema: ImageSchema = serde_json::from_value(json!({})).unwrap();
        let image = schema.build();
        assert!(image.url.is_none());
        assert!(image.icon_color.is_none());
    }

    #[test]
    fn image_icon_size_accepts_integer_wire_values() {
        let schema: ImageSchema =
            serde_json::from_value(json!({ "icon": "bell", "iconSize": 24 })).unwrap();
        let image = schema.build();
        assert_eq!(image.icon_size, Some(24.0));
    }

    #[test]
    fn button_requires_text_action_url_and_interaction_id() {
        let complete = json!({
            "interactionId": "buy",
            "actionUrl": "https://example.com/buy",
            "text": { "content": "Buy" }
        });
        for missing in ["interactionId", "actionUrl", "text"] {
            let mut payload = complete.clone();
            payload.as_object_mut().unwrap().remove(missing);
            let schema: ButtonSchema = serde_json::from_value(payload).unwrap();
            assert!(schema.build().is_none(), "button without {missing} must drop");
        }
        let schema: ButtonSchema = serde_json::from_value(complete).unwrap();
        let button = schema.build().unwrap();
        assert_eq!(button.id, "buy");
        assert_eq!(button.action_url, "https://example.com/buy");
        assert_eq!(button.text.content, "Buy");
    }

    #[test]
    fn button_text_without_content_drops_the_button() {
        let schema: ButtonSchema = serde_json::from_value(json!({
            "interactionId": "buy",
            "actionUrl": "https://example.com/buy",
            "text": { "align": "center" }
        }))
        .unwrap();
        assert!(schema.build().is_none());
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let schema: SmallImageSchema = serde_json::from_value(json!({
            "title": { "content": "Hello" },
            "experimentalLayout": { "columns": 2 }
        }))
        .unwrap();
        assert!(schema.title.is_some());
    }
}
