//! Tag-keyed style rules for relationships.

use crate::style::Routing;

/// A partially-specified set of relationship attributes, keyed by a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RelationshipStyle {
    tag: String,
    /// Line thickness in pixels.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub thickness: Option<u32>,
    /// Line and label colour as a `#rrggbb` hex code.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dashed: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub routing: Option<Routing>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub font_size: Option<u32>,
    /// Width of the description label box in pixels.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub width: Option<u32>,
    /// Label position as a percentage along the line, 0 to 100.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<u8>,
    /// Opacity percentage, 0 to 100.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub opacity: Option<u8>,
}

impl RelationshipStyle {
    /// Creates an empty rule for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            thickness: None,
            color: None,
            dashed: None,
            routing: None,
            font_size: None,
            width: None,
            position: None,
            opacity: None,
        }
    }

    /// The tag this rule is keyed by.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets the line thickness in pixels.
    pub fn thickness(&mut self, thickness: u32) -> &mut Self {
        self.thickness = Some(thickness);
        self
    }

    /// Sets the line and label colour.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    /// Sets whether the line is dashed.
    pub fn dashed(&mut self, dashed: bool) -> &mut Self {
        self.dashed = Some(dashed);
        self
    }

    /// Sets the line routing.
    pub fn routing(&mut self, routing: Routing) -> &mut Self {
        self.routing = Some(routing);
        self
    }

    /// Sets the label font size in pixels.
    pub fn font_size(&mut self, font_size: u32) -> &mut Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the label box width in pixels.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Sets the label position, clamped to 0..=100.
    pub fn position(&mut self, position: u8) -> &mut Self {
        self.position = Some(position.min(100));
        self
    }

    /// Sets the opacity, clamped to 0..=100.
    pub fn opacity(&mut self, opacity: u8) -> &mut Self {
        self.opacity = Some(opacity.min(100));
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == RelationshipStyle::new(self.tag.clone())
    }
}
