//! Tag-keyed style rules for elements.

use crate::style::{Border, Shape};

/// A partially-specified set of element attributes, keyed by a single tag.
///
/// Every attribute is optional; only attributes that are set take part in
/// resolution. Setters return `&mut Self` so rules can be configured in a chain
/// straight after registration:
///
/// ```rust
/// use diagram_styles::{Shape, Styles};
///
/// let mut styles = Styles::new();
/// styles
///     .add_element_style("Database")?
///     .shape(Shape::Cylinder)
///     .background("#438dd5")
///     .color("#ffffff");
/// # Ok::<(), diagram_styles::StyleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ElementStyle {
    tag: String,
    /// Width in pixels. Zero is kept as given rather than treated as unset.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub width: Option<u32>,
    /// Height in pixels.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub height: Option<u32>,
    /// Background colour as a `#rrggbb` hex code.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub background: Option<String>,
    /// Text colour as a `#rrggbb` hex code.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    /// Font size in pixels.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub font_size: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub shape: Option<Shape>,
    /// Opaque icon reference (URL, path or data URI).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub border: Option<Border>,
    /// Border colour as a `#rrggbb` hex code.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub stroke: Option<String>,
    /// Opacity percentage, 0 to 100.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub opacity: Option<u8>,
    /// Whether element metadata (type, technology) is shown.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<bool>,
    /// Whether the element description is shown.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<bool>,
}

impl ElementStyle {
    /// Creates an empty rule for the given tag.
    ///
    /// The rule is detached; register it with [`Styles::add`](crate::Styles::add).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            width: None,
            height: None,
            background: None,
            color: None,
            font_size: None,
            shape: None,
            icon: None,
            border: None,
            stroke: None,
            opacity: None,
            metadata: None,
            description: None,
        }
    }

    /// The tag this rule is keyed by.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets the width in pixels. Zero is stored as given.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Sets the height in pixels. Zero is stored as given.
    pub fn height(&mut self, height: u32) -> &mut Self {
        self.height = Some(height);
        self
    }

    /// Sets the background colour.
    pub fn background(&mut self, background: impl Into<String>) -> &mut Self {
        self.background = Some(background.into());
        self
    }

    /// Sets the text colour.
    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the font size in pixels. Zero is stored as given.
    pub fn font_size(&mut self, font_size: u32) -> &mut Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the shape.
    pub fn shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the icon reference.
    pub fn icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the border style.
    pub fn border(&mut self, border: Border) -> &mut Self {
        self.border = Some(border);
        self
    }

    /// Sets the border colour.
    pub fn stroke(&mut self, stroke: impl Into<String>) -> &mut Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Sets the opacity, clamped to 0..=100.
    pub fn opacity(&mut self, opacity: u8) -> &mut Self {
        self.opacity = Some(opacity.min(100));
        self
    }

    /// Shows or hides element metadata.
    pub fn metadata(&mut self, visible: bool) -> &mut Self {
        self.metadata = Some(visible);
        self
    }

    /// Shows or hides the element description.
    pub fn description(&mut self, visible: bool) -> &mut Self {
        self.description = Some(visible);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::new(self.tag.clone())
    }
}
