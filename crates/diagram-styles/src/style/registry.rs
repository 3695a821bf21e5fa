//! Registry of tag-keyed element and relationship style rules.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{StyleError, StyleKind};
use crate::style::{ElementStyle, RelationshipStyle};
use crate::tags;

/// A rule that can be stored in a [`Rules`] collection.
trait Rule {
    const KIND: StyleKind;

    fn tag(&self) -> &str;
}

impl Rule for ElementStyle {
    const KIND: StyleKind = StyleKind::Element;

    fn tag(&self) -> &str {
        ElementStyle::tag(self)
    }
}

impl Rule for RelationshipStyle {
    const KIND: StyleKind = StyleKind::Relationship;

    fn tag(&self) -> &str {
        RelationshipStyle::tag(self)
    }
}

/// Insertion-ordered rules with a tag index.
#[derive(Debug, Clone)]
struct Rules<T> {
    rules: Vec<T>,
    by_tag: FxHashMap<String, usize>,
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            by_tag: FxHashMap::default(),
        }
    }
}

impl<T: Rule> Rules<T> {
    fn insert(&mut self, rule: T) -> Result<&mut T, StyleError> {
        if tags::usable(Some(rule.tag())).is_none() {
            return Err(StyleError::MissingTag);
        }
        if self.by_tag.contains_key(rule.tag()) {
            return Err(StyleError::DuplicateTag {
                kind: T::KIND,
                tag: rule.tag().to_string(),
            });
        }

        debug!(kind = %T::KIND, tag = rule.tag(), "registered style");
        let index = self.rules.len();
        self.by_tag.insert(rule.tag().to_string(), index);
        self.rules.push(rule);
        Ok(&mut self.rules[index])
    }

    fn get(&self, tag: &str) -> Option<&T> {
        self.by_tag.get(tag).map(|&i| &self.rules[i])
    }

    fn get_mut(&mut self, tag: &str) -> Option<&mut T> {
        self.by_tag.get(tag).map(|&i| &mut self.rules[i])
    }

    fn clear(&mut self) {
        if !self.rules.is_empty() {
            debug!(kind = %T::KIND, removed = self.rules.len(), "cleared styles");
        }
        self.rules.clear();
        self.by_tag.clear();
    }
}

/// Either kind of style rule, for registering an already-built rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Element(ElementStyle),
    Relationship(RelationshipStyle),
}

impl From<ElementStyle> for Style {
    fn from(style: ElementStyle) -> Self {
        Style::Element(style)
    }
}

impl From<RelationshipStyle> for Style {
    fn from(style: RelationshipStyle) -> Self {
        Style::Relationship(style)
    }
}

/// The style configuration of a diagram workspace.
///
/// Holds one registry of element rules and one of relationship rules. Each
/// registry keeps its rules in insertion order and allows at most one rule per
/// tag.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StylesDocument", into = "StylesDocument")
)]
pub struct Styles {
    elements: Rules<ElementStyle>,
    relationships: Rules<RelationshipStyle>,
}

impl Styles {
    /// Creates an empty style configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new element rule for `tag` and returns it for configuration.
    ///
    /// Fails with [`StyleError::MissingTag`] if `tag` is `None`, empty or blank,
    /// and with [`StyleError::DuplicateTag`] if an element rule for `tag` exists.
    pub fn add_element_style<'t>(
        &mut self,
        tag: impl Into<Option<&'t str>>,
    ) -> Result<&mut ElementStyle, StyleError> {
        let tag = tags::usable(tag.into()).ok_or(StyleError::MissingTag)?;
        self.elements.insert(ElementStyle::new(tag))
    }

    /// Registers a new relationship rule for `tag` and returns it for configuration.
    ///
    /// Fails under the same conditions as [`Styles::add_element_style`].
    pub fn add_relationship_style<'t>(
        &mut self,
        tag: impl Into<Option<&'t str>>,
    ) -> Result<&mut RelationshipStyle, StyleError> {
        let tag = tags::usable(tag.into()).ok_or(StyleError::MissingTag)?;
        self.relationships.insert(RelationshipStyle::new(tag))
    }

    /// Registers an already-built rule of either kind.
    pub fn add(&mut self, style: impl Into<Style>) -> Result<(), StyleError> {
        match style.into() {
            Style::Element(style) => self.elements.insert(style).map(|_| ()),
            Style::Relationship(style) => self.relationships.insert(style).map(|_| ()),
        }
    }

    /// Element rules in registration order.
    pub fn elements(&self) -> &[ElementStyle] {
        &self.elements.rules
    }

    /// Relationship rules in registration order.
    pub fn relationships(&self) -> &[RelationshipStyle] {
        &self.relationships.rules
    }

    /// Looks up the element rule keyed by `tag`.
    pub fn element_style(&self, tag: &str) -> Option<&ElementStyle> {
        self.elements.get(tag)
    }

    pub fn element_style_mut(&mut self, tag: &str) -> Option<&mut ElementStyle> {
        self.elements.get_mut(tag)
    }

    /// Looks up the relationship rule keyed by `tag`.
    pub fn relationship_style(&self, tag: &str) -> Option<&RelationshipStyle> {
        self.relationships.get(tag)
    }

    pub fn relationship_style_mut(&mut self, tag: &str) -> Option<&mut RelationshipStyle> {
        self.relationships.get_mut(tag)
    }

    /// Removes every element rule.
    pub fn clear_element_styles(&mut self) {
        self.elements.clear();
    }

    /// Removes every relationship rule.
    pub fn clear_relationship_styles(&mut self) {
        self.relationships.clear();
    }

    /// Returns true if neither registry holds a rule.
    pub fn is_empty(&self) -> bool {
        self.elements.rules.is_empty() && self.relationships.rules.is_empty()
    }
}

/// Serialized shape of [`Styles`]: two rule arrays in registration order.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct StylesDocument {
    #[serde(default)]
    elements: Vec<ElementStyle>,
    #[serde(default)]
    relationships: Vec<RelationshipStyle>,
}

#[cfg(feature = "serde")]
impl TryFrom<StylesDocument> for Styles {
    type Error = StyleError;

    fn try_from(document: StylesDocument) -> Result<Self, Self::Error> {
        let mut styles = Styles::new();
        for style in document.elements {
            styles.add(style)?;
        }
        for style in document.relationships {
            styles.add(style)?;
        }
        Ok(styles)
    }
}

#[cfg(feature = "serde")]
impl From<Styles> for StylesDocument {
    fn from(styles: Styles) -> Self {
        StylesDocument {
            elements: styles.elements.rules,
            relationships: styles.relationships.rules,
        }
    }
}
