//! Style resolution: folding an entity's matching rules over the defaults.
//!
//! The model is consumed through two small traits so any diagram model can be
//! styled without this crate knowing its shape.
//!
//! # Precedence
//!
//! Rules are applied in the order of the entity's own tags. When two tags carry
//! rules that set the same attribute, the tag that comes later in the entity's
//! tag sequence wins. Registration order never affects the outcome.
//!
//! A tag repeated in the sequence counts once, at its first position.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::defaults;
use crate::style::{ResolvedElementStyle, ResolvedRelationshipStyle, Styles};

/// Anything that carries an ordered sequence of tags.
pub trait Tagged {
    /// The entity's tags, in the order they were assigned.
    fn tags(&self) -> impl Iterator<Item = &str>;
}

/// A relationship as seen by the resolver.
///
/// Deployment-time relationship instances are copies of a model relationship
/// between two deployed instances. They are styled as the relationship they
/// were derived from.
pub trait TaggedRelationship: Tagged {
    /// The relationship this one was derived from, if any.
    fn linked_relationship(&self) -> Option<&Self> {
        None
    }
}

impl Tagged for [String] {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.iter().map(String::as_str)
    }
}

impl Tagged for Vec<String> {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.iter().map(String::as_str)
    }
}

impl Tagged for [&str] {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|t| &**t)
    }
}

impl TaggedRelationship for [String] {}

impl TaggedRelationship for Vec<String> {}

impl TaggedRelationship for [&str] {}

impl Styles {
    /// Resolves the effective style of an element.
    ///
    /// `None` yields the default element style. Width and height that no
    /// matching rule sets are taken from the size of the final shape.
    pub fn find_element_style<E: Tagged + ?Sized>(
        &self,
        element: Option<&E>,
    ) -> ResolvedElementStyle {
        let mut style = defaults::element_style();
        let Some(element) = element else {
            return style;
        };

        let mut width = None;
        let mut height = None;
        for tag in distinct(element.tags()) {
            if let Some(rule) = self.element_style(tag) {
                trace!(tag, "applying element style");
                style.overlay(rule);
                width = rule.width.or(width);
                height = rule.height.or(height);
            }
        }

        let (default_width, default_height) = defaults::size_for_shape(style.shape);
        style.width = width.unwrap_or(default_width);
        style.height = height.unwrap_or(default_height);
        style
    }

    /// Resolves the effective style of a relationship.
    ///
    /// `None` yields the default relationship style. A relationship with a
    /// linked relationship is resolved using the linked relationship's tags.
    pub fn find_relationship_style<R: TaggedRelationship + ?Sized>(
        &self,
        relationship: Option<&R>,
    ) -> ResolvedRelationshipStyle {
        let mut style = defaults::relationship_style();
        let Some(mut relationship) = relationship else {
            return style;
        };

        if let Some(linked) = relationship.linked_relationship() {
            trace!("resolving relationship instance via its linked relationship");
            relationship = linked;
        }

        for tag in distinct(relationship.tags()) {
            if let Some(rule) = self.relationship_style(tag) {
                trace!(tag, "applying relationship style");
                style.overlay(rule);
            }
        }
        style
    }
}

/// Yields each tag once, in order of first appearance.
fn distinct<'a>(tags: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    let mut seen = FxHashSet::default();
    tags.filter(move |tag| seen.insert(*tag))
}
