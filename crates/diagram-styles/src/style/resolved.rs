//! Fully-populated effective styles produced by resolution.
//!
//! Effective styles are plain values: they are built fresh for every lookup
//! and never share state with the rules they were derived from.

use crate::style::{Border, ElementStyle, RelationshipStyle, Routing, Shape};

/// The effective presentation of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedElementStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub color: String,
    pub font_size: u32,
    pub shape: Shape,
    /// Icons have no default; `None` means no icon is drawn.
    pub icon: Option<String>,
    pub border: Border,
    pub stroke: String,
    pub opacity: u8,
    pub metadata: bool,
    pub description: bool,
}

impl ResolvedElementStyle {
    /// Overlays every attribute the rule sets, except width and height.
    ///
    /// Dimensions depend on the final shape, so the resolver tracks them
    /// separately and settles them once all rules are applied.
    pub(crate) fn overlay(&mut self, rule: &ElementStyle) {
        overlay_clone(&mut self.background, &rule.background);
        overlay_clone(&mut self.color, &rule.color);
        overlay(&mut self.font_size, rule.font_size);
        overlay(&mut self.shape, rule.shape);
        if rule.icon.is_some() {
            self.icon.clone_from(&rule.icon);
        }
        overlay(&mut self.border, rule.border);
        overlay_clone(&mut self.stroke, &rule.stroke);
        overlay(&mut self.opacity, rule.opacity.map(|o| o.min(100)));
        overlay(&mut self.metadata, rule.metadata);
        overlay(&mut self.description, rule.description);
    }
}

/// The effective presentation of a relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelationshipStyle {
    pub thickness: u32,
    pub color: String,
    pub dashed: bool,
    pub routing: Routing,
    pub font_size: u32,
    pub width: u32,
    pub position: u8,
    pub opacity: u8,
}

impl ResolvedRelationshipStyle {
    /// Overlays every attribute the rule sets.
    pub(crate) fn overlay(&mut self, rule: &RelationshipStyle) {
        overlay(&mut self.thickness, rule.thickness);
        overlay_clone(&mut self.color, &rule.color);
        overlay(&mut self.dashed, rule.dashed);
        overlay(&mut self.routing, rule.routing);
        overlay(&mut self.font_size, rule.font_size);
        overlay(&mut self.width, rule.width);
        overlay(&mut self.position, rule.position.map(|p| p.min(100)));
        overlay(&mut self.opacity, rule.opacity.map(|o| o.min(100)));
    }
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn overlay_clone(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}
