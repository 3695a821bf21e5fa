//! Built-in default styles.
//!
//! Every resolution starts from a fresh copy of these values. The shared
//! instances are frozen; callers only ever receive clones.

use lazy_static::lazy_static;

use crate::style::{Border, ResolvedElementStyle, ResolvedRelationshipStyle, Routing, Shape};

/// Default element width for shapes without a dedicated size.
pub const ELEMENT_WIDTH: u32 = 450;
/// Default element height for shapes without a dedicated size.
pub const ELEMENT_HEIGHT: u32 = 300;
/// Default width and height of a `Person` element.
pub const PERSON_SIZE: u32 = 400;

pub const ELEMENT_BACKGROUND: &str = "#dddddd";
pub const ELEMENT_COLOR: &str = "#000000";
pub const ELEMENT_STROKE: &str = "#9a9a9a";
pub const FONT_SIZE: u32 = 24;
pub const OPACITY: u8 = 100;

pub const RELATIONSHIP_THICKNESS: u32 = 2;
pub const RELATIONSHIP_COLOR: &str = "#707070";
pub const RELATIONSHIP_WIDTH: u32 = 200;
pub const RELATIONSHIP_POSITION: u8 = 50;

lazy_static! {
    static ref ELEMENT_STYLE: ResolvedElementStyle = ResolvedElementStyle {
        width: ELEMENT_WIDTH,
        height: ELEMENT_HEIGHT,
        background: ELEMENT_BACKGROUND.to_string(),
        color: ELEMENT_COLOR.to_string(),
        font_size: FONT_SIZE,
        shape: Shape::Box,
        icon: None,
        border: Border::Solid,
        stroke: ELEMENT_STROKE.to_string(),
        opacity: OPACITY,
        metadata: true,
        description: true,
    };
    static ref RELATIONSHIP_STYLE: ResolvedRelationshipStyle = ResolvedRelationshipStyle {
        thickness: RELATIONSHIP_THICKNESS,
        color: RELATIONSHIP_COLOR.to_string(),
        dashed: true,
        routing: Routing::Direct,
        font_size: FONT_SIZE,
        width: RELATIONSHIP_WIDTH,
        position: RELATIONSHIP_POSITION,
        opacity: OPACITY,
    };
}

/// Returns a fresh copy of the default element style.
pub fn element_style() -> ResolvedElementStyle {
    ELEMENT_STYLE.clone()
}

/// Returns a fresh copy of the default relationship style.
pub fn relationship_style() -> ResolvedRelationshipStyle {
    RELATIONSHIP_STYLE.clone()
}

/// Returns the default `(width, height)` for an element drawn with `shape`.
///
/// Only applies to dimensions that no rule set explicitly.
pub fn size_for_shape(shape: Shape) -> (u32, u32) {
    match shape {
        Shape::Person => (PERSON_SIZE, PERSON_SIZE),
        _ => (ELEMENT_WIDTH, ELEMENT_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_element_style() {
        let style = element_style();
        assert_eq!(style.width, 450);
        assert_eq!(style.height, 300);
        assert_eq!(style.background, "#dddddd");
        assert_eq!(style.color, "#000000");
        assert_eq!(style.font_size, 24);
        assert_eq!(style.shape, Shape::Box);
        assert_eq!(style.icon, None);
        assert_eq!(style.border, Border::Solid);
        assert_eq!(style.stroke, "#9a9a9a");
        assert_eq!(style.opacity, 100);
        assert!(style.metadata);
        assert!(style.description);
    }

    #[test]
    fn test_default_relationship_style() {
        let style = relationship_style();
        assert_eq!(style.thickness, 2);
        assert_eq!(style.color, "#707070");
        assert!(style.dashed);
        assert_eq!(style.routing, Routing::Direct);
        assert_eq!(style.font_size, 24);
        assert_eq!(style.width, 200);
        assert_eq!(style.position, 50);
        assert_eq!(style.opacity, 100);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut first = element_style();
        first.background = "#ff0000".to_string();
        assert_eq!(element_style().background, "#dddddd");
    }

    #[test]
    fn test_size_for_shape() {
        assert_eq!(size_for_shape(Shape::Box), (450, 300));
        assert_eq!(size_for_shape(Shape::Person), (400, 400));
        assert_eq!(size_for_shape(Shape::Cylinder), (450, 300));
    }
}
