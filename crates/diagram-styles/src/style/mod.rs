//! Style rule types and the style registry.
//!
//! This module contains:
//! - Attribute enums (shapes, borders, routing)
//! - Element and relationship rules (partially-specified, keyed by tag)
//! - Effective styles (fully-populated results of resolution)
//! - The [`Styles`] registry

pub mod element;
pub mod kinds;
pub mod registry;
pub mod relationship;
pub mod resolved;

pub use element::ElementStyle;
pub use kinds::{Border, Routing, Shape};
pub use registry::{Style, Styles};
pub use relationship::RelationshipStyle;
pub use resolved::{ResolvedElementStyle, ResolvedRelationshipStyle};
