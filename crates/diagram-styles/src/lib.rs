//! Tag-keyed styles for architecture diagram models.
//!
//! This crate resolves the visual presentation of diagram elements and
//! relationships (size, colours, shape, line routing, ...) from a set of
//! user-defined style rules layered over built-in defaults.
//!
//! # Overview
//!
//! - Every rule is keyed by exactly one tag and sets only the attributes it
//!   cares about.
//! - Entities carry an ordered sequence of tags. Resolution starts from the
//!   defaults and overlays the rule for each of the entity's tags in turn, so
//!   later tags win.
//! - Relationship instances (deployment-time copies of a model relationship)
//!   are styled as the relationship they were derived from.
//!
//! # Quick Start
//!
//! ```rust
//! use diagram_styles::{Shape, Styles, tags};
//!
//! let mut styles = Styles::new();
//! styles
//!     .add_element_style(tags::PERSON)?
//!     .shape(Shape::Person)
//!     .background("#08427b")
//!     .color("#ffffff");
//! styles.add_element_style("External")?.background("#999999");
//!
//! let customer = vec![
//!     tags::ELEMENT.to_string(),
//!     tags::PERSON.to_string(),
//!     "External".to_string(),
//! ];
//! let style = styles.find_element_style(Some(&customer));
//!
//! assert_eq!(style.shape, Shape::Person);
//! assert_eq!(style.background, "#999999");
//! assert_eq!(style.color, "#ffffff");
//! assert_eq!((style.width, style.height), (400, 400));
//! # Ok::<(), diagram_styles::StyleError>(())
//! ```
//!
//! # Modules
//!
//! - [`style`]: Rule types, effective styles and the [`Styles`] registry
//! - [`resolve`]: The model traits consumed by resolution
//! - [`defaults`]: Built-in default styles
//! - [`tags`]: Well-known tags
//! - [`validate`]: Advisory attribute validation
//! - [`error`]: Error types
//!
//! # Concurrency
//!
//! A [`Styles`] value is plain data. Resolution takes `&self` and never
//! mutates; registration and clearing take `&mut self`, so the borrow checker
//! already rules out resolving while another thread mutates. Wrap it in a lock
//! to share a mutable configuration across threads.

pub mod defaults;
pub mod error;
pub mod resolve;
pub mod style;
pub mod tags;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ErrorKind, StyleError, StyleKind, ValidationError};
pub use resolve::{Tagged, TaggedRelationship};
pub use style::{
    Border, ElementStyle, RelationshipStyle, ResolvedElementStyle, ResolvedRelationshipStyle,
    Routing, Shape, Style, Styles,
};
pub use validate::{is_hex_color, validate_styles};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
