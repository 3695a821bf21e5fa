//! Advisory validation of registered style rules.
//!
//! Registration only checks tags. Attribute values are accepted as given, so
//! applications that want stricter guarantees (e.g. before exporting a
//! workspace) can run [`validate_styles`] explicitly.

use tracing::warn;

use crate::error::{StyleKind, ValidationError};
use crate::style::Styles;

/// Returns true if `value` is a `#rrggbb` hex colour code (either case).
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates every colour attribute of every registered rule.
///
/// Returns the first invalid colour found, checking element rules before
/// relationship rules, each in registration order.
pub fn validate_styles(styles: &Styles) -> Result<(), ValidationError> {
    for style in styles.elements() {
        let colors = [
            ("background", &style.background),
            ("color", &style.color),
            ("stroke", &style.stroke),
        ];
        for (field, value) in colors {
            check_color(StyleKind::Element, style.tag(), field, value.as_deref())?;
        }
    }

    for style in styles.relationships() {
        check_color(
            StyleKind::Relationship,
            style.tag(),
            "color",
            style.color.as_deref(),
        )?;
    }

    Ok(())
}

fn check_color(
    kind: StyleKind,
    tag: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !is_hex_color(value) => {
            warn!(%kind, tag, field, value, "invalid colour in style");
            Err(ValidationError::InvalidColor {
                kind,
                tag: tag.to_string(),
                field,
                value: value.to_string(),
            })
        }
        _ => Ok(()),
    }
}
