//! Well-known tags that diagram models attach to their elements and
//! relationships by default.
//!
//! Style rules keyed by these tags apply to every entity of the matching kind.

pub const ELEMENT: &str = "Element";
pub const RELATIONSHIP: &str = "Relationship";

pub const PERSON: &str = "Person";
pub const SOFTWARE_SYSTEM: &str = "Software System";
pub const CONTAINER: &str = "Container";
pub const COMPONENT: &str = "Component";

pub const DEPLOYMENT_NODE: &str = "Deployment Node";
pub const INFRASTRUCTURE_NODE: &str = "Infrastructure Node";
pub const CONTAINER_INSTANCE: &str = "Container Instance";

pub const SYNCHRONOUS: &str = "Synchronous";
pub const ASYNCHRONOUS: &str = "Asynchronous";

/// Returns the tag if it can key a style rule, `None` when it is missing or blank.
///
/// The tag is returned as given; keys are matched exactly against entity tags.
pub fn usable(tag: Option<&str>) -> Option<&str> {
    tag.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable() {
        assert_eq!(usable(Some("Person")), Some("Person"));
        assert_eq!(usable(Some(" Software System")), Some(" Software System"));
        assert_eq!(usable(Some("")), None);
        assert_eq!(usable(Some(" \t")), None);
        assert_eq!(usable(None), None);
    }
}
