//! Benchmark for style resolution over a tagged diagram model.
//!
//! Loads style rules plus a model from JSON (or synthesizes a large model when
//! no file is available), resolves every element and relationship, and reports
//! timings and a summary of the resolved styles.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use diagram_styles::{
    ResolvedElementStyle, Shape, StyleError, Styles, Tagged, TaggedRelationship, tags,
    validate_styles,
};
use serde::Deserialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// =============================================================================
// JSON DATA STRUCTURES
// =============================================================================

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    styles: Styles,
    elements: Vec<ElementData>,
    #[serde(default)]
    relationships: Vec<RelationshipData>,
}

#[derive(Debug, Deserialize)]
struct ElementData {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationshipData {
    source: String,
    destination: String,
    #[serde(default)]
    tags: Vec<String>,
    /// Index of the relationship this instance was derived from.
    linked_relationship: Option<usize>,
}

// =============================================================================
// MODEL
// =============================================================================

struct Element {
    name: String,
    tags: Vec<String>,
}

impl Tagged for Element {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

struct Relationship {
    source: Uuid,
    destination: Uuid,
    tags: Vec<String>,
    linked: Option<Rc<Relationship>>,
}

impl Tagged for Relationship {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl TaggedRelationship for Relationship {
    fn linked_relationship(&self) -> Option<&Self> {
        self.linked.as_deref()
    }
}

/// Builds the model, keying every element by a fresh ID. Relationship
/// endpoints are resolved from element names to IDs.
fn build_model(document: &Document) -> (HashMap<Uuid, Element>, Vec<Rc<Relationship>>) {
    let mut ids: HashMap<&str, Uuid> = HashMap::new();
    let mut elements: HashMap<Uuid, Element> = HashMap::with_capacity(document.elements.len());
    for e in &document.elements {
        let id = Uuid::new_v4();
        if ids.insert(e.name.as_str(), id).is_some() {
            warn!(name = %e.name, "duplicate element name, relationships use the last one");
        }
        elements.insert(
            id,
            Element {
                name: e.name.clone(),
                tags: e.tags.clone(),
            },
        );
    }

    let mut relationships: Vec<Rc<Relationship>> =
        Vec::with_capacity(document.relationships.len());
    for (index, r) in document.relationships.iter().enumerate() {
        let (Some(&source), Some(&destination)) =
            (ids.get(r.source.as_str()), ids.get(r.destination.as_str()))
        else {
            warn!(
                index,
                source = %r.source,
                destination = %r.destination,
                "skipping relationship with unknown endpoint"
            );
            continue;
        };

        let linked = match r.linked_relationship {
            Some(i) if i < relationships.len() => Some(Rc::clone(&relationships[i])),
            Some(i) => {
                warn!(index, linked = i, "linked relationship must precede its instance");
                None
            }
            None => None,
        };

        relationships.push(Rc::new(Relationship {
            source,
            destination,
            tags: r.tags.clone(),
            linked,
        }));
    }

    (elements, relationships)
}

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

/// The usual C4 colour scheme.
fn c4_styles() -> Result<Styles, StyleError> {
    let mut styles = Styles::new();
    styles.add_element_style(tags::ELEMENT)?.color("#ffffff");
    styles
        .add_element_style(tags::PERSON)?
        .shape(Shape::Person)
        .background("#08427b");
    styles.add_element_style(tags::SOFTWARE_SYSTEM)?.background("#1168bd");
    styles.add_element_style(tags::CONTAINER)?.background("#438dd5");
    styles
        .add_element_style("Database")?
        .shape(Shape::Cylinder)
        .width(300);
    styles
        .add_relationship_style(tags::RELATIONSHIP)?
        .thickness(3)
        .dashed(false);
    styles.add_relationship_style(tags::ASYNCHRONOUS)?.dashed(true);
    Ok(styles)
}

/// Generates a model of `systems` software systems with ten containers each,
/// chained together, deployed once, with a typical C4 style sheet.
fn synthesize(systems: usize) -> Document {
    let styles = c4_styles().expect("synthetic style sheet is valid");

    let mut elements = Vec::new();
    let mut relationships = Vec::new();
    for s in 0..systems {
        elements.push(ElementData {
            name: format!("System {s}"),
            tags: vec![tags::ELEMENT.into(), tags::SOFTWARE_SYSTEM.into()],
        });
        for c in 0..10 {
            let mut container_tags = vec![tags::ELEMENT.to_string(), tags::CONTAINER.to_string()];
            if c % 5 == 4 {
                container_tags.push("Database".into());
            }
            elements.push(ElementData {
                name: format!("System {s} / Container {c}"),
                tags: container_tags,
            });
            elements.push(ElementData {
                name: format!("System {s} / Container {c} (instance)"),
                tags: vec![tags::CONTAINER_INSTANCE.into()],
            });
        }
        for c in 1..10 {
            let mut relationship_tags = vec![tags::RELATIONSHIP.to_string()];
            if c % 3 == 0 {
                relationship_tags.push(tags::ASYNCHRONOUS.into());
            }
            relationships.push(RelationshipData {
                source: format!("System {s} / Container {}", c - 1),
                destination: format!("System {s} / Container {c}"),
                tags: relationship_tags,
                linked_relationship: None,
            });
            let original = relationships.len() - 1;
            relationships.push(RelationshipData {
                source: format!("System {s} / Container {} (instance)", c - 1),
                destination: format!("System {s} / Container {c} (instance)"),
                tags: Vec::new(),
                linked_relationship: Some(original),
            });
        }
    }

    Document {
        styles,
        elements,
        relationships,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/styles.json".to_string());
    let iterations: usize = std::env::args()
        .nth(2)
        .and_then(|n| n.parse().ok())
        .unwrap_or(100);

    let load_start = Instant::now();
    let document = if Path::new(&data_path).exists() {
        let json_data = fs::read_to_string(&data_path).expect("Failed to read style document");
        serde_json::from_str(&json_data).expect("Failed to parse style document")
    } else {
        println!("{} not found, synthesizing a model", data_path);
        synthesize(1_000)
    };
    println!(
        "Loaded {} element styles, {} relationship styles in {:?}",
        document.styles.elements().len(),
        document.styles.relationships().len(),
        load_start.elapsed()
    );

    if let Err(e) = validate_styles(&document.styles) {
        warn!(error = %e, "style document has invalid attributes");
    }

    let (elements, relationships) = build_model(&document);
    println!(
        "Model: {} elements, {} relationships ({} instances)",
        elements.len(),
        relationships.len(),
        relationships.iter().filter(|r| r.linked.is_some()).count()
    );

    // Benchmark element resolution
    let element_start = Instant::now();
    let mut resolved: HashMap<Uuid, ResolvedElementStyle> =
        HashMap::with_capacity(elements.len());
    for _ in 0..iterations {
        resolved.clear();
        for (id, element) in &elements {
            let style = document.styles.find_element_style(Some(element));
            resolved.insert(*id, style);
        }
    }
    let element_time = element_start.elapsed();
    println!(
        "\nResolved {} elements x {} in {:?} ({:.0} ns/element)",
        elements.len(),
        iterations,
        element_time,
        element_time.as_nanos() as f64 / (elements.len() * iterations).max(1) as f64
    );
    let mut shapes: HashMap<Shape, usize> = HashMap::new();
    for style in resolved.values() {
        *shapes.entry(style.shape).or_default() += 1;
    }
    print_shape_counts(shapes);

    // Benchmark relationship resolution
    let relationship_start = Instant::now();
    let mut dashed = 0;
    for _ in 0..iterations {
        dashed = relationships
            .iter()
            .filter(|r| {
                document
                    .styles
                    .find_relationship_style(Some(&***r))
                    .dashed
            })
            .count();
    }
    let relationship_time = relationship_start.elapsed();
    println!(
        "\nResolved {} relationships x {} in {:?} ({:.0} ns/relationship)",
        relationships.len(),
        iterations,
        relationship_time,
        relationship_time.as_nanos() as f64 / (relationships.len() * iterations).max(1) as f64
    );
    println!("  - dashed: {}", dashed);
    println!("  - solid: {}", relationships.len() - dashed);

    // Join relationship endpoints to the styles resolved above
    println!("\nRelationships by destination shape:");
    let mut destinations: HashMap<Shape, usize> = HashMap::new();
    for r in &relationships {
        let (Some(source), Some(destination)) =
            (resolved.get(&r.source), resolved.get(&r.destination))
        else {
            continue;
        };
        if source.shape != destination.shape {
            debug!(
                source = %elements[&r.source].name,
                destination = %elements[&r.destination].name,
                "relationship crosses shapes"
            );
        }
        *destinations.entry(destination.shape).or_default() += 1;
    }
    print_shape_counts(destinations);
}

fn print_shape_counts(counts: HashMap<Shape, usize>) {
    let mut counts: Vec<(Shape, usize)> = counts.into_iter().collect();
    counts.sort_by_key(|(shape, _)| shape.as_str());
    for (shape, count) in counts {
        println!("  - {}: {}", shape, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationships_reference_element_ids() {
        let document = synthesize(2);
        let (elements, relationships) = build_model(&document);

        assert_eq!(elements.len(), document.elements.len());
        assert_eq!(relationships.len(), document.relationships.len());
        for r in &relationships {
            assert!(elements.contains_key(&r.source));
            assert!(elements.contains_key(&r.destination));
        }

        let instance = relationships
            .iter()
            .find(|r| r.linked.is_some())
            .expect("synthetic model deploys its containers");
        assert!(elements[&instance.source].name.ends_with("(instance)"));
        let style = document.styles.find_relationship_style(Some(&**instance));
        assert_eq!(style.thickness, 3);
    }

    #[test]
    fn test_unknown_endpoint_is_skipped() {
        let document: Document = serde_json::from_str(
            r#"{
                "elements": [{ "name": "A", "tags": ["Element"] }],
                "relationships": [
                    { "source": "A", "destination": "Missing", "tags": ["Relationship"] }
                ]
            }"#,
        )
        .unwrap();
        let (elements, relationships) = build_model(&document);
        assert_eq!(elements.len(), 1);
        assert!(relationships.is_empty());
    }
}
