//! A minimal diagram model for exercising style resolution.
//!
//! Elements and relationships get the default tags a C4 model assigns.
//! Adding a container to a deployment node creates a container instance and
//! replicates every relationship between already-deployed containers as a
//! relationship instance linked back to the original.

#![allow(dead_code)]

use std::rc::Rc;

use diagram_styles::{Tagged, TaggedRelationship, tags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementId(usize);

#[derive(Debug)]
pub struct Element {
    pub name: String,
    pub tags: Vec<String>,
    pub parent: Option<ElementId>,
    /// For container instances, the container that was deployed.
    instance_of: Option<ElementId>,
}

impl Element {
    pub fn add_tags(&mut self, extra: &[&str]) {
        for tag in extra {
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
    }
}

impl Tagged for Element {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[derive(Debug)]
pub struct Relationship {
    pub source: ElementId,
    pub destination: ElementId,
    pub description: String,
    pub tags: Vec<String>,
    pub linked: Option<Rc<Relationship>>,
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

#[derive(Debug, Default)]
pub struct Model {
    elements: Vec<Element>,
    relationships: Vec<Rc<Relationship>>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_element(&mut self, name: &str, kind: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            name: name.to_string(),
            tags: vec![tags::ELEMENT.to_string(), kind.to_string()],
            parent: None,
            instance_of: None,
        });
        id
    }

    pub fn add_person(&mut self, name: &str) -> ElementId {
        self.add_element(name, tags::PERSON)
    }

    pub fn add_software_system(&mut self, name: &str) -> ElementId {
        self.add_element(name, tags::SOFTWARE_SYSTEM)
    }

    pub fn add_container(&mut self, name: &str) -> ElementId {
        self.add_element(name, tags::CONTAINER)
    }

    pub fn add_deployment_node(&mut self, name: &str) -> ElementId {
        self.add_element(name, tags::DEPLOYMENT_NODE)
    }

    /// Deploys `container`, replicating relationships to and from containers
    /// that are already deployed.
    pub fn add_container_instance(&mut self, node: ElementId, container: ElementId) -> ElementId {
        let name = self.element(container).name.clone();
        let instance = ElementId(self.elements.len());
        self.elements.push(Element {
            name,
            tags: vec![tags::CONTAINER_INSTANCE.to_string()],
            parent: Some(node),
            instance_of: Some(container),
        });

        let deployed: Vec<(ElementId, ElementId)> = self
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.instance_of.map(|of| (ElementId(i), of)))
            .filter(|(id, _)| *id != instance)
            .collect();

        let originals: Vec<Rc<Relationship>> = self
            .relationships
            .iter()
            .filter(|r| r.linked.is_none())
            .cloned()
            .collect();

        for original in originals {
            for (other, other_container) in &deployed {
                let endpoints = if original.source == container
                    && original.destination == *other_container
                {
                    Some((instance, *other))
                } else if original.source == *other_container && original.destination == container
                {
                    Some((*other, instance))
                } else {
                    None
                };

                if let Some((source, destination)) = endpoints {
                    self.relationships.push(Rc::new(Relationship {
                        source,
                        destination,
                        description: original.description.clone(),
                        tags: Vec::new(),
                        linked: Some(Rc::clone(&original)),
                    }));
                }
            }
        }

        instance
    }

    /// Adds a relationship carrying the default tag plus `extra_tags`.
    pub fn uses(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
        extra_tags: &[&str],
    ) -> Rc<Relationship> {
        let mut all_tags = vec![tags::RELATIONSHIP.to_string()];
        all_tags.extend(extra_tags.iter().map(|t| t.to_string()));

        let relationship = Rc::new(Relationship {
            source,
            destination,
            description: description.to_string(),
            tags: all_tags,
            linked: None,
        });
        self.relationships.push(Rc::clone(&relationship));
        relationship
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// The relationship from `source` to `destination`, if one exists.
    pub fn efferent_relationship(
        &self,
        source: ElementId,
        destination: ElementId,
    ) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|r| r.source == source && r.destination == destination)
            .map(|r| r.as_ref())
    }
}
