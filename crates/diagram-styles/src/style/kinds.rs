//! Enumerated style attributes: element shapes, border styles and
//! relationship routing.

/// The shape used to draw an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    #[default]
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Cylinder,
    Pipe,
    Person,
    Robot,
    Folder,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
    Component,
}

impl Shape {
    /// All shapes, in declaration order.
    pub const ALL: [Shape; 14] = [
        Shape::Box,
        Shape::RoundedBox,
        Shape::Circle,
        Shape::Ellipse,
        Shape::Hexagon,
        Shape::Cylinder,
        Shape::Pipe,
        Shape::Person,
        Shape::Robot,
        Shape::Folder,
        Shape::WebBrowser,
        Shape::MobileDevicePortrait,
        Shape::MobileDeviceLandscape,
        Shape::Component,
    ];

    /// Returns the canonical name of the shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box => "Box",
            Shape::RoundedBox => "RoundedBox",
            Shape::Circle => "Circle",
            Shape::Ellipse => "Ellipse",
            Shape::Hexagon => "Hexagon",
            Shape::Cylinder => "Cylinder",
            Shape::Pipe => "Pipe",
            Shape::Person => "Person",
            Shape::Robot => "Robot",
            Shape::Folder => "Folder",
            Shape::WebBrowser => "WebBrowser",
            Shape::MobileDevicePortrait => "MobileDevicePortrait",
            Shape::MobileDeviceLandscape => "MobileDeviceLandscape",
            Shape::Component => "Component",
        }
    }

    /// Parses a shape from its canonical name.
    pub fn from_name(name: &str) -> Option<Shape> {
        Shape::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

/// Line style of an element's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Border {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl Border {
    /// Returns the canonical name of the border style.
    pub fn as_str(self) -> &'static str {
        match self {
            Border::Solid => "Solid",
            Border::Dashed => "Dashed",
            Border::Dotted => "Dotted",
        }
    }

    /// Parses a border style from its canonical name.
    pub fn from_name(name: &str) -> Option<Border> {
        match name {
            "Solid" => Some(Border::Solid),
            "Dashed" => Some(Border::Dashed),
            "Dotted" => Some(Border::Dotted),
            _ => None,
        }
    }
}

/// How a relationship line is routed between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Routing {
    #[default]
    Direct,
    Orthogonal,
    Curved,
}

impl Routing {
    /// Returns the canonical name of the routing algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            Routing::Direct => "Direct",
            Routing::Orthogonal => "Orthogonal",
            Routing::Curved => "Curved",
        }
    }

    /// Parses a routing algorithm from its canonical name.
    pub fn from_name(name: &str) -> Option<Routing> {
        match name {
            "Direct" => Some(Routing::Direct),
            "Orthogonal" => Some(Routing::Orthogonal),
            "Curved" => Some(Routing::Curved),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Border {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Routing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names_roundtrip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_name(shape.as_str()), Some(shape));
        }
        assert_eq!(Shape::from_name("Triangle"), None);
        assert_eq!(Shape::from_name("box"), None);
    }

    #[test]
    fn test_border_and_routing_names() {
        assert_eq!(Border::from_name("Dotted"), Some(Border::Dotted));
        assert_eq!(Border::from_name("Wavy"), None);
        assert_eq!(Routing::from_name("Orthogonal"), Some(Routing::Orthogonal));
        assert_eq!(Routing::from_name("Straight"), None);
        assert_eq!(Routing::Curved.to_string(), "Curved");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Shape::default(), Shape::Box);
        assert_eq!(Border::default(), Border::Solid);
        assert_eq!(Routing::default(), Routing::Direct);
    }
}
