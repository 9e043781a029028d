//! Graphical objects: simple shapes, compound shapes and groups.
//!
//! Only simple shapes carry colours. Compound shapes are built from simple
//! shapes only; groups can hold anything, including other groups. Objects of
//! any other kind are kept as [`UnknownObject`] so they survive a load/save
//! cycle untouched. Fields the known kinds do not model are kept in `extra`
//! for the same reason.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Mapping;

use crate::colour::Colour;

/// Read and write access to the colours of a leaf object.
pub trait Paintable {
    /// Fill colour, if the object is filled.
    fn fill(&self) -> Option<Colour>;

    fn set_fill(&mut self, colour: Colour);

    /// Stroke colour, if the object is stroked.
    fn stroke(&self) -> Option<Colour>;

    fn set_stroke(&mut self, colour: Colour);
}

/// A single path with an optional fill and an optional stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub filled: bool,

    /// Only meaningful when `filled` is set.
    pub fill: Colour,

    pub stroked: bool,

    /// Only meaningful when `stroked` is set.
    pub stroke: Colour,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl SimpleShape {
    /// A shape with neither fill nor stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filled, unstroked shape.
    pub fn filled(fill: Colour) -> Self {
        Self {
            filled: true,
            fill,
            ..Self::default()
        }
    }

    /// A stroked, unfilled shape.
    pub fn stroked(stroke: Colour) -> Self {
        Self {
            stroked: true,
            stroke,
            ..Self::default()
        }
    }

    /// Add a stroke to this shape.
    pub fn with_stroke(mut self, stroke: Colour) -> Self {
        self.stroked = true;
        self.stroke = stroke;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Paintable for SimpleShape {
    fn fill(&self) -> Option<Colour> {
        self.filled.then_some(self.fill)
    }

    fn set_fill(&mut self, colour: Colour) {
        self.fill = colour;
    }

    fn stroke(&self) -> Option<Colour> {
        self.stroked.then_some(self.stroke)
    }

    fn set_stroke(&mut self, colour: Colour) {
        self.stroke = colour;
    }
}

/// A shape made of several simple paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub paths: Vec<SimpleShape>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl CompoundShape {
    pub fn new(paths: Vec<SimpleShape>) -> Self {
        Self {
            name: None,
            paths,
            extra: Mapping::new(),
        }
    }
}

/// An ordered container of arbitrary objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub items: Vec<GraphicalObject>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl Group {
    pub fn new(items: Vec<GraphicalObject>) -> Self {
        Self {
            name: None,
            items,
            extra: Mapping::new(),
        }
    }
}

/// An object whose kind is not recognized, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownObject {
    raw: serde_yaml::Value,
}

impl UnknownObject {
    pub fn new(raw: serde_yaml::Value) -> Self {
        Self { raw }
    }

    /// The `kind` field as written, if there was one.
    pub fn kind(&self) -> Option<&str> {
        self.raw.get("kind").and_then(serde_yaml::Value::as_str)
    }
}

/// Any object that can appear in a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicalObject {
    Simple(SimpleShape),
    Compound(CompoundShape),
    Group(Group),
    Unknown(UnknownObject),
}

impl GraphicalObject {
    /// The `kind` tag used in documents.
    pub fn kind(&self) -> &str {
        match self {
            GraphicalObject::Simple(_) => "path",
            GraphicalObject::Compound(_) => "compound",
            GraphicalObject::Group(_) => "group",
            GraphicalObject::Unknown(unknown) => unknown.kind().unwrap_or("unknown"),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GraphicalObject::Simple(shape) => shape.name.as_deref(),
            GraphicalObject::Compound(compound) => compound.name.as_deref(),
            GraphicalObject::Group(group) => group.name.as_deref(),
            GraphicalObject::Unknown(unknown) => {
                unknown.raw.get("name").and_then(serde_yaml::Value::as_str)
            }
        }
    }

    /// Count simple shapes reachable from this object.
    pub fn shape_count(&self) -> usize {
        match self {
            GraphicalObject::Simple(_) => 1,
            GraphicalObject::Compound(compound) => compound.paths.len(),
            GraphicalObject::Group(group) => group.items.iter().map(Self::shape_count).sum(),
            GraphicalObject::Unknown(_) => 0,
        }
    }
}

impl From<SimpleShape> for GraphicalObject {
    fn from(shape: SimpleShape) -> Self {
        GraphicalObject::Simple(shape)
    }
}

impl From<CompoundShape> for GraphicalObject {
    fn from(compound: CompoundShape) -> Self {
        GraphicalObject::Compound(compound)
    }
}

impl From<Group> for GraphicalObject {
    fn from(group: Group) -> Self {
        GraphicalObject::Group(group)
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TaggedRef<'a> {
    Path(&'a SimpleShape),
    Compound(&'a CompoundShape),
    Group(&'a Group),
}

impl Serialize for GraphicalObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GraphicalObject::Simple(shape) => TaggedRef::Path(shape).serialize(serializer),
            GraphicalObject::Compound(compound) => {
                TaggedRef::Compound(compound).serialize(serializer)
            }
            GraphicalObject::Group(group) => TaggedRef::Group(group).serialize(serializer),
            GraphicalObject::Unknown(unknown) => unknown.raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GraphicalObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_yaml::Value::deserialize(deserializer)?;
        let kind = value
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .map(str::to_owned);

        // The tag is written back on save, so keep it out of `extra`
        if matches!(kind.as_deref(), Some("path" | "compound" | "group")) {
            if let Some(mapping) = value.as_mapping_mut() {
                mapping.shift_remove("kind");
            }
        }

        match kind.as_deref() {
            Some("path") => serde_yaml::from_value(value)
                .map(GraphicalObject::Simple)
                .map_err(serde::de::Error::custom),
            Some("compound") => serde_yaml::from_value(value)
                .map(GraphicalObject::Compound)
                .map_err(serde::de::Error::custom),
            Some("group") => serde_yaml::from_value(value)
                .map(GraphicalObject::Group)
                .map_err(serde::de::Error::custom),
            _ => Ok(GraphicalObject::Unknown(UnknownObject::new(value))),
        }
    }
}
