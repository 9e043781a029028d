//! The object tree the randomizer walks over.
//!
//! - `GraphicalObject` - simple shapes, compound shapes, groups and unknowns
//! - `Paintable` - colour access on leaf objects
//! - `Document` - a colour space plus the selected root objects

mod document;
mod object;

pub use document::{ColourSpace, Document, DocumentFormat};
pub use object::{CompoundShape, GraphicalObject, Group, Paintable, SimpleShape, UnknownObject};
