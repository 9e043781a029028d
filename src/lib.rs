//! recolour - randomize fill and stroke colours of nested vector objects
//!
//! Colours are converted to HSL, each channel is nudged by a bounded random
//! amount, and the result is converted back to RGB. The object tree walker
//! applies this to the fill and stroke of every simple shape it can reach
//! through groups and compound shapes.

pub mod cli;
pub mod colour;
pub mod config;
pub mod error;
pub mod jitter;
pub mod output;
pub mod randomize;
pub mod scene;
pub mod walker;

pub use colour::{hsl_to_rgb, rgb_to_hsl, Colour, Hsl};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{RecolourError, Result};
pub use jitter::{jitter, RngSource, SequenceSource, UniformSource, JITTER_SCALE};
pub use randomize::{ColourRandomizer, Strengths, DEFAULT_STRENGTH};
pub use scene::{
    ColourSpace, CompoundShape, Document, DocumentFormat, GraphicalObject, Group, Paintable,
    SimpleShape, UnknownObject,
};
pub use walker::{randomize_selection, ObjectTreeWalker, WalkStats};
