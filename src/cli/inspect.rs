//! Inspect command implementation.
//!
//! Prints the object tree of a document to stdout without modifying it.

use std::path::PathBuf;

use clap::Args;

use crate::colour::Colour;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::scene::{Document, GraphicalObject, Paintable, SimpleShape};

/// Show the object tree of a document without changing it
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Scene document to inspect
    pub file: PathBuf,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let document = Document::load(&args.file)?;

    printer.info(
        "Inspecting",
        &format!("{} ({})", display_path(&args.file), document.colour_space),
    );

    let tree = describe(&document.selection);
    if !tree.is_empty() {
        println!("{}", tree);
    }

    printer.status(
        "Found",
        &format!(
            "{} in {}",
            plural(document.shape_count(), "shape", "shapes"),
            plural(document.selection.len(), "selected object", "selected objects")
        ),
    );

    Ok(())
}

/// Render a selection as an indented outline, one object per line.
pub fn describe(selection: &[GraphicalObject]) -> String {
    let mut lines = Vec::new();
    for object in selection {
        describe_object(object, 0, &mut lines);
    }
    lines.join("\n")
}

fn describe_object(object: &GraphicalObject, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let label = match object.name() {
        Some(name) => format!("{} \"{}\"", object.kind(), name),
        None => object.kind().to_string(),
    };

    match object {
        GraphicalObject::Simple(shape) => {
            lines.push(format!("{}{}", indent, describe_shape(&label, shape)));
        }
        GraphicalObject::Compound(compound) => {
            let count = plural(compound.paths.len(), "path", "paths");
            lines.push(format!("{}{} ({})", indent, label, count));
            for path in &compound.paths {
                let label = match &path.name {
                    Some(name) => format!("path \"{}\"", name),
                    None => "path".to_string(),
                };
                lines.push(format!("{}  {}", indent, describe_shape(&label, path)));
            }
        }
        GraphicalObject::Group(group) => {
            let count = plural(group.items.len(), "item", "items");
            lines.push(format!("{}{} ({})", indent, label, count));
            for item in &group.items {
                describe_object(item, depth + 1, lines);
            }
        }
        GraphicalObject::Unknown(_) => {
            lines.push(format!("{}{} (skipped)", indent, label));
        }
    }
}

fn describe_shape(label: &str, shape: &SimpleShape) -> String {
    format!(
        "{} fill={} stroke={}",
        label,
        show(shape.fill()),
        show(shape.stroke())
    )
}

fn show(colour: Option<Colour>) -> String {
    colour.map_or_else(|| "none".to_string(), |c| c.to_string())
}
