//! Recursive traversal that recolours every simple shape in a selection.

use crate::jitter::UniformSource;
use crate::randomize::{ColourRandomizer, Strengths};
use crate::scene::{CompoundShape, GraphicalObject, Group, Paintable};

/// What a traversal touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkStats {
    /// Simple shapes visited, colourable or not.
    pub shapes: usize,
    /// Fill colours replaced.
    pub fills: usize,
    /// Stroke colours replaced.
    pub strokes: usize,
    /// Groups and compound shapes descended into.
    pub containers: usize,
    /// Objects of an unrecognized kind that were skipped.
    pub skipped: usize,
}

impl WalkStats {
    /// Total number of colours replaced.
    pub fn recoloured(&self) -> usize {
        self.fills + self.strokes
    }
}

/// Walks object trees depth-first, in insertion order, randomizing the fill
/// and stroke of each simple shape independently.
#[derive(Debug)]
pub struct ObjectTreeWalker<S> {
    randomizer: ColourRandomizer<S>,
    stats: WalkStats,
}

impl<S: UniformSource> ObjectTreeWalker<S> {
    pub fn new(randomizer: ColourRandomizer<S>) -> Self {
        Self {
            randomizer,
            stats: WalkStats::default(),
        }
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    pub fn into_randomizer(self) -> ColourRandomizer<S> {
        self.randomizer
    }

    /// Visit each root of a selection in order.
    pub fn visit_selection(&mut self, selection: &mut [GraphicalObject]) -> WalkStats {
        let before = self.stats;
        for object in selection.iter_mut() {
            self.visit(object);
        }
        diff(self.stats, before)
    }

    /// Visit one object and everything below it.
    pub fn visit(&mut self, object: &mut GraphicalObject) {
        match object {
            GraphicalObject::Simple(shape) => self.paint(shape),
            GraphicalObject::Compound(compound) => self.visit_compound(compound),
            GraphicalObject::Group(group) => self.visit_group(group),
            GraphicalObject::Unknown(_) => self.stats.skipped += 1,
        }
    }

    fn visit_compound(&mut self, compound: &mut CompoundShape) {
        self.stats.containers += 1;
        for path in compound.paths.iter_mut() {
            self.paint(path);
        }
    }

    fn visit_group(&mut self, group: &mut Group) {
        self.stats.containers += 1;
        for item in group.items.iter_mut() {
            self.visit(item);
        }
    }

    /// Randomize the colours of one leaf.
    pub fn paint<P: Paintable + ?Sized>(&mut self, leaf: &mut P) {
        self.stats.shapes += 1;

        if let Some(fill) = leaf.fill() {
            leaf.set_fill(self.randomizer.randomize_colour(fill));
            self.stats.fills += 1;
        }

        if let Some(stroke) = leaf.stroke() {
            leaf.set_stroke(self.randomizer.randomize_colour(stroke));
            self.stats.strokes += 1;
        }
    }
}

/// Randomize every simple shape reachable from `selection`.
pub fn randomize_selection<S: UniformSource>(
    selection: &mut [GraphicalObject],
    strengths: Strengths,
    source: S,
) -> WalkStats {
    ObjectTreeWalker::new(ColourRandomizer::new(strengths, source)).visit_selection(selection)
}

fn diff(after: WalkStats, before: WalkStats) -> WalkStats {
    WalkStats {
        shapes: after.shapes - before.shapes,
        fills: after.fills - before.fills,
        strokes: after.strokes - before.strokes,
        containers: after.containers - before.containers,
        skipped: after.skipped - before.skipped,
    }
}
