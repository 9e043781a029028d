//! Per-colour randomization in HSL space.

use serde::{Deserialize, Serialize};

use crate::colour::{hsl_to_rgb, rgb_to_hsl, Colour, Hsl};
use crate::jitter::{jitter, UniformSource};

/// Strength used for each channel when nothing else is configured.
pub const DEFAULT_STRENGTH: f64 = 4.0;

/// How strongly each HSL channel is perturbed, nominally `0` to `10`.
///
/// Values outside that range are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strengths {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Strengths {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// All three channels left untouched.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Same strength on every channel.
    pub const fn uniform(strength: f64) -> Self {
        Self::new(strength, strength, strength)
    }

    /// Each channel's strength, labelled by channel name.
    pub fn channels(&self) -> [(&'static str, f64); 3] {
        [
            ("hue", self.hue),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.channels().iter().all(|&(_, value)| value == 0.0)
    }
}

impl Default for Strengths {
    fn default() -> Self {
        Self::uniform(DEFAULT_STRENGTH)
    }
}

/// Produces new colours from old ones using a fixed set of strengths.
#[derive(Debug)]
pub struct ColourRandomizer<S> {
    strengths: Strengths,
    source: S,
}

impl<S: UniformSource> ColourRandomizer<S> {
    pub fn new(strengths: Strengths, source: S) -> Self {
        Self { strengths, source }
    }

    /// Give back the random source, e.g. to inspect how much was drawn.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Return a randomized copy of `colour`.
    ///
    /// Hue, saturation and lightness are jittered independently in that
    /// order, each clamped to `[0, 1]`.
    pub fn randomize_colour(&mut self, colour: Colour) -> Colour {
        let hsl = rgb_to_hsl(colour);
        let Strengths {
            hue,
            saturation,
            lightness,
        } = self.strengths;

        let jittered = Hsl::new(
            jitter(&mut self.source, hsl.hue, hue, 0.0, 1.0),
            jitter(&mut self.source, hsl.saturation, saturation, 0.0, 1.0),
            jitter(&mut self.source, hsl.lightness, lightness, 0.0, 1.0),
        );

        hsl_to_rgb(jittered)
    }
}
