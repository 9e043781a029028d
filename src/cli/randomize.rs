//! Randomize command implementation.
//!
//! Loads a document, checks it can be recoloured, walks the selection and
//! writes the result to a file or stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::jitter::RngSource;
use crate::output::{display_path, plural, Printer};
use crate::randomize::Strengths;
use crate::scene::{Document, DocumentFormat};
use crate::walker::randomize_selection;

/// Highest strength the tool is calibrated for.
const MAX_STRENGTH: f64 = 10.0;

/// Randomize the colours of every shape in a document's selection
#[derive(Args, Debug)]
pub struct RandomizeArgs {
    /// Scene document (YAML, or JSON by extension)
    pub file: PathBuf,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite the input document
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,

    /// How random the hue is (0 to 10)
    #[arg(long, value_parser = parse_strength)]
    pub hue: Option<f64>,

    /// How random the saturation is (0 to 10)
    #[arg(long, value_parser = parse_strength)]
    pub saturation: Option<f64>,

    /// How random the lightness is (0 to 10)
    #[arg(long, value_parser = parse_strength)]
    pub lightness: Option<f64>,

    /// Seed for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (default: recolour.yaml next to the document, then in
    /// the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RandomizeArgs {
    /// Command line strengths layered over the configured ones.
    fn strengths(&self, config: &Config) -> Strengths {
        let base = config.strengths;
        Strengths::new(
            self.hue.unwrap_or(base.hue),
            self.saturation.unwrap_or(base.saturation),
            self.lightness.unwrap_or(base.lightness),
        )
    }
}

pub fn run(args: RandomizeArgs, printer: &Printer) -> Result<()> {
    let mut document = Document::load(&args.file)?;
    document.check_preconditions()?;

    let config = load_config(&args, printer)?;
    let strengths = args.strengths(&config);
    warn_about_strengths(strengths, printer);

    let seed = args.seed.or(config.seed);
    let source = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let stats = randomize_selection(&mut document.selection, strengths, source);

    printer.status(
        "Randomized",
        &format!(
            "{} across {}",
            plural(stats.recoloured(), "colour", "colours"),
            plural(stats.shapes, "shape", "shapes")
        ),
    );
    if stats.skipped > 0 {
        printer.warning(
            "Skipped",
            &plural(stats.skipped, "object of unknown kind", "objects of unknown kind"),
        );
    }
    if let Some(seed) = seed {
        printer.info("Seed", &seed.to_string());
    }

    let destination = if args.in_place {
        Some(args.file.clone())
    } else {
        args.output.clone()
    };

    match destination {
        Some(path) => {
            document.save(&path)?;
            printer.status("Wrote", &display_path(&path));
        }
        None => {
            let format = DocumentFormat::from_path(&args.file);
            print!("{}", document.to_string(format)?);
        }
    }

    Ok(())
}

fn load_config(args: &RandomizeArgs, printer: &Printer) -> Result<Config> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => {
            let doc_dir = args
                .file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            Config::find([doc_dir, Path::new(".")])
        }
    };

    match path {
        Some(path) => {
            printer.info("Config", &display_path(&path));
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

fn warn_about_strengths(strengths: Strengths, printer: &Printer) {
    if strengths.is_zero() {
        printer.warning("Strength", "all strengths are 0, colours will not change");
        return;
    }

    for (name, value) in strengths.channels() {
        if !(0.0..=MAX_STRENGTH).contains(&value) {
            printer.warning(
                "Strength",
                &format!("{} strength {} is outside 0 to {}", name, value, MAX_STRENGTH),
            );
        }
    }
}

/// Parse a strength flag, rejecting anything that is not a finite number.
fn parse_strength(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if !value.is_finite() {
        return Err(format!("`{}` is not a finite number", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::error::RecolourError;
    use crate::scene::GraphicalObject;
    use tempfile::tempdir;

    const SCENE: &str = r##"colour_space: rgb
selection:
  - kind: path
    filled: true
    fill: "#C83232"
    stroked: true
    stroke: "#C83232"
  - kind: text
    contents: keep me
"##;

    fn args(file: PathBuf) -> RandomizeArgs {
        RandomizeArgs {
            file,
            output: None,
            in_place: false,
            hue: None,
            saturation: None,
            lightness: None,
            seed: Some(1),
            config: None,
        }
    }

    fn first_shape(doc: &Document) -> (Colour, Colour) {
        match &doc.selection[0] {
            GraphicalObject::Simple(shape) => (shape.fill, shape.stroke),
            other => panic!("Expected a simple shape, got {}", other.kind()),
        }
    }

    #[test]
    fn test_zero_strengths_keep_colours() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scene.yaml");
        let output = dir.path().join("out.yaml");
        std::fs::write(&input, SCENE).unwrap();

        let args = RandomizeArgs {
            output: Some(output.clone()),
            hue: Some(0.0),
            saturation: Some(0.0),
            lightness: Some(0.0),
            ..args(input)
        };
        run(args, &Printer::quiet()).unwrap();

        let doc = Document::load(&output).unwrap();
        let (fill, stroke) = first_shape(&doc);
        assert!(fill.max_channel_delta(Colour::rgb(200, 50, 50)) <= 1);
        assert!(stroke.max_channel_delta(Colour::rgb(200, 50, 50)) <= 1);
        assert_eq!(doc.selection[1].kind(), "text");
    }

    #[test]
    fn test_in_place_with_seed_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.yaml");
        let b = dir.path().join("b.yaml");
        std::fs::write(&a, SCENE).unwrap();
        std::fs::write(&b, SCENE).unwrap();

        for path in [&a, &b] {
            let args = RandomizeArgs {
                in_place: true,
                hue: Some(6.0),
                ..args(path.clone())
            };
            run(args, &Printer::quiet()).unwrap();
        }

        let doc_a = Document::load(&a).unwrap();
        let doc_b = Document::load(&b).unwrap();
        assert_eq!(doc_a, doc_b);

        let (fill, stroke) = first_shape(&doc_a);
        assert_ne!(fill, stroke);
    }

    #[test]
    fn test_config_next_to_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scene.yaml");
        std::fs::write(&input, SCENE).unwrap();
        std::fs::write(
            dir.path().join(crate::config::CONFIG_FILENAME),
            "strengths:\n  hue: 9\n  saturation: 1\nseed: 5\n",
        )
        .unwrap();

        let args = RandomizeArgs {
            lightness: Some(0.0),
            seed: None,
            ..args(input)
        };
        let config = load_config(&args, &Printer::quiet()).unwrap();

        assert_eq!(config.seed, Some(5));
        assert_eq!(args.strengths(&config), Strengths::new(9.0, 1.0, 0.0));
    }

    #[test]
    fn test_rejects_non_rgb_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scene.yaml");
        std::fs::write(&input, "colour_space: cmyk\nselection:\n  - kind: path\n").unwrap();

        let err = run(args(input.clone()), &Printer::quiet()).unwrap_err();
        assert!(matches!(err, RecolourError::Precondition { .. }));

        // Refused documents are left alone
        let content = std::fs::read_to_string(&input).unwrap();
        assert!(content.starts_with("colour_space: cmyk"));
    }

    #[test]
    fn test_rejects_empty_selection() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scene.json");
        std::fs::write(&input, r#"{"colour_space": "rgb", "selection": []}"#).unwrap();

        let err = run(args(input), &Printer::quiet()).unwrap_err();
        assert_eq!(err.to_string(), "Nothing is selected");
    }

    #[test]
    fn test_parse_strength() {
        assert_eq!(parse_strength("4"), Ok(4.0));
        assert_eq!(parse_strength(" 0.5 "), Ok(0.5));
        assert!(parse_strength("four").is_err());
        assert!(parse_strength("inf").is_err());
    }
}
