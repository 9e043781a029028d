pub mod completions;
pub mod convert;
pub mod init;
pub mod inspect;
pub mod randomize;

use clap::{Parser, Subcommand};

/// recolour - randomize fill and stroke colours in HSL space
#[derive(Parser, Debug)]
#[command(name = "recolour")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Randomize the colours of every shape in a document's selection
    Randomize(randomize::RandomizeArgs),

    /// Show the object tree of a document without changing it
    Inspect(inspect::InspectArgs),

    /// Show the HSL form of hex colours
    Convert(convert::ConvertArgs),

    /// Write a default recolour.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_randomize_flags() {
        let cli = Cli::try_parse_from([
            "recolour", "randomize", "scene.yaml", "--hue", "2.5", "--seed", "9", "--in-place",
        ])
        .unwrap();

        let Commands::Randomize(args) = cli.command else {
            panic!("Expected randomize");
        };
        assert_eq!(args.hue, Some(2.5));
        assert_eq!(args.saturation, None);
        assert_eq!(args.seed, Some(9));
        assert!(args.in_place);
    }

    #[test]
    fn test_rejects_non_numeric_strength() {
        let result = Cli::try_parse_from(["recolour", "randomize", "scene.yaml", "--hue", "lots"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["recolour", "randomize", "scene.yaml", "--hue", "NaN"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_and_in_place_conflict() {
        let result = Cli::try_parse_from([
            "recolour", "randomize", "scene.yaml", "-o", "out.yaml", "--in-place",
        ]);
        assert!(result.is_err());
    }
}
