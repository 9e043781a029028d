use clap::Parser;
use miette::Result;
use recolour::cli::{Cli, Commands};
use recolour::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Randomize(args) => recolour::cli::randomize::run(args, &printer)?,
        Commands::Inspect(args) => recolour::cli::inspect::run(args, &printer)?,
        Commands::Convert(args) => recolour::cli::convert::run(args, &printer)?,
        Commands::Init(args) => recolour::cli::init::run(args, &printer)?,
        Commands::Completions(args) => recolour::cli::completions::run(args)?,
    }

    Ok(())
}
