//! Convert command implementation.
//!
//! Prints each colour in RGB and HSL form, plus what it becomes after a
//! round trip through HSL.

use clap::Args;

use crate::colour::Colour;
use crate::error::Result;
use crate::output::Printer;

/// Show the HSL form of hex colours
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colours to convert (#RGB or #RRGGBB)
    #[arg(required = true)]
    pub colours: Vec<Colour>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    for colour in &args.colours {
        println!("{}", describe(*colour));

        let back = colour.to_hsl().to_rgb();
        if back != *colour {
            printer.warning(
                "Rounded",
                &format!("{} comes back as {}", printer.swatch(*colour), printer.swatch(back)),
            );
        }
    }
    Ok(())
}

/// One line describing a colour in both representations.
pub fn describe(colour: Colour) -> String {
    let Colour { r, g, b } = colour;
    let hsl = colour.to_hsl();
    format!(
        "{}  rgb({}, {}, {})  {}  -> {}",
        colour,
        r,
        g,
        b,
        hsl,
        hsl.to_rgb()
    )
}
