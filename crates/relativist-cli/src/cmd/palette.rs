// crates/relativist-cli/src/cmd/palette.rs

use clap::{Args, ValueEnum};
use relativist_core::color::to_hex;
use relativist_core::session::palette::{generate_palette, BAND_LEN};

use crate::io::jsonl;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum PaletteFmt {
    /// One JSON object per slot
    Jsonl,
    /// Four hex codes per line, one line per band
    Hex,
}

#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Root hue in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub hue: f64,

    #[arg(long, value_enum, default_value_t = PaletteFmt::Jsonl)]
    pub fmt: PaletteFmt,
}

pub fn run(args: PaletteArgs) -> anyhow::Result<()> {
    let palette = generate_palette(args.hue);

    match args.fmt {
        PaletteFmt::Jsonl => jsonl::write_palette_stdout(&palette)?,
        PaletteFmt::Hex => {
            for band in palette.chunks(BAND_LEN) {
                let row: Vec<String> = band.iter().map(|c| to_hex(*c)).collect();
                println!("{}", row.join(" "));
            }
        }
    }
    Ok(())
}
