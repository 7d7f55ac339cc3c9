// crates/relativist-cli/src/cmd/color.rs

use clap::Args;
use relativist_core::color::{perceived_brightness, to_display_string, to_hex, to_rgb, Hsl, Ink};
use relativist_core::shape::shape_for_hue;

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Color "h,s,l"
    #[arg(allow_hyphen_values = true)]
    pub color: Hsl,
}

pub fn run(args: ColorArgs) -> anyhow::Result<()> {
    let c = args.color;
    let rgb = to_rgb(c);

    println!("hsl        = {}", to_display_string(c));
    println!("rgb        = {},{},{}", rgb.r, rgb.g, rgb.b);
    println!("hex        = {}", to_hex(c));
    println!("brightness = {:.2}", perceived_brightness(c));
    println!("ink        = {}", Ink::for_background(c).hex());
    println!("shape      = {}", shape_for_hue(c.h));
    Ok(())
}
