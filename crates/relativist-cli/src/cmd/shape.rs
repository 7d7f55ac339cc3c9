// crates/relativist-cli/src/cmd/shape.rs

use clap::Args;
use relativist_core::color::wrap_hue;
use relativist_core::shape::shape_for_hue;

#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Hue in degrees (any value; wrapped into [0,360))
    #[arg(allow_hyphen_values = true)]
    pub hue: f64,
}

pub fn run(args: ShapeArgs) -> anyhow::Result<()> {
    println!("hue={} shape={}", wrap_hue(args.hue), shape_for_hue(args.hue));
    Ok(())
}
