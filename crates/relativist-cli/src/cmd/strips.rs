// crates/relativist-cli/src/cmd/strips.rs

use clap::Args;
use relativist_core::color::{to_display_string, to_hex, Hsl};
use relativist_core::strips::{analyze, deal_strips, label_ink, strip_label};

use super::rng_from_seed;

#[derive(Args, Debug)]
pub struct StripsArgs {
    /// RNG seed for backgrounds and starting chips
    #[arg(long)]
    pub seed: Option<u64>,

    /// Score the dealt chips against this target "h,s,l"
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<Hsl>,
}

pub fn run(args: StripsArgs) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let strips = deal_strips(&mut rng);

    for (i, s) in strips.iter().enumerate() {
        println!(
            "{} background={} chip={} ({}) label={}",
            strip_label(i),
            to_hex(s.background_color),
            to_hex(s.chip_color),
            to_display_string(s.chip_color),
            label_ink(i, s.background_color),
        );
    }

    if let Some(target) = args.target {
        println!("score={}", analyze(target, &strips));
    }
    Ok(())
}
