// crates/relativist-cli/src/cmd/name.rs

use clap::Args;
use relativist_core::session::generate_session_name;

use super::rng_from_seed;

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Root hue in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub hue: f64,

    /// Average palette saturation (0..100)
    #[arg(long)]
    pub sat: f64,

    /// Average palette lightness (0..100)
    #[arg(long)]
    pub light: f64,

    /// RNG seed for the word picks
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: NameArgs) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let n = generate_session_name(&mut rng, args.hue, args.sat, args.light);
    println!("name={}", n.name);
    println!("mood={}", n.mood);
    Ok(())
}
