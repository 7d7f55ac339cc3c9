// crates/relativist-cli/src/cmd/next.rs

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::{open_generator, DEFAULT_STORE};

#[derive(Args, Debug)]
pub struct NextArgs {
    /// JSON key-value store holding the hue deck
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    /// Session number to stamp on the new session
    #[arg(long, default_value_t = 1)]
    pub id: u32,

    /// RNG seed (deck shuffle, jitter, name, play order)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: NextArgs) -> anyhow::Result<()> {
    let mut generator = open_generator(&args.store, args.seed)?;
    let session = generator
        .next_session(args.id)
        .with_context(|| format!("draw session from {}", args.store))?;

    info!(id = session.id, root_hue = session.root_hue, "session drawn");
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}
