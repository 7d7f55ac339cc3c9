// crates/relativist-cli/src/cmd/deck.rs

use clap::Args;
use relativist_core::session::Deck;

use super::DEFAULT_STORE;
use crate::io::store_file::FileStore;

#[derive(Args, Debug)]
pub struct DeckArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,
}

pub fn run(args: DeckArgs) -> anyhow::Result<()> {
    let store = FileStore::open(&args.store)?;
    let deck = Deck::load(&store);

    let hues: Vec<String> = deck.available_hues.iter().map(u16::to_string).collect();
    println!("cycle_count = {}", deck.cycle_count);
    println!("remaining   = {}", deck.remaining());
    println!("available   = [{}]", hues.join(","));
    Ok(())
}
