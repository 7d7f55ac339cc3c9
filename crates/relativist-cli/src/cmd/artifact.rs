// crates/relativist-cli/src/cmd/artifact.rs

use clap::Args;
use relativist_core::export::ArtifactCard;
use relativist_core::game::{GameState, GAME_STATE_KEY};
use relativist_core::KvStore;

use super::DEFAULT_STORE;
use crate::io::store_file::FileStore;

#[derive(Args, Debug)]
pub struct ArtifactArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    /// Archived session id; defaults to the active session
    #[arg(long)]
    pub id: Option<u32>,

    /// Print the card as JSON instead of a text grid
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ArtifactArgs) -> anyhow::Result<()> {
    let store = FileStore::open(&args.store)?;
    let Some(text) = store.get(GAME_STATE_KEY) else {
        anyhow::bail!("no game state in {}", args.store);
    };
    let state = GameState::parse(&text)?;

    let session = match args.id {
        Some(id) => state
            .archived(id)
            .or_else(|| state.current_session.as_ref().filter(|s| s.id == id)),
        None => state.current_session.as_ref(),
    };
    let Some(session) = session else {
        anyhow::bail!("session not found");
    };

    let card = ArtifactCard::from_session(session);
    if args.json {
        println!("{}", card.to_json()?);
        return Ok(());
    }

    println!("{}  {}", card.label, card.name);
    for row in card.rows() {
        let cells: Vec<&str> = row
            .iter()
            .map(|c| c.as_deref().unwrap_or("   .   "))
            .collect();
        println!("{}", cells.join(" "));
    }
    println!("{}", card.share_text);
    println!("file={} fingerprint={}", card.file_name, card.fingerprint);
    Ok(())
}
