// crates/relativist-cli/src/cmd/game.rs

use anyhow::Context;
use clap::{Args, Subcommand};
use relativist_core::color::{match_score, to_display_string, to_hex, Feedback, Hsl};
use relativist_core::game::{Advance, GameState};

use super::{open_generator, DEFAULT_STORE};

#[derive(Args, Debug)]
pub struct GameArgs {
    #[command(subcommand)]
    pub cmd: GameCmd,
}

#[derive(Subcommand, Debug)]
pub enum GameCmd {
    /// Print the active session, level and current target
    Show(GameShowArgs),
    /// Score the current assignment and move to the next level
    Advance(GameAdvanceArgs),
    /// Archive the completed session and start the next one
    Archive(GameShowArgs),
    /// Drop the archive and start over with a fresh session
    Reset(GameShowArgs),
}

#[derive(Args, Debug)]
pub struct GameShowArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct GameAdvanceArgs {
    #[arg(long, default_value = DEFAULT_STORE)]
    pub store: String,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Score to record directly (0..=100)
    #[arg(long, conflicts_with = "guess")]
    pub score: Option<u8>,

    /// Guessed color "h,s,l"; scored against the current target
    #[arg(long, allow_hyphen_values = true)]
    pub guess: Option<Hsl>,
}

pub fn run(args: GameArgs) -> anyhow::Result<()> {
    match args.cmd {
        GameCmd::Show(a) => show(a),
        GameCmd::Advance(a) => advance(a),
        GameCmd::Archive(a) => archive(a),
        GameCmd::Reset(a) => reset(a),
    }
}

fn show(args: GameShowArgs) -> anyhow::Result<()> {
    let mut generator = open_generator(&args.store, args.seed)?;
    let state = GameState::load(&mut generator)?;
    state.save(generator.store_mut())?;

    print_state(&state)
}

fn advance(args: GameAdvanceArgs) -> anyhow::Result<()> {
    let mut generator = open_generator(&args.store, args.seed)?;
    let mut state = GameState::load(&mut generator)?;

    let score = match (args.score, args.guess) {
        (Some(s), _) => s,
        (None, Some(g)) => match_score(state.current_target()?, g),
        (None, None) => anyhow::bail!("advance needs --score or --guess"),
    };

    let outcome = state.advance(score).context("record score")?;
    state.save(generator.store_mut())?;

    println!("score={score} feedback={}", Feedback::for_score(score));
    match outcome {
        Advance::Next(level) => println!("level={level}"),
        Advance::SessionComplete => {
            let resonance = state.session()?.resonance().unwrap_or(0);
            println!("session_complete resonance={resonance}");
        }
    }
    Ok(())
}

fn archive(args: GameShowArgs) -> anyhow::Result<()> {
    let mut generator = open_generator(&args.store, args.seed)?;
    let mut state = GameState::load(&mut generator)?;

    let next_id = state.archive_current(&mut generator)?.id;
    state.save(generator.store_mut())?;

    eprintln!("archived; {} session(s) in collection", state.collection.len());
    println!("session={next_id}");
    Ok(())
}

fn reset(args: GameShowArgs) -> anyhow::Result<()> {
    let mut generator = open_generator(&args.store, args.seed)?;
    let mut state = GameState::load(&mut generator)?;

    state.reset(&mut generator)?;
    state.save(generator.store_mut())?;

    print_state(&state)
}

fn print_state(state: &GameState) -> anyhow::Result<()> {
    let session = state.session()?;
    let target = state.current_target()?;

    println!("session   = {:02} {}", session.id, session.name);
    println!("mood      = {}", session.mood);
    println!("level     = {}/16", state.level);
    println!("complete  = {}", session.is_complete);
    println!("target    = {} {}", to_display_string(target), to_hex(target));
    println!("archived  = {}", state.collection.len());
    if let Some(r) = state.overall_resonance() {
        println!("resonance = {r}");
    }
    Ok(())
}

