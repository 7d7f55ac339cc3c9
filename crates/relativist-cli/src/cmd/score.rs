// crates/relativist-cli/src/cmd/score.rs

use clap::Args;
use relativist_core::color::distance::redmean_distance;
use relativist_core::color::{is_win, match_score, Feedback, Hsl};
use relativist_core::strips::{analyze, ContextStrip, TARGET_BACKGROUND};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Target color "h,s,l"
    #[arg(long, allow_hyphen_values = true)]
    pub target: Hsl,

    /// Guessed color "h,s,l" (repeat for one guess per context strip; the score is their mean)
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub guess: Vec<Hsl>,
}

pub fn run(args: ScoreArgs) -> anyhow::Result<()> {
    let mut strips = Vec::with_capacity(args.guess.len());
    for (i, g) in args.guess.iter().enumerate() {
        let d = redmean_distance(args.target, *g);
        println!("guess[{i}] distance={d:.3} score={}", match_score(args.target, *g));
        strips.push(ContextStrip {
            id: i,
            background_color: TARGET_BACKGROUND,
            chip_color: *g,
        });
    }

    let score = analyze(args.target, &strips);

    println!("score={score}");
    println!("feedback={}", Feedback::for_score(score));
    println!("win={}", is_win(score));
    Ok(())
}
