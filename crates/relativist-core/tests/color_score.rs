use relativist_core::color::distance::{redmean_distance, score_for_distance};
use relativist_core::color::{is_win, match_score, to_rgb, Feedback, Hsl};

fn grid() -> Vec<Hsl> {
    let mut out = Vec::new();
    for h in (0..360).step_by(45) {
        for s in [0.0, 35.0, 100.0] {
            for l in [0.0, 20.0, 50.0, 85.0, 100.0] {
                out.push(Hsl::new(h as f64, s, l));
            }
        }
    }
    out
}

#[test]
fn conversion_is_stable() {
    for c in grid() {
        assert_eq!(to_rgb(c), to_rgb(c));
    }
}

#[test]
fn score_is_symmetric() {
    let g = grid();
    for a in &g {
        for b in &g {
            assert_eq!(match_score(*a, *b), match_score(*b, *a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn identical_colors_score_100() {
    for c in grid() {
        assert_eq!(match_score(c, c), 100, "{c:?}");
        assert_eq!(redmean_distance(c, c), 0.0);
    }
    assert_eq!(
        match_score(Hsl::new(0.0, 0.0, 50.0), Hsl::new(0.0, 0.0, 50.0)),
        100
    );
}

#[test]
fn red_versus_green_scores_zero() {
    let red = Hsl::new(0.0, 100.0, 50.0);
    let green = Hsl::new(120.0, 100.0, 50.0);
    assert!(redmean_distance(red, green) >= 150.0);
    assert_eq!(match_score(red, green), 0);
    assert!(!is_win(match_score(red, green)));
    assert_eq!(Feedback::for_score(match_score(red, green)), Feedback::Dissonant);
}

#[test]
fn moving_away_never_raises_the_score() {
    let target = Hsl::new(0.0, 0.0, 50.0);
    let mut last = 100u8;
    for l in 50..=100 {
        let s = match_score(target, Hsl::new(0.0, 0.0, l as f64));
        assert!(s <= last, "score rose at l={l}: {last} -> {s}");
        last = s;
    }

    let mut last = 100u8;
    for d in 0..400 {
        let s = score_for_distance(d as f64 * 0.5);
        assert!(s <= last);
        last = s;
    }
}

#[test]
fn near_miss_is_a_win() {
    let target = Hsl::new(200.0, 60.0, 45.0);
    let guess = Hsl::new(202.0, 58.0, 46.0);
    let score = match_score(target, guess);
    assert!(is_win(score), "score={score}");
}
