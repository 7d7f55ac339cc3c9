use relativist_core::color::wrap_hue;

#[test]
fn wrap_is_idempotent_and_in_range_for_integers() {
    for h in (-100_000i64..100_000).step_by(7).chain([i32::MIN as i64, i32::MAX as i64]) {
        let w = wrap_hue(h as f64);
        assert!((0.0..360.0).contains(&w), "wrap({h}) = {w}");
        assert_eq!(wrap_hue(w), w, "wrap not idempotent at {h}");
        assert_eq!(w, h.rem_euclid(360) as f64, "wrap({h})");
    }
}

#[test]
fn wrap_handles_fractions_and_negative_zero() {
    assert_eq!(wrap_hue(-0.0), 0.0);
    assert_eq!(wrap_hue(360.0), 0.0);
    assert_eq!(wrap_hue(-0.5), 359.5);
    assert_eq!(wrap_hue(725.25), 5.25);
}
