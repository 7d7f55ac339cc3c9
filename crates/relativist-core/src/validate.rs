use crate::color::hsl::Hsl;
use crate::error::{RelativistError, Result};
use crate::session::palette::PALETTE_LEN;

pub fn validate_hsl(c: &Hsl) -> Result<()> {
    // Everything downstream is total, but NaN would silently score as black.
    for (name, v) in [("h", c.h), ("s", c.s), ("l", c.l)] {
        if !v.is_finite() {
            return Err(RelativistError::Validation(format!(
                "{name} must be finite, got {v}"
            )));
        }
    }
    Ok(())
}

/// Levels are 1-based and a session has one level per palette slot.
pub fn validate_level(level: usize) -> Result<()> {
    if level == 0 || level > PALETTE_LEN {
        return Err(RelativistError::Validation(format!(
            "level must be in 1..={PALETTE_LEN}, got {level}"
        )));
    }
    Ok(())
}

pub fn validate_score(score: u8) -> Result<()> {
    if score > 100 {
        return Err(RelativistError::Validation(format!(
            "score must be in 0..=100, got {score}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert!(validate_hsl(&Hsl::new(0.0, 50.0, 50.0)).is_ok());
        assert!(validate_hsl(&Hsl::new(f64::INFINITY, 50.0, 50.0)).is_err());
        assert!(validate_hsl(&Hsl::new(0.0, f64::NAN, 50.0)).is_err());
    }

    #[test]
    fn level_bounds() {
        assert!(validate_level(0).is_err());
        assert!(validate_level(1).is_ok());
        assert!(validate_level(16).is_ok());
        assert!(validate_level(17).is_err());
    }
}
