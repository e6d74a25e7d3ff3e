//! Direct half-life calculations.
//!
//! t½ from k (and [A]₀ where the order needs it), k from a first order t½, and the
//! first order decay schedule 100%, 50%, 25%, ...

use super::rate_law_error::KineticsError;
use super::rate_law_models::{KineticsModel, ReactionOrder};
use super::rate_law_validator::{INITIAL_CONCENTRATION, RATE_CONSTANT};
use std::f64::consts::LN_2;

/// t½ of the given order. `c0` is only required for zero and second order.
pub fn half_life(order: ReactionOrder, k: f64, c0: Option<f64>) -> Result<f64, KineticsError> {
    positive_finite(k, RATE_CONSTANT)?;
    let c0 = if order.half_life_depends_on_c0() {
        let c0 = c0.ok_or(KineticsError::MissingField {
            field: INITIAL_CONCENTRATION,
        })?;
        positive_finite(c0, INITIAL_CONCENTRATION)?;
        c0
    } else {
        // unused by the first order law
        1.0
    };
    let t_half = order.model().half_life(k, c0);
    if t_half.is_finite() {
        Ok(t_half)
    } else {
        Err(KineticsError::NonFiniteResult {
            quantity: "half-life",
        })
    }
}

/// first order k = ln(2)/t½
pub fn rate_constant_from_half_life(t_half: f64) -> Result<f64, KineticsError> {
    positive_finite(t_half, "half-life")?;
    let k = LN_2 / t_half;
    if k.is_finite() {
        Ok(k)
    } else {
        Err(KineticsError::NonFiniteResult {
            quantity: RATE_CONSTANT,
        })
    }
}

/// first order fraction of [A]₀ left after `n` half-lives
pub fn fraction_remaining_after(n_half_lives: f64) -> f64 {
    0.5_f64.powf(n_half_lives)
}

/// first order (time, percent remaining) after 0, 1, ..., n half-lives
pub fn half_life_schedule(t_half: f64, n: usize) -> Vec<(f64, f64)> {
    (0..=n)
        .map(|i| {
            let i = i as f64;
            (i * t_half, 100.0 * fraction_remaining_after(i))
        })
        .collect()
}

fn positive_finite(value: f64, field: &'static str) -> Result<(), KineticsError> {
    if !value.is_finite() {
        return Err(KineticsError::NonFiniteValue { field, value });
    }
    if value <= 0.0 {
        return Err(KineticsError::NonPositiveValue { field, value });
    }
    Ok(())
}
