//! Physical and mathematical preconditions of a rate-law solve.
//!
//! Checks run in a fixed order, the first failing check wins:
//! 1. every input the target needs is present ([`KineticsError::MissingField`])
//! 2. every needed input is finite ([`KineticsError::NonFiniteValue`])
//! 3. [A]₀, t and k are strictly positive ([`KineticsError::NonPositiveValue`])
//! 4. [A] is positive; [A] = 0 is a log/division singularity for first and second
//!    order ([`KineticsError::SingularInput`]) and a non-positive value for zero order
//! 5. [A] < [A]₀ ([`KineticsError::InvalidOrdering`])
//! 6. zero order concentration solve: the reaction is not complete before t
//!    ([`KineticsError::NegativeConcentration`])
//!
//! Inputs not needed by the chosen target are ignored.

use super::rate_law_error::KineticsError;
use super::rate_law_models::ReactionOrder;
use super::rate_law_solver::{KineticsInput, SolveTarget};
use log::{debug, warn};

/// relative slack on `k*t - [A]₀` that is still taken as exact depletion at t = [A]₀/k
pub const DEPLETION_RTOL: f64 = 1e-12;

pub const INITIAL_CONCENTRATION: &str = "initial concentration";
pub const FINAL_CONCENTRATION: &str = "final concentration";
pub const TIME: &str = "time";
pub const RATE_CONSTANT: &str = "rate constant";

/// Inputs that passed validation, one variant per solve target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedInput {
    RateConstant { c0: f64, ct: f64, t: f64 },
    Time { c0: f64, ct: f64, k: f64 },
    Concentration { c0: f64, t: f64, k: f64 },
}

impl ValidatedInput {
    pub fn initial_concentration(&self) -> f64 {
        match *self {
            ValidatedInput::RateConstant { c0, .. }
            | ValidatedInput::Time { c0, .. }
            | ValidatedInput::Concentration { c0, .. } => c0,
        }
    }
}

pub fn validate(
    order: ReactionOrder,
    target: SolveTarget,
    input: &KineticsInput,
) -> Result<ValidatedInput, KineticsError> {
    let checked = match target {
        SolveTarget::RateConstant => {
            let c0 = require(input.initial_concentration, INITIAL_CONCENTRATION)?;
            let ct = require(input.final_concentration, FINAL_CONCENTRATION)?;
            let t = require(input.time, TIME)?;
            finite(c0, INITIAL_CONCENTRATION)?;
            finite(ct, FINAL_CONCENTRATION)?;
            finite(t, TIME)?;
            positive(c0, INITIAL_CONCENTRATION)?;
            positive(t, TIME)?;
            final_concentration(order, c0, ct)?;
            ValidatedInput::RateConstant { c0, ct, t }
        }
        SolveTarget::Time => {
            let c0 = require(input.initial_concentration, INITIAL_CONCENTRATION)?;
            let ct = require(input.final_concentration, FINAL_CONCENTRATION)?;
            let k = require(input.rate_constant, RATE_CONSTANT)?;
            finite(c0, INITIAL_CONCENTRATION)?;
            finite(ct, FINAL_CONCENTRATION)?;
            finite(k, RATE_CONSTANT)?;
            positive(c0, INITIAL_CONCENTRATION)?;
            positive(k, RATE_CONSTANT)?;
            final_concentration(order, c0, ct)?;
            ValidatedInput::Time { c0, ct, k }
        }
        SolveTarget::Concentration => {
            let c0 = require(input.initial_concentration, INITIAL_CONCENTRATION)?;
            let t = require(input.time, TIME)?;
            let k = require(input.rate_constant, RATE_CONSTANT)?;
            finite(c0, INITIAL_CONCENTRATION)?;
            finite(t, TIME)?;
            finite(k, RATE_CONSTANT)?;
            positive(c0, INITIAL_CONCENTRATION)?;
            positive(t, TIME)?;
            positive(k, RATE_CONSTANT)?;
            if order == ReactionOrder::Zero {
                not_depleted(c0, k, t)?;
            }
            ValidatedInput::Concentration { c0, t, k }
        }
    };
    let ignored = input.ignored_fields(target);
    if !ignored.is_empty() {
        debug!("inputs not used for {:?}: {:?}", target, ignored);
    }
    Ok(checked)
}

/// Guards the value returned by the model: finite, and a solved time or rate constant
/// strictly positive. Adjacent floats for [A] and [A]₀ can round the log or reciprocal
/// difference to zero.
pub fn check_solved(target: SolveTarget, value: f64) -> Result<f64, KineticsError> {
    let quantity = match target {
        SolveTarget::RateConstant => RATE_CONSTANT,
        SolveTarget::Time => TIME,
        SolveTarget::Concentration => FINAL_CONCENTRATION,
    };
    if !value.is_finite() {
        warn!("solved {} is not finite: {}", quantity, value);
        return Err(KineticsError::NonFiniteResult { quantity });
    }
    if target != SolveTarget::Concentration && value <= 0.0 {
        warn!("solved {} is not positive: {}", quantity, value);
        return Err(KineticsError::NonPositiveValue {
            field: quantity,
            value,
        });
    }
    Ok(value)
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, KineticsError> {
    value.ok_or(KineticsError::MissingField { field })
}

fn finite(value: f64, field: &'static str) -> Result<(), KineticsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KineticsError::NonFiniteValue { field, value })
    }
}

fn positive(value: f64, field: &'static str) -> Result<(), KineticsError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(KineticsError::NonPositiveValue { field, value })
    }
}

fn final_concentration(order: ReactionOrder, c0: f64, ct: f64) -> Result<(), KineticsError> {
    if ct == 0.0 && order != ReactionOrder::Zero {
        return Err(KineticsError::SingularInput { order });
    }
    positive(ct, FINAL_CONCENTRATION)?;
    if ct >= c0 {
        return Err(KineticsError::InvalidOrdering {
            initial_concentration: c0,
            final_concentration: ct,
        });
    }
    Ok(())
}

/// zero order only: [A]₀ - kt must not go below zero
fn not_depleted(c0: f64, k: f64, t: f64) -> Result<(), KineticsError> {
    let consumed = k * t;
    if consumed - c0 > DEPLETION_RTOL * c0 {
        return Err(KineticsError::NegativeConcentration {
            value: c0 - consumed,
            depletion_time: c0 / k,
        });
    }
    Ok(())
}
