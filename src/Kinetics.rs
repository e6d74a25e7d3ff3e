//! # Chemical kinetics: integrated rate laws
//!
//! Solves the integrated rate law of a zero, first or second order reaction for one unknown:
//! the rate constant k, the elapsed time t, or the concentration [A] at time t.
//! The companion half-life is reported with every result.
//!
//! - [`rate_law_models`]: closed-form laws per order (`KineticsModel` trait)
//! - [`rate_law_validator`]: physical preconditions, checked before any arithmetic
//! - [`rate_law_solver`]: request types and the order × unknown dispatch
//! - [`rate_law_result`]: result record, companion values and notation flag
//! - [`rate_law_error`]: typed failures
//! - [`half_life`]: direct half-life helpers
pub mod rate_law_models;
pub mod rate_law_error;
/// Gatekeeper of every solve: missing, non-finite, non-positive and out-of-order inputs
pub mod rate_law_validator;
/// # Examples
/// ```
/// use KiRate::Kinetics::rate_law_models::ReactionOrder;
/// use KiRate::Kinetics::rate_law_solver::{KineticsInput, SolveTarget, solve};
/// let input = KineticsInput::new()
///     .with_initial_concentration(1.0)
///     .with_rate_constant(0.05)
///     .with_time(25.0);
/// // the zero order reaction is complete at t = 20 s
/// assert!(solve(ReactionOrder::Zero, SolveTarget::Concentration, &input).is_err());
/// ```
pub mod rate_law_solver;
pub mod rate_law_result;
/// t½ from k, k from t½ and first order decay schedules
pub mod half_life;
mod rate_law_tests;
