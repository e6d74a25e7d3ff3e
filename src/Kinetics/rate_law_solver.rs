//! # Rate Law Solver
//!
//! Routes `(ReactionOrder, SolveTarget, KineticsInput)` to the matching closed-form
//! relation of [`super::rate_law_models`].
//!
//! The unknown is named explicitly by [`SolveTarget`]; which optional inputs happen to be
//! filled in never decides the direction of the solve. Extra inputs are ignored.
//!
//! ## Pipeline
//! validate ([`super::rate_law_validator::validate`]) → evaluate the model → guard the
//! solved value → package it with half-life and law texts ([`KineticsResult`]).
//!
//! ## Usage
//! ```
//! use KiRate::Kinetics::rate_law_models::ReactionOrder;
//! use KiRate::Kinetics::rate_law_solver::{KineticsInput, SolveTarget, solve};
//! let input = KineticsInput::new()
//!     .with_initial_concentration(2.0)
//!     .with_final_concentration(1.0)
//!     .with_time(5.0);
//! let result = solve(ReactionOrder::Second, SolveTarget::RateConstant, &input).unwrap();
//! assert!((result.value - 0.1).abs() < 1e-12);
//! assert!((result.half_life - 5.0).abs() < 1e-12);
//! ```
//!
//! The stateful [`RateLawTask`] wraps the same call for the interactive front-end:
//! `new()` → `set_order()` / `set_target()` / `set_input()` → `check_task()` → `solve()`.

use super::rate_law_error::KineticsError;
use super::rate_law_models::{KineticsModel, ReactionOrder};
use super::rate_law_result::KineticsResult;
use super::rate_law_validator::{ValidatedInput, check_solved, validate};
use crate::settings::FormatSettings;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variable of the integrated law is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolveTarget {
    #[serde(alias = "RateConstant", alias = "k")]
    RateConstant,
    #[serde(alias = "Time", alias = "t")]
    Time,
    #[serde(alias = "Concentration", alias = "A")]
    Concentration,
}

impl SolveTarget {
    pub fn label(&self) -> &'static str {
        match self {
            SolveTarget::RateConstant => "rate constant k",
            SolveTarget::Time => "time t",
            SolveTarget::Concentration => "concentration [A]",
        }
    }
}

impl fmt::Display for SolveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Known values of a solve; which of them are required depends on the [`SolveTarget`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticsInput {
    /// [A]₀, M
    #[serde(default, alias = "initial_concentration", alias = "C0")]
    pub initial_concentration: Option<f64>,
    /// [A] at time t, M
    #[serde(default, alias = "final_concentration", alias = "Ct")]
    pub final_concentration: Option<f64>,
    /// s
    #[serde(default, alias = "t")]
    pub time: Option<f64>,
    #[serde(default, alias = "rate_constant", alias = "k")]
    pub rate_constant: Option<f64>,
}

impl KineticsInput {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_initial_concentration(mut self, c0: f64) -> Self {
        self.initial_concentration = Some(c0);
        self
    }
    pub fn with_final_concentration(mut self, ct: f64) -> Self {
        self.final_concentration = Some(ct);
        self
    }
    pub fn with_time(mut self, t: f64) -> Self {
        self.time = Some(t);
        self
    }
    pub fn with_rate_constant(mut self, k: f64) -> Self {
        self.rate_constant = Some(k);
        self
    }

    /// supplied inputs that the target does not use
    pub fn ignored_fields(&self, target: SolveTarget) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        match target {
            SolveTarget::RateConstant if self.rate_constant.is_some() => {
                ignored.push("rate constant")
            }
            SolveTarget::Time if self.time.is_some() => ignored.push("time"),
            SolveTarget::Concentration if self.final_concentration.is_some() => {
                ignored.push("final concentration")
            }
            _ => {}
        }
        ignored
    }
}

/// One complete request: order, unknown and known values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticsRequest {
    pub order: ReactionOrder,
    #[serde(alias = "solve_for")]
    pub solve_for: SolveTarget,
    #[serde(flatten)]
    pub input: KineticsInput,
}

impl KineticsRequest {
    pub fn new(order: ReactionOrder, solve_for: SolveTarget, input: KineticsInput) -> Self {
        Self {
            order,
            solve_for,
            input,
        }
    }

    pub fn solve(&self) -> Result<KineticsResult, KineticsError> {
        solve(self.order, self.solve_for, &self.input)
    }

    pub fn solve_with_settings(
        &self,
        settings: &FormatSettings,
    ) -> Result<KineticsResult, KineticsError> {
        solve_with_settings(self.order, self.solve_for, &self.input, settings)
    }
}

/// Solves with the default notation thresholds
pub fn solve(
    order: ReactionOrder,
    target: SolveTarget,
    input: &KineticsInput,
) -> Result<KineticsResult, KineticsError> {
    solve_with_settings(order, target, input, &FormatSettings::default())
}

pub fn solve_with_settings(
    order: ReactionOrder,
    target: SolveTarget,
    input: &KineticsInput,
    settings: &FormatSettings,
) -> Result<KineticsResult, KineticsError> {
    let validated = validate(order, target, input).map_err(|e| {
        warn!("{} solve for {} rejected: {}", order, target, e);
        e
    })?;
    let model = order.model();
    debug!("dispatching {:?} to {} model", validated, order);
    let raw = match validated {
        ValidatedInput::RateConstant { c0, ct, t } => model.invert_k(c0, ct, t),
        ValidatedInput::Time { c0, ct, k } => model.invert_t(c0, ct, k),
        // within the depletion tolerance the zero order law may dip below zero by rounding
        ValidatedInput::Concentration { c0, t, k } => match order {
            ReactionOrder::Zero => model.integrate(c0, k, t).max(0.0),
            ReactionOrder::First | ReactionOrder::Second => model.integrate(c0, k, t),
        },
    };
    let value = check_solved(target, raw)?;
    let result = KineticsResult::new(&model, target, &validated, value, settings)?;
    info!(
        "{} {} = {}, t½ = {}",
        order, target, result.value, result.half_life
    );
    Ok(result)
}

/// Every request is solved independently; one failure does not affect the others
pub fn solve_batch(requests: &[KineticsRequest]) -> Vec<Result<KineticsResult, KineticsError>> {
    requests.iter().map(|request| request.solve()).collect()
}

/// Stateful front-end for a single rate-law problem
#[derive(Debug, Clone, Default)]
pub struct RateLawTask {
    order: Option<ReactionOrder>,
    target: Option<SolveTarget>,
    input: KineticsInput,
    settings: FormatSettings,
    result: Option<KineticsResult>,
}

impl RateLawTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_order(&mut self, order: ReactionOrder) {
        self.order = Some(order);
        self.result = None;
    }

    pub fn set_target(&mut self, target: SolveTarget) {
        self.target = Some(target);
        self.result = None;
    }

    pub fn set_input(&mut self, input: KineticsInput) {
        self.input = input;
        self.result = None;
    }

    pub fn set_settings(&mut self, settings: FormatSettings) {
        self.settings = settings;
    }

    pub fn check_task(&self) -> Result<(), String> {
        if self.order.is_none() {
            return Err("reaction order not set".to_string());
        }
        if self.target.is_none() {
            return Err("unknown to solve for not set".to_string());
        }
        Ok(())
    }

    pub fn solve(&mut self) -> Result<&KineticsResult, String> {
        self.check_task()?;
        let (order, target) = match (self.order, self.target) {
            (Some(order), Some(target)) => (order, target),
            _ => return Err("task is not complete".to_string()),
        };
        let result = solve_with_settings(order, target, &self.input, &self.settings)
            .map_err(|e| e.to_string())?;
        Ok(&*self.result.insert(result))
    }

    pub fn result(&self) -> Option<&KineticsResult> {
        self.result.as_ref()
    }

    pub fn pretty_print(&self) -> Result<(), String> {
        let result = self
            .result
            .as_ref()
            .ok_or("Task not solved. Call solve() first.")?;
        result.pretty_print(&self.settings);
        Ok(())
    }
}
