//! Error types of the rate-law solver.
//!
//! Every failure is detected before (or immediately after) the closed-form
//! arithmetic and reported as a [`KineticsError`]; no partial results are ever returned.

use super::rate_law_models::ReactionOrder;
use serde::Serialize;
use thiserror::Error;

/// error types for the integrated rate law solver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KineticsError {
    #[error("Missing required input: {field}")]
    MissingField { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NonPositiveValue { field: &'static str, value: f64 },
    #[error(
        "Final concentration ({final_concentration}) must be less than initial concentration ({initial_concentration})"
    )]
    InvalidOrdering {
        initial_concentration: f64,
        final_concentration: f64,
    },
    #[error(
        "Reaction has gone to completion at t = {depletion_time}: concentration would be {value}"
    )]
    NegativeConcentration { value: f64, depletion_time: f64 },
    #[error("Final concentration cannot be zero for {order} calculation")]
    SingularInput { order: ReactionOrder },
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
    #[error("Solved {quantity} is out of floating point range")]
    NonFiniteResult { quantity: &'static str },
}

/// Discriminant of [`KineticsError`] for callers that only need the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KineticsErrorKind {
    MissingField,
    NonPositiveValue,
    InvalidOrdering,
    NegativeConcentration,
    SingularInput,
    NonFiniteValue,
    NonFiniteResult,
}

impl KineticsError {
    pub fn kind(&self) -> KineticsErrorKind {
        match self {
            KineticsError::MissingField { .. } => KineticsErrorKind::MissingField,
            KineticsError::NonPositiveValue { .. } => KineticsErrorKind::NonPositiveValue,
            KineticsError::InvalidOrdering { .. } => KineticsErrorKind::InvalidOrdering,
            KineticsError::NegativeConcentration { .. } => {
                KineticsErrorKind::NegativeConcentration
            }
            KineticsError::SingularInput { .. } => KineticsErrorKind::SingularInput,
            KineticsError::NonFiniteValue { .. } => KineticsErrorKind::NonFiniteValue,
            KineticsError::NonFiniteResult { .. } => KineticsErrorKind::NonFiniteResult,
        }
    }
}
