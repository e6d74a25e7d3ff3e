//! Packaging of a solved rate-law problem.
//!
//! The core keeps raw `f64` values; [`Notation`] only flags how the boundary layer should
//! print them. [`KineticsResult::render_value`] and [`KineticsResult::pretty_print`] are
//! that boundary layer for the terminal front-end.

use super::rate_law_error::KineticsError;
use super::rate_law_models::{KineticsModel, RateLawModel, ReactionOrder};
use super::rate_law_solver::SolveTarget;
use super::rate_law_validator::ValidatedInput;
use crate::settings::FormatSettings;
use prettytable::{Cell, Row, Table, row};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notation {
    Fixed,
    Scientific,
}

impl Notation {
    /// scientific when |value| is outside [small_threshold, large_threshold]; zero stays fixed
    pub fn for_value(value: f64, settings: &FormatSettings) -> Self {
        let magnitude = value.abs();
        if magnitude != 0.0
            && (magnitude < settings.small_threshold || magnitude > settings.large_threshold)
        {
            Notation::Scientific
        } else {
            Notation::Fixed
        }
    }

    pub fn format(&self, value: f64, precision: usize) -> String {
        match self {
            Notation::Fixed => format!("{:.*}", precision, value),
            Notation::Scientific => format!("{:.*e}", precision, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KineticsResult {
    pub order: ReactionOrder,
    pub solve_for: SolveTarget,
    /// the solved unknown
    pub value: f64,
    pub half_life: f64,
    /// known or just solved rate constant
    pub rate_constant: f64,
    pub rate_law_description: String,
    pub integrated_law_text: String,
    pub half_life_text: String,
    pub rate_constant_units: String,
    /// 100*[A]/[A]₀
    pub percent_remaining: f64,
    /// t/t½
    pub half_lives_elapsed: f64,
    pub notation: Notation,
}

impl KineticsResult {
    pub fn new(
        model: &RateLawModel,
        target: SolveTarget,
        input: &ValidatedInput,
        value: f64,
        settings: &FormatSettings,
    ) -> Result<Self, KineticsError> {
        let (c0, ct, t, k) = match *input {
            ValidatedInput::RateConstant { c0, ct, t } => (c0, ct, t, value),
            ValidatedInput::Time { c0, ct, k } => (c0, ct, value, k),
            ValidatedInput::Concentration { c0, t, k } => (c0, value, t, k),
        };
        let half_life = model.half_life(k, c0);
        let percent_remaining = 100.0 * ct / c0;
        let half_lives_elapsed = t / half_life;
        // companions can overflow even when the solved value is finite
        for (quantity, companion) in [
            ("half-life", half_life),
            ("percent remaining", percent_remaining),
            ("half-lives elapsed", half_lives_elapsed),
        ] {
            if !companion.is_finite() {
                return Err(KineticsError::NonFiniteResult { quantity });
            }
        }
        Ok(Self {
            order: model.order(),
            solve_for: target,
            value,
            half_life,
            rate_constant: k,
            rate_law_description: model.rate_law_text().to_string(),
            integrated_law_text: model.integrated_law_text().to_string(),
            half_life_text: model.half_life_text().to_string(),
            rate_constant_units: model.rate_constant_units().to_string(),
            percent_remaining,
            half_lives_elapsed,
            notation: Notation::for_value(value, settings),
        })
    }

    pub fn unit(&self) -> &str {
        match self.solve_for {
            SolveTarget::RateConstant => self.rate_constant_units.as_str(),
            SolveTarget::Time => "s",
            SolveTarget::Concentration => "M",
        }
    }

    /// solved value with its unit, e.g. "6.9315e-2 1/s"
    pub fn render_value(&self, settings: &FormatSettings) -> String {
        format!(
            "{} {}",
            self.notation.format(self.value, settings.precision),
            self.unit()
        )
    }

    pub fn render_half_life(&self, settings: &FormatSettings) -> String {
        let notation = Notation::for_value(self.half_life, settings);
        format!("{} s", notation.format(self.half_life, settings.precision))
    }

    pub fn pretty_print(&self, settings: &FormatSettings) {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value"]);
        let rows = [
            ("reaction order", self.order.to_string()),
            (self.solve_for.label(), self.render_value(settings)),
            ("half-life", self.render_half_life(settings)),
            ("remaining", format!("{:.2} %", self.percent_remaining)),
            (
                "half-lives elapsed",
                format!("{:.*}", settings.precision, self.half_lives_elapsed),
            ),
            ("rate law", self.rate_law_description.clone()),
            ("integrated law", self.integrated_law_text.clone()),
            ("half-life law", self.half_life_text.clone()),
        ];
        for (name, value) in rows {
            table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
        }
        table.printstd();
    }
}
