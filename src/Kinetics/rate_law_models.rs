//! # Integrated Rate Law Models
//!
//! Closed-form relations for the three canonical reaction orders:
//!
//! | order  | rate law      | integrated law           | half-life        | units of k |
//! |--------|---------------|--------------------------|------------------|------------|
//! | zero   | Rate = k      | [A] = [A]₀ - kt          | t½ = [A]₀/(2k)   | M/s        |
//! | first  | Rate = k[A]   | [A] = [A]₀e^(-kt)        | t½ = ln(2)/k     | 1/s        |
//! | second | Rate = k[A]^2 | 1/[A] = 1/[A]₀ + kt      | t½ = 1/(k[A]₀)   | 1/(M*s)    |
//!
//! Every order is a struct implementing [`KineticsModel`]; [`RateLawModel`] bundles them
//! with `enum_dispatch`, so a solver holds a plain enum and still calls trait methods.
//!
//! The functions are pure and total on their valid domain only: concentrations, time and
//! rate constant strictly positive, final concentration strictly below the initial one.
//! Inputs are checked by [`super::rate_law_validator`] before anything here is called.
//!
//! # Examples
//! ```
//! use KiRate::Kinetics::rate_law_models::{KineticsModel, ReactionOrder};
//! let model = ReactionOrder::First.model();
//! let k = model.invert_k(1.0, 0.5, 10.0);
//! assert!((model.half_life(k, 1.0) - 10.0).abs() < 1e-12);
//! ```

use enum_dispatch::enum_dispatch;
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_2;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// Reaction order: exponent on [A] in the rate law
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ReactionOrder {
    #[serde(alias = "ZeroOrder", alias = "Zero", alias = "0")]
    #[strum(serialize = "zero", serialize = "zeroorder", serialize = "zero-order", serialize = "0")]
    Zero,
    #[serde(alias = "FirstOrder", alias = "First", alias = "1")]
    #[strum(
        serialize = "first",
        serialize = "firstorder",
        serialize = "first-order",
        serialize = "1"
    )]
    First,
    #[serde(alias = "SecondOrder", alias = "Second", alias = "2")]
    #[strum(
        serialize = "second",
        serialize = "secondorder",
        serialize = "second-order",
        serialize = "2"
    )]
    Second,
}

impl ReactionOrder {
    pub fn exponent(&self) -> u8 {
        match self {
            ReactionOrder::Zero => 0,
            ReactionOrder::First => 1,
            ReactionOrder::Second => 2,
        }
    }

    pub fn model(&self) -> RateLawModel {
        match self {
            ReactionOrder::Zero => RateLawModel::Zero(ZeroOrder),
            ReactionOrder::First => RateLawModel::First(FirstOrder),
            ReactionOrder::Second => RateLawModel::Second(SecondOrder),
        }
    }

    /// true when t½ depends on [A]₀ (zero and second order)
    pub fn half_life_depends_on_c0(&self) -> bool {
        !matches!(self, ReactionOrder::First)
    }
}

impl fmt::Display for ReactionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReactionOrder::Zero => "zero-order",
            ReactionOrder::First => "first-order",
            ReactionOrder::Second => "second-order",
        };
        write!(f, "{}", name)
    }
}

/// Closed-form relations of one reaction order.
///
/// Argument names follow the integrated law: `c0` initial concentration [M],
/// `ct` concentration at time `t` [s], `k` rate constant (units depend on order).
#[enum_dispatch]
pub trait KineticsModel {
    fn order(&self) -> ReactionOrder;
    /// [A] at time t
    fn integrate(&self, c0: f64, k: f64, t: f64) -> f64;
    /// k from [A]₀, [A] and t
    fn invert_k(&self, c0: f64, ct: f64, t: f64) -> f64;
    /// t from [A]₀, [A] and k
    fn invert_t(&self, c0: f64, ct: f64, k: f64) -> f64;
    /// t½; `c0` is ignored by the first order model
    fn half_life(&self, k: f64, c0: f64) -> f64;
    fn rate_law_text(&self) -> &'static str;
    fn integrated_law_text(&self) -> &'static str;
    fn half_life_text(&self) -> &'static str;
    fn rate_constant_units(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZeroOrder;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FirstOrder;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SecondOrder;

impl KineticsModel for ZeroOrder {
    fn order(&self) -> ReactionOrder {
        ReactionOrder::Zero
    }
    /// [A] = [A]₀ - kt
    fn integrate(&self, c0: f64, k: f64, t: f64) -> f64 {
        c0 - k * t
    }
    /// k = ([A]₀ - [A]) / t
    fn invert_k(&self, c0: f64, ct: f64, t: f64) -> f64 {
        (c0 - ct) / t
    }
    /// t = ([A]₀ - [A]) / k
    fn invert_t(&self, c0: f64, ct: f64, k: f64) -> f64 {
        (c0 - ct) / k
    }
    /// t½ = [A]₀/(2k)
    fn half_life(&self, k: f64, c0: f64) -> f64 {
        c0 / (2.0 * k)
    }
    fn rate_law_text(&self) -> &'static str {
        "Rate = k"
    }
    fn integrated_law_text(&self) -> &'static str {
        "[A] = [A]₀ - kt"
    }
    fn half_life_text(&self) -> &'static str {
        "t½ = [A]₀/(2k)"
    }
    fn rate_constant_units(&self) -> &'static str {
        "M/s"
    }
}

impl KineticsModel for FirstOrder {
    fn order(&self) -> ReactionOrder {
        ReactionOrder::First
    }
    /// [A] = [A]₀e^(-kt)
    fn integrate(&self, c0: f64, k: f64, t: f64) -> f64 {
        c0 * (-k * t).exp()
    }
    /// k = (ln[A]₀ - ln[A]) / t
    fn invert_k(&self, c0: f64, ct: f64, t: f64) -> f64 {
        (c0.ln() - ct.ln()) / t
    }
    /// t = (ln[A]₀ - ln[A]) / k
    fn invert_t(&self, c0: f64, ct: f64, k: f64) -> f64 {
        (c0.ln() - ct.ln()) / k
    }
    /// t½ = ln(2)/k
    fn half_life(&self, k: f64, _c0: f64) -> f64 {
        LN_2 / k
    }
    fn rate_law_text(&self) -> &'static str {
        "Rate = k[A]"
    }
    fn integrated_law_text(&self) -> &'static str {
        "ln[A] = ln[A]₀ - kt  or  [A] = [A]₀e^(-kt)"
    }
    fn half_life_text(&self) -> &'static str {
        "t½ = ln(2)/k = 0.693/k"
    }
    fn rate_constant_units(&self) -> &'static str {
        "1/s"
    }
}

impl KineticsModel for SecondOrder {
    fn order(&self) -> ReactionOrder {
        ReactionOrder::Second
    }
    /// 1/[A] = 1/[A]₀ + kt
    fn integrate(&self, c0: f64, k: f64, t: f64) -> f64 {
        1.0 / (1.0 / c0 + k * t)
    }
    /// k = (1/[A] - 1/[A]₀) / t
    fn invert_k(&self, c0: f64, ct: f64, t: f64) -> f64 {
        (1.0 / ct - 1.0 / c0) / t
    }
    /// t = (1/[A] - 1/[A]₀) / k
    fn invert_t(&self, c0: f64, ct: f64, k: f64) -> f64 {
        (1.0 / ct - 1.0 / c0) / k
    }
    /// t½ = 1/(k[A]₀)
    fn half_life(&self, k: f64, c0: f64) -> f64 {
        1.0 / (k * c0)
    }
    fn rate_law_text(&self) -> &'static str {
        "Rate = k[A]^2"
    }
    fn integrated_law_text(&self) -> &'static str {
        "1/[A] = 1/[A]₀ + kt"
    }
    fn half_life_text(&self) -> &'static str {
        "t½ = 1/(k[A]₀)"
    }
    fn rate_constant_units(&self) -> &'static str {
        "1/(M*s)"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(KineticsModel)]
pub enum RateLawModel {
    Zero(ZeroOrder),
    First(FirstOrder),
    Second(SecondOrder),
}

impl RateLawModel {
    pub fn all() -> Vec<RateLawModel> {
        ReactionOrder::iter().map(|order| order.model()).collect()
    }

    /// table of all supported orders with their laws
    pub fn pretty_print() {
        let mut table = Table::new();
        table.add_row(row![
            "order",
            "rate law",
            "integrated law",
            "half-life",
            "units of k"
        ]);
        for model in RateLawModel::all() {
            table.add_row(Row::new(vec![
                Cell::new(&model.order().to_string()),
                Cell::new(model.rate_law_text()),
                Cell::new(model.integrated_law_text()),
                Cell::new(model.half_life_text()),
                Cell::new(model.rate_constant_units()),
            ]));
        }
        table.printstd();
    }
}
