use crate::Kinetics::rate_law_models::ReactionOrder;
use crate::Kinetics::rate_law_solver::{KineticsInput, KineticsRequest, SolveTarget};

/// A named, ready to solve problem
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub request: KineticsRequest,
}

/// concentration after t for each order
pub fn presets() -> Vec<Preset> {
    let concentration = |order, c0, k, t| {
        KineticsRequest::new(
            order,
            SolveTarget::Concentration,
            KineticsInput::new()
                .with_initial_concentration(c0)
                .with_rate_constant(k)
                .with_time(t),
        )
    };
    vec![
        Preset {
            name: "Zero Order: Enzyme Catalysis",
            description: "Calculate [A] at t=2.0 s for zero-order reaction",
            request: concentration(ReactionOrder::Zero, 2.0, 0.5, 2.0),
        },
        Preset {
            name: "First Order: Radioactive Decay",
            description: "Half-life scenario: k=ln(2)=0.693",
            request: concentration(ReactionOrder::First, 1.0, 0.693, 1.0),
        },
        Preset {
            name: "Second Order: Dimerization",
            description: "Typical second-order reaction",
            request: concentration(ReactionOrder::Second, 0.5, 2.0, 1.5),
        },
    ]
}

pub fn kin_examples(kintask: usize) {
    use crate::settings::with_settings;
    let settings = with_settings(|manager| *manager.get_settings());
    match kintask {
        0 => {
            // MODELS OVERVIEW
            use crate::Kinetics::rate_law_models::RateLawModel;
            RateLawModel::pretty_print();
        }
        1 => {
            // PRESETS
            for preset in presets() {
                println!("\n{}: {}", preset.name, preset.description);
                match preset.request.solve_with_settings(&settings) {
                    Ok(result) => result.pretty_print(&settings),
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
        2 => {
            // rate constants from concentration data
            use crate::Kinetics::rate_law_solver::solve_with_settings;
            let data = [
                (ReactionOrder::First, 1.0, 0.5, 10.0),
                (ReactionOrder::Second, 2.0, 1.0, 5.0),
                (ReactionOrder::Zero, 1.0, 0.6, 8.0),
            ];
            for (order, c0, ct, t) in data {
                let input = KineticsInput::new()
                    .with_initial_concentration(c0)
                    .with_final_concentration(ct)
                    .with_time(t);
                match solve_with_settings(order, SolveTarget::RateConstant, &input, &settings) {
                    Ok(result) => result.pretty_print(&settings),
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
        3 => {
            // zero order reaction asked for [A] after it is already complete
            use crate::Kinetics::rate_law_solver::solve;
            let input = KineticsInput::new()
                .with_initial_concentration(1.0)
                .with_rate_constant(0.05)
                .with_time(25.0);
            match solve(ReactionOrder::Zero, SolveTarget::Concentration, &input) {
                Ok(result) => println!("unexpected result {:?}", result),
                Err(e) => println!("Error: {}", e),
            }
        }
        4 => {
            // first order half-life schedule
            use crate::Kinetics::half_life::{half_life_schedule, rate_constant_from_half_life};
            let t_half = 5730.0;
            if let Ok(k) = rate_constant_from_half_life(t_half) {
                println!("k = {:e} 1/s for t½ = {} s", k, t_half);
            }
            for (t, percent) in half_life_schedule(t_half, 4) {
                println!("after {:.2} s: {:.2}% remains", t, percent);
            }
        }
        _ => {
            println!("Wrong task number");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_presets_solve() {
        let presets = presets();
        assert_eq!(presets.len(), 3);
        let values: Vec<f64> = presets
            .iter()
            .map(|p| p.request.solve().unwrap().value)
            .collect();
        assert_relative_eq!(values[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(values[1], (-0.693f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(values[2], 1.0 / (2.0 + 3.0), epsilon = 1e-12);
    }
}
