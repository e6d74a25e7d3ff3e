/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::half_life::half_life;
    use crate::Kinetics::rate_law_error::{KineticsError, KineticsErrorKind};
    use crate::Kinetics::rate_law_models::{KineticsModel, ReactionOrder};
    use crate::Kinetics::rate_law_result::KineticsResult;
    use crate::Kinetics::rate_law_solver::{KineticsInput, SolveTarget, solve};
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn k_input(c0: f64, ct: f64, t: f64) -> KineticsInput {
        KineticsInput::new()
            .with_initial_concentration(c0)
            .with_final_concentration(ct)
            .with_time(t)
    }

    fn c_input(c0: f64, t: f64, k: f64) -> KineticsInput {
        KineticsInput::new()
            .with_initial_concentration(c0)
            .with_time(t)
            .with_rate_constant(k)
    }

    #[test]
    fn test_round_trip_k_then_concentration() {
        let cases = [(1.0, 0.5, 10.0), (2.5, 0.3, 7.0), (0.01, 0.0099, 0.2), (40.0, 1e-3, 3600.0)];
        for order in ReactionOrder::iter() {
            for (c0, ct, t) in cases {
                let k = solve(order, SolveTarget::RateConstant, &k_input(c0, ct, t))
                    .unwrap()
                    .value;
                let back = solve(order, SolveTarget::Concentration, &c_input(c0, t, k))
                    .unwrap()
                    .value;
                assert_relative_eq!(back, ct, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_time() {
        for order in ReactionOrder::iter() {
            let (c0, ct, k) = (1.5, 0.4, 0.02);
            let t = solve(
                order,
                SolveTarget::Time,
                &KineticsInput::new()
                    .with_initial_concentration(c0)
                    .with_final_concentration(ct)
                    .with_rate_constant(k),
            )
            .unwrap()
            .value;
            assert!(t > 0.0);
            let back = solve(order, SolveTarget::Concentration, &c_input(c0, t, k))
                .unwrap()
                .value;
            assert_relative_eq!(back, ct, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_first_order_half_life_independent_of_c0() {
        let k = 0.0375;
        let a = half_life(ReactionOrder::First, k, Some(0.1)).unwrap();
        let b = half_life(ReactionOrder::First, k, Some(12.0)).unwrap();
        assert_eq!(a, b);
        let a = solve(ReactionOrder::First, SolveTarget::Concentration, &c_input(0.1, 3.0, k))
            .unwrap()
            .half_life;
        let b = solve(ReactionOrder::First, SolveTarget::Concentration, &c_input(12.0, 3.0, k))
            .unwrap()
            .half_life;
        assert_eq!(a, b);
        // zero and second order do depend on [A]₀
        let z1 = half_life(ReactionOrder::Zero, k, Some(0.1)).unwrap();
        let z2 = half_life(ReactionOrder::Zero, k, Some(12.0)).unwrap();
        assert!(z1 < z2);
        let s1 = half_life(ReactionOrder::Second, k, Some(0.1)).unwrap();
        let s2 = half_life(ReactionOrder::Second, k, Some(12.0)).unwrap();
        assert!(s1 > s2);
    }

    #[test]
    fn test_monotonic_decay() {
        for order in ReactionOrder::iter() {
            let model = order.model();
            let (c0, k) = (1.0, 0.04);
            let mut previous = c0;
            // stays inside the zero order depletion time 25 s
            for i in 1..=24 {
                let t = i as f64;
                let ct = model.integrate(c0, k, t);
                assert!(ct < previous, "{} not decreasing at t = {}", order, t);
                previous = ct;
            }
        }
    }

    #[test]
    fn test_zero_order_depletion_boundary() {
        let (c0, k) = (1.0, 0.05);
        let res = solve(
            ReactionOrder::Zero,
            SolveTarget::Concentration,
            &c_input(c0, c0 / k, k),
        )
        .unwrap();
        assert_relative_eq!(res.value, 0.0, epsilon = 1e-12);
        assert!(res.value >= 0.0);
        assert_relative_eq!(res.percent_remaining, 0.0, epsilon = 1e-9);

        let (c0, k) = (0.7, 0.013);
        let res = solve(
            ReactionOrder::Zero,
            SolveTarget::Concentration,
            &c_input(c0, c0 / k, k),
        )
        .unwrap();
        assert!(res.value >= 0.0 && res.value < 1e-12);

        for t in [c0 / k * 1.001, c0 / k + 1.0, 1e6] {
            let err = solve(
                ReactionOrder::Zero,
                SolveTarget::Concentration,
                &c_input(c0, t, k),
            )
            .unwrap_err();
            assert_eq!(err.kind(), KineticsErrorKind::NegativeConcentration);
        }
    }

    #[test]
    fn test_scenario_first_order_rate_constant() {
        let res = solve(
            ReactionOrder::First,
            SolveTarget::RateConstant,
            &k_input(1.0, 0.5, 10.0),
        )
        .unwrap();
        assert_relative_eq!(res.value, 0.0693147, epsilon = 1e-7);
        assert_relative_eq!(res.half_life, 10.0, epsilon = 1e-9);
        assert_eq!(res.rate_law_description, "Rate = k[A]");
    }

    #[test]
    fn test_scenario_second_order_rate_constant() {
        let res = solve(
            ReactionOrder::Second,
            SolveTarget::RateConstant,
            &k_input(2.0, 1.0, 5.0),
        )
        .unwrap();
        assert_relative_eq!(res.value, 0.1, epsilon = 1e-12);
        assert_relative_eq!(res.half_life, 5.0, epsilon = 1e-9);
        assert_eq!(res.integrated_law_text, "1/[A] = 1/[A]₀ + kt");
    }

    #[test]
    fn test_scenario_zero_order_rate_constant() {
        let res = solve(
            ReactionOrder::Zero,
            SolveTarget::RateConstant,
            &k_input(1.0, 0.6, 8.0),
        )
        .unwrap();
        assert_relative_eq!(res.value, 0.05, epsilon = 1e-12);
        assert_relative_eq!(res.half_life, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scenario_zero_order_negative_concentration() {
        let res = solve(
            ReactionOrder::Zero,
            SolveTarget::Concentration,
            &c_input(1.0, 25.0, 0.05),
        );
        match res {
            Err(KineticsError::NegativeConcentration { value, .. }) => {
                assert_relative_eq!(value, -0.25, epsilon = 1e-12)
            }
            other => panic!("expected NegativeConcentration, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_invalid_ordering() {
        for order in ReactionOrder::iter() {
            for ct in [1.0, 3.0] {
                let err = solve(order, SolveTarget::RateConstant, &k_input(1.0, ct, 10.0))
                    .unwrap_err();
                assert_eq!(err.kind(), KineticsErrorKind::InvalidOrdering);
            }
        }
    }

    #[test]
    fn test_no_nan_or_infinity_leaks() {
        let inputs = [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-300, 1e300];
        for order in ReactionOrder::iter() {
            for &a in &inputs {
                for &b in &inputs {
                    for target in [
                        SolveTarget::RateConstant,
                        SolveTarget::Time,
                        SolveTarget::Concentration,
                    ] {
                        let input = KineticsInput {
                            initial_concentration: Some(1.0),
                            final_concentration: Some(a.min(0.5)),
                            time: Some(b),
                            rate_constant: Some(a),
                        };
                        if let Ok(res) = solve(order, target, &input) {
                            assert_finite_result(&res);
                        }
                    }
                }
            }
        }
    }

    fn assert_finite_result(res: &KineticsResult) {
        assert!(res.value.is_finite());
        assert!(res.half_life.is_finite() && res.half_life > 0.0);
        assert!(res.rate_constant.is_finite() && res.rate_constant > 0.0);
        assert!(res.percent_remaining.is_finite());
        assert!(res.half_lives_elapsed.is_finite());
        if res.solve_for != SolveTarget::Concentration {
            assert!(res.value > 0.0);
        }
    }

    #[test]
    fn test_adjacent_concentrations_give_no_zero_rate_constant() {
        for c0 in [1e10, 1.0, 3.7e-5] {
            let ct = f64::from_bits(f64::to_bits(c0) - 1);
            assert!(ct < c0);
            for order in ReactionOrder::iter() {
                match solve(order, SolveTarget::RateConstant, &k_input(c0, ct, 1.0)) {
                    Ok(res) => assert_finite_result(&res),
                    Err(e) => assert!(matches!(
                        e.kind(),
                        KineticsErrorKind::NonPositiveValue | KineticsErrorKind::NonFiniteResult
                    )),
                }
            }
        }
        // ln(1e10) - ln(1e10 - ulp) rounds to zero
        let c0 = 1e10;
        let ct = f64::from_bits(f64::to_bits(c0) - 1);
        let err = solve(ReactionOrder::First, SolveTarget::RateConstant, &k_input(c0, ct, 1.0))
            .unwrap_err();
        assert_eq!(err.kind(), KineticsErrorKind::NonPositiveValue);
    }

    #[test]
    fn test_huge_kt_does_not_overflow_companions() {
        let input = c_input(1.0, 1e10, 1e300);
        let err = solve(ReactionOrder::First, SolveTarget::Concentration, &input).unwrap_err();
        assert_eq!(err.kind(), KineticsErrorKind::NonFiniteResult);

        let grid = [1e-300, 1.0, 1e300];
        for order in ReactionOrder::iter() {
            for &k in &grid {
                for &t in &grid {
                    let input = c_input(1.0, t, k);
                    if let Ok(res) = solve(order, SolveTarget::Concentration, &input) {
                        assert_finite_result(&res);
                    }
                }
            }
        }
    }
}
