#[cfg(test)]
mod test_scenarios {
    use bayesinfer::inference::problem::evidence;
    use bayesinfer::scenarios::ScenarioMakerFactory;
    use bayesinfer::{
        BayesError, BayesianNetwork, Event, InferenceDriver, SolverKind, Variable,
    };

    fn both() -> [InferenceDriver; 2] {
        [
            InferenceDriver::new(SolverKind::Enumeration),
            InferenceDriver::new(SolverKind::VariableElimination),
        ]
    }

    fn truth(names: &[&str]) -> Event {
        names.iter().copied().collect()
    }

    #[test]
    fn test_single_root_returns_prior() {
        let network = ScenarioMakerFactory::new_network("one_var").unwrap();
        for driver in both() {
            let posterior = driver
                .infer(&network, &evidence(&[]), &[Variable::from("exciting")])
                .unwrap();
            assert_eq!(posterior.len(), 2);
            assert!((posterior.probability(&truth(&["exciting"])) - 0.3).abs() < 1e-12);
            assert!((posterior.probability(&truth(&[])) - 0.7).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chain_marginal() {
        let network = ScenarioMakerFactory::new_network("chain").unwrap();
        for driver in both() {
            let posterior = driver
                .infer(&network, &evidence(&[]), &[Variable::from("B")])
                .unwrap();
            assert!((posterior.probability(&truth(&["B"])) - 0.31).abs() < 1e-12);
            assert!((posterior.probability(&truth(&[])) - 0.69).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chain_with_evidence() {
        let network = ScenarioMakerFactory::new_network("chain").unwrap();
        for driver in both() {
            let posterior = driver
                .infer(&network, &evidence(&[("A", true)]), &[Variable::from("B")])
                .unwrap();
            assert!((posterior.probability(&truth(&["B"])) - 0.8).abs() < 1e-12);
            assert!((posterior.probability(&truth(&[])) - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_alarm_burglary_given_both_calls() {
        let network = ScenarioMakerFactory::new_network("alarm").unwrap();
        for driver in both() {
            let posterior = driver
                .infer(
                    &network,
                    &evidence(&[("john_calls", true), ("mary_calls", true)]),
                    &[Variable::from("burglary")],
                )
                .unwrap();
            assert!((posterior.probability(&truth(&["burglary"])) - 0.284_171_8).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sprinkler_explaining_away() {
        let network = ScenarioMakerFactory::new_network("sprinkler").unwrap();
        let driver = InferenceDriver::new(SolverKind::VariableElimination);
        let wet = driver
            .infer(&network, &evidence(&[("wet_grass", true)]), &[Variable::from("sprinkler")])
            .unwrap();
        let wet_and_rain = driver
            .infer(
                &network,
                &evidence(&[("wet_grass", true), ("rain", true)]),
                &[Variable::from("sprinkler")],
            )
            .unwrap();
        let p_wet = wet.probability(&truth(&["sprinkler"]));
        let p_wet_and_rain = wet_and_rain.probability(&truth(&["sprinkler"]));
        assert!((p_wet - 0.4298).abs() < 1e-3);
        assert!(p_wet_and_rain < p_wet);
    }

    #[test]
    fn test_zero_support_evidence_is_degenerate() {
        let mut network = BayesianNetwork::new();
        network.add_variable("A").unwrap();
        network.add_variable("B").unwrap();
        network.add_dependency("A", "B").unwrap();
        network.set_prior_probability("A", 0.4).unwrap();
        network.set_probability("B", &["A"], 0.0).unwrap();
        network.set_probability::<&str>("B", &[], 0.0).unwrap();
        for driver in both() {
            let result = driver.infer(&network, &evidence(&[("B", true)]), &[Variable::from("A")]);
            assert!(
                matches!(result, Err(BayesError::DegenerateDistribution)),
                "{} did not report degeneracy",
                driver.solver_name()
            );
        }
    }

    #[test]
    fn test_invalid_table_surfaces_during_inference() {
        let mut network = ScenarioMakerFactory::new_network("chain").unwrap();
        network.add_variable("C").unwrap();
        network.add_dependency("B", "C").unwrap();
        network.set_probability("C", &["B"], 0.5).unwrap();
        assert!(!network.is_valid());
        for driver in both() {
            let result = driver.infer(&network, &evidence(&[]), &[Variable::from("C")]);
            assert!(matches!(result, Err(BayesError::IncompleteTable { .. })));
        }
    }

    #[test]
    fn test_posterior_covers_full_powerset_and_sums_to_one() {
        let network = ScenarioMakerFactory::new_network("alarm").unwrap();
        let query = [
            Variable::from("burglary"),
            Variable::from("earthquake"),
            Variable::from("alarm"),
        ];
        for driver in both() {
            let posterior = driver
                .infer(&network, &evidence(&[("mary_calls", true)]), &query)
                .unwrap();
            assert_eq!(posterior.len(), 8);
            assert!(posterior.is_complete());
            assert!((posterior.total_mass() - 1.0).abs() < 1e-12);
        }
    }
}
