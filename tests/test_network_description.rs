#[cfg(test)]
mod test_network_description {
    use bayesinfer::inference::problem::evidence;
    use bayesinfer::model::load_network;
    use bayesinfer::scenarios::ScenarioMakerFactory;
    use bayesinfer::{BayesError, BayesianNetwork, Event, InferenceDriver, SolverKind, Variable};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_network_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "variables": [
                    {{ "name": "A", "table": [ {{ "probability": 0.3 }} ] }},
                    {{ "name": "B", "parents": ["A"], "table": [
                        {{ "true_parents": ["A"], "probability": 0.8 }},
                        {{ "true_parents": [], "probability": 0.1 }}
                    ] }}
                ]
            }}"#
        )
        .unwrap();

        let network = load_network(file.path()).unwrap();
        assert!(network.is_valid());
        let posterior = InferenceDriver::new(SolverKind::VariableElimination)
            .infer(&network, &evidence(&[]), &[Variable::from("B")])
            .unwrap();
        let b_true: Event = ["B"].into_iter().collect();
        assert!((posterior.probability(&b_true) - 0.31).abs() < 1e-12);
    }

    #[test]
    fn test_json_round_trip_preserves_scenarios() {
        for name in ScenarioMakerFactory::NAMES {
            let network = ScenarioMakerFactory::new_network(name).unwrap();
            let json = network.to_json().unwrap();
            let rebuilt = BayesianNetwork::from_json(&json).unwrap();
            assert_eq!(
                rebuilt.to_description().unwrap(),
                network.to_description().unwrap(),
                "scenario {} changed after a round trip",
                name
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_network(dir.path().join("absent.json"));
        assert!(matches!(result, Err(BayesError::Io(_))));
    }

    #[test]
    fn test_duplicate_variable_in_description() {
        let json = r#"{ "variables": [ { "name": "A" }, { "name": "A" } ] }"#;
        assert!(matches!(
            BayesianNetwork::from_json(json),
            Err(BayesError::DuplicateVariable(_))
        ));
    }

    #[test]
    fn test_table_row_naming_non_parent() {
        let json = r#"{ "variables": [
            { "name": "A" },
            { "name": "B", "table": [ { "true_parents": ["A"], "probability": 0.5 } ] }
        ] }"#;
        assert!(matches!(
            BayesianNetwork::from_json(json),
            Err(BayesError::NotAParent { .. })
        ));
    }
}
