use clap::{builder::EnumValueParser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use serde::Deserialize;

use crate::inference::problem::Evidence;
use crate::inference::SolverKind;
use crate::model::variable::Variable;

use super::errors::{BayesError, Result};
use super::logging::init_logging;

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CommandLineOptions {
    pub network_file: Option<String>,
    pub scenario_name: Option<String>,
    pub query: Vec<Variable>,
    pub evidence: Evidence,
    pub batch_file: Option<String>,
    pub solver: SolverKind,
    pub validate: bool,
    pub compare: bool,
}

pub fn command() -> Command {
    Command::new("BAYESINFER")
        .version("0.1")
        .about("Exact inference over boolean Bayesian networks.")
        .arg(
            Arg::new("network")
                .long("network")
                .value_name("FILE")
                .help("JSON network description to load"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .value_name("STRING")
                .help("Built-in network: one_var, chain, sprinkler, alarm or random"),
        )
        .group(
            ArgGroup::new("source")
                .args(["network", "scenario"])
                .required(true),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("VARIABLE")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Query variable (repeatable or comma separated)"),
        )
        .arg(
            Arg::new("evidence")
                .long("evidence")
                .short('e')
                .value_name("VARIABLE=BOOL")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Observed value, e.g. rain=true (repeatable or comma separated)"),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .value_name("FILE")
                .help("JSON array of {evidence, query} requests to run in parallel"),
        )
        .arg(
            Arg::new("solver")
                .long("solver")
                .value_parser(EnumValueParser::<SolverKind>::new())
                .help("Inference algorithm")
                .default_value("variable-elimination"),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Check every conditional table before inference")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Run both solvers and report the largest disagreement")
                .action(ArgAction::SetTrue),
        )
}

/// Parses `name=true` / `name=false` (also accepts `1`/`0`, `t`/`f`).
pub fn parse_observation(text: &str) -> Result<(Variable, bool)> {
    let (name, value) = text.split_once('=').ok_or_else(|| {
        BayesError::InvalidOperation(format!("evidence '{}' is not of the form name=bool", text))
    })?;
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => true,
        "false" | "f" | "0" => false,
        other => {
            return Err(BayesError::InvalidOperation(format!(
                "evidence value '{}' for '{}' is not a boolean",
                other, name
            )));
        }
    };
    Ok((Variable::from(name.trim()), value))
}

pub fn options_from_matches(matches: &ArgMatches) -> Result<CommandLineOptions> {
    let query = matches
        .get_many::<String>("query")
        .map(|values| values.map(|v| Variable::from(v.trim())).collect())
        .unwrap_or_default();
    let mut evidence = Evidence::new();
    if let Some(values) = matches.get_many::<String>("evidence") {
        for value in values {
            let (variable, observed) = parse_observation(value)?;
            evidence.insert(variable, observed);
        }
    }
    let solver = matches
        .get_one::<SolverKind>("solver")
        .copied()
        .unwrap_or_default();

    Ok(CommandLineOptions {
        network_file: matches.get_one::<String>("network").cloned(),
        scenario_name: matches.get_one::<String>("scenario").cloned(),
        query,
        evidence,
        batch_file: matches.get_one::<String>("batch").cloned(),
        solver,
        validate: matches.get_flag("validate"),
        compare: matches.get_flag("compare"),
    })
}

/// Initializes logging and reads the options from the process arguments.
pub fn parse_configuration_options() -> Result<CommandLineOptions> {
    init_logging();
    options_from_matches(&command().get_matches())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::problem::evidence;

    fn parse(args: &[&str]) -> Result<CommandLineOptions> {
        let matches = command()
            .try_get_matches_from(args)
            .map_err(|e| BayesError::InvalidOperation(e.to_string()))?;
        options_from_matches(&matches)
    }

    #[test]
    fn test_parse_observation() {
        assert_eq!(parse_observation("rain=true").unwrap(), (Variable::from("rain"), true));
        assert_eq!(parse_observation("rain = 0").unwrap(), (Variable::from("rain"), false));
        assert!(parse_observation("rain").is_err());
        assert!(parse_observation("rain=maybe").is_err());
    }

    #[test]
    fn test_full_command_line() {
        let options = parse(&[
            "bayesinfer",
            "--scenario",
            "sprinkler",
            "-q",
            "rain,cloudy",
            "-e",
            "wet_grass=true",
            "--solver",
            "enumeration",
            "--compare",
        ])
        .unwrap();
        assert_eq!(options.scenario_name.as_deref(), Some("sprinkler"));
        assert_eq!(options.query, vec![Variable::from("rain"), Variable::from("cloudy")]);
        assert_eq!(options.evidence, evidence(&[("wet_grass", true)]));
        assert_eq!(options.solver, SolverKind::Enumeration);
        assert!(options.compare);
        assert!(!options.validate);
    }

    #[test]
    fn test_defaults_to_variable_elimination() {
        let options = parse(&["bayesinfer", "--network", "net.json", "-q", "A"]).unwrap();
        assert_eq!(options.solver, SolverKind::VariableElimination);
        assert_eq!(options.network_file.as_deref(), Some("net.json"));
    }

    #[test]
    fn test_network_source_is_required() {
        assert!(parse(&["bayesinfer", "-q", "A"]).is_err());
        assert!(parse(&["bayesinfer", "--network", "n.json", "--scenario", "chain"]).is_err());
    }
}
