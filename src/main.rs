use anyhow::{Context, Result, bail};
use bayesinfer::common::setup::{CommandLineOptions, parse_configuration_options};
use bayesinfer::inference::driver::max_difference;
use bayesinfer::model::load_network;
use bayesinfer::scenarios::ScenarioMakerFactory;
use bayesinfer::{BayesianNetwork, Distribution, InferenceDriver, InferenceRequest, SolverKind};
use colored::Colorize;
use log::info;
use std::fs;

fn load(options: &CommandLineOptions) -> Result<BayesianNetwork> {
    if let Some(path) = &options.network_file {
        return load_network(path).with_context(|| format!("Failed to load network from {}", path));
    }
    if let Some(name) = &options.scenario_name {
        return ScenarioMakerFactory::new_network(name)
            .with_context(|| format!("Failed to build scenario {}", name));
    }
    bail!("either --network or --scenario is required")
}

fn print_distribution(title: &str, distribution: &Distribution) {
    println!("{}", title.bold());
    for event in distribution.iter_assignments() {
        let row: Vec<String> = distribution
            .scope()
            .iter()
            .map(|variable| {
                if event.contains(variable.name()) {
                    format!("{}", variable).green().to_string()
                } else {
                    format!("!{}", variable).red().to_string()
                }
            })
            .collect();
        println!("  {:<40} {:.6}", row.join(" "), distribution.probability(&event));
    }
}

fn run_single(network: &BayesianNetwork, options: &CommandLineOptions) -> Result<()> {
    if options.query.is_empty() {
        bail!("at least one --query variable is required");
    }
    let driver = InferenceDriver::new(options.solver);
    let posterior = driver
        .infer(network, &options.evidence, &options.query)
        .context("Inference failed")?;
    print_distribution(
        &format!("P({} | evidence) via {}", names(&options.query), driver.solver_name()),
        &posterior,
    );

    if options.compare {
        let other_kind = match options.solver {
            SolverKind::Enumeration => SolverKind::VariableElimination,
            SolverKind::VariableElimination => SolverKind::Enumeration,
        };
        let other = InferenceDriver::new(other_kind)
            .infer(network, &options.evidence, &options.query)
            .context("Comparison inference failed")?;
        let difference = max_difference(&posterior, &other)?;
        let summary = format!("max |difference| vs {:?}: {:e}", other_kind, difference);
        if difference < 1e-9 {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    }
    Ok(())
}

fn run_batch(network: &BayesianNetwork, options: &CommandLineOptions, path: &str) -> Result<()> {
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let requests: Vec<InferenceRequest> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))?;
    info!("running {} requests from {}", requests.len(), path);

    let driver = InferenceDriver::new(options.solver);
    for (index, (request, result)) in requests
        .iter()
        .zip(driver.infer_batch(network, &requests))
        .enumerate()
    {
        match result {
            Ok(posterior) => {
                print_distribution(&format!("#{} P({})", index, names(&request.query)), &posterior)
            }
            Err(e) => println!("{}", format!("#{} failed: {}", index, e).red()),
        }
    }
    Ok(())
}

fn names(variables: &[bayesinfer::Variable]) -> String {
    variables
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let options = parse_configuration_options()?;
    let network = load(&options)?;
    info!("loaded network with {} variables", network.len());

    if options.validate {
        network.validate().context("Network failed validation")?;
    }

    match &options.batch_file {
        Some(path) => run_batch(&network, &options, path),
        None => run_single(&network, &options),
    }
}
