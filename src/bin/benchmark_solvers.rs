use bayesinfer::common::logging::init_logging;
use bayesinfer::inference::driver::max_difference;
use bayesinfer::scenarios::{random::RandomNetwork, ScenarioMaker};
use bayesinfer::{BayesianNetwork, Distribution, InferenceDriver, SolverKind, Variable};
use clap::Parser;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network sizes to benchmark (comma-separated)
    #[arg(long, default_value = "6,8,10,12,14")]
    sizes: String,

    /// Maximum number of parents per variable
    #[arg(long, default_value_t = 3)]
    max_parents: usize,

    /// Seed for the random networks
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Run only variable elimination
    #[arg(long)]
    elimination_only: bool,

    /// Run only enumeration
    #[arg(long)]
    enumeration_only: bool,
}

fn time_solver(
    kind: SolverKind,
    network: &BayesianNetwork,
    query: &[Variable],
) -> Result<(Duration, Distribution), Box<dyn std::error::Error>> {
    let driver = InferenceDriver::new(kind);
    let start = Instant::now();
    let posterior = driver.infer(network, &Default::default(), query)?;
    Ok((start.elapsed(), posterior))
}

fn benchmark_size(
    size: usize,
    args: &Args,
    run_enumeration: bool,
    run_elimination: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n========== BENCHMARKING {} VARIABLES ==========", size);
    let network = RandomNetwork::new(args.seed, size, args.max_parents).setup_scenario()?;
    let query: Vec<Variable> = network.variables().iter().rev().take(1).cloned().collect();

    let mut enumeration = None;
    let mut elimination = None;

    if run_enumeration {
        let (elapsed, posterior) = time_solver(SolverKind::Enumeration, &network, &query)?;
        println!("Enumeration: {:.6} seconds", elapsed.as_secs_f64());
        enumeration = Some((elapsed, posterior));
    }
    if run_elimination {
        let (elapsed, posterior) = time_solver(SolverKind::VariableElimination, &network, &query)?;
        println!("Variable elimination: {:.6} seconds", elapsed.as_secs_f64());
        elimination = Some((elapsed, posterior));
    }

    if let (Some((enum_time, enum_posterior)), Some((ve_time, ve_posterior))) =
        (enumeration, elimination)
    {
        let speedup = enum_time.as_secs_f64() / ve_time.as_secs_f64();
        println!("\n--- Performance Summary ---");
        println!("Speedup: {:.2}x", speedup);
        println!(
            "Max disagreement: {:e}",
            max_difference(&enum_posterior, &ve_posterior)?
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let sizes: Vec<usize> = args
        .sizes
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if sizes.is_empty() {
        eprintln!("No valid network sizes provided");
        return Ok(());
    }

    let run_enumeration = !args.elimination_only;
    let run_elimination = !args.enumeration_only;

    println!("=== BAYESINFER SOLVER BENCHMARK ===");
    println!("Network sizes to test: {:?}", sizes);
    for &size in &sizes {
        if let Err(e) = benchmark_size(size, &args, run_enumeration, run_elimination) {
            eprintln!("Error benchmarking {} variables: {}", size, e);
        }
    }
    println!("\n=== BENCHMARK COMPLETE ===");
    Ok(())
}
