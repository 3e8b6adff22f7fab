use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chain_sim::{loader, Agent, LifeSim, MultiplicationSim, RunOutcome, SimKit};

#[derive(Parser, Debug)]
#[command(name = "chain_sim")]
#[command(about = "Run Markov chain event simulations from a JSON specification")]
struct Args {
    /// Which sim kit to run ("multiplication" or "life")
    #[arg(short = 'k', long, default_value = "multiplication")]
    sim: String,

    /// Path to the specification JSON (defaults to the shipped spec for the chosen sim)
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Agent name used in the end-of-run summary
    #[arg(short, long, default_value = "Runner")]
    name: String,

    /// Maximum number of events in one run
    #[arg(short, long, default_value = "30")]
    limit: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let kit: Box<dyn SimKit> = match args.sim.as_str() {
        "life" => Box::new(LifeSim),
        "multiplication" => Box::new(MultiplicationSim),
        other => {
            eprintln!(
                "Error: unknown sim kit \"{}\" (expected \"life\" or \"multiplication\")",
                other,
            );
            process::exit(1);
        }
    };

    let spec_path = args
        .spec
        .unwrap_or_else(|| PathBuf::from(format!("specs/{}.json", args.sim)));

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Loading event graph from {}", spec_path.display());
    let graph = match loader::load_graph(&spec_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    println!("Loaded {} event types (seed: {})", graph.len(), seed);
    println!();

    let mut agent = Agent::new(args.name, &graph);
    let outcome = agent.run(kit.as_ref(), args.limit, &mut rng);

    println!();
    match outcome {
        RunOutcome::Ended => println!("Simulation complete."),
        RunOutcome::LimitExhausted => {
            println!("Event limit reached after {} events.", agent.log().len())
        }
    }
}
