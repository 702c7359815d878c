use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use uav_workflow_placement::api::config_dto::SimulationConfigDto;
use uav_workflow_placement::domain::allocator::SearchMode;
use uav_workflow_placement::domain::config::SimulationConfig;
use uav_workflow_placement::domain::scene::Scene;
use uav_workflow_placement::error::Result;
use uav_workflow_placement::loader::parser::parse_json_file;
use uav_workflow_placement::{logger, run_simulation, stats};

#[derive(Debug, Parser)]
#[command(name = "uav_workflow_placement", about = "Samples workflow placements onto a drone/edge/cloud topology.")]
struct Cli {
    /// Path to the JSON simulation configuration.
    #[arg(long, default_value = "data/config.json")]
    config: String,

    /// Seed for the random source. Runs vary when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Path-search discipline of the allocator.
    #[arg(long, value_enum, default_value = "greedy")]
    mode: ModeArg,

    /// Optional CSV file for the per-member fitness summary.
    #[arg(long)]
    stats_out: Option<String>,

    /// Optional JSON file with the renderable scene of the best member.
    #[arg(long)]
    scene_out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Greedy,
    Backtracking,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> SearchMode {
        match mode {
            ModeArg::Greedy => SearchMode::Greedy,
            ModeArg::Backtracking => SearchMode::Backtracking,
        }
    }
}

fn main() {
    logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Loading configuration from '{}'...", cli.config);
    let dto: SimulationConfigDto = parse_json_file(&cli.config)?;
    let config = SimulationConfig::try_from(dto)?;

    let mut rng: StdRng = match cli.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let run = run_simulation(&config, &mut rng, cli.mode.into());

    let attempts = run.population.len() * run.workflows.len();
    let successes: usize = run.population.members.iter().map(|member| member.chromosome.successful_placements()).sum();
    log::info!("Placement attempts: {} of {} succeeded.", successes, attempts);

    if let Some(best) = run.population.best_by_granted() {
        log::info!(
            "Best member: granted processing {}, granted bandwidth {}, delay sum {}.",
            best.fitness.granted_processing,
            best.fitness.granted_bandwidth,
            best.fitness.delay_sum
        );

        if let Some(path) = &cli.scene_out {
            let scene = Scene::from_snapshot(&run.topology, &best.chromosome);
            std::fs::write(path, serde_json::to_string_pretty(&scene)?)?;
            log::info!("Scene written to '{}'.", path);
        }
    }

    if let Some(path) = &cli.stats_out {
        stats::write_fitness_csv(&run.population, path)?;
        log::info!("Fitness summary written to '{}'.", path);
    }

    Ok(())
}
