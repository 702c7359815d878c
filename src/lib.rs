use rand::Rng;

use crate::domain::allocator::SearchMode;
use crate::domain::catalog::ResourceCatalog;
use crate::domain::config::SimulationConfig;
use crate::domain::population::{self, Population};
use crate::domain::scene::NullObserver;
use crate::domain::topology::NetworkTopology;
use crate::domain::workflow::{self, Workflow};

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod stats;

/// Everything one simulation run produced.
#[derive(Debug)]
pub struct SimulationRun {
    pub topology: NetworkTopology,
    pub catalog: ResourceCatalog,
    pub workflows: Vec<Workflow>,
    pub population: Population,
}

/// Builds the topology, catalog and workflows from `config` and samples one
/// population with the injected generator.
///
/// The generator is the only source of randomness; a seeded generator with an
/// identical configuration reproduces the run exactly.
pub fn run_simulation<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R, mode: SearchMode) -> SimulationRun {
    let mut observer = NullObserver;
    let topology = NetworkTopology::deploy(config, rng, &mut observer);
    log::info!("Topology deployed: {} nodes, {} edges.", topology.total_nodes(), topology.edge_count());

    let catalog = ResourceCatalog::from_config(config);

    let workflows = workflow::generate_workflows(config, rng);
    log::info!("Generated {} workflows.", workflows.len());

    let population = population::build_population(config.population_size, &topology, &catalog, &workflows, rng, mode);
    log::info!("Sampled population of {} chromosomes.", population.len());

    SimulationRun { topology, catalog, workflows, population }
}
