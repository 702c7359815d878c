use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::domain::allocator::{self, SearchMode};
use crate::domain::catalog::ResourceCatalog;
use crate::domain::chromosome::{Chromosome, Fitness};
use crate::domain::topology::NetworkTopology;
use crate::domain::workflow::Workflow;

/// One population member: a chromosome and its evaluated fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: Fitness,
}

/// Fixed-size collection of independently sampled chromosomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    pub members: Vec<Individual>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member with the highest granted totals, ties broken by lower delay
    /// sum. Reporting convenience only; the sampler never ranks members.
    pub fn best_by_granted(&self) -> Option<&Individual> {
        self.members.iter().max_by_key(|member| {
            (
                member.fitness.granted_processing + member.fitness.granted_bandwidth,
                std::cmp::Reverse(member.fitness.delay_sum),
            )
        })
    }
}

/// Builds `size` independent chromosomes, each evaluated against its own copy
/// of the catalog ceilings.
///
/// One deterministic RNG stream is forked per member from the injected
/// generator before the parallel region, so the result only depends on the
/// generator's state, never on scheduling.
pub fn build_population<R: Rng + ?Sized>(
    size: u32,
    topology: &NetworkTopology,
    catalog: &ResourceCatalog,
    workflows: &[Workflow],
    rng: &mut R,
    mode: SearchMode,
) -> Population {
    let seeds: Vec<u64> = (0..size).map(|_| rng.random()).collect();

    let members = seeds
        .into_par_iter()
        .map(|seed| {
            let mut member_rng = StdRng::seed_from_u64(seed);
            evaluate_member(topology, catalog, workflows, &mut member_rng, mode)
        })
        .collect();

    Population { members }
}

/// Runs every workflow once against a fresh chromosome and scores it.
///
/// Each workflow starts at a uniformly random node. A successful path is
/// committed (debited) immediately, so later workflows of the same member see
/// the reduced residuals; a failure is recorded and leaves the residuals
/// untouched.
fn evaluate_member<R: Rng + ?Sized>(
    topology: &NetworkTopology,
    catalog: &ResourceCatalog,
    workflows: &[Workflow],
    rng: &mut R,
    mode: SearchMode,
) -> Individual {
    let mut chromosome = Chromosome::from_catalog(catalog);

    for workflow in workflows {
        let start_index = rng.random_range(0..topology.total_nodes());
        let start = topology.node(start_index).expect("start index is in range");

        match allocator::allocate(topology, workflow, start, &chromosome, mode) {
            Some(path) => {
                log::debug!("Workflow {} allocated from start {}: {:?}", workflow.id, start, path);
                chromosome.commit(workflow, path);
            }
            None => {
                log::debug!("Workflow {} could not be placed from start {}.", workflow.id, start);
                chromosome.record_failure(workflow.id);
            }
        }
    }

    let fitness = chromosome.fitness(workflows);
    Individual { chromosome, fitness }
}
