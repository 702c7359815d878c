use rand::Rng;
use serde::Serialize;

use crate::domain::config::SimulationConfig;

/// A single placement demand inside a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    /// 1-based position inside the owning workflow. Bookkeeping only; the
    /// placement order is the sequence order.
    pub ordinal: u32,
    pub proc_demand: i64,
    pub bandwidth_demand: i64,
}

/// An ordered task sequence that must be mapped, in order, onto a simple path
/// of adjacent topology nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub id: u32,
    pub tasks: Vec<Task>,
}

impl Workflow {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Draws `config.workflow_count` workflows from the configured bounds.
///
/// The task count is sampled uniformly per workflow, each task's demands are
/// sampled uniformly and independently. No correlation exists between tasks
/// of the same workflow.
pub fn generate_workflows<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Vec<Workflow> {
    let mut workflows = Vec::with_capacity(config.workflow_count as usize);

    for id in 0..config.workflow_count {
        let task_count = rng.random_range(config.min_tasks..=config.max_tasks);

        let tasks = (1..=task_count)
            .map(|ordinal| Task {
                ordinal,
                proc_demand: rng.random_range(config.proc_demand.min..=config.proc_demand.max),
                bandwidth_demand: rng.random_range(config.bandwidth_demand.min..=config.bandwidth_demand.max),
            })
            .collect();

        workflows.push(Workflow { id, tasks });
    }

    workflows
}
