use serde::Serialize;

use crate::domain::allocator::ResidualCapacity;
use crate::domain::catalog::ResourceCatalog;
use crate::domain::node::NodeId;
use crate::domain::workflow::Workflow;

/// Outcome of one workflow placement attempt inside a chromosome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementOutcome {
    pub workflow_id: u32,
    pub success: bool,

    /// One node per task, in task order; empty when the placement failed.
    pub path: Vec<NodeId>,
}

/// Aggregate fitness of one chromosome: what its successful placements were
/// granted and what delay they incur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Fitness {
    /// Sum of processing demands over all tasks of successful workflows.
    pub granted_processing: i64,

    /// Sum of bandwidth demands over all tasks of successful workflows.
    pub granted_bandwidth: i64,

    /// Sum of delay factors over every node appearance in a successful path.
    /// A node hosting tasks of several workflows is counted per appearance.
    pub delay_sum: i64,
}

/// An independent snapshot of residual per-node capacity plus the placement
/// outcomes recorded against it.
///
/// Every chromosome owns its arrays outright. Building a population copies
/// the catalog ceilings once per member; no member ever aliases another, and
/// the shared catalog is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    residual_proc: Vec<i64>,
    residual_bandwidth: Vec<i64>,

    /// Copied from the catalog for fitness lookups, never debited.
    delay_factor: Vec<i64>,

    pub workflow_status: Vec<PlacementOutcome>,
}

impl Chromosome {
    /// A fresh snapshot with full ceilings and no outcomes.
    pub fn from_catalog(catalog: &ResourceCatalog) -> Chromosome {
        Chromosome {
            residual_proc: catalog.proc_ceilings().to_vec(),
            residual_bandwidth: catalog.bandwidth_ceilings().to_vec(),
            delay_factor: catalog.delay_factors().to_vec(),
            workflow_status: Vec::new(),
        }
    }

    /// Debits every path node by its corresponding task's demands and records
    /// the successful outcome.
    ///
    /// `path` must hold one node per task of `workflow`, produced by the
    /// allocator against this chromosome's own view. This is the only place
    /// residual capacity ever changes; a debited amount is never restored
    /// within a run.
    pub fn commit(&mut self, workflow: &Workflow, path: Vec<NodeId>) {
        debug_assert_eq!(path.len(), workflow.tasks.len(), "one path node per task");

        for (node, task) in path.iter().zip(&workflow.tasks) {
            self.residual_proc[node.index()] -= task.proc_demand;
            self.residual_bandwidth[node.index()] -= task.bandwidth_demand;
        }

        self.workflow_status.push(PlacementOutcome { workflow_id: workflow.id, success: true, path });
    }

    /// Records a failed placement; residual state is untouched.
    pub fn record_failure(&mut self, workflow_id: u32) {
        self.workflow_status.push(PlacementOutcome { workflow_id, success: false, path: Vec::new() });
    }

    pub fn successful_placements(&self) -> usize {
        self.workflow_status.iter().filter(|outcome| outcome.success).count()
    }

    /// Aggregate fitness over all successful placements.
    ///
    /// `workflows` must be the same collection the outcomes were recorded
    /// from; demands are summed per task of each successful workflow, delay
    /// factors per node appearance on its path.
    pub fn fitness(&self, workflows: &[Workflow]) -> Fitness {
        let mut fitness = Fitness::default();

        for outcome in &self.workflow_status {
            if !outcome.success {
                continue;
            }

            let workflow = workflows
                .iter()
                .find(|workflow| workflow.id == outcome.workflow_id)
                .expect("recorded outcome refers to a known workflow");

            for task in &workflow.tasks {
                fitness.granted_processing += task.proc_demand;
                fitness.granted_bandwidth += task.bandwidth_demand;
            }
            for node in &outcome.path {
                fitness.delay_sum += self.delay_factor[node.index()];
            }
        }

        fitness
    }
}

impl ResidualCapacity for Chromosome {
    fn residual_proc(&self, node: NodeId) -> i64 {
        self.residual_proc[node.index()]
    }

    fn residual_bandwidth(&self, node: NodeId) -> i64 {
        self.residual_bandwidth[node.index()]
    }
}
