use crate::domain::node::NodeId;
use crate::domain::topology::NetworkTopology;
use crate::domain::workflow::{Task, Workflow};

/// Read access to residual node capacity during a search.
///
/// The allocator only ever reads through this trait. Debiting is the caller's
/// job, after the whole path has been accepted.
pub trait ResidualCapacity {
    fn residual_proc(&self, node: NodeId) -> i64;
    fn residual_bandwidth(&self, node: NodeId) -> i64;
}

/// Search discipline of the constrained allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Follow only the first qualifying neighbour at every step and return
    /// whatever that single branch yields. Nodes are never released from the
    /// path, so exactly one depth-first path per start node is examined.
    #[default]
    Greedy,

    /// Full constraint search: a failed deeper branch releases its tentative
    /// node and the scan continues with the next sibling candidate.
    Backtracking,
}

/// Attempts to map `workflow` onto a simple path of adjacent nodes starting
/// at `start`.
///
/// The returned path holds one node per task, in task order, with `start`
/// first: the node at position `k` hosts task `k+1` and must have residuals
/// strictly above that task's demands. Candidate neighbours are scanned in
/// ascending index order; the capacity check is evaluated against the node
/// being left, and against the final node for the last task.
///
/// Residual capacity is read through `view` but never debited here. A failed
/// attempt is not retried; choosing a different start node is up to the
/// caller.
pub fn allocate(
    topology: &NetworkTopology,
    workflow: &Workflow,
    start: NodeId,
    view: &dyn ResidualCapacity,
    mode: SearchMode,
) -> Option<Vec<NodeId>> {
    workflow.tasks.last()?;

    let mut path = vec![start];
    let found = match mode {
        SearchMode::Greedy => search_greedy(topology, workflow, start, 1, view, &mut path),
        SearchMode::Backtracking => search_backtracking(topology, workflow, start, 1, view, &mut path),
    };

    found.then_some(path)
}

fn has_capacity_for(view: &dyn ResidualCapacity, node: NodeId, task: &Task) -> bool {
    view.residual_proc(node) > task.proc_demand && view.residual_bandwidth(node) > task.bandwidth_demand
}

fn search_greedy(
    topology: &NetworkTopology,
    workflow: &Workflow,
    current: NodeId,
    task_ordinal: usize,
    view: &dyn ResidualCapacity,
    path: &mut Vec<NodeId>,
) -> bool {
    let task_count = workflow.tasks.len();
    if task_ordinal == task_count {
        // The node we stand on hosts the final task.
        return has_capacity_for(view, current, &workflow.tasks[task_count - 1]);
    }

    let task = &workflow.tasks[task_ordinal - 1];
    for candidate in topology.node_ids() {
        if !topology.is_adjacent(current, candidate) || path.contains(&candidate) {
            continue;
        }

        // The first qualifying neighbour decides the whole branch; the node
        // being left must still cover the task it hands off.
        if !has_capacity_for(view, current, task) {
            return false;
        }
        path.push(candidate);
        return search_greedy(topology, workflow, candidate, task_ordinal + 1, view, path);
    }

    false
}

fn search_backtracking(
    topology: &NetworkTopology,
    workflow: &Workflow,
    current: NodeId,
    task_ordinal: usize,
    view: &dyn ResidualCapacity,
    path: &mut Vec<NodeId>,
) -> bool {
    let task_count = workflow.tasks.len();
    if task_ordinal == task_count {
        return has_capacity_for(view, current, &workflow.tasks[task_count - 1]);
    }

    if !has_capacity_for(view, current, &workflow.tasks[task_ordinal - 1]) {
        return false;
    }

    for candidate in topology.node_ids() {
        if !topology.is_adjacent(current, candidate) || path.contains(&candidate) {
            continue;
        }

        path.push(candidate);
        if search_backtracking(topology, workflow, candidate, task_ordinal + 1, view, path) {
            return true;
        }
        path.pop();
    }

    false
}

/// Unconstrained comparison probe.
///
/// Explores siblings after a failed deeper branch but never removes a
/// tentatively visited node, so later siblings see the polluted visited set.
/// No capacity checks are performed. Returns whether a covering walk was
/// found together with the visited list, which on failure (and even on
/// success) may contain nodes of abandoned branches.
pub fn probe_unconstrained(topology: &NetworkTopology, workflow: &Workflow, start: NodeId) -> (bool, Vec<NodeId>) {
    let mut visited = vec![start];
    if workflow.is_empty() {
        return (false, visited);
    }

    let found = probe_step(topology, workflow, start, 1, &mut visited);
    (found, visited)
}

fn probe_step(topology: &NetworkTopology, workflow: &Workflow, current: NodeId, task_ordinal: usize, visited: &mut Vec<NodeId>) -> bool {
    if task_ordinal == workflow.tasks.len() {
        return true;
    }

    for candidate in topology.node_ids() {
        if !topology.is_adjacent(current, candidate) || visited.contains(&candidate) {
            continue;
        }

        visited.push(candidate);
        if probe_step(topology, workflow, candidate, task_ordinal + 1, visited) {
            return true;
        }
        // The failed candidate stays in the visited list.
    }

    false
}
