use serde::Serialize;

use crate::domain::chromosome::Chromosome;
use crate::domain::node::{Position, Tier};
use crate::domain::topology::NetworkTopology;

/// Receives renderable geometry from the core as it is produced.
///
/// The simulator never draws anything itself. An observer gets plain position
/// data and can forward it to whatever plotting tool lives outside the crate.
pub trait TopologyObserver {
    /// Called once for every newly created connectivity edge.
    fn edge_created(&mut self, _a: Position, _b: Position) {}
}

/// Observer that drops everything.
#[derive(Debug, Default)]
pub struct NullObserver;

impl TopologyObserver for NullObserver {}

/// A node position tagged with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneNode {
    pub tier: Tier,
    pub position: Position,
}

/// The ordered node positions a successfully placed workflow runs along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneAllocation {
    pub workflow_id: u32,
    pub path: Vec<Position>,
}

/// Plain-data rendering snapshot of one simulation outcome.
///
/// Everything an external plotting tool needs: node positions tagged by tier,
/// connectivity edges as position pairs, and the path of every successful
/// workflow placement of one chromosome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<(Position, Position)>,
    pub allocations: Vec<SceneAllocation>,
}

impl Scene {
    /// Collects the geometry of `topology` and the successful placements
    /// recorded in `snapshot`.
    pub fn from_snapshot(topology: &NetworkTopology, snapshot: &Chromosome) -> Scene {
        let nodes = topology
            .node_ids()
            .map(|id| SceneNode { tier: topology.tier_of(id), position: topology.position(id) })
            .collect();

        let edges = topology
            .edges()
            .into_iter()
            .map(|(a, b)| (topology.position(a), topology.position(b)))
            .collect();

        let allocations = snapshot
            .workflow_status
            .iter()
            .filter(|outcome| outcome.success)
            .map(|outcome| SceneAllocation {
                workflow_id: outcome.workflow_id,
                path: outcome.path.iter().map(|&node| topology.position(node)).collect(),
            })
            .collect();

        Scene { nodes, edges, allocations }
    }
}
