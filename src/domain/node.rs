use serde::Serialize;
use std::fmt;

/// Compute tier of a node. The tier decides the capacity ceilings a node
/// receives and which connectivity rules apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Drone,
    Edge,
    Cloud,
}

/// Index of a node in the topology, in `0..total_nodes`.
///
/// The wrapper keeps node indices from being confused with loop counters or
/// capacities. Checked construction goes through [`TierLayout::node`]; the
/// raw index is only exposed read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw index the caller has already bounds-checked.
    pub(crate) fn from_raw(index: usize) -> NodeId {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// 2-D integer position of a node inside the deployment plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Position {
        Position { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Position) -> f64 {
        let distance_x = (self.x - other.x) as f64;
        let distance_y = (self.y - other.y) as f64;
        (distance_x * distance_x + distance_y * distance_y).sqrt()
    }
}

/// Tier layout of the topology: how many nodes of each tier exist.
///
/// Node indices are assigned contiguously in drone, edge, cloud order, so the
/// tier of a node is decided purely by its index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierLayout {
    pub drones: usize,
    pub edges: usize,
    pub clouds: usize,
}

impl TierLayout {
    pub fn total(&self) -> usize {
        self.drones + self.edges + self.clouds
    }

    /// Tier of `id`, decided by its index range.
    pub fn tier_of(&self, id: NodeId) -> Tier {
        let index = id.index();
        if index < self.drones {
            Tier::Drone
        } else if index < self.drones + self.edges {
            Tier::Edge
        } else {
            Tier::Cloud
        }
    }

    /// Checked `NodeId` construction; `None` when `index` is out of range.
    pub fn node(&self, index: usize) -> Option<NodeId> {
        if index < self.total() { Some(NodeId(index)) } else { None }
    }

    /// All node ids in ascending index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.total()).map(NodeId)
    }
}
