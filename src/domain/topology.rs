use rand::Rng;

use crate::domain::config::SimulationConfig;
use crate::domain::node::{NodeId, Position, Tier, TierLayout};
use crate::domain::scene::TopologyObserver;

/// The tiered network topology the workflows are placed on.
///
/// Holds the node positions and the symmetric connectivity matrix. Both are
/// fixed at construction; allocation runs only ever read them.
///
/// Connectivity rules:
/// * drone–drone: linked iff their Euclidean distance is within the
///   transmission range (boundary inclusive).
/// * drone–edge: always linked (cellular backhaul).
/// * edge–cloud: always linked.
/// * drone–cloud, edge–edge, cloud–cloud: never linked directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTopology {
    layout: TierLayout,
    positions: Vec<Position>,
    adjacency: Vec<Vec<bool>>,
}

impl NetworkTopology {
    /// Deploys all nodes at random integer positions inside their tier bands
    /// and derives the connectivity matrix.
    ///
    /// Drones land in the monitoring square, edge servers in a horizontally
    /// adjacent band, cloud servers in a further band. Coincident positions
    /// are permitted; there is no collision avoidance.
    pub fn deploy<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R, observer: &mut dyn TopologyObserver) -> NetworkTopology {
        let layout = config.layout;
        let area = config.monitoring_area_size;
        let edge_band_start = area;
        let cloud_band_start = area + config.edge_area_width;

        let mut positions = Vec::with_capacity(layout.total());
        for _ in 0..layout.drones {
            positions.push(Position::new(rng.random_range(1..=area), rng.random_range(1..=area)));
        }
        for _ in 0..layout.edges {
            let x = rng.random_range(edge_band_start + 1..=edge_band_start + config.edge_area_width);
            positions.push(Position::new(x, rng.random_range(1..=area)));
        }
        for _ in 0..layout.clouds {
            let x = rng.random_range(cloud_band_start + 1..=cloud_band_start + config.cloud_area_width);
            positions.push(Position::new(x, rng.random_range(1..=area)));
        }

        Self::from_positions(layout, config.transmission_range, positions, observer)
    }

    /// Builds the connectivity matrix over caller-supplied positions.
    ///
    /// `positions` must hold exactly one entry per node, in index order.
    /// Deterministic scenarios and tests use this directly;
    /// [`NetworkTopology::deploy`] feeds it random positions.
    pub fn from_positions(
        layout: TierLayout,
        transmission_range: i64,
        positions: Vec<Position>,
        observer: &mut dyn TopologyObserver,
    ) -> NetworkTopology {
        assert_eq!(positions.len(), layout.total(), "one position per node required");

        let total = layout.total();
        let mut adjacency = vec![vec![false; total]; total];

        let drones = layout.drones;
        let edge_end = drones + layout.edges;

        // Drone pairs in index order i < j, linked when inside transmission range.
        let mut drone_links = 0usize;
        for i in 0..drones {
            for j in (i + 1)..drones {
                if positions[i].distance_to(positions[j]) <= transmission_range as f64 {
                    Self::link(&mut adjacency, &positions, i, j, observer);
                    drone_links += 1;
                }
            }
        }
        log::debug!("Drone mesh built: {} links within range {}.", drone_links, transmission_range);

        // Every drone reaches every edge server.
        for i in 0..drones {
            for j in drones..edge_end {
                Self::link(&mut adjacency, &positions, i, j, observer);
            }
        }

        // Every edge server reaches every cloud server.
        for i in drones..edge_end {
            for j in edge_end..total {
                Self::link(&mut adjacency, &positions, i, j, observer);
            }
        }

        NetworkTopology { layout, positions, adjacency }
    }

    fn link(adjacency: &mut [Vec<bool>], positions: &[Position], i: usize, j: usize, observer: &mut dyn TopologyObserver) {
        adjacency[i][j] = true;
        adjacency[j][i] = true;
        observer.edge_created(positions[i], positions[j]);
    }

    pub fn total_nodes(&self) -> usize {
        self.layout.total()
    }

    /// Checked `NodeId` construction; `None` when `index` is out of range.
    pub fn node(&self, index: usize) -> Option<NodeId> {
        self.layout.node(index)
    }

    /// All node ids in ascending index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.layout.node_ids()
    }

    pub fn tier_of(&self, id: NodeId) -> Tier {
        self.layout.tier_of(id)
    }

    pub fn position(&self, id: NodeId) -> Position {
        self.positions[id.index()]
    }

    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a.index()][b.index()]
    }

    /// All connectivity edges as ascending index pairs, each exactly once.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let total = self.total_nodes();
        let mut edges = Vec::new();
        for i in 0..total {
            for j in (i + 1)..total {
                if self.adjacency[i][j] {
                    edges.push((NodeId::from_raw(i), NodeId::from_raw(j)));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
