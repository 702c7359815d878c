use crate::domain::config::SimulationConfig;
use crate::domain::node::NodeId;

/// Static per-node capacity ceilings and delay factors.
///
/// Values are tier-constant, assigned once at construction and never mutated
/// afterwards. Chromosomes copy these arrays and debit their own copies; the
/// catalog itself stays pristine for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    proc_ceiling: Vec<i64>,
    bandwidth_ceiling: Vec<i64>,
    delay_factor: Vec<i64>,
}

impl ResourceCatalog {
    pub fn from_config(config: &SimulationConfig) -> ResourceCatalog {
        let layout = config.layout;

        let mut proc_ceiling = Vec::with_capacity(layout.total());
        let mut bandwidth_ceiling = Vec::with_capacity(layout.total());
        let mut delay_factor = Vec::with_capacity(layout.total());

        for id in layout.node_ids() {
            let tier = layout.tier_of(id);
            proc_ceiling.push(config.proc_ceilings.for_tier(tier));
            bandwidth_ceiling.push(config.bandwidth_ceilings.for_tier(tier));
            delay_factor.push(config.delay_factors.for_tier(tier));
        }

        ResourceCatalog { proc_ceiling, bandwidth_ceiling, delay_factor }
    }

    pub fn len(&self) -> usize {
        self.proc_ceiling.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proc_ceiling.is_empty()
    }

    pub fn proc_ceiling(&self, id: NodeId) -> i64 {
        self.proc_ceiling[id.index()]
    }

    pub fn bandwidth_ceiling(&self, id: NodeId) -> i64 {
        self.bandwidth_ceiling[id.index()]
    }

    pub fn delay_factor(&self, id: NodeId) -> i64 {
        self.delay_factor[id.index()]
    }

    pub fn proc_ceilings(&self) -> &[i64] {
        &self.proc_ceiling
    }

    pub fn bandwidth_ceilings(&self) -> &[i64] {
        &self.bandwidth_ceiling
    }

    pub fn delay_factors(&self) -> &[i64] {
        &self.delay_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config_dto::SimulationConfigDto;

    fn small_config() -> SimulationConfig {
        let dto = SimulationConfigDto {
            drone_count: 2,
            edge_count: 1,
            cloud_count: 1,
            monitoring_area_size: 50,
            edge_area_width: 20,
            cloud_area_width: 20,
            transmission_range: 10,
            drone_proc_ceiling: 100,
            edge_proc_ceiling: 500,
            cloud_proc_ceiling: 10000,
            drone_bandwidth_ceiling: 200,
            edge_bandwidth_ceiling: 400,
            cloud_bandwidth_ceiling: 1000,
            drone_delay_factor: 1,
            edge_delay_factor: 5,
            cloud_delay_factor: 6,
            workflow_count: 1,
            min_tasks_per_workflow: 1,
            max_tasks_per_workflow: 2,
            min_task_proc_demand: 10,
            max_task_proc_demand: 20,
            min_task_bandwidth_demand: 10,
            max_task_bandwidth_demand: 20,
            population_size: 1,
        };
        SimulationConfig::try_from(dto).expect("test config should be valid")
    }

    #[test]
    fn test_ceilings_are_tier_constant() {
        let config = small_config();
        let catalog = ResourceCatalog::from_config(&config);
        let layout = config.layout;

        assert_eq!(catalog.len(), 4);

        let drone_0 = layout.node(0).unwrap();
        let drone_1 = layout.node(1).unwrap();
        let edge_0 = layout.node(2).unwrap();
        let cloud_0 = layout.node(3).unwrap();

        assert_eq!(catalog.proc_ceiling(drone_0), 100);
        assert_eq!(catalog.proc_ceiling(drone_1), 100);
        assert_eq!(catalog.proc_ceiling(edge_0), 500);
        assert_eq!(catalog.proc_ceiling(cloud_0), 10000);

        assert_eq!(catalog.bandwidth_ceiling(drone_0), 200);
        assert_eq!(catalog.bandwidth_ceiling(edge_0), 400);
        assert_eq!(catalog.bandwidth_ceiling(cloud_0), 1000);

        assert_eq!(catalog.delay_factor(drone_1), 1);
        assert_eq!(catalog.delay_factor(edge_0), 5);
        assert_eq!(catalog.delay_factor(cloud_0), 6);
    }
}
