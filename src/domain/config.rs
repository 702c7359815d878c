use crate::api::config_dto::SimulationConfigDto;
use crate::domain::node::{Tier, TierLayout};
use crate::error::Error;

/// One value per tier, in drone/edge/cloud order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierValues {
    pub drone: i64,
    pub edge: i64,
    pub cloud: i64,
}

impl TierValues {
    pub fn for_tier(&self, tier: Tier) -> i64 {
        match tier {
            Tier::Drone => self.drone,
            Tier::Edge => self.edge,
            Tier::Cloud => self.cloud,
        }
    }
}

/// Inclusive integer bounds used for uniform sampling of task demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandBounds {
    pub min: i64,
    pub max: i64,
}

/// Validated, immutable simulation parameters.
///
/// Constructed from [`SimulationConfigDto`] via `TryFrom`. Every constraint is
/// checked here, so the stages downstream are free of configuration error
/// paths.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub layout: TierLayout,

    /// Side length of the square the drones are deployed in.
    pub monitoring_area_size: i64,
    /// Width of the band right of the monitoring area holding the edge servers.
    pub edge_area_width: i64,
    /// Width of the band right of the edge band holding the cloud servers.
    pub cloud_area_width: i64,
    /// Maximum drone-to-drone link distance, boundary inclusive.
    pub transmission_range: i64,

    pub proc_ceilings: TierValues,
    pub bandwidth_ceilings: TierValues,
    pub delay_factors: TierValues,

    pub workflow_count: u32,
    pub min_tasks: u32,
    pub max_tasks: u32,
    pub proc_demand: DemandBounds,
    pub bandwidth_demand: DemandBounds,

    pub population_size: u32,
}

fn ensure(condition: bool, message: impl Into<String>) -> Result<(), Error> {
    if condition { Ok(()) } else { Err(Error::InvalidConfiguration(message.into())) }
}

impl TryFrom<SimulationConfigDto> for SimulationConfig {
    type Error = Error;

    fn try_from(dto: SimulationConfigDto) -> Result<Self, Self::Error> {
        let layout = TierLayout {
            drones: dto.drone_count as usize,
            edges: dto.edge_count as usize,
            clouds: dto.cloud_count as usize,
        };

        ensure(
            layout.total() > 0 || dto.workflow_count == 0,
            format!("topology is empty but {} workflows must be placed", dto.workflow_count),
        )?;
        ensure(layout.total() == 0 || dto.monitoring_area_size >= 1, "monitoringAreaSize must be at least 1")?;
        ensure(layout.edges == 0 || dto.edge_area_width >= 1, "edgeAreaWidth must be at least 1 when edge servers exist")?;
        ensure(layout.clouds == 0 || dto.cloud_area_width >= 1, "cloudAreaWidth must be at least 1 when cloud servers exist")?;
        ensure(dto.transmission_range >= 0, "transmissionRange must not be negative")?;

        let ceilings = [
            ("droneProcCeiling", dto.drone_proc_ceiling),
            ("edgeProcCeiling", dto.edge_proc_ceiling),
            ("cloudProcCeiling", dto.cloud_proc_ceiling),
            ("droneBandwidthCeiling", dto.drone_bandwidth_ceiling),
            ("edgeBandwidthCeiling", dto.edge_bandwidth_ceiling),
            ("cloudBandwidthCeiling", dto.cloud_bandwidth_ceiling),
            ("droneDelayFactor", dto.drone_delay_factor),
            ("edgeDelayFactor", dto.edge_delay_factor),
            ("cloudDelayFactor", dto.cloud_delay_factor),
        ];
        for (name, value) in ceilings {
            ensure(value >= 0, format!("{} must not be negative, got {}", name, value))?;
        }

        ensure(dto.min_tasks_per_workflow >= 1, "minTasksPerWorkflow must be at least 1")?;
        ensure(
            dto.min_tasks_per_workflow <= dto.max_tasks_per_workflow,
            format!(
                "minTasksPerWorkflow ({}) exceeds maxTasksPerWorkflow ({})",
                dto.min_tasks_per_workflow, dto.max_tasks_per_workflow
            ),
        )?;
        ensure(dto.min_task_proc_demand >= 0, "minTaskProcDemand must not be negative")?;
        ensure(
            dto.min_task_proc_demand <= dto.max_task_proc_demand,
            format!("minTaskProcDemand ({}) exceeds maxTaskProcDemand ({})", dto.min_task_proc_demand, dto.max_task_proc_demand),
        )?;
        ensure(dto.min_task_bandwidth_demand >= 0, "minTaskBandwidthDemand must not be negative")?;
        ensure(
            dto.min_task_bandwidth_demand <= dto.max_task_bandwidth_demand,
            format!(
                "minTaskBandwidthDemand ({}) exceeds maxTaskBandwidthDemand ({})",
                dto.min_task_bandwidth_demand, dto.max_task_bandwidth_demand
            ),
        )?;
        ensure(dto.population_size >= 1, "populationSize must be at least 1")?;

        Ok(SimulationConfig {
            layout,
            monitoring_area_size: dto.monitoring_area_size,
            edge_area_width: dto.edge_area_width,
            cloud_area_width: dto.cloud_area_width,
            transmission_range: dto.transmission_range,
            proc_ceilings: TierValues {
                drone: dto.drone_proc_ceiling,
                edge: dto.edge_proc_ceiling,
                cloud: dto.cloud_proc_ceiling,
            },
            bandwidth_ceilings: TierValues {
                drone: dto.drone_bandwidth_ceiling,
                edge: dto.edge_bandwidth_ceiling,
                cloud: dto.cloud_bandwidth_ceiling,
            },
            delay_factors: TierValues {
                drone: dto.drone_delay_factor,
                edge: dto.edge_delay_factor,
                cloud: dto.cloud_delay_factor,
            },
            workflow_count: dto.workflow_count,
            min_tasks: dto.min_tasks_per_workflow,
            max_tasks: dto.max_tasks_per_workflow,
            proc_demand: DemandBounds { min: dto.min_task_proc_demand, max: dto.max_task_proc_demand },
            bandwidth_demand: DemandBounds { min: dto.min_task_bandwidth_demand, max: dto.max_task_bandwidth_demand },
            population_size: dto.population_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> SimulationConfigDto {
        SimulationConfigDto {
            drone_count: 4,
            edge_count: 1,
            cloud_count: 1,
            monitoring_area_size: 100,
            edge_area_width: 40,
            cloud_area_width: 60,
            transmission_range: 30,
            drone_proc_ceiling: 100,
            edge_proc_ceiling: 500,
            cloud_proc_ceiling: 10000,
            drone_bandwidth_ceiling: 200,
            edge_bandwidth_ceiling: 400,
            cloud_bandwidth_ceiling: 1000,
            drone_delay_factor: 1,
            edge_delay_factor: 5,
            cloud_delay_factor: 6,
            workflow_count: 5,
            min_tasks_per_workflow: 4,
            max_tasks_per_workflow: 10,
            min_task_proc_demand: 50,
            max_task_proc_demand: 1000,
            min_task_bandwidth_demand: 50,
            max_task_bandwidth_demand: 200,
            population_size: 20,
        }
    }

    #[test]
    fn test_valid_config_converts() {
        let config = SimulationConfig::try_from(valid_dto()).expect("valid config should convert");

        assert_eq!(config.layout.total(), 6);
        assert_eq!(config.proc_ceilings.for_tier(Tier::Cloud), 10000);
        assert_eq!(config.delay_factors.for_tier(Tier::Edge), 5);
        assert_eq!(config.min_tasks, 4);
    }

    #[test]
    fn test_empty_topology_with_workflows_is_rejected() {
        let mut dto = valid_dto();
        dto.drone_count = 0;
        dto.edge_count = 0;
        dto.cloud_count = 0;

        let result = SimulationConfig::try_from(dto);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))), "empty topology with workflows must fail fast");
    }

    #[test]
    fn test_inverted_task_bounds_are_rejected() {
        let mut dto = valid_dto();
        dto.min_tasks_per_workflow = 10;
        dto.max_tasks_per_workflow = 4;

        assert!(SimulationConfig::try_from(dto).is_err());
    }

    #[test]
    fn test_zero_min_tasks_is_rejected() {
        let mut dto = valid_dto();
        dto.min_tasks_per_workflow = 0;

        assert!(SimulationConfig::try_from(dto).is_err());
    }

    #[test]
    fn test_inverted_demand_bounds_are_rejected() {
        let mut dto = valid_dto();
        dto.min_task_bandwidth_demand = 300;
        dto.max_task_bandwidth_demand = 200;

        assert!(SimulationConfig::try_from(dto).is_err());
    }

    #[test]
    fn test_zero_population_is_rejected() {
        let mut dto = valid_dto();
        dto.population_size = 0;

        assert!(SimulationConfig::try_from(dto).is_err());
    }
}
