use serde::Deserialize;

/// On-disk form of the simulation parameters.
///
/// Field names mirror the keys of the JSON configuration file. Validation
/// happens in the conversion to `domain::config::SimulationConfig`; this type
/// only carries the raw values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfigDto {
    pub drone_count: u32,
    pub edge_count: u32,
    pub cloud_count: u32,

    pub monitoring_area_size: i64,
    pub edge_area_width: i64,
    pub cloud_area_width: i64,
    pub transmission_range: i64,

    pub drone_proc_ceiling: i64,
    pub edge_proc_ceiling: i64,
    pub cloud_proc_ceiling: i64,
    pub drone_bandwidth_ceiling: i64,
    pub edge_bandwidth_ceiling: i64,
    pub cloud_bandwidth_ceiling: i64,
    pub drone_delay_factor: i64,
    pub edge_delay_factor: i64,
    pub cloud_delay_factor: i64,

    pub workflow_count: u32,
    pub min_tasks_per_workflow: u32,
    pub max_tasks_per_workflow: u32,
    pub min_task_proc_demand: i64,
    pub max_task_proc_demand: i64,
    pub min_task_bandwidth_demand: i64,
    pub max_task_bandwidth_demand: i64,

    pub population_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_config() {
        let json = r#"{
            "droneCount": 4, "edgeCount": 1, "cloudCount": 1,
            "monitoringAreaSize": 100, "edgeAreaWidth": 40, "cloudAreaWidth": 60,
            "transmissionRange": 30,
            "droneProcCeiling": 100, "edgeProcCeiling": 500, "cloudProcCeiling": 10000,
            "droneBandwidthCeiling": 200, "edgeBandwidthCeiling": 400, "cloudBandwidthCeiling": 1000,
            "droneDelayFactor": 1, "edgeDelayFactor": 5, "cloudDelayFactor": 6,
            "workflowCount": 5, "minTasksPerWorkflow": 4, "maxTasksPerWorkflow": 10,
            "minTaskProcDemand": 50, "maxTaskProcDemand": 1000,
            "minTaskBandwidthDemand": 50, "maxTaskBandwidthDemand": 200,
            "populationSize": 20
        }"#;

        let dto: SimulationConfigDto = serde_json::from_str(json).expect("config JSON should parse");

        assert_eq!(dto.drone_count, 4);
        assert_eq!(dto.transmission_range, 30);
        assert_eq!(dto.cloud_proc_ceiling, 10000);
        assert_eq!(dto.max_tasks_per_workflow, 10);
        assert_eq!(dto.population_size, 20);
    }
}
