use uav_workflow_placement::api::config_dto::SimulationConfigDto;
use uav_workflow_placement::domain::config::SimulationConfig;
use uav_workflow_placement::domain::workflow::generate_workflows;

use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_config() -> SimulationConfig {
    let dto = SimulationConfigDto {
        drone_count: 30,
        edge_count: 4,
        cloud_count: 2,
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
        workflow_count: 25,
        min_tasks_per_workflow: 4,
        max_tasks_per_workflow: 10,
        min_task_proc_demand: 50,
        max_task_proc_demand: 1000,
        min_task_bandwidth_demand: 50,
        max_task_bandwidth_demand: 200,
        population_size: 1,
    };
    SimulationConfig::try_from(dto).expect("test config should be valid")
}

#[test]
fn test_generator_respects_count_and_bounds() {
    let config = create_config();
    let mut rng = StdRng::seed_from_u64(31);

    let workflows = generate_workflows(&config, &mut rng);

    assert_eq!(workflows.len(), 25, "one workflow per configured count");

    for workflow in &workflows {
        let task_count = workflow.len();
        assert!((4..=10).contains(&task_count), "workflow {} has {} tasks, outside the configured bounds", workflow.id, task_count);

        for (index, task) in workflow.tasks.iter().enumerate() {
            assert_eq!(task.ordinal as usize, index + 1, "ordinals must run 1..=len");
            assert!((50..=1000).contains(&task.proc_demand), "processing demand {} outside bounds", task.proc_demand);
            assert!((50..=200).contains(&task.bandwidth_demand), "bandwidth demand {} outside bounds", task.bandwidth_demand);
        }
    }
}

#[test]
fn test_generator_spreads_over_the_task_count_range() {
    let config = create_config();
    let mut rng = StdRng::seed_from_u64(31);

    let workflows = generate_workflows(&config, &mut rng);

    let minimum = workflows.iter().map(|workflow| workflow.len()).min().unwrap();
    let maximum = workflows.iter().map(|workflow| workflow.len()).max().unwrap();
    assert!(minimum < maximum, "25 samples over a 4..=10 range should not collapse to one length");
}

#[test]
fn test_generator_is_deterministic_under_a_fixed_seed() {
    let config = create_config();

    let workflows_a = generate_workflows(&config, &mut StdRng::seed_from_u64(77));
    let workflows_b = generate_workflows(&config, &mut StdRng::seed_from_u64(77));

    assert_eq!(workflows_a, workflows_b, "identical seeds must reproduce the workflow set");
}
