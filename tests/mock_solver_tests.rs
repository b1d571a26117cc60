mod fixtures;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fixtures::{bucharest_vehicle, job, job_with_address};
use vrp_workbench::mock::mock_response;
use vrp_workbench::model::StepType;

#[test]
fn produces_n_plus_two_steps_framed_by_start_and_end() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(1, 44.43, 26.10, 10, 300),
        job(2, 44.44, 26.11, 20, 300),
        job(3, 44.45, 26.12, 5, 120),
    ];
    let mut rng = StdRng::seed_from_u64(42);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let steps = &result.routes[0].steps;

    assert_eq!(steps.len(), jobs.len() + 2);
    assert_eq!(steps[0].step_type, StepType::Start);
    assert_eq!(steps[0].arrival, 0.0);
    assert_eq!(steps[0].load, vec![0]);
    assert_eq!(steps.last().unwrap().step_type, StepType::End);
    for step in &steps[1..steps.len() - 1] {
        assert_eq!(step.step_type, StepType::Job);
    }
}

#[test]
fn matches_worked_example() {
    // Vehicle capacity=100 at (44.4268, 26.1025); two jobs with
    // deliveries 10 and 20.
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(1, 44.43, 26.10, 10, 300),
        job(2, 44.44, 26.11, 20, 300),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    let result = mock_response(&vehicle, &jobs, &mut rng);

    assert_eq!(result.code, 0);
    assert_eq!(result.summary.total_delivery, 30);
    assert_eq!(result.summary.unassigned, 0);
    assert_eq!(result.routes.len(), 1);

    let route = &result.routes[0];
    assert_eq!(route.vehicle_id, 1);
    assert_eq!(route.steps.len(), 4);
    assert_eq!(route.steps[1].job_id, Some(1));
    assert_eq!(route.steps[2].job_id, Some(2));
    // Wire order is [lng, lat].
    assert_eq!(route.steps[1].location, [26.10, 44.43]);
    assert_eq!(route.steps[0].location, [26.1025, 44.4268]);
}

#[test]
fn visits_jobs_in_input_order_with_cumulative_load() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(10, 44.43, 26.10, 4, 60),
        job(20, 44.44, 26.11, 6, 60),
        job(30, 44.45, 26.12, 8, 60),
    ];
    let mut rng = StdRng::seed_from_u64(99);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let steps = &result.routes[0].steps;

    assert_eq!(steps[1].job_id, Some(10));
    assert_eq!(steps[2].job_id, Some(20));
    assert_eq!(steps[3].job_id, Some(30));
    assert_eq!(steps[1].load, vec![4]);
    assert_eq!(steps[2].load, vec![10]);
    assert_eq!(steps[3].load, vec![18]);
    assert_eq!(steps.last().unwrap().load, vec![18]);
}

#[test]
fn travel_legs_stay_within_jitter_bounds() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(1, 44.43, 26.10, 10, 300),
        job(2, 44.44, 26.11, 20, 450),
        job(3, 44.45, 26.12, 5, 120),
    ];
    let mut rng = StdRng::seed_from_u64(1);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let steps = &result.routes[0].steps;

    let first_travel = steps[1].arrival;
    assert!((600.0..900.0).contains(&first_travel));

    for (prev, next) in jobs.iter().zip(steps[1..].windows(2)) {
        let travel = next[1].arrival - next[0].arrival - f64::from(prev.service_time);
        if next[1].step_type == StepType::Job {
            assert!((600.0..900.0).contains(&travel), "travel leg was {travel}");
        }
    }

    for step in &steps[1..steps.len() - 1] {
        assert!((2500.0..3500.0).contains(&step.distance));
        assert_eq!(step.duration, 600.0);
    }
}

#[test]
fn total_duration_excludes_return_leg() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![job(1, 44.43, 26.10, 10, 300)];
    let mut rng = StdRng::seed_from_u64(5);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let route = &result.routes[0];
    let end = route.steps.last().unwrap();

    // Clock at last job completion = job arrival + service time; the
    // fixed 600s return leg only shows up in the end step's arrival.
    let last_job = &route.steps[1];
    let clock = last_job.arrival + 300.0;
    assert_eq!(result.summary.total_duration, clock);
    assert_eq!(route.total_duration, clock);
    assert_eq!(end.arrival, clock + 600.0);
    assert_eq!(end.distance, 3000.0);
    assert_eq!(end.duration, 600.0);
    assert_eq!(end.location, vehicle.start.lng_lat());
}

#[test]
fn total_distance_sums_all_steps() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(1, 44.43, 26.10, 10, 300),
        job(2, 44.44, 26.11, 20, 300),
    ];
    let mut rng = StdRng::seed_from_u64(13);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let steps = &result.routes[0].steps;
    let summed: f64 = steps.iter().map(|step| step.distance).sum();

    assert_eq!(result.summary.total_distance, summed);
    assert_eq!(result.routes[0].total_distance, summed);
    assert_eq!(result.summary.cost, 100.0);
}

#[test]
fn job_address_falls_back_to_synthetic_label() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job_with_address(1, 44.43, 26.10, 10, 300, "Calea Victoriei 1"),
        job(2, 44.44, 26.11, 20, 300),
    ];
    let mut rng = StdRng::seed_from_u64(3);

    let result = mock_response(&vehicle, &jobs, &mut rng);
    let steps = &result.routes[0].steps;

    assert_eq!(steps[1].address.as_deref(), Some("Calea Victoriei 1"));
    assert_eq!(steps[2].address.as_deref(), Some("Job Location 2"));
}

#[test]
fn zero_jobs_yields_empty_frame() {
    let vehicle = bucharest_vehicle();
    let mut rng = StdRng::seed_from_u64(0);

    let result = mock_response(&vehicle, &[], &mut rng);
    let route = &result.routes[0];

    assert_eq!(route.steps.len(), 2);
    assert_eq!(result.summary.total_delivery, 0);
    assert_eq!(result.summary.total_duration, 0.0);
    assert_eq!(route.steps[1].arrival, 600.0);
}

#[test]
fn same_seed_reproduces_identical_result() {
    let vehicle = bucharest_vehicle();
    let jobs = vec![
        job(1, 44.43, 26.10, 10, 300),
        job(2, 44.44, 26.11, 20, 300),
    ];

    let first = mock_response(&vehicle, &jobs, &mut StdRng::seed_from_u64(21));
    let second = mock_response(&vehicle, &jobs, &mut StdRng::seed_from_u64(21));

    assert_eq!(first, second);
}
