//! Local stand-in for the remote optimizer (offline/demo fallback).
//!
//! Produces a structurally valid result without doing any routing work:
//! jobs are visited in input order and travel times/distances are drawn
//! from the supplied random source. Pure function, so tests can drive it
//! with a seeded generator.

use rand::Rng;

use crate::model::{
    Job, OptimizationResult, OptimizationSummary, Route, RouteStep, StepType, Vehicle,
};

const PLACEHOLDER_COST: f64 = 100.0;
const JOB_STEP_DURATION: f64 = 600.0;
const RETURN_TRAVEL_SECS: f64 = 600.0;
const RETURN_DISTANCE: f64 = 3000.0;

/// Synthesize an optimization result for `vehicle` visiting `jobs` in
/// input order.
///
/// The running clock advances by a random 600-900s travel leg before each
/// job and by the job's service time after it. `summary.total_duration`
/// is the clock at the last job's completion; the return leg only shows
/// up in the final step's arrival.
pub fn mock_response<R: Rng>(vehicle: &Vehicle, jobs: &[Job], rng: &mut R) -> OptimizationResult {
    let mut steps = Vec::with_capacity(jobs.len() + 2);
    let mut clock = 0.0;
    let mut load: u32 = 0;

    steps.push(RouteStep {
        step_type: StepType::Start,
        location: vehicle.start.lng_lat(),
        arrival: 0.0,
        duration: 0.0,
        distance: 0.0,
        load: vec![0],
        job_id: None,
        address: None,
    });

    for job in jobs {
        clock += rng.random_range(600.0..900.0);
        load += job.delivery_amount;
        steps.push(RouteStep {
            step_type: StepType::Job,
            location: job.location.lng_lat(),
            arrival: clock,
            duration: JOB_STEP_DURATION,
            distance: rng.random_range(2500.0..3500.0),
            load: vec![load],
            job_id: Some(job.id),
            address: Some(
                job.location
                    .address
                    .clone()
                    .unwrap_or_else(|| format!("Job Location {}", job.id)),
            ),
        });
        clock += f64::from(job.service_time);
    }

    steps.push(RouteStep {
        step_type: StepType::End,
        location: vehicle.start.lng_lat(),
        arrival: clock + RETURN_TRAVEL_SECS,
        duration: RETURN_TRAVEL_SECS,
        distance: RETURN_DISTANCE,
        load: vec![load],
        job_id: None,
        address: None,
    });

    let total_distance: f64 = steps.iter().map(|step| step.distance).sum();

    OptimizationResult {
        code: 0,
        summary: OptimizationSummary {
            cost: PLACEHOLDER_COST,
            total_distance,
            total_duration: clock,
            total_delivery: load,
            unassigned: 0,
        },
        routes: vec![Route {
            vehicle_id: vehicle.id,
            steps,
            total_distance,
            total_duration: clock,
        }],
    }
}
