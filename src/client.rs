//! HTTP adapter for the remote optimization service.
//!
//! The remote contract is `POST {base_url}/optimize` with a geometry-only
//! payload (coordinates in `[lng, lat]` wire order, capacity/delivery as
//! single-element vectors). Every failure path, including a structurally
//! invalid response, degrades to the local mock solver, so callers never
//! see an error.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mock::mock_response;
use crate::model::{Job, OptimizationResult, StepType, Vehicle};

/// Produces an optimization result for a (vehicle, jobs) snapshot.
///
/// Never fails outward; implementations substitute a mock result on any
/// error.
pub trait OptimizationProvider {
    fn optimize(&self, vehicle: &Vehicle, jobs: &[Job]) -> OptimizationResult;
}

#[derive(Debug, Clone)]
pub struct RoutingApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Artificial delay before serving the mock fallback, to simulate
    /// processing latency.
    pub fallback_delay: Duration,
}

impl Default for RoutingApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            fallback_delay: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutingApiClient {
    config: RoutingApiConfig,
    client: reqwest::blocking::Client,
}

impl RoutingApiClient {
    pub fn new(config: RoutingApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn request_remote(&self, payload: &OptimizeRequest) -> Result<OptimizationResult, RemoteError> {
        let url = format!("{}/optimize", self.config.base_url);
        let result = self
            .client
            .post(url)
            .json(payload)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OptimizationResult>())?;

        if validate_result(&result) {
            Ok(result)
        } else {
            Err(RemoteError::InvalidSchema)
        }
    }
}

impl OptimizationProvider for RoutingApiClient {
    fn optimize(&self, vehicle: &Vehicle, jobs: &[Job]) -> OptimizationResult {
        let payload = OptimizeRequest::from_snapshot(vehicle, jobs);

        match self.request_remote(&payload) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "optimize backend unreachable, using local mock solver");
                std::thread::sleep(self.config.fallback_delay);
                mock_response(vehicle, jobs, &mut rand::rng())
            }
        }
    }
}

#[derive(Debug)]
enum RemoteError {
    Http(reqwest::Error),
    InvalidSchema,
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Http(err)
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Http(err) => write!(f, "http error: {err}"),
            RemoteError::InvalidSchema => write!(f, "response failed structural validation"),
        }
    }
}

/// Structural check applied at the boundary instead of trusting the
/// remote schema blindly: every route must be framed by start/end steps
/// with job steps (carrying a job id) in between.
fn validate_result(result: &OptimizationResult) -> bool {
    result.routes.iter().all(|route| {
        let Some((first, rest)) = route.steps.split_first() else {
            return false;
        };
        let Some((last, middle)) = rest.split_last() else {
            return false;
        };

        first.step_type == StepType::Start
            && last.step_type == StepType::End
            && middle
                .iter()
                .all(|step| step.step_type == StepType::Job && step.job_id.is_some())
    })
}

/// Request body for `POST /optimize`. Geometry-only: addresses are not
/// carried over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub vehicles: Vec<VehiclePayload>,
    pub jobs: Vec<JobPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePayload {
    pub id: i64,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub capacity: [u32; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub id: i64,
    pub location: [f64; 2],
    pub delivery: [u32; 1],
    pub service: u32,
}

impl OptimizeRequest {
    /// Translate a domain snapshot into the remote request schema. The
    /// single vehicle still rides in a one-element array because the
    /// remote contract expects one.
    pub fn from_snapshot(vehicle: &Vehicle, jobs: &[Job]) -> Self {
        Self {
            vehicles: vec![VehiclePayload {
                id: vehicle.id,
                start: vehicle.start.lng_lat(),
                end: vehicle.end_or_start().lng_lat(),
                capacity: [vehicle.capacity],
            }],
            jobs: jobs
                .iter()
                .map(|job| JobPayload {
                    id: job.id,
                    location: job.location.lng_lat(),
                    delivery: [job.delivery_amount],
                    service: job.service_time,
                })
                .collect(),
        }
    }
}
