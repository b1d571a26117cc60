//! Domain types shared by the store, the optimization client, and the
//! mock solver.
//!
//! Result-side types (`RouteStep`, `Route`, `OptimizationSummary`,
//! `OptimizationResult`) mirror the remote optimizer's response schema
//! and serialize in camelCase to match it.

use serde::{Deserialize, Serialize};

/// A point on the map, optionally labelled with a human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
        }
    }

    pub fn with_address(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: Some(address.into()),
        }
    }

    /// Coordinate pair in the remote wire order, `[lng, lat]`.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// The delivery vehicle. Starts at the depot and, unless an explicit end
/// location is set, returns to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub start: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Location>,
    pub capacity: u32,
}

impl Vehicle {
    /// Effective end location: the explicit one, or the depot.
    pub fn end_or_start(&self) -> &Location {
        self.end.as_ref().unwrap_or(&self.start)
    }
}

/// A single delivery task: drop `delivery_amount` units at `location`,
/// spending `service_time` seconds on site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub location: Location,
    pub delivery_amount: u32,
    pub service_time: u32,
}

/// Partial update for a job; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub location: Option<Location>,
    pub delivery_amount: Option<u32>,
    pub service_time: Option<u32>,
}

impl JobPatch {
    pub fn apply(&self, job: &mut Job) {
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(amount) = self.delivery_amount {
            job.delivery_amount = amount;
        }
        if let Some(service) = self.service_time {
            job.service_time = service;
        }
    }
}

/// Partial update for the vehicle; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehiclePatch {
    pub start: Option<Location>,
    pub end: Option<Location>,
    pub capacity: Option<u32>,
}

impl VehiclePatch {
    pub fn apply(&self, vehicle: &mut Vehicle) {
        if let Some(start) = &self.start {
            vehicle.start = start.clone();
        }
        if let Some(end) = &self.end {
            vehicle.end = Some(end.clone());
        }
        if let Some(capacity) = self.capacity {
            vehicle.capacity = capacity;
        }
    }
}

/// Kind of a route step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Start,
    Job,
    End,
}

/// One stop on a computed route.
///
/// `location` is `[lng, lat]` (wire order); `arrival` is the offset in
/// seconds from route start; `duration` and `distance` describe the leg
/// leading into this step; `load` is the capacity-dimension vector
/// carried after this step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub location: [f64; 2],
    pub arrival: f64,
    pub duration: f64,
    pub distance: f64,
    pub load: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// The ordered visit sequence assigned to one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub vehicle_id: i64,
    pub steps: Vec<RouteStep>,
    pub total_distance: f64,
    pub total_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    pub cost: f64,
    pub total_distance: f64,
    pub total_duration: f64,
    pub total_delivery: u32,
    pub unassigned: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub code: i32,
    pub summary: OptimizationSummary,
    pub routes: Vec<Route>,
}
