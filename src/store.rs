//! Planning state store: the single owner of vehicle, jobs, result, and
//! UI pointers.
//!
//! Every mutation to the vehicle or the job set clears the current
//! optimization result in the same call, so a result is only ever
//! observable next to the exact inputs that produced it. Optimization
//! runs are tracked with a request token so a completion that arrives
//! after its inputs changed is dropped instead of committed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::OptimizationProvider;
use crate::geocode::ReverseGeocoder;
use crate::model::{Job, JobPatch, Location, OptimizationResult, Vehicle, VehiclePatch};

pub const DEFAULT_DELIVERY_AMOUNT: u32 = 10;
pub const DEFAULT_SERVICE_TIME_SECS: u32 = 300;

const DEFAULT_VEHICLE_CAPACITY: u32 = 100;

/// Snapshot handed out by [`PlanStore::begin_optimization`]. Carries the
/// inputs to optimize plus the token required to commit the outcome.
#[derive(Debug, Clone)]
pub struct OptimizationTicket {
    pub token: u64,
    pub vehicle: Vehicle,
    pub jobs: Vec<Job>,
}

#[derive(Debug)]
pub struct PlanStore {
    vehicle: Vehicle,
    jobs: Vec<Job>,
    result: Option<OptimizationResult>,
    loading: bool,
    highlighted_step: Option<usize>,
    last_job_id: i64,
    inflight: Option<u64>,
    next_token: u64,
}

impl PlanStore {
    /// Store with the stock depot (Bucharest city centre) and a single
    /// vehicle of capacity 100.
    pub fn new() -> Self {
        Self::with_vehicle(Vehicle {
            id: 1,
            start: Location::with_address(44.4268, 26.1025, "Bucharest, Romania"),
            end: None,
            capacity: DEFAULT_VEHICLE_CAPACITY,
        })
    }

    pub fn with_vehicle(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            jobs: Vec::new(),
            result: None,
            loading: false,
            highlighted_step: None,
            last_job_id: 0,
            inflight: None,
            next_token: 0,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn highlighted_step(&self) -> Option<usize> {
        self.highlighted_step
    }

    /// Append a job at `location` with default delivery amount and
    /// service time, resolving an address first when none is attached.
    /// Returns the generated job id.
    pub fn add_job(&mut self, location: Location, geocoder: &impl ReverseGeocoder) -> i64 {
        let address = match location.address {
            Some(address) => address,
            None => geocoder.reverse_geocode(location.lat, location.lng),
        };

        let id = self.next_job_id();
        self.jobs.push(Job {
            id,
            location: Location {
                lat: location.lat,
                lng: location.lng,
                address: Some(address),
            },
            delivery_amount: DEFAULT_DELIVERY_AMOUNT,
            service_time: DEFAULT_SERVICE_TIME_SECS,
        });
        self.invalidate();
        id
    }

    /// Merge `patch` into the job with the matching id; unknown ids are
    /// ignored. Invalidates the result either way.
    pub fn update_job(&mut self, id: i64, patch: &JobPatch) {
        if let Some(job) = self.jobs.iter_mut().find(|job| job.id == id) {
            patch.apply(job);
        }
        self.invalidate();
    }

    pub fn remove_job(&mut self, id: i64) {
        self.jobs.retain(|job| job.id != id);
        self.invalidate();
    }

    pub fn clear_all_jobs(&mut self) {
        self.jobs.clear();
        self.invalidate();
    }

    pub fn update_vehicle(&mut self, patch: &VehiclePatch) {
        patch.apply(&mut self.vehicle);
        self.invalidate();
    }

    /// Advisory pointer for list/map cross-highlighting. Never validated
    /// against the current result; out-of-range values are harmless.
    pub fn set_highlighted_step(&mut self, step: Option<usize>) {
        self.highlighted_step = step;
    }

    /// Run an optimization synchronously against `client`. No-op when
    /// there are no jobs.
    pub fn run_optimization(&mut self, client: &impl OptimizationProvider) {
        let Some(ticket) = self.begin_optimization() else {
            return;
        };
        let result = client.optimize(&ticket.vehicle, &ticket.jobs);
        self.complete_optimization(ticket.token, Some(result));
    }

    /// Start an optimization: snapshot the inputs, raise the loading
    /// flag, and hand out a ticket. Returns `None` when there are no
    /// jobs. Event-driven callers perform the client call themselves and
    /// report back through [`complete_optimization`].
    ///
    /// [`complete_optimization`]: PlanStore::complete_optimization
    pub fn begin_optimization(&mut self) -> Option<OptimizationTicket> {
        if self.jobs.is_empty() {
            return None;
        }

        let token = self.next_token;
        self.next_token += 1;
        self.inflight = Some(token);
        self.loading = true;

        Some(OptimizationTicket {
            token,
            vehicle: self.vehicle.clone(),
            jobs: self.jobs.clone(),
        })
    }

    /// Commit the outcome of an optimization run. Only the ticket for
    /// the most recent, non-superseded request is honored; anything else
    /// is dropped so result and loading flag never reflect stale inputs.
    pub fn complete_optimization(&mut self, token: u64, result: Option<OptimizationResult>) {
        if self.inflight != Some(token) {
            tracing::debug!(token, "dropping superseded optimization completion");
            return;
        }
        self.inflight = None;
        self.loading = false;
        self.result = result;
    }

    /// A result is only valid for the exact inputs that produced it;
    /// every mutation funnels through here. An in-flight request is
    /// abandoned because its snapshot no longer matches the store.
    fn invalidate(&mut self) {
        self.result = None;
        if self.inflight.take().is_some() {
            self.loading = false;
        }
    }

    /// Wall-clock microseconds, bumped past the previously issued id so
    /// ids stay unique even when the clock does not advance between
    /// calls.
    fn next_job_id(&mut self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_micros() as i64)
            .unwrap_or_default();
        let id = now.max(self.last_job_id + 1);
        self.last_job_id = id;
        id
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
