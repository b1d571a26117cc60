//! Shared test fixtures: a Bucharest depot vehicle and job builders.

#![allow(dead_code)]

use vrp_workbench::model::{Job, Location, Vehicle};

/// Vehicle parked at the Bucharest city-centre depot, capacity 100.
pub fn bucharest_vehicle() -> Vehicle {
    Vehicle {
        id: 1,
        start: Location::with_address(44.4268, 26.1025, "Bucharest, Romania"),
        end: None,
        capacity: 100,
    }
}

pub fn job(id: i64, lat: f64, lng: f64, delivery: u32, service: u32) -> Job {
    Job {
        id,
        location: Location::new(lat, lng),
        delivery_amount: delivery,
        service_time: service,
    }
}

pub fn job_with_address(
    id: i64,
    lat: f64,
    lng: f64,
    delivery: u32,
    service: u32,
    address: &str,
) -> Job {
    Job {
        id,
        location: Location::with_address(lat, lng, address),
        delivery_amount: delivery,
        service_time: service,
    }
}
