//! vrp-workbench core
//!
//! State model and optimization-service client for a map-based
//! vehicle-routing workbench. The presentation layer (map, panels) reads
//! snapshots from [`store::PlanStore`] and dispatches mutations to it;
//! the store talks to the remote optimizer through
//! [`client::RoutingApiClient`], degrading to the local
//! [`mock`] solver whenever the service is unreachable.

pub mod client;
pub mod geocode;
pub mod mock;
pub mod model;
pub mod store;
