/*
 * MBTA v3 API Client - Rust client for the MBTA public transit API
 */

// Internal modules
mod auth;
mod client;
mod endpoint;
mod error;
mod query;
mod apis;


// Re-export public types and interfaces
pub use auth::{ApiKey, API_KEY_ENV};
pub use client::{MbtaClient, MBTA_V3_API_URL};
pub use endpoint::{Endpoint, ALERTS, INCLUDE, PREDICTIONS, ROUTES, SCHEDULES, STOPS, VEHICLES};
pub use error::{MbtaError, MbtaResult};
pub use query::{build_query, FilterValue, QueryArgs};
pub use apis::*;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiKey, MbtaClient, MbtaError, MbtaResult,
        // Per-endpoint query builders
        AlertsQuery, PredictionsQuery, RoutesQuery, SchedulesQuery, StopsQuery, VehiclesQuery,
    };
}
