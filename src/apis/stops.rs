use crate::{
    client::MbtaClient,
    endpoint::{INCLUDE, STOPS},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the stops endpoint.
#[derive(Debug, Clone, Default)]
pub struct StopsQuery {
    args: QueryArgs,
}

impl StopsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: child_stops, connecting_stops, facilities,
    /// parent_station, recommended_transfers, route.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// Filter by a service date the stop is in use on (YYYY-MM-DD).
    pub fn date(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("date", value);
        self
    }

    /// Filter by direction of travel along the route, combined with `route`.
    pub fn direction_id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("direction_id", value);
        self
    }

    /// Latitude in degrees North, for proximity search with `longitude` and
    /// optionally `radius`.
    pub fn latitude(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("latitude", value);
        self
    }

    /// Longitude in degrees East, for proximity search with `latitude`.
    pub fn longitude(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("longitude", value);
        self
    }

    /// Search radius in degrees.
    pub fn radius(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("radius", value);
        self
    }

    /// Filter by one or more stop ids.
    pub fn id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("id", value);
        self
    }

    /// Filter by GTFS route_type of the routes serving the stop.
    pub fn route_type(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route_type", value);
        self
    }

    /// Filter by route id.
    pub fn route(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route", value);
        self
    }

    /// Filter by service id.
    pub fn service(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("service", value);
        self
    }

    /// Filter by GTFS location_type.
    pub fn location_type(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("location_type", value);
        self
    }

    pub(crate) fn into_args(self) -> QueryArgs {
        self.args
    }
}

/// Stops API operations
pub struct StopsApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> StopsApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List stops.
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Stop/ApiWeb_StopController_index>
    pub async fn get(&self, query: StopsQuery) -> MbtaResult<Value> {
        info!("Listing stops");
        self.client.call(&STOPS, &query.into_args()).await
    }
}
