use crate::{
    client::MbtaClient,
    endpoint::{INCLUDE, ROUTES},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the routes endpoint.
#[derive(Debug, Clone, Default)]
pub struct RoutesQuery {
    args: QueryArgs,
}

impl RoutesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: stops, line, route_patterns.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// Filter by GTFS route_type. The wire parameter is named `type`.
    pub fn type_(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("type", value);
        self
    }

    /// Filter by direction of travel along the route.
    pub fn direction_id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("direction_id", value);
        self
    }

    /// Filter by route id.
    pub fn route(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route", value);
        self
    }

    /// Filter by stop id.
    pub fn stop(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("stop", value);
        self
    }

    /// Filter by trip id.
    pub fn trip(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("trip", value);
        self
    }

    /// Filter by one or more route ids.
    pub fn id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("id", value);
        self
    }

    /// Filter by a service date the route is active on (YYYY-MM-DD).
    pub fn date(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("date", value);
        self
    }

    pub(crate) fn into_args(self) -> QueryArgs {
        self.args
    }
}

/// Routes API operations
pub struct RoutesApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> RoutesApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List routes.
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Route/ApiWeb_RouteController_index>
    pub async fn get(&self, query: RoutesQuery) -> MbtaResult<Value> {
        info!("Listing routes");
        self.client.call(&ROUTES, &query.into_args()).await
    }
}
