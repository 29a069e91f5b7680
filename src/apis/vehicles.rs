use crate::{
    client::MbtaClient,
    endpoint::{INCLUDE, VEHICLES},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the vehicles endpoint.
#[derive(Debug, Clone, Default)]
pub struct VehiclesQuery {
    args: QueryArgs,
}

impl VehiclesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: trip, stop, route.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// Filter by GTFS route_type.
    pub fn route_type(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route_type", value);
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

    /// Filter by vehicle label.
    pub fn label(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("label", value);
        self
    }

    /// Filter by trip id.
    pub fn trip(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("trip", value);
        self
    }

    /// Filter by one or more vehicle ids.
    pub fn id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("id", value);
        self
    }

    pub(crate) fn into_args(self) -> QueryArgs {
        self.args
    }
}

/// Vehicles API operations
pub struct VehiclesApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> VehiclesApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List vehicles (buses, ferries, and trains).
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Vehicle/ApiWeb_VehicleController_index>
    pub async fn get(&self, query: VehiclesQuery) -> MbtaResult<Value> {
        info!("Listing vehicles");
        self.client.call(&VEHICLES, &query.into_args()).await
    }
}
