use crate::{
    client::MbtaClient,
    endpoint::{INCLUDE, PREDICTIONS},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the predictions endpoint.
#[derive(Debug, Clone, Default)]
pub struct PredictionsQuery {
    args: QueryArgs,
}

impl PredictionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: schedule, stop, route, trip, vehicle,
    /// alerts.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// Filter by direction of travel along the route, combined with `route`.
    pub fn direction_id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("direction_id", value);
        self
    }

    /// Latitude in degrees North, for proximity search with `longitude`.
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

    /// Filter by route_pattern id.
    pub fn route_pattern(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route_pattern", value);
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

    pub(crate) fn into_args(self) -> QueryArgs {
        self.args
    }
}

/// Predictions API operations
pub struct PredictionsApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> PredictionsApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List predictions for arrival and departure times.
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Prediction/ApiWeb_PredictionController_index>
    pub async fn get(&self, query: PredictionsQuery) -> MbtaResult<Value> {
        info!("Listing predictions");
        self.client.call(&PREDICTIONS, &query.into_args()).await
    }
}
