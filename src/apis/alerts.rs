use crate::{
    client::MbtaClient,
    endpoint::{ALERTS, INCLUDE},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the alerts endpoint.
///
/// Every setter accepts a scalar or a sequence; sequences are comma-joined
/// on the wire. Unset filters are left to the server-side defaults.
#[derive(Debug, Clone, Default)]
pub struct AlertsQuery {
    args: QueryArgs,
}

impl AlertsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: stops, routes, trips, facilities.
    /// Embedded under the response's `included` key.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// An activity affected by an alert, e.g. "BOARD", "USING_ESCALATOR",
    /// "PARK_CAR".
    pub fn activity(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("activity", value);
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

    /// Filter by facility id.
    pub fn facility(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("facility", value);
        self
    }

    /// Filter by one or more alert ids.
    pub fn id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("id", value);
        self
    }

    /// When combined with other filters, restricts to alerts with or without
    /// a banner.
    pub fn banner(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("banner", value);
        self
    }

    /// Filter by an alert's lifecycle.
    pub fn lifecycle(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("lifecycle", value);
        self
    }

    /// Filter alerts by a list of severities.
    pub fn severity(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("severity", value);
        self
    }

    /// Filter to alerts active at a given time; the string "NOW" selects
    /// currently active alerts.
    pub fn datetime(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("datetime", value);
        self
    }

    pub(crate) fn into_args(self) -> QueryArgs {
        self.args
    }
}

/// Alerts API operations
pub struct AlertsApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> AlertsApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List active and upcoming system alerts.
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Alert/ApiWeb_AlertController_index>
    pub async fn get(&self, query: AlertsQuery) -> MbtaResult<Value> {
        info!("Listing alerts");
        self.client.call(&ALERTS, &query.into_args()).await
    }
}
