use crate::{
    client::MbtaClient,
    endpoint::{INCLUDE, SCHEDULES},
    error::MbtaResult,
    query::{FilterValue, QueryArgs},
};
use log::info;
use serde_json::Value;

/// Filters for the schedules endpoint.
#[derive(Debug, Clone, Default)]
pub struct SchedulesQuery {
    args: QueryArgs,
}

impl SchedulesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relationships to include: stop, trip, prediction, route.
    pub fn include(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set(INCLUDE, value);
        self
    }

    /// Filter by direction of travel along the route, combined with `route`.
    pub fn direction_id(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("direction_id", value);
        self
    }

    /// Latest departure time, HH:MM, to filter schedules before.
    pub fn max_time(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("max_time", value);
        self
    }

    /// Earliest departure time, HH:MM, to filter schedules after.
    pub fn min_time(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("min_time", value);
        self
    }

    /// Filter by GTFS route_type.
    pub fn route_type(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route_type", value);
        self
    }

    /// Filter by route id.
    pub fn route(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("route", value);
        self
    }

    /// Filter by the stop's position within a trip.
    pub fn stop_sequence(mut self, value: impl Into<FilterValue>) -> Self {
        self.args.set("stop_sequence", value);
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

/// Schedules API operations
pub struct SchedulesApi<'a> {
    client: &'a MbtaClient,
}

impl<'a> SchedulesApi<'a> {
    pub fn new(client: &'a MbtaClient) -> Self {
        Self { client }
    }

    /// List timetable arrival and departure times.
    ///
    /// <https://api-v3.mbta.com/docs/swagger/index.html#/Schedule/ApiWeb_ScheduleController_index>
    pub async fn get(&self, query: SchedulesQuery) -> MbtaResult<Value> {
        info!("Listing schedules");
        self.client.call(&SCHEDULES, &query.into_args()).await
    }
}
