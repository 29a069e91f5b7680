/// Name of the relationship-include parameter. It is the one query parameter
/// that is not wrapped in `filter[...]`.
pub const INCLUDE: &str = "include";

/// Static description of one API resource collection.
///
/// `params` is the full set of filter parameters the endpoint recognizes, in
/// the order they appear in the assembled query string. Descriptors are
/// configuration, not behavior; the query assembly lives in the query module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path segment under the API origin, e.g. `"alerts"`.
    pub path: &'static str,
    /// Recognized filter parameter names, in query-string order.
    pub params: &'static [&'static str],
}

/// List active and upcoming system alerts.
pub const ALERTS: Endpoint = Endpoint {
    path: "alerts",
    params: &[
        INCLUDE,
        "activity",
        "route_type",
        "direction_id",
        "route",
        "stop",
        "trip",
        "facility",
        "id",
        "banner",
        "lifecycle",
        "severity",
        "datetime",
    ],
};

/// List routes.
pub const ROUTES: Endpoint = Endpoint {
    path: "routes",
    params: &[
        INCLUDE,
        "type",
        "direction_id",
        "route",
        "stop",
        "trip",
        "id",
        "date",
    ],
};

/// List vehicles (buses, ferries, and trains).
pub const VEHICLES: Endpoint = Endpoint {
    path: "vehicles",
    params: &[
        INCLUDE,
        "route_type",
        "direction_id",
        "route",
        "label",
        "trip",
        "id",
    ],
};

/// List stops.
pub const STOPS: Endpoint = Endpoint {
    path: "stops",
    params: &[
        INCLUDE,
        "date",
        "direction_id",
        "latitude",
        "longitude",
        "radius",
        "id",
        "route_type",
        "route",
        "service",
        "location_type",
    ],
};

/// List predictions for arrivals and departures.
pub const PREDICTIONS: Endpoint = Endpoint {
    path: "predictions",
    params: &[
        INCLUDE,
        "direction_id",
        "latitude",
        "longitude",
        "radius",
        "route_pattern",
        "route",
        "stop",
        "trip",
    ],
};

/// List schedules, the arrival and departure times from the static timetable.
pub const SCHEDULES: Endpoint = Endpoint {
    path: "schedules",
    params: &[
        INCLUDE,
        "direction_id",
        "max_time",
        "min_time",
        "route_type",
        "route",
        "stop_sequence",
        "stop",
        "trip",
    ],
};
