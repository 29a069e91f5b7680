use crate::endpoint::{Endpoint, INCLUDE};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

/// A value supplied for one filter parameter.
///
/// The API takes every filter as a comma-separated string, so a sequence and
/// an already-joined string are equivalent ways to spell the same query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    /// Comma-join a sequence; pass a scalar through untouched.
    pub fn render(&self) -> String {
        match self {
            FilterValue::One(v) => v.clone(),
            FilterValue::Many(vs) => vs.join(","),
        }
    }

    /// Empty values are dropped from the query string, which leaves the
    /// server-side default for that filter in effect.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::One(v) => v.is_empty(),
            FilterValue::Many(vs) => vs.iter().all(|v| v.is_empty()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::One(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::One(v)
    }
}

impl From<&String> for FilterValue {
    fn from(v: &String) -> Self {
        FilterValue::One(v.clone())
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::One(v.to_string())
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        FilterValue::One(v.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<FixedOffset>> for FilterValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        FilterValue::One(v.to_rfc3339())
    }
}

impl From<DateTime<Local>> for FilterValue {
    fn from(v: DateTime<Local>) -> Self {
        FilterValue::One(v.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(v: DateTime<Utc>) -> Self {
        FilterValue::One(v.to_rfc3339())
    }
}

macro_rules! filter_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for FilterValue {
            fn from(v: $t) -> Self {
                FilterValue::One(v.to_string())
            }
        })*
    };
}

filter_value_from_int!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(vs: Vec<T>) -> Self {
        FilterValue::Many(vs.into_iter().map(|v| v.into().render()).collect())
    }
}

impl<T: Into<FilterValue> + Clone> From<&[T]> for FilterValue {
    fn from(vs: &[T]) -> Self {
        FilterValue::Many(vs.iter().map(|v| v.clone().into().render()).collect())
    }
}

impl<T: Into<FilterValue>, const N: usize> From<[T; N]> for FilterValue {
    fn from(vs: [T; N]) -> Self {
        FilterValue::Many(vs.into_iter().map(|v| v.into().render()).collect())
    }
}

/// The filter arguments supplied for one call.
///
/// Insertion order does not matter; the endpoint descriptor's declaration
/// order governs where each parameter lands in the query string.
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    args: Vec<(&'static str, FilterValue)>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter parameter. Setting the same name twice keeps the last
    /// value.
    pub fn set(&mut self, name: &'static str, value: impl Into<FilterValue>) {
        self.args.retain(|(n, _)| *n != name);
        self.args.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.args
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Assemble the query string for one call.
///
/// Walks the endpoint's declared parameters in order, skipping anything not
/// supplied (or supplied empty). `include` serializes bare; every other name
/// is wrapped as `filter[name]`. The result carries no leading `&` and may be
/// empty. Values are emitted raw: the API reads commas and brackets literally,
/// so percent-encoding them would change the request's meaning.
pub fn build_query(endpoint: &Endpoint, args: &QueryArgs) -> String {
    let mut segments = Vec::new();
    for &name in endpoint.params {
        let value = match args.get(name) {
            Some(v) if !v.is_empty() => v.render(),
            _ => continue,
        };
        if name == INCLUDE {
            segments.push(format!("include={}", value));
        } else {
            segments.push(format!("filter[{}]={}", name, value));
        }
    }
    segments.join("&")
}
