//! Boundary adapter for route-generation responses.
//!
//! Providers hand back the route either bare or wrapped under `route` / `data`.
//! This is the only place that looks at the raw shape; everything downstream
//! works on a canonical [`Route`].

use serde_json::{Map, Value};

use crate::models::Route;

const MAX_ENVELOPE_DEPTH: usize = 4;
const WRAPPER_KEYS: [&str; 2] = ["route", "data"];
const ROUTE_KEYS: [&str; 2] = ["coordinates", "dailyRoutes"];

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("route payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("no route found in payload (looked for {ROUTE_KEYS:?} under {WRAPPER_KEYS:?})")]
    UnrecognizedShape,
    #[error("route payload nested deeper than {MAX_ENVELOPE_DEPTH} levels")]
    TooDeep,
    #[error("malformed route: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("day segment #{0} has day 0, days are numbered from 1")]
    InvalidDay(usize),
}

pub fn route_from_value(value: Value) -> Result<Route, PayloadError> {
    let mut current = value;

    for _ in 0..=MAX_ENVELOPE_DEPTH {
        let mut object = into_object(current)?;

        if object.is_empty() || ROUTE_KEYS.iter().any(|key| object.contains_key(*key)) {
            let route: Route = serde_json::from_value(Value::Object(object))?;
            validate(&route)?;
            return Ok(route);
        }

        current = WRAPPER_KEYS
            .iter()
            .find_map(|key| object.remove(*key))
            .ok_or(PayloadError::UnrecognizedShape)?;
    }

    Err(PayloadError::TooDeep)
}

pub fn route_from_slice(bytes: &[u8]) -> Result<Route, PayloadError> {
    route_from_value(serde_json::from_slice(bytes)?)
}

fn into_object(value: Value) -> Result<Map<String, Value>, PayloadError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(PayloadError::NotAnObject("null")),
        Value::Bool(_) => Err(PayloadError::NotAnObject("a boolean")),
        Value::Number(_) => Err(PayloadError::NotAnObject("a number")),
        Value::String(_) => Err(PayloadError::NotAnObject("a string")),
        Value::Array(_) => Err(PayloadError::NotAnObject("an array")),
    }
}

fn validate(route: &Route) -> Result<(), PayloadError> {
    match route.daily_routes.iter().position(|segment| segment.day == 0) {
        Some(position) => Err(PayloadError::InvalidDay(position)),
        None => Ok(()),
    }
}
