use crate::error::{PulseError, Result};
use crate::model::GraphQlError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub const CALENDAR_POINTER: &str = "/data/user/contributionsCollection/contributionCalendar";
pub const REPOSITORIES_POINTER: &str = "/data/user/repositories";

/// Deserialize the node at `pointer`, treating an absent or null node as a
/// missing field.
pub fn extract<T: DeserializeOwned>(payload: &Value, pointer: &str) -> Result<T> {
    let node = payload
        .pointer(pointer)
        .filter(|node| !node.is_null())
        .ok_or_else(|| PulseError::MissingField(field_path(pointer)))?;

    Ok(T::deserialize(node)?)
}

/// Messages from the top-level `errors` array of a GraphQL response.
pub fn graphql_errors(payload: &Value) -> Vec<String> {
    payload
        .get("errors")
        .and_then(|errors| Vec::<GraphQlError>::deserialize(errors).ok())
        .unwrap_or_default()
        .into_iter()
        .map(|error| error.message)
        .collect()
}

fn field_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}
