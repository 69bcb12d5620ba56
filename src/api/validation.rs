use serde_json::{Map, Value};

use super::ApiError;
use crate::db::NewCharacter;

const REQUIRED_CHARACTER_FIELDS: [&str; 3] = ["name", "gender", "species"];

/// Parses a `POST /characters` body.
///
/// Anything that is not a JSON object counts as a missing body. Required keys
/// are checked in order `name`, `gender`, `species` before their types.
pub fn parse_character_body(body: &[u8]) -> Result<NewCharacter, ApiError> {
    let Some(Value::Object(fields)) = serde_json::from_slice::<Value>(body).ok() else {
        return Err(ApiError::validation(
            "Query needs body: name, gender, species",
        ));
    };

    if let Some(missing) = REQUIRED_CHARACTER_FIELDS
        .iter()
        .find(|key| !fields.contains_key(**key))
    {
        return Err(ApiError::validation(format!("Query needs {missing}")));
    }

    Ok(NewCharacter {
        name: required_string(&fields, "name")?,
        gender: required_string(&fields, "gender")?,
        species: required_string(&fields, "species")?,
        planet_id: optional_id(&fields, "planet_id")?,
        starship_id: optional_id(&fields, "starship_id")?,
    })
}

fn required_string(fields: &Map<String, Value>, key: &str) -> Result<String, ApiError> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::validation(format!("Field '{key}' must be a string")))
}

fn optional_id(fields: &Map<String, Value>, key: &str) -> Result<Option<i32>, ApiError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map(Some)
            .ok_or_else(|| ApiError::validation(format!("Field '{key}' must be an integer"))),
    }
}
