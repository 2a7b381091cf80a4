// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Defensive parsing of model replies
//!
//! The model is asked for a bare JSON object but may wrap it in a markdown
//! fence, add chatter, or ignore the format entirely. Parsing never fails:
//! anything that is not a JSON object becomes a plain-text definition.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::types::DefinitionResult;

const MISSING_FIELD: &str = "N/A";
const NO_DEFINITION: &str = "Could not generate a definition.";

/// Remove a surrounding markdown code fence, with or without a language tag
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(rest) => match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        },
        None => trimmed,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Turn a raw model reply into a [`DefinitionResult`]
pub fn parse_definition_reply(selection: &str, raw: &str) -> DefinitionResult {
    let payload = strip_code_fences(raw);

    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Object(fields)) => {
            debug!("Parsed structured definition for '{}'", selection);
            DefinitionResult {
                selected_text: selection.to_string(),
                definition: text_field(&fields, "definition"),
                synonyms: list_field(&fields, "synonyms"),
                antonyms: list_field(&fields, "antonyms"),
                turkish_meaning: text_field(&fields, "turkish_meaning"),
            }
        }
        Ok(other) => {
            warn!(
                "Model reply for '{}' is JSON but not an object ({}), using raw text",
                selection,
                json_kind(&other)
            );
            plain_text_result(selection, raw)
        }
        Err(e) => {
            warn!(
                "Could not parse model reply for '{}' as JSON: {}. Using raw text",
                selection, e
            );
            plain_text_result(selection, raw)
        }
    }
}

fn plain_text_result(selection: &str, raw: &str) -> DefinitionResult {
    let raw = raw.trim();
    DefinitionResult {
        selected_text: selection.to_string(),
        definition: if raw.is_empty() {
            NO_DEFINITION.to_string()
        } else {
            raw.to_string()
        },
        synonyms: Vec::new(),
        antonyms: Vec::new(),
        turkish_meaning: String::new(),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => MISSING_FIELD.to_string(),
        Some(other) => other.to_string(),
    }
}

/// String items of an array field; anything else yields an empty list
fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
