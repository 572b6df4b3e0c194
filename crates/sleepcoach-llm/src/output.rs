//! Recovering the generated text from an upstream payload

use serde_json::Value;

/// Fields that may carry the generated text, in lookup order
pub const RESPONSE_FIELDS: [&str; 4] = ["response", "output", "output_text", "text"];

/// Generated text and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    /// Found under one of [`RESPONSE_FIELDS`]
    Field {
        /// Field name that matched
        name: &'static str,
        /// Its text
        text: String,
    },
    /// The payload itself was a string
    Text(String),
    /// No known field matched; the whole payload serialized as JSON
    Raw(String),
}

impl ModelOutput {
    /// Look through `payload` for generated text.
    ///
    /// The first candidate field with a truthy value wins: a non-empty
    /// string, a non-zero number, `true`, or any object or array. Scalars
    /// are stringified and containers serialized as JSON. A bare string
    /// payload is used as is. Anything else is serialized whole.
    pub fn from_payload(payload: &Value) -> Self {
        if let Value::String(text) = payload {
            return ModelOutput::Text(text.clone());
        }

        RESPONSE_FIELDS
            .iter()
            .copied()
            .find_map(|name| {
                payload
                    .get(name)
                    .and_then(truthy_text)
                    .map(|text| ModelOutput::Field { name, text })
            })
            .unwrap_or_else(|| ModelOutput::Raw(payload.to_string()))
    }

    /// Text to hand back to the caller
    pub fn text(&self) -> &str {
        match self {
            ModelOutput::Field { text, .. } | ModelOutput::Text(text) | ModelOutput::Raw(text) => {
                text
            }
        }
    }

    /// Take the text
    pub fn into_text(self) -> String {
        match self {
            ModelOutput::Field { text, .. } | ModelOutput::Text(text) | ModelOutput::Raw(text) => {
                text
            }
        }
    }

    /// True when the text came from the fallback serialization
    pub fn is_raw(&self) -> bool {
        matches!(self, ModelOutput::Raw(_))
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Bool(true) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
