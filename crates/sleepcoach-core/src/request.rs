//! Inbound prompt request and its lenient wire decoding

use crate::ValidationError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which coaching message to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    /// Nudge the user toward bed
    #[default]
    Urge,
    /// Congratulate the user for going to bed
    Praise,
}

impl PromptKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Urge => "urge",
            PromptKind::Praise => "praise",
        }
    }

    /// Anything other than the literal `"praise"` is an urge
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("praise") => PromptKind::Praise,
            _ => PromptKind::Urge,
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `localHour` as sent on the wire
///
/// Anything other than an integer is kept as [`LocalHour::Unusable`]: it
/// still counts as a time field, but never resolves to an hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocalHour {
    /// An integer, not yet range-checked
    Integer(i64),
    /// Fractional numbers, strings, booleans, arrays, objects
    Unusable(Value),
}

impl LocalHour {
    /// The integer value, if there is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LocalHour::Integer(hour) => Some(*hour),
            LocalHour::Unusable(_) => None,
        }
    }
}

impl From<i64> for LocalHour {
    fn from(hour: i64) -> Self {
        LocalHour::Integer(hour)
    }
}

/// A single prompt request as sent by the form
///
/// Field decoding is lenient the way browser clients are: an unknown `type`
/// falls back to urge, `localTime` may be a number, and empty strings or
/// `null` count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    /// Prompt kind, defaults to urge
    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: PromptKind,
    /// Hour of day as reported by the client
    #[serde(
        default,
        deserialize_with = "deserialize_local_hour",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_hour: Option<LocalHour>,
    /// ISO-8601-like timestamp
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub iso: Option<String>,
    /// Free-form clock text ("HH:mm", "HH:mm:ss", "HHmm")
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_time: Option<String>,
}

impl PromptRequest {
    /// Request of the given kind with no time fields
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the client-reported hour
    pub fn with_local_hour(mut self, hour: i64) -> Self {
        self.local_hour = Some(LocalHour::Integer(hour));
        self
    }

    /// Set the ISO timestamp
    pub fn with_iso(mut self, iso: impl Into<String>) -> Self {
        self.iso = Some(iso.into());
        self
    }

    /// Set the free-form clock text
    pub fn with_local_time(mut self, local_time: impl Into<String>) -> Self {
        self.local_time = Some(local_time.into());
        self
    }

    /// Decode a JSON request body. The body must be a JSON object.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;
        if !value.is_object() {
            return Err(ValidationError::MalformedBody(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ValidationError::MalformedBody(e.to_string()))
    }

    /// True when at least one time-bearing field is present
    pub fn has_time_context(&self) -> bool {
        self.local_hour.is_some() || self.iso.is_some() || self.local_time.is_some()
    }

    /// Enforce the request invariant: urge needs a time field, praise never does
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.kind {
            PromptKind::Urge if !self.has_time_context() => Err(ValidationError::MissingTime),
            _ => Ok(()),
        }
    }
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<PromptKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(PromptKind::from_wire(value.as_str()))
}

fn deserialize_local_hour<'de, D>(deserializer: D) -> Result<Option<LocalHour>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let hour = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    Ok(Some(match hour {
        Some(hour) => LocalHour::Integer(hour),
        None => LocalHour::Unusable(value),
    }))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!(
            "expected a string, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_defaults_to_urge() {
        let request = PromptRequest::from_json(br#"{"localHour": 9}"#).unwrap();
        assert_eq!(request.kind, PromptKind::Urge);

        let request = PromptRequest::from_json(br#"{"type": "scold", "localHour": 9}"#).unwrap();
        assert_eq!(request.kind, PromptKind::Urge);

        let request = PromptRequest::from_json(br#"{"type": 3, "localHour": 9}"#).unwrap();
        assert_eq!(request.kind, PromptKind::Urge);
    }

    #[test]
    fn test_praise_parsed() {
        let request = PromptRequest::from_json(br#"{"type": "praise"}"#).unwrap();
        assert_eq!(request.kind, PromptKind::Praise);
        assert!(!request.has_time_context());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_camel_case_fields() {
        let request = PromptRequest::from_json(
            br#"{"type":"urge","localHour":22,"iso":"2024-05-01T22:00:00Z","localTime":"22:00"}"#,
        )
        .unwrap();
        assert_eq!(request.local_hour, Some(LocalHour::Integer(22)));
        assert_eq!(request.iso.as_deref(), Some("2024-05-01T22:00:00Z"));
        assert_eq!(request.local_time.as_deref(), Some("22:00"));
    }

    #[test]
    fn test_integral_float_hour_accepted() {
        let request = PromptRequest::from_json(br#"{"localHour": 23.0}"#).unwrap();
        assert_eq!(request.local_hour, Some(LocalHour::Integer(23)));
    }

    #[test]
    fn test_fractional_hour_is_kept_as_unusable() {
        let request =
            PromptRequest::from_json(br#"{"type":"urge","localHour":7.5,"localTime":"23:10"}"#)
                .unwrap();
        assert_eq!(request.local_hour, Some(LocalHour::Unusable(serde_json::json!(7.5))));
        assert_eq!(request.local_hour.as_ref().and_then(LocalHour::as_integer), None);
    }

    #[test]
    fn test_unusable_hour_still_counts_as_time_context() {
        let request = PromptRequest::from_json(br#"{"localHour": "ten"}"#).unwrap();
        assert!(request.has_time_context());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_praise_with_string_hour_accepted() {
        let request = PromptRequest::from_json(br#"{"type":"praise","localHour":"23"}"#).unwrap();
        assert_eq!(request.kind, PromptKind::Praise);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_numeric_local_time_becomes_text() {
        let request = PromptRequest::from_json(br#"{"localTime": 2359}"#).unwrap();
        assert_eq!(request.local_time.as_deref(), Some("2359"));
    }

    #[test]
    fn test_null_and_empty_count_as_absent() {
        let request =
            PromptRequest::from_json(br#"{"localHour": null, "iso": "", "localTime": null}"#)
                .unwrap();
        assert!(!request.has_time_context());
        assert_eq!(request.validate(), Err(ValidationError::MissingTime));
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(PromptRequest::from_json(b"[1,2,3]").is_err());
        assert!(PromptRequest::from_json(br#""urge""#).is_err());
        assert!(PromptRequest::from_json(b"not json").is_err());
    }

    #[test]
    fn test_missing_time_message_names_fields() {
        let err = PromptRequest::new(PromptKind::Urge).validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("localHour"));
        assert!(message.contains("iso"));
        assert!(message.contains("localTime"));
    }
}
