use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of create and update requests. Both fields are optional on the wire so
/// that missing fields reach validation instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactPayload {
    pub name: Option<String>,
    /// accepts a string or a JSON number, kept as text
    #[serde(default, deserialize_with = "text_or_number")]
    pub number: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

impl ContactPayload {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_empty() {
        let payload: ContactPayload = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(payload.name(), "Ada");
        assert_eq!(payload.number(), "");
    }

    #[test]
    fn numeric_number_is_kept_as_text() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"name": "Ada", "number": 123456}"#).unwrap();
        assert_eq!(payload.number(), "123456");
        let payload: ContactPayload =
            serde_json::from_str(r#"{"name": "Ada", "number": null}"#).unwrap();
        assert_eq!(payload.number(), "");
    }

    #[test]
    fn other_number_types_are_rejected() {
        let result = serde_json::from_str::<ContactPayload>(r#"{"number": [1]}"#);
        assert!(result.is_err());
    }
}
