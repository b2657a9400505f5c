//! Request defaults shared by every call into the directory REST service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base path of the directory REST service, relative to the console origin.
pub const FT_BASE_URL: &str = "/fortress-rest";

/// Administrative context applied when the operator has not picked one.
pub const CONTEXT_ID: &str = "HOME";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Header map sent with every REST request: JSON in, JSON out.
#[must_use]
pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), JSON_MEDIA_TYPE.to_string()),
        ("Accept".to_string(), JSON_MEDIA_TYPE.to_string()),
    ])
}

/// Per-request configuration handed to the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestConfig {
    /// Headers attached to the outgoing request.
    pub headers: BTreeMap<String, String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            headers: default_headers(),
        }
    }
}

impl RequestConfig {
    /// Iterate headers as borrowed name/value pairs.
    pub fn header_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_negotiates_json() {
        let config = RequestConfig::default();
        assert_eq!(
            config.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            config.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.header_pairs().count(), 2);
    }

    #[test]
    fn config_serializes_as_header_object() {
        let value = serde_json::to_value(RequestConfig::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "headers": {
                    "Accept": "application/json",
                    "Content-Type": "application/json"
                }
            })
        );
    }

    #[test]
    fn constants_match_service_layout() {
        assert_eq!(FT_BASE_URL, "/fortress-rest");
        assert_eq!(CONTEXT_ID, "HOME");
    }
}
