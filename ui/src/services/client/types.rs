use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input of the create-link exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub site: String,
}

impl LinkRequest {
    /// Trims surrounding whitespace. An empty site is passed through unchanged.
    pub fn new(site: &str) -> Self {
        Self {
            site: site.trim().to_string(),
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 1] {
        [("site", self.site.as_str())]
    }
}

/// Input of the submit-credentials exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRequest {
    pub link_token: String,
    pub username: String,
    pub password: String,
}

impl CredentialRequest {
    pub fn new(link_token: &str, username: &str, password: &str) -> Self {
        Self {
            link_token: link_token.trim().to_string(),
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("link_token", self.link_token.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

// Keeps the password out of tracing output.
impl std::fmt::Debug for CredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRequest")
            .field("link_token", &self.link_token)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Input of the fetch-data exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub access_token: String,
}

impl DataRequest {
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.trim().to_string(),
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 1] {
        [("access_token", self.access_token.as_str())]
    }
}

/// Success body of `/create_link`. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTokenResponse {
    pub link_token: Option<Value>,
}

impl LinkTokenResponse {
    /// Reads `link_token` from any JSON body; a non-object body has no token.
    pub fn from_body(body: Value) -> Self {
        Self {
            link_token: body.get("link_token").cloned(),
        }
    }

    pub fn display_token(&self) -> String {
        render_token_field(self.link_token.as_ref())
    }
}

/// Success body of `/submit_credentials`. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessTokenResponse {
    pub access_token: Option<Value>,
}

impl AccessTokenResponse {
    /// Reads `access_token` from any JSON body; a non-object body has no token.
    pub fn from_body(body: Value) -> Self {
        Self {
            access_token: body.get("access_token").cloned(),
        }
    }

    pub fn display_token(&self) -> String {
        render_token_field(self.access_token.as_ref())
    }
}

/// Opaque body of `/fetch_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPayload(pub Value);

impl DataPayload {
    /// Two-space indented JSON with object keys sorted at every depth.
    pub fn to_pretty_string(&self) -> String {
        let sorted = sort_keys(&self.0);
        // Serializing a `Value` cannot fail.
        serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
    }
}

// `serde_json::Map` keeps insertion order when `preserve_order` is enabled
// anywhere in the build, so ordering is applied explicitly.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Text shown for a token field of a success body.
///
/// Strings are shown raw, other JSON values as JSON text, and a missing
/// field as `undefined`.
pub fn render_token_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requests_trim_whitespace() {
        assert_eq!(LinkRequest::new("  mybank  ").site, "mybank");

        let creds = CredentialRequest::new(" lt1\t", "\nalice ", "  p@ss w/ord  ");
        assert_eq!(creds.link_token, "lt1");
        assert_eq!(creds.username, "alice");
        // Inner whitespace is kept.
        assert_eq!(creds.password, "p@ss w/ord");

        assert_eq!(DataRequest::new(" at_1 ").access_token, "at_1");
    }

    #[test]
    fn test_empty_site_is_not_rejected() {
        let request = LinkRequest::new("   ");
        assert_eq!(request.query_pairs(), [("site", "")]);
    }

    #[test]
    fn test_query_pair_names() {
        let creds = CredentialRequest::new("lt1", "alice", "secret");
        let names: Vec<&str> = creds.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["link_token", "username", "password"]);
        assert_eq!(
            DataRequest::new("at_1").query_pairs(),
            [("access_token", "at_1")]
        );
    }

    #[test]
    fn test_credential_debug_redacts_password() {
        let creds = CredentialRequest::new("lt1", "alice", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_token_rendering() {
        let response = LinkTokenResponse::from_body(json!({"link_token": "tok_abc", "extra": true}));
        assert_eq!(response.display_token(), "tok_abc");

        let missing = AccessTokenResponse::from_body(json!({}));
        assert_eq!(missing.display_token(), "undefined");

        let numeric = AccessTokenResponse::from_body(json!({"access_token": 17}));
        assert_eq!(numeric.display_token(), "17");

        let null = AccessTokenResponse::from_body(json!({"access_token": null}));
        assert_eq!(null.display_token(), "null");
    }

    #[test]
    fn test_from_body_tolerates_non_object_bodies() {
        // Arrays are not read positionally.
        assert_eq!(
            LinkTokenResponse::from_body(json!(["tok"])).display_token(),
            "undefined"
        );
        assert_eq!(
            AccessTokenResponse::from_body(json!(["at_1"])).access_token,
            None
        );
        assert_eq!(
            AccessTokenResponse::from_body(json!("at_1")).display_token(),
            "undefined"
        );
        assert_eq!(
            AccessTokenResponse::from_body(json!({"access_token": "at_1"})).display_token(),
            "at_1"
        );
    }

    #[test]
    fn test_payload_pretty_print_is_sorted_and_indented() {
        let payload = DataPayload(json!({"zeta": 1, "alpha": {"b": 2, "a": [1, 2]}}));
        let expected = "{\n  \"alpha\": {\n    \"a\": [\n      1,\n      2\n    ],\n    \"b\": 2\n  },\n  \"zeta\": 1\n}";
        assert_eq!(payload.to_pretty_string(), expected);
    }

    #[test]
    fn test_payload_balance() {
        let payload = DataPayload(json!({"balance": 42}));
        assert_eq!(payload.to_pretty_string(), "{\n  \"balance\": 42\n}");
    }
}
