use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the user an access token belongs to, as returned by `GET me`.
///
/// Only the fields every test user has are typed; anything else Graph returns for the
/// requested fields is kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::Profile;

    #[test]
    fn keeps_unknown_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":"100001","name":"Open Graph Test User","locale":"en_US"}"#,
        )
        .unwrap();

        assert_eq!(profile.id, "100001");
        assert_eq!(profile.name.as_deref(), Some("Open Graph Test User"));
        assert_eq!(profile.email, None);
        assert_eq!(profile.extra.get("locale").and_then(|v| v.as_str()), Some("en_US"));
    }
}
