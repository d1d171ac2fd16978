/// Ordered request parameters, encoded the way the Graph API expects them.
///
/// Lists are joined with commas and booleans are written as `true`/`false`. The access token
/// is never stored here; [`GraphClient`](super::GraphClient) appends it when sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, returning `self` for chaining.
    pub fn with(mut self, key: &str, value: impl ParamValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl ParamValue) {
        self.pairs.push((key.to_string(), value.to_param()));
    }

    /// Appends a parameter only when a value is present.
    pub fn insert_opt<V: ParamValue>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A value that can be rendered as a single Graph parameter.
pub trait ParamValue {
    fn to_param(&self) -> String;
}

impl ParamValue for &str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ParamValue for &String {
    fn to_param(&self) -> String {
        (*self).clone()
    }
}

impl ParamValue for bool {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for u32 {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for &[String] {
    fn to_param(&self) -> String {
        self.join(",")
    }
}

impl ParamValue for &Vec<String> {
    fn to_param(&self) -> String {
        self.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn renders_values_in_graph_format() {
        let permissions = vec!["email".to_string(), "user_friends".to_string()];
        let params = Params::new()
            .with("installed", false)
            .with("permissions", &permissions)
            .with("limit", 25u32)
            .with("locale", "en_GB");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("installed", "false"),
                ("permissions", "email,user_friends"),
                ("limit", "25"),
                ("locale", "en_GB"),
            ]
        );
    }

    #[test]
    fn insert_opt_skips_none() {
        let mut params = Params::new();
        params.insert_opt::<&str>("name", None);
        params.insert_opt("after", Some("cursor"));

        assert_eq!(params.get("name"), None);
        assert_eq!(params.get("after"), Some("cursor"));
    }
}
