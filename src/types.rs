use serde_json::Value;

/// Opaque payload returned by the events service, passed through unmodified.
pub type ResponseBody = Value;

/// Per-call options shared by every read operation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Bearer token for the `Authorization` header. Required and non-empty.
    pub token: String,
    /// Requested page size. Zero counts as unset and stays off the wire.
    pub count: Option<u32>,
    /// Opaque cursor for the next page of results.
    pub page_token: Option<String>,
}

impl RequestOptions {
    /// Options carrying only the bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }
}

/// Insertion-ordered query-parameter mapping built per call.
///
/// Only fields actually supplied are pushed; absent or falsy fields never
/// appear, so no parameter is ever sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Look up a parameter by key (first match).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Whether ambient credentials (the cookie jar) accompany a request.
///
/// The upstream API requires `Include`; every client operation passes it.
/// `Omit` exists for alternate fetch implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Include,
    Omit,
}

/// Options for one authenticated fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub token: String,
    pub credentials: Credentials,
}

impl FetchOptions {
    /// Bearer-token options with credentials included, the upstream default.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            credentials: Credentials::Include,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_order_and_lookup() {
        let mut query = QueryParams::new();
        query.push("ruleId", "rule1");
        query.push("count", "5");

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("ruleId"), Some("rule1"));
        assert_eq!(query.get("count"), Some("5"));
        assert_eq!(query.get("pageToken"), None);

        let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["ruleId", "count"]);
    }

    #[test]
    fn test_bearer_options() {
        let options = FetchOptions::bearer("t");
        assert_eq!(options.token, "t");
        assert_eq!(options.credentials, Credentials::Include);
    }
}
