use crate::types::QueryParams;

/// Builds the target URL for one request.
pub trait UrlBuilder: Send + Sync {
    /// Compose path segments and a trailing query mapping into an absolute URL.
    fn build(&self, segments: &[&str], query: &QueryParams) -> String;
}

/// Default builder rooted at the API origin.
#[derive(Debug, Clone)]
pub struct ApiUrlBuilder {
    origin: String,
}

impl ApiUrlBuilder {
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }
}

impl UrlBuilder for ApiUrlBuilder {
    fn build(&self, segments: &[&str], query: &QueryParams) -> String {
        let mut url = self.origin.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        // Upstream routes require the trailing slash before the query string
        url.push('/');

        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_query() {
        let builder = ApiUrlBuilder::new("https://api.example.com");
        let url = builder.build(&["events", "v3"], &QueryParams::new());
        assert_eq!(url, "https://api.example.com/events/v3/");
    }

    #[test]
    fn test_build_with_path_identifier() {
        let builder = ApiUrlBuilder::new("https://api.example.com");
        let url = builder.build(&["events", "v3", "dev1"], &QueryParams::new());
        assert_eq!(url, "https://api.example.com/events/v3/dev1/");
    }

    #[test]
    fn test_build_with_query() {
        let builder = ApiUrlBuilder::new("https://api.example.com");
        let mut query = QueryParams::new();
        query.push("ruleId", "rule1");
        query.push("count", "5");
        let url = builder.build(&["events", "v3"], &query);
        assert_eq!(url, "https://api.example.com/events/v3/?ruleId=rule1&count=5");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let builder = ApiUrlBuilder::new("https://api.example.com");
        let mut query = QueryParams::new();
        query.push("pageToken", "a b&c");
        let url = builder.build(&["events", "v3"], &query);
        assert_eq!(
            url,
            "https://api.example.com/events/v3/?pageToken=a%20b%26c"
        );
    }

    #[test]
    fn test_origin_trailing_slash_is_trimmed() {
        let builder = ApiUrlBuilder::new("https://api.example.com/");
        let url = builder.build(&["events", "v3"], &QueryParams::new());
        assert_eq!(url, "https://api.example.com/events/v3/");
    }
}
