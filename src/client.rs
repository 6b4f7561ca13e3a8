use crate::error::Result;
use crate::fetch::{AuthFetch, BearerFetch};
use crate::types::{FetchOptions, QueryParams, RequestOptions, ResponseBody};
use crate::urls::{ApiUrlBuilder, UrlBuilder};
use crate::validate::{RequiredFields, Validator};

const DEFAULT_ORIGIN: &str = "https://api.eventfeed.io";
const API_BASE: &str = "events";
const API_VERSION: &str = "v3";

/// Configuration for a client with default collaborators.
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// API origin, scheme and host without a trailing slash.
    pub origin: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// Client for the event-tracking API.
///
/// Holds exactly three collaborators, fixed at construction: a URL builder,
/// a field validator, and an authenticated fetch. Every operation validates
/// its required fields first and only then issues a single GET; a validation
/// failure never reaches the network.
#[derive(Clone)]
pub struct EventsClient<U = ApiUrlBuilder, V = RequiredFields, F = BearerFetch> {
    urls: U,
    validator: V,
    fetch: F,
}

impl EventsClient {
    /// Client with default collaborators against the production origin.
    pub fn new() -> Result<Self> {
        Self::with_config(EventsConfig::default())
    }

    /// Client with default collaborators against a custom origin.
    pub fn with_config(config: EventsConfig) -> Result<Self> {
        Ok(Self::with_collaborators(
            ApiUrlBuilder::new(config.origin),
            RequiredFields,
            BearerFetch::new()?,
        ))
    }
}

impl<U, V, F> EventsClient<U, V, F>
where
    U: UrlBuilder,
    V: Validator,
    F: AuthFetch,
{
    /// Client over externally supplied collaborators.
    pub fn with_collaborators(urls: U, validator: V, fetch: F) -> Self {
        Self {
            urls,
            validator,
            fetch,
        }
    }

    /// List events, optionally paginated.
    pub async fn list(&self, options: &RequestOptions) -> Result<ResponseBody> {
        self.validator
            .validate(&[("token", Some(options.token.as_str()))], &["token"])
            .await?;

        let query = paging_params(options);
        let url = self.urls.build(&[API_BASE, API_VERSION], &query);
        Ok(self
            .fetch
            .get(&url, &FetchOptions::bearer(options.token.clone()))
            .await?)
    }

    /// Events emitted by a single device.
    ///
    /// The device id rides in the URL path; the other lookups put their
    /// identifiers in the query string. That asymmetry is the upstream wire
    /// format and must stay as is.
    pub async fn get_by_device(
        &self,
        tracking_id: &str,
        options: &RequestOptions,
    ) -> Result<ResponseBody> {
        self.validator
            .validate(
                &[
                    ("trackingId", Some(tracking_id)),
                    ("token", Some(options.token.as_str())),
                ],
                &["trackingId", "token"],
            )
            .await?;

        let query = paging_params(options);
        let url = self
            .urls
            .build(&[API_BASE, API_VERSION, tracking_id], &query);
        Ok(self
            .fetch
            .get(&url, &FetchOptions::bearer(options.token.clone()))
            .await?)
    }

    /// Events produced by one rule.
    pub async fn get_by_rule(
        &self,
        rule_id: &str,
        options: &RequestOptions,
    ) -> Result<ResponseBody> {
        self.validator
            .validate(
                &[
                    ("ruleId", Some(rule_id)),
                    ("token", Some(options.token.as_str())),
                ],
                &["ruleId", "token"],
            )
            .await?;

        let mut query = QueryParams::new();
        query.push("ruleId", rule_id);
        append_paging(&mut query, options);

        let url = self.urls.build(&[API_BASE, API_VERSION], &query);
        Ok(self
            .fetch
            .get(&url, &FetchOptions::bearer(options.token.clone()))
            .await?)
    }

    /// Detail of a single event, identified by device, rule, and timestamp.
    pub async fn get_details(
        &self,
        tracking_id: &str,
        rule_id: &str,
        timestamp: &str,
        options: &RequestOptions,
    ) -> Result<ResponseBody> {
        self.validator
            .validate(
                &[
                    ("trackingId", Some(tracking_id)),
                    ("ruleId", Some(rule_id)),
                    ("timestamp", Some(timestamp)),
                    ("token", Some(options.token.as_str())),
                ],
                &["trackingId", "ruleId", "timestamp", "token"],
            )
            .await?;

        let mut query = QueryParams::new();
        query.push("trackingId", tracking_id);
        query.push("ruleId", rule_id);
        query.push("timestamp", timestamp);
        append_paging(&mut query, options);

        let url = self.urls.build(&[API_BASE, API_VERSION], &query);
        Ok(self
            .fetch
            .get(&url, &FetchOptions::bearer(options.token.clone()))
            .await?)
    }
}

/// Append the paging parameters actually supplied. A zero count and an empty
/// page token count as unset and stay off the wire.
fn append_paging(query: &mut QueryParams, options: &RequestOptions) {
    if let Some(count) = options.count.filter(|count| *count != 0) {
        query.push("count", count.to_string());
    }
    if let Some(page_token) = options
        .page_token
        .as_deref()
        .filter(|page_token| !page_token.is_empty())
    {
        query.push("pageToken", page_token);
    }
}

fn paging_params(options: &RequestOptions) -> QueryParams {
    let mut query = QueryParams::new();
    append_paging(&mut query, options);
    query
}
